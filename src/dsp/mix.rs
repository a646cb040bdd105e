//! Voice summing and peak normalization.

use crate::error::{Result, SynthError};
use crate::signal::Signal;

/*
Summing Voices
==============

A chord is rendered one voice at a time and the voices are ADDED together
sample by sample:

    Voice F4:  [ 1.0,  0.5, -0.5, -1.0]
    Voice A4:  [ 1.0,  0.8,  0.2, -0.5]
    Sum:       [ 2.0,  1.3, -0.3, -1.5]  ← exceeds ±1.0!

No weighting is applied while summing. N full-scale voices can peak at N,
which is fine because the mix stays in floating point until it is
normalized.


Accumulation Order
------------------

Float addition is commutative but not associative:

    (a + b) + c  may differ from  a + (b + c)  in the last bit

`mix` accumulates strictly left to right in input order: it starts from a
copy of the first signal and adds each following one into it. The same
voices in the same order always give the same bits.


Peak Normalization
------------------

    peak   = max |x[n]|
    y[n]   = x[n] / peak

The loudest sample lands exactly on ±1.0 and every other sample keeps its
relative level. A silent signal has peak 0, and dividing by it would fill
the buffer with NaN, so that case is an error instead.
*/

/// Add signal B into signal A in-place (summing).
///
/// ⚠️ WARNING: Can exceed [-1.0, +1.0] range!
#[inline]
pub fn sum_in_place(a: &mut [f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa += sb;
    }
}

/// Element-wise sum of equal-length signals, accumulated left to right.
pub fn mix(signals: &[Signal]) -> Result<Signal> {
    let (first, rest) = signals.split_first().ok_or(SynthError::EmptyMix)?;
    let expected = first.len();

    if let Some((index, other)) = rest
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() != expected)
    {
        return Err(SynthError::LengthMismatch {
            expected,
            actual: other.len(),
            index: index + 1,
        });
    }

    let mut out = first.samples().to_vec();
    for signal in rest {
        sum_in_place(&mut out, signal);
    }
    Ok(Signal::new(out))
}

/// Largest absolute sample value, 0.0 for an empty signal.
pub fn peak(signal: &[f64]) -> f64 {
    signal.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
}

/// Scale so the loudest sample sits at exactly ±1.0.
pub fn normalize(signal: &[f64]) -> Result<Signal> {
    let peak = peak(signal);
    if peak == 0.0 {
        return Err(SynthError::SilentSignal);
    }
    Ok(signal.iter().map(|&s| s / peak).collect())
}
