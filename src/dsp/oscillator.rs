use crate::error::{Result, SynthError};
use crate::signal::Signal;

/*
Sawtooth by Wavetable Tiling
============================

A sawtooth ramps linearly from −1 to +1 and then jumps back, once per
period. Rather than tracking a fractional phase, ONE period of evenly
spaced values is repeated:

    period  = floor(sample_rate / frequency)        samples per cycle
    tooth i = −1 + 2·i / (period − 1)                i in 0..period, ends included
    total   = floor(duration × sample_rate)
    output n = tooth (n mod period)                  n in 0..total

The tooth is never stored: a 0.001 Hz cycle is 44.1M samples long, far
more than a short render needs. A one-sample period is constant −1.

      +1 ┤    ╱│    ╱│    ╱│    ╱
         │   ╱ │   ╱ │   ╱ │   ╱
       0 ┤  ╱  │  ╱  │  ╱  │  ╱
         │ ╱   │ ╱   │ ╱   │ ╱
      −1 ┤╱    │╱    │╱    │╱
         └──────────────────────→ samples
          period

Tuning Error
------------

`period` is truncated to a whole number of samples, so the pitch that comes
out is `sample_rate / period`, not exactly `frequency`:

    A4 at 44.1 kHz: 44100 / 440 = 100.227 → 100 samples → 441.0 Hz

The error grows with frequency (fewer samples per cycle). It is part of the
sound of this renderer and is kept as is; a phase accumulator would change
the output.
*/

/// One period of a sawtooth at a fixed frequency and sample rate.
///
/// The ramp is evaluated per sample rather than stored, so very low
/// frequencies cost nothing beyond the output itself.
#[derive(Debug, Clone, Copy)]
pub struct Sawtooth {
    period: usize,
    step: f64,
    sample_rate: u32,
}

impl Sawtooth {
    pub fn new(frequency: f64, sample_rate: u32) -> Result<Self> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(SynthError::InvalidFrequency(frequency));
        }

        // Saturates for vanishing frequencies; one cycle then outlasts any render
        let period = (sample_rate as f64 / frequency) as usize;
        if period == 0 {
            // Above the sample rate: not even one sample per cycle
            return Err(SynthError::InvalidFrequency(frequency));
        }

        let step = if period == 1 {
            0.0
        } else {
            2.0 / (period - 1) as f64
        };

        Ok(Self {
            period,
            step,
            sample_rate,
        })
    }

    /// Samples per cycle after truncation.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Value of sample `n`: a ramp from -1.0 to +1.0 over each period, both ends included.
    pub fn sample(&self, n: usize) -> f64 {
        let i = n % self.period;
        if self.period > 1 && i == self.period - 1 {
            1.0
        } else {
            -1.0 + self.step * i as f64
        }
    }

    /// Frequency actually produced, `sample_rate / period`.
    pub fn effective_frequency(&self) -> f64 {
        self.sample_rate as f64 / self.period as f64
    }

    /// Tile the ramp to exactly `floor(duration × sample_rate)` samples.
    pub fn render(&self, duration: f64) -> Result<Signal> {
        let total = sample_count(duration, self.sample_rate)?;
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(total)
            .map_err(|_| SynthError::InvalidDuration(duration))?;
        samples.extend((0..total).map(|n| self.sample(n)));
        Ok(Signal::new(samples))
    }
}

/// Sawtooth at `frequency` Hz lasting `duration` seconds.
pub fn sawtooth(frequency: f64, duration: f64, sample_rate: u32) -> Result<Signal> {
    Sawtooth::new(frequency, sample_rate)?.render(duration)
}

/// Longest buffer of `f64` samples a `Vec` can address.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of whole samples in `duration` seconds.
pub fn sample_count(duration: f64, sample_rate: u32) -> Result<usize> {
    if !(duration.is_finite() && duration > 0.0) {
        return Err(SynthError::InvalidDuration(duration));
    }
    let total = (duration * sample_rate as f64).floor();
    if total < 1.0 || total > MAX_SAMPLES as f64 {
        return Err(SynthError::InvalidDuration(duration));
    }
    Ok(total as usize)
}
