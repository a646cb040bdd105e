use std::f64::consts::PI;

use rustfft::num_complex::Complex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SynthConfig;
use crate::error::{Result, SynthError};
use crate::signal::Signal;

/*
Butterworth Low-Pass as Cascaded Biquads
========================================

A Butterworth filter is "maximally flat": no ripple in the passband, then a
smooth roll-off of 6 dB/octave per pole. Four poles give the classic
24 dB/octave "Moog-style" slope.

| order | slope      | second-order sections | first-order sections |
| ----- | ---------- | --------------------- | -------------------- |
| 1     | 6 dB/oct   | 0                     | 1                    |
| 2     | 12 dB/oct  | 1                     | 0                    |
| 3     | 18 dB/oct  | 1                     | 1                    |
| 4     | 24 dB/oct  | 2                     | 0                    |

Why Sections?
-------------

A 4th-order filter could be written as one transfer function with five
feedback coefficients, but high-order polynomials in floating point are
numerically touchy: small rounding errors in the coefficients move the
poles a lot, and near-unit-circle poles can go unstable. Splitting into
2-pole stages keeps every stage's coefficients well conditioned.

    x ──→ [ biquad Q=0.541 ] ──→ [ biquad Q=1.307 ] ──→ y

Pole Placement
--------------

The analog prototype's poles sit evenly on the left half of the unit
circle. Each conjugate pair becomes one biquad with quality factor

    Q_k = 1 / (2 cos ψ_k),   ψ_k = π (N − 2k − 1) / (2N),   k = 0 .. N/2

where ψ_k is the pair's angle from the negative real axis. An odd order
leaves one real pole, realised as a first-order section.

Bilinear Transform
------------------

Analog → digital uses the bilinear transform with prewarping, so the −3 dB
point lands exactly on the requested cutoff:

    K = tan(π · cutoff / sample_rate)

    biquad:      norm = 1 / (1 + K/Q + K²)
                 b0 = K² · norm,  b1 = 2 b0,  b2 = b0
                 a1 = 2 (K² − 1) · norm
                 a2 = (1 − K/Q + K²) · norm

    first order: norm = 1 / (1 + K)
                 b0 = b1 = K · norm,  a1 = (K − 1) · norm

Each section has unity gain at DC.

Processing Order
----------------

Direct Form II Transposed, forward only, one pass: the filter is causal and
NOT zero-phase. Samples are processed one at a time through the sections in
ascending order (lowest Q first), which fixes the floating-point
accumulation order so repeated runs are bit-identical.
*/

/// Parameters of a low-pass filter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    /// Number of poles
    pub order: usize,
    /// −3 dB frequency (Hz)
    pub cutoff_hz: f64,
    pub sample_rate: u32,
}

impl FilterSpec {
    /// Spec using the configured order and sample rate.
    pub fn new(cutoff_hz: f64, config: &SynthConfig) -> Self {
        Self {
            order: config.filter_order,
            cutoff_hz,
            sample_rate: config.sample_rate,
        }
    }

    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    pub fn validate(&self) -> Result<()> {
        let nyquist = self.nyquist();
        if !(self.cutoff_hz > 0.0 && self.cutoff_hz < nyquist) {
            return Err(SynthError::InvalidCutoff {
                cutoff: self.cutoff_hz,
                nyquist,
            });
        }
        if self.order == 0 {
            return Err(SynthError::InvalidFilterOrder(self.order));
        }
        Ok(())
    }
}

/// One filter stage with its own delay taps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,

    // Direct Form II Transposed state
    z1: f64,
    z2: f64,
}

impl Biquad {
    /// Two-pole low-pass with quality factor `q`; `k` is the prewarped tan term.
    fn lowpass(k: f64, q: f64) -> Self {
        let k2 = k * k;
        let norm = 1.0 / (1.0 + k / q + k2);
        let b0 = k2 * norm;
        Self {
            b0,
            b1: 2.0 * b0,
            b2: b0,
            a1: 2.0 * (k2 - 1.0) * norm,
            a2: (1.0 - k / q + k2) * norm,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// One-pole low-pass for the real pole of an odd-order design.
    fn first_order(k: f64) -> Self {
        let norm = 1.0 / (1.0 + k);
        let b0 = k * norm;
        Self {
            b0,
            b1: b0,
            b2: 0.0,
            a1: (k - 1.0) * norm,
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Feedforward then feedback coefficients, `[b0, b1, b2, a1, a2]` (a0 = 1).
    pub fn coefficients(&self) -> [f64; 5] {
        [self.b0, self.b1, self.b2, self.a1, self.a2]
    }

    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.z1;
        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;
        output
    }

    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    /// Complex response at normalized angular frequency `w` (radians/sample).
    fn response(&self, w: f64) -> Complex<f64> {
        let z1 = Complex::from_polar(1.0, -w);
        let z2 = z1 * z1;
        let num = z2 * self.b2 + z1 * self.b1 + self.b0;
        let den = z2 * self.a2 + z1 * self.a1 + 1.0;
        num / den
    }
}

/// Butterworth low-pass built from cascaded sections.
///
/// The delay taps live inside the instance, so filter independent signals
/// concurrently with independent instances.
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    spec: FilterSpec,
    sections: Vec<Biquad>,
}

impl LowPassFilter {
    pub fn new(spec: FilterSpec) -> Result<Self> {
        spec.validate()?;

        let n = spec.order;
        let k = (PI * spec.cutoff_hz / spec.sample_rate as f64).tan();

        let mut sections = Vec::with_capacity(n.div_ceil(2));
        if n % 2 == 1 {
            sections.push(Biquad::first_order(k));
        }
        // The last pair sits closest to the real axis and has the lowest Q
        for pair in (0..n / 2).rev() {
            let angle = PI * (n - 2 * pair - 1) as f64 / (2 * n) as f64;
            let q = 1.0 / (2.0 * angle.cos());
            sections.push(Biquad::lowpass(k, q));
        }

        Ok(Self { spec, sections })
    }

    /// Filter using the order and sample rate from `config`.
    pub fn from_config(cutoff_hz: f64, config: &SynthConfig) -> Result<Self> {
        Self::new(FilterSpec::new(cutoff_hz, config))
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn sections(&self) -> &[Biquad] {
        &self.sections
    }

    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }

    #[inline]
    pub fn process(&mut self, sample: f64) -> f64 {
        self.sections
            .iter_mut()
            .fold(sample, |acc, section| section.process(acc))
    }

    /// Filter a whole signal from a clean state. Output has the input's length.
    pub fn apply(&mut self, signal: &[f64]) -> Signal {
        self.reset();
        signal.iter().map(|&sample| self.process(sample)).collect()
    }

    /// Magnitude response |H| at `hz`.
    pub fn frequency_response(&self, hz: f64) -> f64 {
        let w = 2.0 * PI * hz / self.spec.sample_rate as f64;
        self.sections
            .iter()
            .map(|section| section.response(w))
            .fold(Complex::new(1.0, 0.0), |acc, h| acc * h)
            .norm()
    }
}

/// Low-pass `signal` at `cutoff_hz` with the configured order and sample rate.
pub fn lowpass(signal: &[f64], cutoff_hz: f64, config: &SynthConfig) -> Result<Signal> {
    let mut filter = LowPassFilter::from_config(cutoff_hz, config)?;
    Ok(filter.apply(signal))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: u32 = 44_100;

    fn filter(cutoff_hz: f64, order: usize) -> LowPassFilter {
        LowPassFilter::new(FilterSpec {
            order,
            cutoff_hz,
            sample_rate: SR,
        })
        .unwrap()
    }

    fn sine(freq: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f64 / SR as f64).sin())
            .collect()
    }

    fn peak_after_transient(buffer: &[f64]) -> f64 {
        let skip = buffer.len() / 2;
        buffer[skip..].iter().fold(0.0, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn test_section_layout() {
        assert_eq!(filter(1000.0, 4).sections().len(), 2);
        assert_eq!(filter(1000.0, 3).sections().len(), 2);
        assert_eq!(filter(1000.0, 2).sections().len(), 1);
        assert_eq!(filter(1000.0, 1).sections().len(), 1);
    }

    #[test]
    fn test_fourth_order_butterworth_q_values() {
        // Q = 0.5412 and 1.3066 for a 4-pole Butterworth. Recover Q from the
        // coefficients: a2 = (1 - K/Q + K²) / (1 + K/Q + K²)
        let lpf = filter(1000.0, 4);
        let k = (PI * 1000.0 / SR as f64).tan();
        let qs: Vec<f64> = lpf
            .sections()
            .iter()
            .map(|s| {
                let a2 = s.coefficients()[4];
                let k_over_q = (1.0 + k * k) * (1.0 - a2) / (1.0 + a2);
                k / k_over_q
            })
            .collect();
        assert!((qs[0] - 0.541_196).abs() < 1e-5, "{qs:?}");
        assert!((qs[1] - 1.306_563).abs() < 1e-5, "{qs:?}");
    }

    #[test]
    fn test_unity_gain_at_dc() {
        for order in 1..=6 {
            let response = filter(1000.0, order).frequency_response(0.0);
            assert!((response - 1.0).abs() < 1e-12, "order {order}: {response}");
        }
    }

    #[test]
    fn test_minus_three_db_at_cutoff() {
        for order in 1..=6 {
            let response = filter(2500.0, order).frequency_response(2500.0);
            assert!(
                (response - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9,
                "order {order}: {response}"
            );
        }
    }

    #[test]
    fn test_rolloff_is_24_db_per_octave() {
        let lpf = filter(500.0, 4);
        let one = lpf.frequency_response(4000.0);
        let two = lpf.frequency_response(8000.0);
        let db = 20.0 * (one / two).log10();
        // Bilinear warping steepens the slope slightly near Nyquist
        assert!(db > 23.0 && db < 30.0, "slope {db} dB/oct");
    }

    #[test]
    fn test_lowpass_passes_dc() {
        let mut lpf = filter(1000.0, 4);
        let output = lpf.apply(&vec![1.0; 4000]);
        assert!((output[3999] - 1.0).abs() < 1e-6, "got {}", output[3999]);
    }

    #[test]
    fn test_attenuates_high_frequency() {
        let mut lpf = filter(500.0, 4);
        let output = lpf.apply(&sine(8000.0, 4410));
        let peak = peak_after_transient(&output);
        assert!(peak < 1e-3, "expected strong attenuation, got peak {peak}");
    }

    #[test]
    fn test_passes_low_frequency() {
        let mut lpf = filter(2000.0, 4);
        let output = lpf.apply(&sine(100.0, 8820));
        let peak = peak_after_transient(&output);
        assert!(peak > 0.99 && peak < 1.01, "got peak {peak}");
    }

    #[test]
    fn test_preserves_length() {
        let mut lpf = filter(1000.0, 4);
        assert_eq!(lpf.apply(&[0.5; 777]).len(), 777);
        assert!(lpf.apply(&[]).is_empty());
    }

    #[test]
    fn test_is_causal() {
        let mut impulse = vec![0.0; 256];
        impulse[100] = 1.0;
        let output = filter(1000.0, 4).apply(&impulse);
        assert!(output[..100].iter().all(|&s| s == 0.0));
        assert!(output[100] != 0.0);
    }

    #[test]
    fn test_repeated_apply_is_identical() {
        let input = sine(3000.0, 2048);
        let mut lpf = filter(1200.0, 4);
        let first = lpf.apply(&input);
        let second = lpf.apply(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stays_finite_near_nyquist() {
        let mut lpf = filter(22_000.0, 8);
        let output = lpf.apply(&sine(10_000.0, 10_000));
        assert!(output.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_rejects_cutoff_outside_open_band() {
        for cutoff in [0.0, -100.0, 22_050.0, 30_000.0, f64::NAN] {
            let result = LowPassFilter::new(FilterSpec {
                order: 4,
                cutoff_hz: cutoff,
                sample_rate: SR,
            });
            assert!(
                matches!(result, Err(SynthError::InvalidCutoff { .. })),
                "cutoff {cutoff} accepted"
            );
        }
    }

    #[test]
    fn test_rejects_zero_order() {
        let result = LowPassFilter::new(FilterSpec {
            order: 0,
            cutoff_hz: 1000.0,
            sample_rate: SR,
        });
        assert!(matches!(result, Err(SynthError::InvalidFilterOrder(0))));
    }

    #[test]
    fn test_lowpass_uses_config() {
        let config = SynthConfig::default().filter_order(2);
        let signal = sine(440.0, 1000);
        let expected = filter(800.0, 2).apply(&signal);
        assert_eq!(lowpass(&signal, 800.0, &config).unwrap(), expected);
        assert!(lowpass(&signal, 22_050.0, &config).is_err());

        let from_config = LowPassFilter::from_config(800.0, &config).unwrap();
        assert_eq!(from_config.spec().order, 2);
        assert_eq!(from_config.spec().sample_rate, config.sample_rate);
        assert_eq!(from_config.sections().len(), 1);
    }
}
