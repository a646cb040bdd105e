//! FFT band energy, for checking what a filter actually removed.

use rustfft::{num_complex::Complex, FftPlanner};

/// Power spectrum of a whole signal.
///
/// One FFT over the full length (no windowing), so bin `k` sits at
/// `k × sample_rate / len` Hz. Only the non-negative half is kept.
#[derive(Debug, Clone)]
pub struct Spectrum {
    power: Vec<f64>,
    bin_hz: f64,
}

impl Spectrum {
    pub fn new(signal: &[f64], sample_rate: u32) -> Self {
        let len = signal.len();
        if len == 0 {
            return Self {
                power: Vec::new(),
                bin_hz: 0.0,
            };
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);

        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&s| Complex::new(s, 0.0)).collect();
        fft.process(&mut buffer);

        let power = buffer[..=len / 2].iter().map(|c| c.norm_sqr()).collect();

        Self {
            power,
            bin_hz: sample_rate as f64 / len as f64,
        }
    }

    /// Centre frequency of bin `index` (Hz).
    pub fn bin_frequency(&self, index: usize) -> f64 {
        index as f64 * self.bin_hz
    }

    /// Number of bins from DC to Nyquist.
    pub fn len(&self) -> usize {
        self.power.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// Total power of bins with `low_hz <= f < high_hz`.
    pub fn band_energy(&self, low_hz: f64, high_hz: f64) -> f64 {
        self.power
            .iter()
            .enumerate()
            .filter(|&(i, _)| {
                let f = self.bin_frequency(i);
                f >= low_hz && f < high_hz
            })
            .map(|(_, &p)| p)
            .sum()
    }

    /// Total power of bins at or above `hz`.
    pub fn energy_above(&self, hz: f64) -> f64 {
        self.band_energy(hz, f64::INFINITY)
    }

    /// Frequency of the strongest bin, ignoring DC.
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.power
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| self.bin_frequency(i))
    }
}
