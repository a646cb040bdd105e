//! Owned sample buffers passed between pipeline stages.

use std::ops::Deref;

/// Mono floating-point audio at the configured sample rate.
///
/// Amplitude is unbounded until the signal goes through
/// [`normalize`](crate::dsp::mix::normalize).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn silence(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// 16-bit signed PCM, ready for a WAV container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i16>,
}

impl PcmBuffer {
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Largest absolute sample value, widened so `-32768` fits.
    pub fn peak(&self) -> i32 {
        self.samples
            .iter()
            .map(|&s| (s as i32).abs())
            .max()
            .unwrap_or(0)
    }
}

impl Deref for PcmBuffer {
    type Target = [i16];

    fn deref(&self) -> &[i16] {
        &self.samples
    }
}

impl FromIterator<i16> for PcmBuffer {
    fn from_iter<I: IntoIterator<Item = i16>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
