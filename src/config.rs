#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};

/// Audio sample rate used when nothing else is configured (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Concert pitch: A4 = 440 Hz.
pub const DEFAULT_REFERENCE_FREQUENCY: f64 = 440.0;
/// Octave of the pitch table, the one containing A440.
pub const DEFAULT_REFERENCE_OCTAVE: i32 = 4;
/// "Moog-style" 4-pole low-pass, 24 dB/octave.
pub const DEFAULT_FILTER_ORDER: usize = 4;

/// Tunable constants of the render pipeline.
///
/// ```
/// use saavy_synth::SynthConfig;
///
/// let config = SynthConfig::default().sample_rate(48_000).filter_order(2);
/// assert_eq!(config.sample_rate, 48_000);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Samples per second of every Signal and PCM buffer
    pub sample_rate: u32,
    /// Frequency of A at the reference octave (Hz)
    pub reference_frequency: f64,
    /// Octave the pitch table is built for
    pub reference_octave: i32,
    /// Number of low-pass poles (6 dB/octave each)
    pub filter_order: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            reference_frequency: DEFAULT_REFERENCE_FREQUENCY,
            reference_octave: DEFAULT_REFERENCE_OCTAVE,
            filter_order: DEFAULT_FILTER_ORDER,
        }
    }
}

impl SynthConfig {
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn reference_frequency(mut self, hz: f64) -> Self {
        self.reference_frequency = hz;
        self
    }

    pub fn reference_octave(mut self, octave: i32) -> Self {
        self.reference_octave = octave;
        self
    }

    pub fn filter_order(mut self, order: usize) -> Self {
        self.filter_order = order;
        self
    }

    /// Highest representable frequency for this sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidConfig("sample_rate must be positive"));
        }
        if !(self.reference_frequency.is_finite() && self.reference_frequency > 0.0) {
            return Err(SynthError::InvalidConfig(
                "reference_frequency must be a positive number of Hz",
            ));
        }
        if self.filter_order == 0 {
            return Err(SynthError::InvalidConfig("filter_order must be at least 1"));
        }
        Ok(())
    }
}
