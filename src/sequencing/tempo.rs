use crate::error::{Result, SynthError};

/// Seconds per minute, for BPM conversions.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Length of `beats` beats at `bpm` beats per minute, in seconds.
///
/// `duration = beats / (bpm / 60)`, so 4 beats at 120 BPM is 2.0 s.
pub fn beats_to_seconds(beats: f64, bpm: f64) -> Result<f64> {
    if !(bpm.is_finite() && bpm > 0.0) {
        return Err(SynthError::InvalidTempo(bpm));
    }
    if !(beats.is_finite() && beats > 0.0) {
        return Err(SynthError::InvalidDuration(beats));
    }
    Ok(beats / (bpm / SECONDS_PER_MINUTE))
}

/// How long every voice in a render sounds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteLength {
    /// Absolute duration
    Seconds(f64),
    /// Musical duration, e.g. a whole note is `beats: 4.0`
    Beats { beats: f64, bpm: f64 },
}

impl NoteLength {
    pub fn seconds(&self) -> Result<f64> {
        match *self {
            NoteLength::Seconds(seconds) => Ok(seconds),
            NoteLength::Beats { beats, bpm } => beats_to_seconds(beats, bpm),
        }
    }
}
