//! Error type shared by every fallible stage of the render pipeline.

use std::fmt;

/// Errors raised when a pipeline precondition is violated.
///
/// Every stage is all-or-nothing: an error means no output buffer was produced.
#[derive(Debug)]
pub enum SynthError {
    /// Note symbol is not one of the 12 pitch classes or their aliases
    InvalidNote(String),
    /// Octave outside 0..=8
    InvalidOctave(i32),
    /// Pitch exists in the table but not on an 88-key piano (below A0 or above C8)
    OutOfRange { note: String, octave: i32 },
    /// Oscillator frequency is not positive, or too high for one sample per period
    InvalidFrequency(f64),
    /// Duration is not positive, or shorter than one sample
    InvalidDuration(f64),
    /// Cutoff outside the open interval (0, nyquist)
    InvalidCutoff { cutoff: f64, nyquist: f64 },
    /// Filter order of zero
    InvalidFilterOrder(usize),
    /// Signals passed to `mix` differ in length
    LengthMismatch {
        expected: usize,
        actual: usize,
        index: usize,
    },
    /// Nothing to mix
    EmptyMix,
    /// Normalizing a signal whose samples are all zero
    SilentSignal,
    /// Tempo is not a positive number of beats per minute
    InvalidTempo(f64),
    /// A configuration field holds an unusable value
    InvalidConfig(&'static str),
    /// Failure while encoding or writing a WAV container
    Wav(hound::Error),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidNote(note) => write!(f, "Invalid note '{note}'"),
            SynthError::InvalidOctave(octave) => {
                write!(f, "Invalid octave {octave}: must be an integer between 0 and 8")
            }
            SynthError::OutOfRange { note, octave } => {
                write!(f, "Note {note}{octave} is outside the piano range A0..C8")
            }
            SynthError::InvalidFrequency(hz) => write!(f, "Invalid frequency {hz} Hz"),
            SynthError::InvalidDuration(seconds) => write!(f, "Invalid duration {seconds} s"),
            SynthError::InvalidCutoff { cutoff, nyquist } => write!(
                f,
                "Invalid cutoff {cutoff} Hz: must be above 0 and below Nyquist ({nyquist} Hz)"
            ),
            SynthError::InvalidFilterOrder(order) => {
                write!(f, "Invalid filter order {order}: need at least one pole")
            }
            SynthError::LengthMismatch {
                expected,
                actual,
                index,
            } => write!(
                f,
                "Signal {index} has {actual} samples, expected {expected}"
            ),
            SynthError::EmptyMix => write!(f, "Nothing to mix: no signals given"),
            SynthError::SilentSignal => write!(f, "Cannot normalize a silent signal"),
            SynthError::InvalidTempo(bpm) => write!(f, "Invalid tempo {bpm} BPM"),
            SynthError::InvalidConfig(reason) => write!(f, "Invalid configuration: {reason}"),
            SynthError::Wav(err) => write!(f, "WAV error: {err}"),
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthError::Wav(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hound::Error> for SynthError {
    fn from(err: hound::Error) -> Self {
        SynthError::Wav(err)
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;
