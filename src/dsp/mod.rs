//! Signal-processing stages of the render pipeline.
//!
//! Every stage is a pure function from input buffers to new output buffers,
//! so voices can be synthesized and filtered independently before they are
//! mixed. Only the filter carries state, and that state lives in the filter
//! instance.

/// Butterworth low-pass as a cascade of second-order sections.
pub mod filter;
/// Summing voices and peak normalization.
pub mod mix;
/// Sawtooth synthesis by wavetable tiling.
pub mod oscillator;
/// Float to 16-bit PCM conversion.
pub mod quantize;
/// FFT power spectrum and band energy.
pub mod spectrum;

pub use filter::{lowpass, FilterSpec, LowPassFilter};
pub use mix::{mix, normalize, peak};
pub use oscillator::{sawtooth, Sawtooth};
pub use quantize::quantize;
pub use spectrum::Spectrum;
