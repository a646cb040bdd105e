use crate::signal::PcmBuffer;

/// Full-scale value a sample of 1.0 maps to.
pub const PCM_FULL_SCALE: f64 = i16::MAX as f64;

/// Convert a normalized signal to 16-bit PCM.
///
/// Each sample becomes `round(s × 32767)`, rounding half away from zero,
/// clamped to the i16 range. Input that was not normalized clips rather than
/// wrapping; NaN becomes silence.
pub fn quantize(signal: &[f64]) -> PcmBuffer {
    signal.iter().map(|&s| quantize_sample(s)).collect()
}

#[inline]
pub fn quantize_sample(sample: f64) -> i16 {
    // `as` saturates at the i16 bounds and maps NaN to 0
    (sample * PCM_FULL_SCALE).round() as i16
}
