//! Float to 16-bit PCM conversion.

/// Full-scale value a normalized sample of 1.0 maps to.
pub const FULL_SCALE: f32 = i16::MAX as f32;

/// How out-of-range samples are converted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quantization {
    /// Clamp to [-1.0, 1.0], scale by 32767, truncate toward zero.
    #[default]
    Clamped,
    /// Scale by 32767, truncate toward zero, keep the low 16 bits.
    ///
    /// Reproduces files written by older recorders byte for byte. Samples
    /// beyond full scale wrap around to the opposite polarity.
    Wrapping,
}

/// Convert one normalized sample. NaN becomes 0 under both policies.
#[inline]
pub fn quantize(sample: f32, policy: Quantization) -> i16 {
    match policy {
        Quantization::Clamped => (sample.clamp(-1.0, 1.0) * FULL_SCALE) as i16,
        Quantization::Wrapping => (sample * FULL_SCALE) as i32 as i16,
    }
}

/// Convert one 16-bit sample back to a normalized float.
#[inline]
pub fn dequantize(sample: i16) -> f32 {
    sample as f32 / FULL_SCALE
}
