//! Configuration for quantization policy and synthesized test tones.

use crate::quantize::Quantization;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// How out-of-range samples are quantized.
    pub quantization: Quantization,
    /// Tone frequency (Hz).
    pub frequency: f32,
    /// Peak amplitude of the tone (0.0–1.0).
    pub amplitude: f32,
    /// Tone length (seconds).
    pub duration_sec: f32,
    /// Output sample rate (Hz).
    pub sample_rate: u32,
    /// Output channel count; every channel carries the same signal.
    pub channels: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quantization: Quantization::Clamped,
            frequency: 440.0,
            amplitude: 0.5,
            duration_sec: 1.0,
            sample_rate: 44100,
            channels: 1,
        }
    }
}
