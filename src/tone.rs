//! Synthesized sine clip, used as a stand-in capture source.

use std::f32::consts::PI;

use crate::buffer::AudioBuffer;
use crate::config::Config;
use crate::error::{EncodeError, Result};
use crate::format::{WavFormat, data_len};

/// Render a sine tone described by `config` into an interleaved buffer.
///
/// The clip size is checked against the WAV size limit before anything is
/// allocated.
pub fn sine(config: &Config) -> Result<AudioBuffer> {
    WavFormat::new(config.channels, config.sample_rate)?;
    if !config.duration_sec.is_finite() || config.duration_sec < 0.0 {
        return Err(EncodeError::InvalidDuration {
            duration: config.duration_sec,
        });
    }

    // saturates to usize::MAX for absurd durations, caught below
    let frames = (config.sample_rate as f64 * config.duration_sec as f64) as usize;
    let channels = config.channels as usize;
    let total = frames
        .checked_mul(channels)
        .ok_or(EncodeError::TooLarge { samples: usize::MAX })?;
    data_len(total)?;

    let mut samples = Vec::with_capacity(total);
    for i in 0..frames {
        let t = i as f32 / config.sample_rate as f32;
        let s = (2.0 * PI * config.frequency * t).sin() * config.amplitude;
        samples.extend(std::iter::repeat_n(s, channels));
    }

    AudioBuffer::new(samples, config.channels, config.sample_rate)
}
