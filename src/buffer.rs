//! Interleaved f32 audio buffer handed to the encoder.

use crate::error::{EncodeError, Result};
use crate::format::WavFormat;

/// Finite block of interleaved samples plus its layout.
///
/// Samples are stored frame by frame: `samples[0]` is frame 0 / channel 0,
/// `samples[1]` is frame 0 / channel 1, and so on. A constructed buffer
/// always holds a whole number of frames.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Validate layout and wrap the samples.
    ///
    /// Fails with [`EncodeError::InvalidParameter`] for a zero channel count or
    /// sample rate, or one whose block align / byte rate overflows the header,
    /// and with [`EncodeError::MalformedBuffer`] when the samples end in an
    /// incomplete frame.
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        WavFormat::new(channels, sample_rate)?;
        if samples.len() % channels as usize != 0 {
            return Err(EncodeError::MalformedBuffer {
                samples: samples.len(),
                channels,
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.frames() as f32 / self.sample_rate as f32
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
