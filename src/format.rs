//! RIFF/WAVE header layout for 16-bit PCM.

use std::io::Write;

use crate::error::{EncodeError, Result};

/// Fixed bit depth of every file this crate writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes occupied by one quantized sample.
pub const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;

/// Length of the RIFF + fmt + data headers.
pub const HEADER_LEN: usize = 44;

/// `audio format` tag for integer PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// Body length of a plain PCM `fmt ` chunk.
pub const FMT_CHUNK_LEN: u32 = 16;

/// Channel layout and rate written into the `fmt ` chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Validate a channel count and sample rate.
    ///
    /// Both must be non-zero, and the derived block align and byte rate must
    /// fit their 16- and 32-bit header fields.
    pub fn new(channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(EncodeError::invalid_parameter("channels", 0));
        }
        if sample_rate == 0 {
            return Err(EncodeError::invalid_parameter("sample_rate", 0));
        }
        let format = Self {
            channels,
            sample_rate,
        };
        format.checked_fields()?;
        Ok(format)
    }

    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
        }
    }

    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
        }
    }

    /// Bytes per frame, or `None` if it overflows `u16`.
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(BYTES_PER_SAMPLE)
    }

    /// Bytes per second of audio, or `None` if it overflows `u32`.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate
            .checked_mul(self.channels as u32)?
            .checked_mul(BYTES_PER_SAMPLE as u32)
    }

    fn checked_fields(&self) -> Result<(u16, u32)> {
        let block_align = self
            .block_align()
            .ok_or_else(|| EncodeError::invalid_parameter("channels", self.channels as u32))?;
        let byte_rate = self
            .byte_rate()
            .ok_or_else(|| EncodeError::invalid_parameter("sample_rate", self.sample_rate))?;
        Ok((block_align, byte_rate))
    }
}

/// Size of the `data` chunk body for `sample_count` samples.
///
/// Fails when the RIFF chunk size (`36 + data bytes`) would overflow `u32`.
pub fn data_len(sample_count: usize) -> Result<u32> {
    sample_count
        .checked_mul(BYTES_PER_SAMPLE as usize)
        .and_then(|bytes| u32::try_from(bytes).ok())
        .filter(|bytes| bytes.checked_add(HEADER_LEN as u32 - 8).is_some())
        .ok_or(EncodeError::TooLarge {
            samples: sample_count,
        })
}

/// Write the 44-byte header; all numeric fields little-endian.
///
/// Fails with [`EncodeError::InvalidParameter`] before writing anything if the
/// format's derived fields do not fit the header.
pub fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_len: u32) -> Result<()> {
    let (block_align, byte_rate) = format.checked_fields()?;
    // RIFF size excludes the 8-byte "RIFF" + size prefix
    let riff_len = (HEADER_LEN as u32 - 8) + data_len;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_len.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&FMT_CHUNK_LEN.to_le_bytes())?;
    writer.write_all(&PCM_FORMAT_TAG.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_len.to_le_bytes())?;
    Ok(())
}
