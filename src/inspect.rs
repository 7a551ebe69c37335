//! Reading encoded WAV files back.

use std::path::Path;

use crate::error::{EncodeError, Result};

/// Header summary of a WAV file on disk.
#[derive(Clone, Debug, PartialEq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Frames (samples per channel).
    pub frames: u32,
}

impl WavInfo {
    pub fn duration_secs(&self) -> f32 {
        self.frames as f32 / self.sample_rate as f32
    }
}

/// Read a WAV header with hound.
pub fn inspect_file(path: &Path) -> Result<WavInfo> {
    let reader = hound::WavReader::open(path).map_err(|e| match e {
        hound::Error::IoError(io) => EncodeError::Io(io),
        other => EncodeError::decode(other.to_string()),
    })?;
    let spec = reader.spec();
    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frames: reader.duration(),
    })
}

/// Locate the body of the `data` chunk in a RIFF/WAVE byte stream.
pub fn data_chunk(wav: &[u8]) -> Option<&[u8]> {
    if wav.len() < 12 || &wav[0..4] != b"RIFF" || &wav[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav.len() {
        let id = &wav[pos..pos + 4];
        let len = u32::from_le_bytes([wav[pos + 4], wav[pos + 5], wav[pos + 6], wav[pos + 7]]) as usize;
        let start = pos + 8;
        let end = start.checked_add(len)?;
        if id == b"data" {
            return wav.get(start..end);
        }
        // chunks are word aligned
        pos = end + (len & 1);
    }
    None
}
