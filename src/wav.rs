//! AudioBuffer → canonical 16-bit PCM WAV

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::buffer::AudioBuffer;
use crate::error::Result;
use crate::format::{HEADER_LEN, data_len, write_header};
use crate::quantize::{Quantization, quantize};

/// Encode with clamped quantization.
pub fn encode(buffer: &AudioBuffer) -> Result<Vec<u8>> {
    encode_with(buffer, Quantization::Clamped)
}

/// Encode with an explicit quantization policy.
///
/// Pure: builds the whole file in memory. An empty buffer yields a 44-byte
/// header-only file.
pub fn encode_with(buffer: &AudioBuffer, policy: Quantization) -> Result<Vec<u8>> {
    let format = buffer.format();
    let data_len = data_len(buffer.samples().len())?;
    debug!(
        "encoding {} samples ({} ch @ {} Hz, {:?})",
        buffer.samples().len(),
        format.channels,
        format.sample_rate,
        policy
    );

    let mut out = Vec::with_capacity(HEADER_LEN + data_len as usize);
    write_header(&mut out, &format, data_len)?;
    for &s in buffer.samples() {
        out.extend_from_slice(&quantize(s, policy).to_le_bytes());
    }
    Ok(out)
}

/// Validate raw parameters and encode with clamped quantization.
pub fn encode_samples(samples: &[f32], channels: u16, sample_rate: u32) -> Result<Vec<u8>> {
    let buffer = AudioBuffer::new(samples.to_vec(), channels, sample_rate)?;
    encode(&buffer)
}

/// Encode `buffer` and hand the finished file to `writer` in a single
/// `write_all`, so nothing reaches `writer` if encoding fails.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &AudioBuffer, policy: Quantization) -> Result<()> {
    let bytes = encode_with(buffer, policy)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Validate raw parameters, encode, and persist to `path`.
pub fn encode_to_file(
    samples: &[f32],
    channels: u16,
    sample_rate: u32,
    path: &Path,
) -> Result<()> {
    let buffer = AudioBuffer::new(samples.to_vec(), channels, sample_rate)?;
    write_wav_file(path, &buffer, Quantization::Clamped)
}

/// Encode `buffer` and persist it to `path`, creating parent directories.
///
/// The bytes go to a sibling `.part` file first and are renamed into place,
/// so `path` is either the complete file or untouched.
pub fn write_wav_file(path: &Path, buffer: &AudioBuffer, policy: Quantization) -> Result<()> {
    let bytes = encode_with(buffer, policy)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let part = part_path(path);
    if let Err(e) = fs::write(&part, &bytes).and_then(|()| fs::rename(&part, path)) {
        let _ = fs::remove_file(&part);
        return Err(e.into());
    }

    debug!("wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}
