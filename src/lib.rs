//! Canonical 16-bit PCM WAV encoding for interleaved f32 audio.
//!
//! An [`AudioBuffer`] (samples, channel count, sample rate) is turned into
//! a 44-byte RIFF/WAVE header followed by little-endian `i16` samples.
//! Encoding is pure; [`write_wav_file`] layers persistence on top.

pub mod buffer;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod inspect;
pub mod quantize;
pub mod tone;
pub mod wav;

pub use buffer::AudioBuffer;
pub use config::Config;
pub use error::{EncodeError, Result};
pub use format::WavFormat;
pub use quantize::Quantization;
pub use wav::{encode, encode_samples, encode_to_file, encode_with, write_wav, write_wav_file};
