//! Error types for encoding and persistence.

use thiserror::Error;

/// Result type for encoder operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while building or writing a WAV file.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Channel count or sample rate is zero.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: u32,
    },

    /// Requested clip length is negative or not finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f32,
    },

    /// Sample count is not a whole number of frames.
    #[error("malformed buffer: {samples} samples is not a multiple of {channels} channels")]
    MalformedBuffer {
        /// Number of samples in the buffer.
        samples: usize,
        /// Channel count the buffer was declared with.
        channels: u16,
    },

    /// Data chunk does not fit the 32-bit RIFF size fields.
    #[error("buffer too large for a RIFF file: {samples} samples")]
    TooLarge {
        /// Number of samples in the buffer.
        samples: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input audio could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl EncodeError {
    pub(crate) fn invalid_parameter(name: &'static str, value: u32) -> Self {
        Self::InvalidParameter { name, value }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
