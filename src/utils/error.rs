// src/utils/error.rs

use thiserror::Error;

/// The error type for every codec operation in this crate.
#[derive(Error, Debug)]
pub enum HuffError {
    /// An empty input was given while the codec is configured to reject it.
    #[error("empty input: at least one byte is required")]
    EmptyInput,

    /// The header or frequency table disagrees with the data that follows it.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The padding byte is outside 0..=7.
    #[error("invalid padding: {0} bits (expected 0-7)")]
    InvalidPadding(u8),

    /// The bit stream ended partway down the tree.
    #[error("truncated bit stream: ended {depth} bits into an unfinished code")]
    TruncatedBitstream { depth: usize },

    /// A bit selected a branch that does not exist.
    #[error("invalid code at bit {bit_offset}")]
    InvalidCode { bit_offset: usize },

    /// A count does not fit the 32-bit container field.
    #[error("input too large: {len} bytes exceeds the container limit")]
    InputTooLarge { len: u64 },

    /// The payload decoded to a different length than the table declares.
    #[error("length mismatch: expected {expected} bytes, decoded {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// The encoder met a byte its own code table does not cover.
    #[error("internal error: byte {0:#04x} has no code in the table built for this input")]
    MissingCode(u8),

    #[error("logger setup failed: {0}")]
    Logger(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        HuffError::MalformedContainer(msg.into())
    }
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, HuffError>;
