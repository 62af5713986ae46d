//! base64/types.rs
use thiserror::Error;

/// How the decoder treats input outside the alphabet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Skip unknown symbols, stop at the first `=`. Never fails.
    #[default]
    Lenient,
    /// Reject anything a canonical encoder would not have produced.
    Strict,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base64Error {
    #[error("invalid symbol 0x{byte:02x} at offset {index}")]
    InvalidSymbol { index: usize, byte: u8 },

    #[error("length {len} is not a multiple of 4")]
    InvalidLength { len: usize },

    #[error("data after padding at offset {index}")]
    DataAfterPadding { index: usize },

    #[error("quad at offset {index} carries fewer than 8 bits")]
    DanglingSymbol { index: usize },
}
