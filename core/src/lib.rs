//! ninek-core
//!
//! Base64 + gzip codec for `.9ks` containers.
//! No CLI, no terminal I/O.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec layers
pub mod base64;
pub mod compression;

// Orchestration
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::base64::{decode, decode_with, encode, strip_whitespace, DecodeMode};
    pub use crate::compression::{compress, decompress, CodecConfig, CompressionError};
    pub use crate::pipeline::{
        compress_bytes, compress_file, decompress_file, decompress_text, Direction,
        PipelineConfig, PipelineReport,
    };
    pub use crate::types::PipelineError;
}
