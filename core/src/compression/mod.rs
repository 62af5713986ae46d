//! compression/mod.rs
//! Chunked streaming adapter over the deflate engine.
//!
//! - Compression always emits a single gzip member.
//! - Decompression accepts gzip or zlib framing, detected from the header.
//! - Engines are scoped to one operation and dropped on every exit path.

pub mod constants;
pub mod types;
pub mod codecs;
pub mod stream;

pub use constants::*;
pub use types::*;
pub use stream::*;
