//! codecs/gzip.rs
//! Gzip member compression via flate2's buffered encoder.

use flate2::{bufread::GzEncoder, Compression, GzBuilder};

use crate::compression::constants::{DEFAULT_LEVEL_DEFLATE, GZIP_OS_UNIX};
use crate::compression::types::{CompressionError, Compressor, Engine};

pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    /// # Errors
    /// - `CodecInitFailed` if `level` is outside `0..=9`.
    pub fn new(level: u32) -> Result<Self, CompressionError> {
        if level > 9 {
            return Err(CompressionError::CodecInitFailed {
                codec: "gzip".into(),
                msg: format!("compression level {} outside 0..=9", level),
            });
        }
        Ok(Self { level: Compression::new(level) })
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self { level: Compression::new(DEFAULT_LEVEL_DEFLATE) }
    }
}

impl Compressor for GzipCompressor {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn engine<'a>(&self, input: &'a [u8]) -> Result<Engine<'a>, CompressionError> {
        // Fixed OS byte keeps output identical across hosts.
        let encoder: GzEncoder<&'a [u8]> = GzBuilder::new()
            .operating_system(GZIP_OS_UNIX)
            .buf_read(input, self.level);
        Ok(Engine::GzipEncode(encoder))
    }
}
