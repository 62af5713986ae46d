//! codecs/auto.rs
//! Inflate with header auto-detection (gzip or zlib).

use flate2::bufread::{GzDecoder, ZlibDecoder};

use crate::compression::types::{CompressionError, ContainerFormat, Decompressor, Engine};

#[derive(Default)]
pub struct AutoDecompressor;

impl AutoDecompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for AutoDecompressor {
    fn name(&self) -> &'static str {
        "inflate"
    }

    fn engine<'a>(&self, input: &'a [u8]) -> Result<Engine<'a>, CompressionError> {
        match ContainerFormat::detect(input) {
            Some(ContainerFormat::Gzip) => Ok(Engine::GzipDecode(GzDecoder::new(input))),
            Some(ContainerFormat::Zlib) => Ok(Engine::ZlibDecode(ZlibDecoder::new(input))),
            None => Err(CompressionError::UnrecognizedHeader),
        }
    }
}
