//! compression/types.rs
//! Container formats, codec errors, and the engine seam shared by all codecs.
use std::io::{self, Read};

use byteorder::{ByteOrder, LittleEndian};
use flate2::bufread::{GzDecoder, GzEncoder, ZlibDecoder};
use thiserror::Error;

use crate::compression::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_LEVEL_DEFLATE, GZIP_MAGIC, GZIP_METHOD_DEFLATE, GZIP_MIN_LEN,
    GZIP_TRAILER_LEN, MAX_CAPACITY_HINT, MAX_CHUNK_SIZE,
};

/// Container framing around a deflate payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContainerFormat {
    Gzip,
    Zlib,
}

impl ContainerFormat {
    /// Sniff the leading bytes the way inflate does with `32 + MAX_WBITS`.
    pub fn detect(input: &[u8]) -> Option<Self> {
        match input {
            [m0, m1, method, ..] if [*m0, *m1] == GZIP_MAGIC && *method == GZIP_METHOD_DEFLATE => {
                Some(ContainerFormat::Gzip)
            }
            [cmf, flg, ..] => {
                let method = cmf & 0x0f;
                let window = cmf >> 4;
                let check = (u16::from(*cmf) << 8 | u16::from(*flg)) % 31;
                (method == 8 && window <= 7 && check == 0).then_some(ContainerFormat::Zlib)
            }
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContainerFormat::Gzip => "gzip",
            ContainerFormat::Zlib => "zlib",
        }
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: String, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },

    #[error("incorrect header check: not a gzip or zlib stream")]
    UnrecognizedHeader,

    #[error("codec {codec} produced empty output")]
    EmptyOutput { codec: String },

    #[error("chunk size {have} outside 1..={max}")]
    ChunkTooLarge { have: usize, max: usize },
}

/// Runtime knobs for one compress/decompress call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    pub chunk_size: usize,
    pub level: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, level: DEFAULT_LEVEL_DEFLATE }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<(), CompressionError> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(CompressionError::ChunkTooLarge { have: self.chunk_size, max: MAX_CHUNK_SIZE });
        }
        Ok(())
    }
}

/// Live engine context over a borrowed input buffer.
///
/// Each variant owns the flate2 state for exactly one operation; dropping the
/// engine tears that state down.
pub enum Engine<'a> {
    GzipEncode(GzEncoder<&'a [u8]>),
    GzipDecode(GzDecoder<&'a [u8]>),
    ZlibDecode(ZlibDecoder<&'a [u8]>),
}

impl<'a> Engine<'a> {
    /// Input bytes not yet pulled into the engine.
    pub fn remaining_input(&self) -> usize {
        match self {
            Engine::GzipEncode(e) => e.get_ref().len(),
            Engine::GzipDecode(d) => d.get_ref().len(),
            Engine::ZlibDecode(d) => d.get_ref().len(),
        }
    }
}

impl Read for Engine<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Engine::GzipEncode(e) => e.read(buf),
            Engine::GzipDecode(d) => d.read(buf),
            Engine::ZlibDecode(d) => d.read(buf),
        }
    }
}

pub trait Compressor {
    fn name(&self) -> &'static str;
    /// Open an engine that reads `input` and yields compressed bytes.
    fn engine<'a>(&self, input: &'a [u8]) -> Result<Engine<'a>, CompressionError>;
}

pub trait Decompressor {
    fn name(&self) -> &'static str;
    /// Open an engine that reads `input` and yields decompressed bytes.
    fn engine<'a>(&self, input: &'a [u8]) -> Result<Engine<'a>, CompressionError>;
}

/// Gzip member footer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GzipTrailer {
    pub crc32: u32,
    /// Uncompressed size modulo 2^32.
    pub isize: u32,
}

impl GzipTrailer {
    /// Read the footer of a single-member gzip stream, if it looks like one.
    pub fn parse(input: &[u8]) -> Option<Self> {
        if input.len() < GZIP_MIN_LEN || ContainerFormat::detect(input) != Some(ContainerFormat::Gzip) {
            return None;
        }
        let tail = &input[input.len() - GZIP_TRAILER_LEN..];
        Some(Self {
            crc32: LittleEndian::read_u32(&tail[..4]),
            isize: LittleEndian::read_u32(&tail[4..]),
        })
    }

    /// Bounded capacity to reserve for the decompressed output.
    pub fn capacity_hint(&self) -> usize {
        (self.isize as usize).min(MAX_CAPACITY_HINT)
    }
}
