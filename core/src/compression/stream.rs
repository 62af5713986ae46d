//! compression/stream.rs
//! Pull-based chunk streaming over a compression engine.
//!
//! - Each `next()` drains at most `chunk_size` bytes from the engine.
//! - The engine is dropped as soon as the stream ends or fails, so its context
//!   never outlives the operation.
//! - `Interrupted` is the only retryable engine signal; everything else is fatal.
use std::io::{ErrorKind, Read};

use log::{debug, trace};

use crate::compression::codecs::{AutoDecompressor, GzipCompressor};
use crate::compression::types::{
    CodecConfig, CompressionError, Compressor, ContainerFormat, Decompressor, Engine, GzipTrailer,
};

/// Transient state for one compress or decompress operation.
pub struct CompressionStream<'a> {
    codec: &'static str,
    engine: Option<Engine<'a>>,
    chunk_size: usize,
    input_len: usize,
    consumed: usize,
    produced: usize,
    finished: bool,
}

impl<'a> CompressionStream<'a> {
    pub fn new(
        codec: &'static str,
        engine: Engine<'a>,
        input_len: usize,
        chunk_size: usize,
    ) -> Result<Self, CompressionError> {
        CodecConfig { chunk_size, ..CodecConfig::default() }.validate()?;
        Ok(Self {
            codec,
            engine: Some(engine),
            chunk_size,
            input_len,
            consumed: 0,
            produced: 0,
            finished: false,
        })
    }

    pub fn codec(&self) -> &'static str {
        self.codec
    }

    /// Input bytes the engine has pulled so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Output bytes handed out so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drain the remaining chunks into one buffer.
    ///
    /// # Errors
    /// - Any engine failure.
    /// - `EmptyOutput` when the whole stream produced zero bytes.
    pub fn collect_all(mut self, capacity: usize) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::with_capacity(capacity);
        for chunk in &mut self {
            out.extend_from_slice(&chunk?);
        }
        if out.is_empty() {
            return Err(CompressionError::EmptyOutput { codec: self.codec.into() });
        }
        debug!(
            "{}: {} bytes in, {} bytes out",
            self.codec, self.consumed, self.produced
        );
        Ok(out)
    }

    fn release(&mut self) {
        if let Some(engine) = self.engine.take() {
            self.consumed = self.input_len - engine.remaining_input();
        }
        self.finished = true;
    }
}

impl Iterator for CompressionStream<'_> {
    type Item = Result<Vec<u8>, CompressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let engine = self.engine.as_mut()?;
        let mut chunk = vec![0u8; self.chunk_size];
        let mut filled = 0;
        let mut at_end = false;

        while filled < chunk.len() {
            match engine.read(&mut chunk[filled..]) {
                Ok(0) => {
                    at_end = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.release();
                    return Some(Err(CompressionError::CodecProcessFailed {
                        codec: self.codec.into(),
                        msg: e.to_string(),
                    }));
                }
            }
        }
        self.consumed = self.input_len - engine.remaining_input();

        if at_end {
            self.release();
        }
        if filled == 0 {
            return None;
        }
        chunk.truncate(filled);
        self.produced += filled;
        trace!("{}: chunk of {} bytes", self.codec, filled);
        Some(Ok(chunk))
    }
}

/// Summary: Open a gzip compression stream over `input`.
/// - The whole input is offered up front; output is pulled in `chunk_size` blocks.
pub fn compress_stream<'a>(
    input: &'a [u8],
    config: &CodecConfig,
) -> Result<CompressionStream<'a>, CompressionError> {
    config.validate()?;
    let compressor = GzipCompressor::new(config.level)?;
    let engine = compressor.engine(input)?;
    CompressionStream::new(compressor.name(), engine, input.len(), config.chunk_size)
}

/// Summary: Open an inflate stream over `input`, detecting gzip or zlib framing.
pub fn decompress_stream<'a>(
    input: &'a [u8],
    config: &CodecConfig,
) -> Result<CompressionStream<'a>, CompressionError> {
    config.validate()?;
    let decompressor = AutoDecompressor::new();
    let engine = decompressor.engine(input)?;
    let codec = ContainerFormat::detect(input).map_or(decompressor.name(), ContainerFormat::name);
    CompressionStream::new(codec, engine, input.len(), config.chunk_size)
}

/// Compress `input` into a single gzip member with default settings.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress_with(input, &CodecConfig::default())
}

pub fn compress_with(input: &[u8], config: &CodecConfig) -> Result<Vec<u8>, CompressionError> {
    compress_stream(input, config)?.collect_all(config.chunk_size)
}

/// Decompress a gzip or zlib stream with default settings.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress_with(input, &CodecConfig::default())
}

pub fn decompress_with(input: &[u8], config: &CodecConfig) -> Result<Vec<u8>, CompressionError> {
    let capacity = GzipTrailer::parse(input)
        .map(|t| t.capacity_hint())
        .unwrap_or(config.chunk_size);
    decompress_stream(input, config)?.collect_all(capacity)
}
