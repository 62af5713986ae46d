//! pipeline/core.rs
//! In-memory stages and the file front doors built on them.
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::base64;
use crate::compression;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::naming::{compressed_output_path_with, decompressed_output_path_with};
use crate::pipeline::report::{Direction, PipelineReport};
use crate::types::PipelineError;

const MEMORY_SOURCE: &str = "<memory>";

/// Compress `input` into `.9ks` text: gzip, then Base64.
///
/// # Errors
/// - `EmptyInput` for an empty buffer.
/// - `Compression` if the engine fails or produces nothing.
pub fn compress_bytes(input: &[u8], config: &PipelineConfig) -> Result<String, PipelineError> {
    if input.is_empty() {
        return Err(PipelineError::empty(MEMORY_SOURCE));
    }
    let gz = compression::compress_with(input, &config.codec)?;
    debug!("gzip: {} -> {} bytes", input.len(), gz.len());
    Ok(base64::encode(&gz))
}

/// Decode `.9ks` text back into the payload bytes.
///
/// # Errors
/// - `EmptyInput` when `text` is empty or whitespace only.
/// - `Base64` in strict mode for malformed text.
/// - `Codec` when decoding salvages zero bytes.
/// - `Compression` if inflating fails or produces nothing.
pub fn decompress_text(text: &str, config: &PipelineConfig) -> Result<Vec<u8>, PipelineError> {
    let compact = base64::strip_whitespace(text);
    if compact.is_empty() {
        return Err(PipelineError::empty(MEMORY_SOURCE));
    }

    let gz = base64::decode_with(&compact, config.decode_mode)?;
    if gz.is_empty() {
        return Err(PipelineError::Codec);
    }
    debug!("base64: {} symbols -> {} bytes", compact.len(), gz.len());

    let payload = compression::decompress_with(&gz, &config.codec)?;
    if config.validate_json {
        check_json(&payload);
    }
    Ok(payload)
}

/// Compress the file at `input` into its `_out.9ks` sibling.
pub fn compress_file(input: &Path, config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    let started = Instant::now();
    let output = compressed_output_path_with(input, config);

    let data = fs::read(input).map_err(|e| PipelineError::io("open input file", input, e))?;
    if data.is_empty() {
        return Err(PipelineError::empty(input.display().to_string()));
    }

    let encoded = compress_bytes(&data, config)?;
    fs::write(&output, encoded.as_bytes())
        .map_err(|e| PipelineError::io("write output file", &output, e))?;

    let report = PipelineReport {
        direction: Direction::Compress,
        input: input.to_path_buf(),
        output,
        bytes_in: data.len(),
        bytes_out: encoded.len(),
        elapsed: started.elapsed(),
    };
    info!(
        "{} ({} -> {} bytes, ratio {:.2}, {:?})",
        report,
        report.bytes_in,
        report.bytes_out,
        report.ratio(),
        report.elapsed
    );
    Ok(report)
}

/// Decompress the `.9ks` file at `input` into its `.json` sibling.
pub fn decompress_file(input: &Path, config: &PipelineConfig) -> Result<PipelineReport, PipelineError> {
    let started = Instant::now();
    let output = decompressed_output_path_with(input, config);

    let raw = fs::read(input).map_err(|e| PipelineError::io("open input file", input, e))?;
    // Non-ASCII bytes become U+FFFD, which the decoder treats like any other stray symbol.
    let text = String::from_utf8_lossy(&raw);
    if text.chars().all(base64::is_space) {
        return Err(PipelineError::empty(input.display().to_string()));
    }

    let payload = decompress_text(&text, config)?;
    fs::write(&output, &payload).map_err(|e| PipelineError::io("write output file", &output, e))?;

    let report = PipelineReport {
        direction: Direction::Decompress,
        input: input.to_path_buf(),
        output,
        bytes_in: raw.len(),
        bytes_out: payload.len(),
        elapsed: started.elapsed(),
    };
    info!(
        "{} ({} -> {} bytes, ratio {:.2}, {:?})",
        report,
        report.bytes_in,
        report.bytes_out,
        report.ratio(),
        report.elapsed
    );
    Ok(report)
}

/// Run one file through the pipeline for `direction`.
pub fn run_file(
    direction: Direction,
    input: &Path,
    config: &PipelineConfig,
) -> Result<PipelineReport, PipelineError> {
    match direction {
        Direction::Compress => compress_file(input, config),
        Direction::Decompress => decompress_file(input, config),
    }
}

fn check_json(payload: &[u8]) {
    if let Err(e) = serde_json::from_slice::<serde_json::Value>(payload) {
        warn!("decompressed payload is not valid JSON ({}); writing it verbatim", e);
    }
}
