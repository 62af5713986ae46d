//! args.rs
//! Argument parsing for the batch front end. Exactly `<prog> -c|-d <path>`.
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ninek_core::pipeline::Direction;
use ninek_core::types::PipelineError;

const DEFAULT_PROGRAM: &str = "ninek";

/// Arguments arrive as `OsString` so non-UTF-8 paths pass through untouched.
pub fn parse_args(args: &[OsString]) -> Result<(Direction, PathBuf), PipelineError> {
    let [_, flag, path] = args else {
        return Err(PipelineError::Usage(format!(
            "expected 2 arguments, got {}",
            args.len().saturating_sub(1)
        )));
    };
    let direction = flag.to_str().and_then(parse_flag).ok_or_else(|| {
        PipelineError::Usage(format!(
            "invalid option '{}'. Use -d (decompress) or -c (compress).",
            flag.to_string_lossy()
        ))
    })?;
    Ok((direction, PathBuf::from(path.clone())))
}

pub fn parse_flag(flag: &str) -> Option<Direction> {
    match flag {
        "-c" => Some(Direction::Compress),
        "-d" => Some(Direction::Decompress),
        _ => None,
    }
}

pub fn program_name(args: &[OsString]) -> &str {
    args.first()
        .and_then(|p| Path::new(p).file_name())
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_PROGRAM)
}

pub fn write_usage<W: Write>(w: &mut W, program: &str) -> io::Result<()> {
    writeln!(w, "Usage: {} -[d|c] <file_path>", program)?;
    writeln!(w, "  -d: Decompress <file.9ks> to <file.json>")?;
    writeln!(w, "  -c: Compress <file.json> to <file_out.9ks>")
}
