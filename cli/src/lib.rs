//! ninek-cli
//!
//! Front ends over ninek-core. Both binaries share `run_one`, so batch and
//! interactive runs print the same messages and exit codes.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use ninek_core::pipeline::{run_file, Direction, PipelineConfig};

pub mod args;
pub mod logging;
pub mod prompt;

pub use args::*;
pub use logging::*;
pub use prompt::*;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Run one file and report on `out` / `err`. Returns the process exit status.
///
/// # Errors
/// Only terminal I/O failures; pipeline failures are reported on `err`.
pub fn run_one<O: Write, E: Write>(
    direction: Direction,
    path: &Path,
    config: &PipelineConfig,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<u8> {
    match run_file(direction, path, config) {
        Ok(report) => {
            writeln!(out, "SUCCESS: {}", report).context("writing report")?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            log::debug!("{:?}", e);
            writeln!(err, "Error: {}", e).context("writing error")?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Batch entry point: `<prog> -c|-d <path>`.
///
/// # Errors
/// Only terminal I/O failures, as for `run_one`.
pub fn run_batch<O: Write, E: Write>(
    args: &[OsString],
    config: &PipelineConfig,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<u8> {
    match parse_args(args) {
        Ok((direction, path)) => run_one(direction, &path, config, out, err),
        Err(e) => {
            writeln!(err, "Error: {}", e).context("writing error")?;
            write_usage(err, program_name(args)).context("writing usage")?;
            Ok(EXIT_FAILURE)
        }
    }
}
