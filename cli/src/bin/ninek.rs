//! Batch front end: `ninek -c <path>` or `ninek -d <path>`.
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use ninek_cli::{init_logging, run_batch, EXIT_FAILURE};
use ninek_core::pipeline::PipelineConfig;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<OsString> = std::env::args_os().collect();
    let result = run_batch(
        &args,
        &PipelineConfig::default(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    match result {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
