//! Interactive front end over the same pipeline as `ninek`.
use std::io;
use std::process::ExitCode;

use ninek_cli::{init_logging, run_prompt, EXIT_FAILURE, EXIT_SUCCESS};
use ninek_core::pipeline::PipelineConfig;

fn main() -> ExitCode {
    init_logging();

    let stdin = io::stdin();
    let result = run_prompt(
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &PipelineConfig::default(),
    );

    match result {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
