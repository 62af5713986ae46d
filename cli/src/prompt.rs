//! prompt.rs
//! Interactive front end: one command per line until `exit` or end of input.
//!
//! ```text
//! c save.json     compress save.json -> save_out.9ks
//! d save_out.9ks  decompress save_out.9ks -> save_out.json
//! help | exit
//! ```
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use ninek_core::pipeline::{Direction, PipelineConfig};

use crate::{parse_flag, run_one, EXIT_SUCCESS};

pub const PROMPT: &str = "Enter command (c <path> | d <path> | help | exit): ";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Direction, PathBuf),
    Help,
    Exit,
    Empty,
    Invalid(String),
}

/// Parse one prompt line. Paths may contain spaces; only the first word is the mode.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "exit" | "quit" if rest.is_empty() => Command::Exit,
        "help" | "?" if rest.is_empty() => Command::Help,
        mode => {
            let flag = if mode.starts_with('-') { mode.to_string() } else { format!("-{}", mode) };
            match (parse_flag(&flag), rest.is_empty()) {
                (Some(direction), false) => Command::Run(direction, PathBuf::from(rest)),
                (Some(_), true) => Command::Invalid(format!("missing file path after '{}'", word)),
                (None, _) => Command::Invalid(format!("unknown command '{}'", word)),
            }
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PromptSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Drive the prompt loop over `input`.
///
/// # Errors
/// Only terminal I/O failures; pipeline failures are reported inline and counted.
pub fn run_prompt<R: BufRead, O: Write, E: Write>(
    mut input: R,
    out: &mut O,
    err: &mut E,
    config: &PipelineConfig,
) -> anyhow::Result<PromptSummary> {
    let mut summary = PromptSummary::default();
    let mut raw = Vec::new();

    loop {
        write!(out, "{}", PROMPT).context("writing prompt")?;
        out.flush().context("flushing prompt")?;

        raw.clear();
        if input.read_until(b'\n', &mut raw).context("reading command")? == 0 {
            writeln!(out).context("writing newline")?;
            break;
        }
        // Undecodable bytes become U+FFFD; a mangled path then fails like any missing file.
        let line = String::from_utf8_lossy(&raw);

        match parse_command(&line) {
            Command::Empty => continue,
            Command::Exit => break,
            Command::Help => {
                writeln!(out, "  c <path>: Compress <file.json> to <file_out.9ks>")?;
                writeln!(out, "  d <path>: Decompress <file.9ks> to <file.json>")?;
                writeln!(out, "  exit: leave the prompt")?;
            }
            Command::Invalid(msg) => writeln!(err, "Error: {}", msg)?,
            Command::Run(direction, path) => {
                if run_one(direction, &path, config, out, err)? == EXIT_SUCCESS {
                    summary.succeeded += 1;
                } else {
                    summary.failed += 1;
                }
            }
        }
    }

    log::info!("prompt closed: {} succeeded, {} failed", summary.succeeded, summary.failed);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_with_and_without_dash() {
        assert_eq!(parse_command("c a.json\n"), Command::Run(Direction::Compress, "a.json".into()));
        assert_eq!(parse_command("-d a.9ks"), Command::Run(Direction::Decompress, "a.9ks".into()));
        assert_eq!(parse_command("D my save.9ks"), Command::Run(Direction::Decompress, "my save.9ks".into()));
    }

    #[test]
    fn parses_control_words() {
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("EXIT"), Command::Exit);
        assert_eq!(parse_command("quit\r\n"), Command::Exit);
        assert_eq!(parse_command("help"), Command::Help);
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(matches!(parse_command("c"), Command::Invalid(_)));
        assert!(matches!(parse_command("x a.json"), Command::Invalid(_)));
        assert!(matches!(parse_command("exit now"), Command::Invalid(_)));
    }

    #[test]
    fn end_of_input_closes_prompt() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_prompt(&b"\nbogus\n"[..], &mut out, &mut err, &PipelineConfig::default()).unwrap();
        assert_eq!(summary, PromptSummary::default());
        assert!(String::from_utf8(err).unwrap().contains("unknown command 'bogus'"));
        assert_eq!(String::from_utf8(out).unwrap().matches(PROMPT).count(), 3);
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let script = b"c /nonexistent/\xff.json\nhelp\nexit\n";
        let summary = run_prompt(&script[..], &mut out, &mut err, &PipelineConfig::default()).unwrap();
        assert_eq!(summary, PromptSummary { succeeded: 0, failed: 1 });
        assert!(String::from_utf8_lossy(&err).contains("Error: "));
        assert!(String::from_utf8(out).unwrap().contains("exit: leave the prompt"));
    }
}
