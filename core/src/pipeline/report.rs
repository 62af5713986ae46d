//! pipeline/report.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    fn past_tense(self) -> &'static str {
        match self {
            Direction::Compress => "Compressed",
            Direction::Decompress => "Decompressed",
        }
    }
}

/// Outcome of one successful file pipeline.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub direction: Direction,
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub elapsed: Duration,
}

impl PipelineReport {
    /// Output size relative to input size.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        self.bytes_out as f64 / self.bytes_in as f64
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' to '{}'",
            self.direction.past_tense(),
            self.input.display(),
            self.output.display()
        )
    }
}
