use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{base64::Base64Error, compression::CompressionError};

/// Unified pipeline error covering usage, I/O, empty input, Base64 and engine failures.
/// - `From<T>` impls enable `?` across the stages.
/// - Messages are meant to be printed to the user as-is.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Wrong argument count or unknown mode flag.
    #[error("{0}")]
    Usage(String),

    #[error("could not {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source empty, or only whitespace once trimmed.
    #[error("input '{input}' is empty or only contains whitespace")]
    EmptyInput { input: String },

    /// Base64 decoding produced no bytes from non-empty text.
    #[error("base64 decoding failed or resulted in empty data")]
    Codec,

    #[error("base64 error: {0}")]
    Base64(#[from] Base64Error),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),
}

impl PipelineError {
    pub fn empty(input: impl Into<String>) -> Self {
        PipelineError::EmptyInput { input: input.into() }
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        PipelineError::Io { action, path: path.into(), source }
    }

    /// True for errors caused by how the tool was invoked.
    pub fn is_usage(&self) -> bool {
        matches!(self, PipelineError::Usage(_))
    }
}
