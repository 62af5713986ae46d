//! pipeline/config.rs
use crate::base64::DecodeMode;
use crate::compression::CodecConfig;
use crate::constants::{COMPRESSED_SUFFIX, CONTAINER_EXT, PAYLOAD_EXT};

/// Runtime configuration for both pipelines. `Default` is what the CLI runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub codec: CodecConfig,
    pub decode_mode: DecodeMode,
    /// Extension of compressed containers, without the dot.
    pub container_ext: String,
    /// Appended to the stem of compressed containers.
    pub compressed_suffix: String,
    /// Extension of decompressed payloads, without the dot.
    pub payload_ext: String,
    /// Warn (never fail) when a decompressed payload is not JSON.
    pub validate_json: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            decode_mode: DecodeMode::Lenient,
            container_ext: CONTAINER_EXT.into(),
            compressed_suffix: COMPRESSED_SUFFIX.into(),
            payload_ext: PAYLOAD_EXT.into(),
            validate_json: true,
        }
    }
}

impl PipelineConfig {
    pub fn strict() -> Self {
        Self { decode_mode: DecodeMode::Strict, ..Self::default() }
    }
}
