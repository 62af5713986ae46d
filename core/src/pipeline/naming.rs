//! pipeline/naming.rs
//! Output file names.
//!
//! Only the final path component is inspected, so `dir.v2/archive` keeps its
//! directory intact. A leading dot (`.profile`) does not start an extension.
use std::path::{Path, PathBuf};

use crate::pipeline::config::PipelineConfig;

/// `data.json` -> `data_out.9ks`, `archive` -> `archive_out.9ks`.
pub fn compressed_output_path(input: &Path) -> PathBuf {
    compressed_output_path_with(input, &PipelineConfig::default())
}

pub fn compressed_output_path_with(input: &Path, config: &PipelineConfig) -> PathBuf {
    let tail = format!("{}.{}", config.compressed_suffix, config.container_ext);
    replace_extension(input, &tail)
}

/// `data_out.9ks` -> `data_out.json`, `archive` -> `archive.json`.
pub fn decompressed_output_path(input: &Path) -> PathBuf {
    decompressed_output_path_with(input, &PipelineConfig::default())
}

pub fn decompressed_output_path_with(input: &Path, config: &PipelineConfig) -> PathBuf {
    replace_extension(input, &format!(".{}", config.payload_ext))
}

fn replace_extension(input: &Path, tail: &str) -> PathBuf {
    match input.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(tail);
            input.with_file_name(name)
        }
        None => {
            let mut raw = input.as_os_str().to_os_string();
            raw.push(tail);
            PathBuf::from(raw)
        }
    }
}
