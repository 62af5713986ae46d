//! pipeline/mod.rs
//! Orchestrates the two linear pipelines:
//! - compress:   bytes -> gzip -> Base64 text
//! - decompress: text -> strip whitespace -> Base64 decode -> inflate -> bytes
//!
//! File stages read the whole source, run every stage in memory, and only then
//! write the destination, so a failed run never leaves an output file behind.

pub mod config;
pub mod naming;
pub mod report;
pub mod core;

pub use config::*;
pub use naming::*;
pub use report::*;
pub use self::core::*;
