//! compression/codecs/mod.rs
//! Engines behind the `Compressor` / `Decompressor` seam.

pub mod auto;
pub mod gzip;

pub use auto::*;
pub use gzip::*;
