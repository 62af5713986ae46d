//! base64/mod.rs
//! Base64 text codec for `.9ks` containers.
//!
//! - Standard alphabet (`A–Z a–z 0–9 + /`) with `=` padding, no line wrapping.
//! - Decoding is lenient by default so existing files keep loading; `Strict`
//!   reports the first malformed symbol instead.
//! - Whitespace is removed by the caller via `strip_whitespace` before decoding.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
