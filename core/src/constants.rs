//! constants.rs
//! Process-wide immutable configuration for the `.9ks` container.

/// Base64 alphabet, indexed by 6-bit value.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding symbol closing an incomplete quad.
pub const BASE64_PAD: u8 = b'=';

/// Extension written by the compress pipeline (no leading dot).
pub const CONTAINER_EXT: &str = "9ks";

/// Suffix appended to the stem by the compress pipeline.
pub const COMPRESSED_SUFFIX: &str = "_out";

/// Extension written by the decompress pipeline (no leading dot).
pub const PAYLOAD_EXT: &str = "json";
