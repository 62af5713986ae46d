//! compression/constants.rs
//! Engine defaults and chunk bounds.

/// Output chunk drained from the engine per pull (16 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Default deflate level (zlib's Z_DEFAULT_COMPRESSION).
pub const DEFAULT_LEVEL_DEFLATE: u32 = 6;

/// Gzip member magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Gzip compression method byte for deflate.
pub const GZIP_METHOD_DEFLATE: u8 = 0x08;

/// Gzip trailer: CRC32 (LE) + ISIZE (LE).
pub const GZIP_TRAILER_LEN: usize = 8;

/// Smallest well-formed gzip member: 10-byte header, empty deflate block, trailer.
pub const GZIP_MIN_LEN: usize = 10 + 2 + GZIP_TRAILER_LEN;

/// Upper bound on the capacity reserved from a trailer's ISIZE hint (64 MiB).
pub const MAX_CAPACITY_HINT: usize = 64 * 1024 * 1024;

/// OS byte written into gzip headers (3 = Unix).
pub const GZIP_OS_UNIX: u8 = 3;
