//! base64/decode.rs
//! Decoder: 4 symbols -> up to 3 bytes.
//!
//! Lenient decoding mirrors what existing `.9ks` readers accept:
//! - unknown symbols are skipped without consuming a quad slot;
//! - `=` closes the current quad and is not consumed, so the next quad is empty
//!   and decoding stops there;
//! - a quad holding a single sextet yields nothing.

use crate::base64::types::{Base64Error, DecodeMode};
use crate::constants::BASE64_PAD;

/// Map one symbol to its 6-bit value.
#[inline]
pub fn sextet(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a' + 26),
        b'0'..=b'9' => Some(symbol - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Whitespace as C's `isspace` sees it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Remove every whitespace character from `text`.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !is_space(*c)).collect()
}

/// Lenient decode. Never fails; malformed input degrades to the salvageable bytes.
pub fn decode(text: &str) -> Vec<u8> {
    let input = text.as_bytes();
    let mut out = Vec::with_capacity(input.len() / 4 * 3);
    let mut pos = 0;

    loop {
        let mut quad = [0u8; 4];
        let mut count = 0;
        while count < 4 && pos < input.len() {
            let symbol = input[pos];
            if symbol == BASE64_PAD {
                break;
            }
            pos += 1;
            if let Some(value) = sextet(symbol) {
                quad[count] = value;
                count += 1;
            }
        }
        if count == 0 {
            break;
        }
        push_bytes(&mut out, &quad, count);
    }
    out
}

/// Decode with an explicit mode.
///
/// # Errors
/// Only in `Strict` mode:
/// - `InvalidLength` if the length is not a multiple of 4.
/// - `InvalidSymbol` for anything outside the alphabet and `=`.
/// - `DanglingSymbol` if padding starts before the second symbol of a quad.
/// - `DataAfterPadding` if anything but `=` follows the first `=`.
pub fn decode_with(text: &str, mode: DecodeMode) -> Result<Vec<u8>, Base64Error> {
    match mode {
        DecodeMode::Lenient => Ok(decode(text)),
        DecodeMode::Strict => decode_strict(text.as_bytes()),
    }
}

fn decode_strict(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    if input.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength { len: input.len() });
    }
    let mut out = Vec::with_capacity(input.len() / 4 * 3);
    let quads = input.len() / 4;

    for (q, chunk) in input.chunks_exact(4).enumerate() {
        let start = q * 4;
        let mut quad = [0u8; 4];
        let mut count = 0;

        for (offset, &symbol) in chunk.iter().enumerate() {
            let index = start + offset;
            if symbol == BASE64_PAD {
                if offset < 2 {
                    return Err(Base64Error::DanglingSymbol { index: start });
                }
                if let Some(extra) = chunk[offset..].iter().position(|&s| s != BASE64_PAD) {
                    return Err(Base64Error::DataAfterPadding { index: index + extra });
                }
                if q + 1 != quads {
                    return Err(Base64Error::DataAfterPadding { index: start + 4 });
                }
                break;
            }
            match sextet(symbol) {
                Some(value) => {
                    quad[count] = value;
                    count += 1;
                }
                None => return Err(Base64Error::InvalidSymbol { index, byte: symbol }),
            }
        }
        push_bytes(&mut out, &quad, count);
    }
    Ok(out)
}

#[inline]
fn push_bytes(out: &mut Vec<u8>, quad: &[u8; 4], count: usize) {
    if count >= 2 {
        out.push(quad[0] << 2 | quad[1] >> 4);
    }
    if count >= 3 {
        out.push(quad[1] << 4 | quad[2] >> 2);
    }
    if count == 4 {
        out.push(quad[2] << 6 | quad[3]);
    }
}
