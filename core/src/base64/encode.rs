//! base64/encode.rs
//! Encoder: 3 bytes -> 4 symbols, most significant sextet first.

use crate::constants::{BASE64_ALPHABET, BASE64_PAD};

/// Encoded length for `n` input bytes, padding included.
#[inline]
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

pub fn encode(input: &[u8]) -> String {
    let mut out = String::new();
    encode_into(input, &mut out);
    out
}

/// Append the encoding of `input` to `out`.
pub fn encode_into(input: &[u8], out: &mut String) {
    out.reserve(encoded_len(input.len()));

    let mut groups = input.chunks_exact(3);
    for group in &mut groups {
        let word = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);
        push_sextets(out, word, 4);
    }

    // Missing bits are zero; only symbols carrying real bits are emitted.
    match *groups.remainder() {
        [a] => {
            push_sextets(out, u32::from(a) << 16, 2);
            out.push(BASE64_PAD as char);
            out.push(BASE64_PAD as char);
        }
        [a, b] => {
            push_sextets(out, u32::from(a) << 16 | u32::from(b) << 8, 3);
            out.push(BASE64_PAD as char);
        }
        _ => {}
    }
}

#[inline]
fn push_sextets(out: &mut String, word: u32, count: usize) {
    for i in 0..count {
        let shift = 18 - 6 * i;
        let index = ((word >> shift) & 0x3f) as usize;
        out.push(BASE64_ALPHABET[index] as char);
    }
}
