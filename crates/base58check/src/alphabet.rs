//! The base58 alphabet and its reverse lookup table.
//!
//! The alphabet drops `0`, `O`, `I` and `l` so that no two glyphs are easily
//! confused when a string is copied by hand. Digit value `i` is `ALPHABET[i]`,
//! which makes `'1'` the zero digit.

/// Base58 alphabet (Bitcoin-style)
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Radix of the encoding.
pub const BASE: u32 = 58;

/// Glyph for digit value 0. Also used as the leading-zero-byte marker.
pub const ZERO_DIGIT: u8 = ALPHABET[0];

/// Sentinel stored in [`DECODE_MAP`] for bytes outside the alphabet.
pub const INVALID: u8 = 0xFF;

/// Reverse lookup: byte value -> digit value, or [`INVALID`].
///
/// Built at compile time and never mutated, so any number of threads can
/// read it without synchronisation.
pub static DECODE_MAP: [u8; 256] = build_decode_map();

const fn build_decode_map() -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Convert a byte to its base58 digit value (0-57), or None if invalid
#[inline]
pub fn digit_of(c: u8) -> Option<u8> {
    match DECODE_MAP[c as usize] {
        INVALID => None,
        d => Some(d),
    }
}

/// Glyph for a digit value. `digit` must be below 58.
#[inline]
pub fn glyph_of(digit: u8) -> char {
    ALPHABET[digit as usize] as char
}

// ============================================================================
// TESTS
// ============================================================================
