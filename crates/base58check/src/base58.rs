//! Arbitrary-precision base58 codec.
//!
//! Base58 here converts *integers*: bytes go through
//! [`BigUint::from_bytes_be`] first, so leading zero bytes carry no weight and
//! vanish. The checksum layer in [`crate::check`] restores them; use it when
//! byte-exact round trips matter.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

use crate::alphabet::{digit_of, glyph_of, BASE};

/// Decode error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte at `offset` is not part of the base58 alphabet.
    #[error("illegal base58 data at input byte {offset}")]
    CorruptInput { offset: usize },
}

// ============================================================================
// INTEGER CODEC
// ============================================================================

/// Append the base58 digits of `value` to `dst`.
///
/// Zero appends nothing. `value` is only read; the division loop runs on a
/// private copy.
pub fn encode_big_into(dst: &mut String, value: &BigUint) {
    let radix = BigUint::from(BASE);
    let mut n = value.clone();

    // Remainders come out least significant first.
    let mut digits = Vec::new();
    while !n.is_zero() {
        let (quot, rem) = n.div_rem(&radix);
        // rem < 58 always fits.
        digits.push(rem.to_u8().unwrap_or(0));
        n = quot;
    }

    dst.reserve(digits.len());
    dst.extend(digits.iter().rev().map(|&d| glyph_of(d)));
}

/// Encode `value` as a fresh base58 string.
pub fn encode_big(value: &BigUint) -> String {
    let mut out = String::new();
    encode_big_into(&mut out, value);
    out
}

/// Decode base58 text into an integer.
///
/// Fails on the first byte outside the alphabet, reporting its zero-based
/// offset. Empty input decodes to zero.
pub fn decode_to_big(src: &[u8]) -> Result<BigUint, DecodeError> {
    let mut n = BigUint::zero();
    for (offset, &c) in src.iter().enumerate() {
        let digit = digit_of(c).ok_or(DecodeError::CorruptInput { offset })?;
        n *= BASE;
        n += u32::from(digit);
    }
    Ok(n)
}

// ============================================================================
// BYTE CODEC
// ============================================================================

/// Encode bytes as base58, treating them as a big-endian unsigned integer.
///
/// Leading zero bytes are not represented; see the module docs.
pub fn encode(bytes: &[u8]) -> String {
    encode_big(&BigUint::from_bytes_be(bytes))
}

/// Decode base58 text into the minimal big-endian byte form of its value.
///
/// Zero (including the empty string) decodes to an empty vector.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let n = decode_to_big(text.as_bytes())?;
    Ok(to_bytes_be(&n))
}

/// Check whether every byte of `text` is a base58 digit.
pub fn is_base58(text: &str) -> bool {
    text.bytes().all(|c| digit_of(c).is_some())
}

/// Big-endian bytes without the lone `0x00` that `BigUint` emits for zero.
pub(crate) fn to_bytes_be(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}

// ============================================================================
// TESTS
// ============================================================================
