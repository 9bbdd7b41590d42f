//! Base58check: base58 with a double-SHA-256 checksum and leading-zero
//! preservation.
//!
//! Layout of the encoded value:
//!
//! ```text
//! [ '1' per leading zero byte ][ base58(payload || checksum) ]
//! ```
//!
//! The zero bytes are counted over `payload || checksum`, not the payload
//! alone; existing addresses depend on that.

use num_bigint::BigUint;
use thiserror::Error;
use tracing::debug;

use crate::alphabet::ZERO_DIGIT;
use crate::base58::{decode_to_big, encode_big_into, to_bytes_be, DecodeError};
use crate::hash::{checksum, CHECKSUM_LEN};

/// Shortest text that can carry one payload byte plus the checksum.
pub const MIN_ENCODED_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Too short to hold a checksum.
    #[error("invalid base58check input: length {len} is too short")]
    InvalidFormat { len: usize },

    #[error(transparent)]
    Corrupt(#[from] DecodeError),

    #[error(
        "checksum mismatch: embedded {}, computed {}",
        hex::encode(.embedded),
        hex::encode(.computed)
    )]
    ChecksumMismatch {
        embedded: [u8; CHECKSUM_LEN],
        computed: [u8; CHECKSUM_LEN],
    },
}

/// Encode `payload` as base58check.
pub fn encode(payload: &[u8]) -> String {
    let mut extended = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    extended.extend_from_slice(payload);
    extended.extend_from_slice(&checksum(payload));

    let zeros = extended.iter().take_while(|&&b| b == 0).count();

    let mut out = String::with_capacity(zeros + extended.len() * 138 / 100 + 1);
    out.extend(std::iter::repeat(ZERO_DIGIT as char).take(zeros));
    encode_big_into(&mut out, &BigUint::from_bytes_be(&extended));
    out
}

/// Decode base58check text and verify its checksum.
///
/// Returns the payload without the checksum. Nothing is returned on error.
pub fn decode(text: &str) -> Result<Vec<u8>, CheckError> {
    if text.len() < MIN_ENCODED_LEN {
        return Err(CheckError::InvalidFormat { len: text.len() });
    }

    let value = decode_to_big(text.as_bytes())?;

    // The integer form lost the leading zero bytes; each leading '1' stands
    // for one of them.
    let zeros = text.bytes().take_while(|&c| c == ZERO_DIGIT).count();
    let body = to_bytes_be(&value);
    let mut extended = Vec::with_capacity(zeros + body.len());
    extended.resize(zeros, 0);
    extended.extend_from_slice(&body);

    if extended.len() < CHECKSUM_LEN {
        return Err(CheckError::InvalidFormat { len: text.len() });
    }

    let split = extended.len() - CHECKSUM_LEN;
    let mut embedded = [0u8; CHECKSUM_LEN];
    embedded.copy_from_slice(&extended[split..]);
    extended.truncate(split);

    let computed = checksum(&extended);
    if computed != embedded {
        debug!(
            len = text.len(),
            embedded = %hex::encode(embedded),
            computed = %hex::encode(computed),
            "base58check checksum mismatch"
        );
        return Err(CheckError::ChecksumMismatch { embedded, computed });
    }

    Ok(extended)
}

// ============================================================================
// TESTS
// ============================================================================
