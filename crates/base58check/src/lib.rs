//! # base58check
//!
//! Human-friendly, error-detecting text encoding for binary payloads:
//!
//! - [`base58`]: integer <-> base58 text over the Bitcoin alphabet
//! - [`check`]: base58 with a 4-byte double-SHA-256 checksum, keeping
//!   leading zero bytes as leading `'1'` characters
//!
//! | Layer        | Input          | Preserves leading zeros | Detects typos |
//! |--------------|----------------|-------------------------|---------------|
//! | `base58`     | `BigUint`/bytes | No                     | Alphabet only |
//! | `check`      | bytes          | Yes                     | Checksum      |
//!
//! # Example
//!
//! ```
//! use base58check::{check, CheckError};
//!
//! let encoded = check::encode(&[0x14]);
//! assert_eq!(encoded, "3MNQE1X");
//! assert_eq!(check::decode(&encoded).unwrap(), vec![0x14]);
//!
//! assert!(matches!(
//!     check::decode("3MNQE1Y"),
//!     Err(CheckError::ChecksumMismatch { .. })
//! ));
//! ```

pub mod alphabet;
pub mod base58;
pub mod check;
pub mod hash;

pub use alphabet::{ALPHABET, BASE, DECODE_MAP};
pub use base58::{decode_to_big, encode_big, encode_big_into, is_base58, DecodeError};
pub use check::{CheckError, MIN_ENCODED_LEN};
pub use hash::{checksum, sha256d, CHECKSUM_LEN};

pub use num_bigint::BigUint;
