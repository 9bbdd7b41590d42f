//! Double SHA-256 and the 4-byte checksum derived from it.

use sha2::{Digest, Sha256};

/// Length of the checksum appended by base58check.
pub const CHECKSUM_LEN: usize = 4;

/// SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// First [`CHECKSUM_LEN`] bytes of `sha256d(data)`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}
