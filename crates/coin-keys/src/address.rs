//! Base58check addresses: `version || hash160 || checksum`.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::KeyError;
use crate::params::Params;

/// Length of a hash160 digest.
pub const HASH160_LEN: usize = 20;

/// What an address pays to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// P2PKH: hash160 of a public key.
    PubkeyHash,
    /// P2SH: hash160 of a redeem script.
    ScriptHash,
}

/// A parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAddress {
    pub kind: AddressKind,
    pub hash: [u8; HASH160_LEN],
}

/// Hash160 = RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    let sha256_hash = Sha256::digest(data);
    let ripemd_hash = Ripemd160::digest(sha256_hash);
    let mut out = [0u8; HASH160_LEN];
    out.copy_from_slice(&ripemd_hash);
    out
}

fn encode_with_version(version: u8, hash: &[u8; HASH160_LEN]) -> String {
    let mut payload = Vec::with_capacity(1 + HASH160_LEN);
    payload.push(version);
    payload.extend_from_slice(hash);
    base58check::check::encode(&payload)
}

/// P2PKH address for a public key hash.
pub fn p2pkh_address(pubkey_hash: &[u8; HASH160_LEN], params: &Params) -> String {
    encode_with_version(params.address_header, pubkey_hash)
}

/// P2SH address for a script hash.
pub fn p2sh_address(script_hash: &[u8; HASH160_LEN], params: &Params) -> String {
    encode_with_version(params.p2sh_header, script_hash)
}

/// Parse an address and check that its version byte belongs to `params`.
pub fn decode_address(addr: &str, params: &Params) -> Result<DecodedAddress, KeyError> {
    let payload = base58check::check::decode(addr)?;
    if payload.len() != 1 + HASH160_LEN {
        return Err(KeyError::InvalidLength {
            expected: 1 + HASH160_LEN,
            actual: payload.len(),
        });
    }

    let version = payload[0];
    let kind = if version == params.address_header {
        AddressKind::PubkeyHash
    } else if version == params.p2sh_header {
        AddressKind::ScriptHash
    } else {
        return Err(KeyError::UnknownVersion { version });
    };

    let mut hash = [0u8; HASH160_LEN];
    hash.copy_from_slice(&payload[1..]);
    Ok(DecodedAddress { kind, hash })
}
