use base58check::CheckError;
use bitcoin::secp256k1;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error(transparent)]
    Encoding(#[from] CheckError),

    #[error("version byte 0x{version:02x} does not belong to this network")]
    UnknownVersion { version: u8 },

    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("secp256k1: {0}")]
    Secp256k1(#[from] secp256k1::Error),

    #[error("signature is invalid")]
    InvalidSignature,

    #[error("unknown network '{0}'")]
    UnknownNetwork(String),
}
