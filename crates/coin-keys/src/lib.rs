//! # coin-keys
//!
//! secp256k1 keys and base58check addresses for bitcoin-family networks.
//!
//! A key is bound to a [`Params`] table that supplies the version bytes for
//! WIF export and P2PKH/P2SH addresses. Base58check itself lives in the
//! `base58check` crate.
//!
//! # Example
//!
//! ```
//! use coin_keys::{PrivateKey, BITCOIN_MAIN};
//!
//! let mut secret = [0u8; 32];
//! secret[31] = 1;
//! let key = PrivateKey::from_bytes(&secret, &BITCOIN_MAIN).unwrap();
//!
//! assert_eq!(key.public_key().address(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
//!
//! let restored = PrivateKey::from_wif(&key.to_wif(), &BITCOIN_MAIN).unwrap();
//! assert_eq!(restored.secret_bytes(), secret);
//! ```

pub mod address;
pub mod error;
pub mod keys;
pub mod params;

pub use address::{
    decode_address, hash160, p2pkh_address, p2sh_address, AddressKind, DecodedAddress,
    HASH160_LEN,
};
pub use error::KeyError;
pub use keys::{PrivateKey, PublicKey, DIGEST_LEN};
pub use params::{Network, Params, BITCOIN_MAIN, BITCOIN_TEST, LITECOIN_MAIN, MONACOIN_MAIN};
