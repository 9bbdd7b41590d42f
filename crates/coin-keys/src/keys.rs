//! secp256k1 keys bound to a network, with WIF export/import and P2PKH
//! addresses.
//!
//! # WIF layout
//!
//! ```text
//! [ wif header (1) ][ secret (32) ][ 0x01 if compressed ] + checksum
//! ```

use bitcoin::secp256k1::{self, ecdsa, rand, Message, Secp256k1, SecretKey};
use tracing::debug;

use crate::address::{hash160, p2pkh_address, HASH160_LEN};
use crate::error::KeyError;
use crate::params::Params;

/// Serialized secret key length.
pub const SECRET_KEY_LEN: usize = 32;
/// Compressed SEC1 public key length.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;
/// Uncompressed SEC1 public key length.
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;
/// Length of the digest accepted by [`PrivateKey::sign`] and [`PublicKey::verify`].
pub const DIGEST_LEN: usize = 32;

/// Trailing WIF byte marking a compressed public key.
const COMPRESSED_MARKER: u8 = 0x01;

// ============================================================================
// PUBLIC KEY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: secp256k1::PublicKey,
    compressed: bool,
    params: &'static Params,
}

impl PublicKey {
    /// Parse SEC1 bytes. 33 bytes mean compressed, 65 uncompressed.
    pub fn from_slice(bytes: &[u8], params: &'static Params) -> Result<Self, KeyError> {
        let inner = secp256k1::PublicKey::from_slice(bytes)?;
        Ok(Self {
            inner,
            compressed: bytes.len() == COMPRESSED_PUBKEY_LEN,
            params,
        })
    }

    /// SEC1 bytes in the form selected by the compression flag.
    pub fn serialize(&self) -> Vec<u8> {
        if self.compressed {
            self.inner.serialize().to_vec()
        } else {
            self.inner.serialize_uncompressed().to_vec()
        }
    }

    /// hash160 of [`serialize`](Self::serialize).
    pub fn pubkey_hash(&self) -> [u8; HASH160_LEN] {
        hash160(&self.serialize())
    }

    /// P2PKH address on this key's network.
    pub fn address(&self) -> String {
        p2pkh_address(&self.pubkey_hash(), self.params)
    }

    /// Check a DER signature over a 32-byte digest.
    pub fn verify(&self, signature: &[u8], digest: &[u8]) -> Result<(), KeyError> {
        let msg = digest_message(digest)?;
        let sig = ecdsa::Signature::from_der(signature).map_err(|_| KeyError::InvalidSignature)?;
        Secp256k1::verification_only()
            .verify_ecdsa(&msg, &sig, &self.inner)
            .map_err(|_| KeyError::InvalidSignature)
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn params(&self) -> &'static Params {
        self.params
    }

    pub fn as_secp256k1(&self) -> &secp256k1::PublicKey {
        &self.inner
    }
}

// ============================================================================
// PRIVATE KEY
// ============================================================================

#[derive(Debug, Clone)]
pub struct PrivateKey {
    secret: SecretKey,
    public_key: PublicKey,
}

impl PrivateKey {
    /// Random key; its public key is compressed.
    pub fn generate(params: &'static Params) -> Self {
        let secp = Secp256k1::new();
        let (secret, inner) = secp.generate_keypair(&mut rand::thread_rng());
        Self {
            secret,
            public_key: PublicKey {
                inner,
                compressed: true,
                params,
            },
        }
    }

    /// Key from a 32-byte secret; its public key is compressed.
    pub fn from_bytes(bytes: &[u8], params: &'static Params) -> Result<Self, KeyError> {
        if bytes.len() != SECRET_KEY_LEN {
            return Err(KeyError::InvalidLength {
                expected: SECRET_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let secret = SecretKey::from_slice(bytes)?;
        Ok(Self::from_secret(secret, true, params))
    }

    /// Parse a WIF string whose version byte belongs to `params`.
    pub fn from_wif(wif: &str, params: &'static Params) -> Result<Self, KeyError> {
        let payload = base58check::check::decode(wif)?;
        let Some((&version, rest)) = payload.split_first() else {
            return Err(KeyError::InvalidLength {
                expected: 1 + SECRET_KEY_LEN,
                actual: 0,
            });
        };

        if !params.accepts_wif_header(version) {
            return Err(KeyError::UnknownVersion { version });
        }

        let (secret_bytes, compressed) = match rest {
            [secret @ .., COMPRESSED_MARKER] if secret.len() == SECRET_KEY_LEN => (secret, true),
            _ => (rest, false),
        };
        if secret_bytes.len() != SECRET_KEY_LEN {
            return Err(KeyError::InvalidLength {
                expected: 1 + SECRET_KEY_LEN,
                actual: payload.len(),
            });
        }
        debug!(network = params.name, compressed, "decoded WIF private key");

        let secret = SecretKey::from_slice(secret_bytes)?;
        Ok(Self::from_secret(secret, compressed, params))
    }

    fn from_secret(secret: SecretKey, compressed: bool, params: &'static Params) -> Self {
        let secp = Secp256k1::signing_only();
        let inner = secp256k1::PublicKey::from_secret_key(&secp, &secret);
        Self {
            secret,
            public_key: PublicKey {
                inner,
                compressed,
                params,
            },
        }
    }

    /// Same secret, with the public key serialized compressed or not.
    pub fn with_compression(mut self, compressed: bool) -> Self {
        self.public_key.compressed = compressed;
        self
    }

    /// Wallet-import string for this key.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(2 + SECRET_KEY_LEN);
        payload.push(self.public_key.params.wif_header());
        payload.extend_from_slice(&self.secret.secret_bytes());
        if self.public_key.compressed {
            payload.push(COMPRESSED_MARKER);
        }
        base58check::check::encode(&payload)
    }

    /// DER-encoded ECDSA signature over a 32-byte digest.
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>, KeyError> {
        let msg = digest_message(digest)?;
        let sig = Secp256k1::signing_only().sign_ecdsa(&msg, &self.secret);
        Ok(sig.serialize_der().to_vec())
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_bytes(&self) -> [u8; SECRET_KEY_LEN] {
        self.secret.secret_bytes()
    }

    pub fn as_secp256k1(&self) -> &SecretKey {
        &self.secret
    }
}

fn digest_message(digest: &[u8]) -> Result<Message, KeyError> {
    if digest.len() != DIGEST_LEN {
        return Err(KeyError::InvalidLength {
            expected: DIGEST_LEN,
            actual: digest.len(),
        });
    }
    Ok(Message::from_digest_slice(digest)?)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{BITCOIN_MAIN, BITCOIN_TEST, LITECOIN_MAIN, MONACOIN_MAIN};
    use base58check::sha256d;
    use bitcoin::{Address, NetworkKind};

    fn privkey_one(params: &'static Params) -> PrivateKey {
        let mut sk_bytes = [0u8; 32];
        sk_bytes[31] = 1;
        PrivateKey::from_bytes(&sk_bytes, params).unwrap()
    }

    #[test]
    fn btc_privkey_1_mainnet() {
        let key = privkey_one(&BITCOIN_MAIN);
        assert_eq!(key.to_wif(), "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(key.public_key().address(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        let key = key.with_compression(false);
        assert_eq!(key.to_wif(), "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf");
        assert_eq!(key.public_key().address(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    }

    #[test]
    fn btc_privkey_1_testnet() {
        let key = privkey_one(&BITCOIN_TEST);
        assert_eq!(key.to_wif(), "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87JcbXMTcA");
        assert_eq!(key.public_key().address(), "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");

        let key = key.with_compression(false);
        assert_eq!(key.to_wif(), "91avARGdfge8E4tZfYLoxeJ5sGBdNJQH4kvjJoQFacbgwmaKkrx");
        assert_eq!(key.public_key().address(), "mtoKs9V381UAhUia3d7Vb9GNak8Qvmcsme");
    }

    #[test]
    fn test_matches_bitcoin_crate() {
        for (params, kind) in [(&BITCOIN_MAIN, NetworkKind::Main), (&BITCOIN_TEST, NetworkKind::Test)] {
            let key = PrivateKey::generate(params);
            let sk = *key.as_secp256k1();
            let pk = *key.public_key().as_secp256k1();

            assert_eq!(key.to_wif(), bitcoin::PrivateKey::new(sk, kind).to_wif());
            assert_eq!(
                key.public_key().address(),
                Address::p2pkh(bitcoin::PublicKey::new(pk), kind).to_string()
            );

            let key = key.with_compression(false);
            assert_eq!(key.to_wif(), bitcoin::PrivateKey::new_uncompressed(sk, kind).to_wif());
            assert_eq!(
                key.public_key().address(),
                Address::p2pkh(bitcoin::PublicKey::new_uncompressed(pk), kind).to_string()
            );
        }
    }

    #[test]
    fn test_wif_roundtrip_keeps_address() {
        for params in [&BITCOIN_MAIN, &BITCOIN_TEST, &LITECOIN_MAIN, &MONACOIN_MAIN] {
            let key = PrivateKey::generate(params);
            let address = key.public_key().address();

            let restored = PrivateKey::from_wif(&key.to_wif(), params).unwrap();
            assert_eq!(restored.public_key().address(), address);
            assert!(restored.public_key().is_compressed());
            assert_eq!(restored.secret_bytes(), key.secret_bytes());
        }
    }

    #[test]
    fn test_uncompressed_wif_roundtrip() {
        let wif = "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf";
        let key = PrivateKey::from_wif(wif, &BITCOIN_MAIN).unwrap();
        assert!(!key.public_key().is_compressed());
        assert_eq!(key.to_wif(), wif);
    }

    #[test]
    fn test_wif_wrong_network() {
        let wif = privkey_one(&BITCOIN_MAIN).to_wif();
        assert!(matches!(
            PrivateKey::from_wif(&wif, &BITCOIN_TEST),
            Err(KeyError::UnknownVersion { version: 0x80 })
        ));
    }

    #[test]
    fn test_wif_alternate_header_accepted() {
        // Monacoin also accepts 0xB0, the Litecoin header.
        let wif = privkey_one(&LITECOIN_MAIN).to_wif();
        let key = PrivateKey::from_wif(&wif, &MONACOIN_MAIN).unwrap();
        assert_eq!(key.public_key().params(), &MONACOIN_MAIN);
        // Re-export uses the primary header.
        assert_eq!(key.to_wif(), privkey_one(&MONACOIN_MAIN).to_wif());
    }

    #[test]
    fn test_wif_bad_length() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&[0x42; 20]);
        let wif = base58check::check::encode(&payload);
        assert!(matches!(
            PrivateKey::from_wif(&wif, &BITCOIN_MAIN),
            Err(KeyError::InvalidLength { expected: 33, actual: 21 })
        ));
    }

    #[test]
    fn test_wif_bad_checksum() {
        assert!(matches!(
            PrivateKey::from_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWo", &BITCOIN_MAIN),
            Err(KeyError::Encoding(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(matches!(
            PrivateKey::from_bytes(&[1u8; 31], &BITCOIN_MAIN),
            Err(KeyError::InvalidLength { expected: 32, actual: 31 })
        ));
    }

    #[test]
    fn test_from_bytes_rejects_zero_secret() {
        assert!(matches!(
            PrivateKey::from_bytes(&[0u8; 32], &BITCOIN_MAIN),
            Err(KeyError::Secp256k1(_))
        ));
    }

    #[test]
    fn test_sign_verify() {
        let seed = hex::decode("3954e0c9a3ce58a8dca793e214232e569ff0cb9da79689ca56d0af614227d540")
            .unwrap();
        let key = PrivateKey::from_bytes(&seed, &BITCOIN_MAIN)
            .unwrap()
            .with_compression(false);

        let digest = sha256d(b"test data");
        let sig = key.sign(&digest).unwrap();
        key.public_key().verify(&sig, &digest).unwrap();

        let other = sha256d(b"invalid test data");
        assert!(matches!(
            key.public_key().verify(&sig, &other),
            Err(KeyError::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_garbage_signature() {
        let key = privkey_one(&BITCOIN_MAIN);
        let digest = sha256d(b"data");
        assert!(matches!(
            key.public_key().verify(&[0x30, 0x01, 0x02], &digest),
            Err(KeyError::InvalidSignature)
        ));
    }

    #[test]
    fn test_sign_requires_32_byte_digest() {
        let key = privkey_one(&BITCOIN_MAIN);
        assert!(matches!(
            key.sign(b"test data"),
            Err(KeyError::InvalidLength { expected: 32, actual: 9 })
        ));
    }

    #[test]
    fn test_public_key_from_slice() {
        let key = privkey_one(&BITCOIN_MAIN);
        let compressed = key.public_key().serialize();
        assert_eq!(compressed.len(), COMPRESSED_PUBKEY_LEN);

        let parsed = PublicKey::from_slice(&compressed, &BITCOIN_MAIN).unwrap();
        assert!(parsed.is_compressed());
        assert_eq!(parsed.address(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        let uncompressed = key.with_compression(false).public_key().serialize();
        assert_eq!(uncompressed.len(), UNCOMPRESSED_PUBKEY_LEN);
        let parsed = PublicKey::from_slice(&uncompressed, &BITCOIN_MAIN).unwrap();
        assert!(!parsed.is_compressed());
        assert_eq!(parsed.address(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");

        assert!(matches!(
            PublicKey::from_slice(&[0x02; 10], &BITCOIN_MAIN),
            Err(KeyError::Secp256k1(_))
        ));
    }
}
