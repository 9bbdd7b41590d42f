//! Message signing for the keystore worker.
//!
//! Messages are hashed with double SHA-256; the digest is what gets signed.

use base58check::sha256d;
use coin_keys::{KeyError, Params, PrivateKey, PublicKey};

use crate::input;

/// Sign a base64 message. Returns (digest, signature) as hex, the signature
/// DER-encoded.
pub fn sign_message(key: &PrivateKey, message_b64: &str) -> Result<(String, String), String> {
    let message = input::decode_message(message_b64)?;
    let digest = sha256d(&message);
    let signature = key
        .sign(&digest)
        .map_err(|e| format!("Signing failed: {}", e))?;
    Ok((hex::encode(digest), hex::encode(signature)))
}

/// Verify a hex DER signature over a base64 message.
///
/// A well-formed request with a bad signature yields `Ok(false)`.
pub fn verify_message(
    public_key_hex: &str,
    message_b64: &str,
    signature_hex: &str,
    params: &'static Params,
) -> Result<bool, String> {
    let pk_bytes = input::decode_hex("public_key", public_key_hex)?;
    let public_key = PublicKey::from_slice(&pk_bytes, params)
        .map_err(|e| format!("Invalid public_key: {}", e))?;
    let signature = input::decode_hex("signature", signature_hex)?;
    let message = input::decode_message(message_b64)?;

    match public_key.verify(&signature, &sha256d(&message)) {
        Ok(()) => Ok(true),
        Err(KeyError::InvalidSignature) => Ok(false),
        Err(e) => Err(format!("Verification failed: {}", e)),
    }
}
