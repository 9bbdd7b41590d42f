//! Keystore worker for base58check payloads, WIF keys and addresses.
//!
//! - Reads one JSON request from stdin
//! - Resolves the network from the request or `KEYSTORE_NETWORK`
//! - Writes one JSON response to stdout; logs go to stderr
//!
//! Operations:
//! - encode / decode: base58check over hex payloads
//! - generate: new random key as WIF, address and public key
//! - get_address: address and public key of a WIF key
//! - sign / verify: ECDSA over the double SHA-256 of a base64 message

mod config;
mod input;
mod output;
mod signing;

use coin_keys::{Network, PrivateKey};
use input::{Operation, WorkerRequest};
use std::io::{self, Read, Write};
use tracing::{info, warn};

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() {
    setup_logging();

    let output = match read_request() {
        Ok(request) => {
            let operation = request.operation.name();
            dispatch(request).unwrap_or_else(|e| {
                warn!(operation, error = %e, "request failed");
                output::error_response(operation, &e)
            })
        }
        Err(e) => {
            warn!(error = %e, "unreadable request");
            output::error_response("unknown", &e)
        }
    };

    // stdout carries only the response
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(output.as_bytes());
    let _ = handle.flush();
}

fn read_request() -> Result<WorkerRequest, String> {
    let mut input_str = String::new();
    io::stdin()
        .read_to_string(&mut input_str)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    input::parse_request(&input_str)
}

fn dispatch(request: WorkerRequest) -> Result<String, String> {
    let network = config::resolve_network(request.network.as_deref())?;
    info!(operation = request.operation.name(), %network, "handling request");

    match request.operation {
        Operation::Encode { payload } => run_encode(network, &payload),
        Operation::Decode { encoded } => run_decode(network, &encoded),
        Operation::Generate => run_generate(network),
        Operation::GetAddress { wif } => run_get_address(network, &wif),
        Operation::Sign { wif, message } => run_sign(network, &wif, &message),
        Operation::Verify {
            public_key,
            message,
            signature,
        } => run_verify(network, &public_key, &message, &signature),
    }
}

fn run_encode(network: Network, payload_hex: &str) -> Result<String, String> {
    let payload = input::decode_hex("payload", payload_hex)?;
    let encoded = base58check::check::encode(&payload);

    Ok(output::success_response(
        "encode",
        network.as_str(),
        output::EncodeBody { encoded },
    ))
}

fn run_decode(network: Network, encoded: &str) -> Result<String, String> {
    let payload = base58check::check::decode(encoded).map_err(|e| e.to_string())?;

    Ok(output::success_response(
        "decode",
        network.as_str(),
        output::DecodeBody {
            payload: hex::encode(payload),
        },
    ))
}

fn run_generate(network: Network) -> Result<String, String> {
    let key = PrivateKey::generate(network.params());
    let public_key = key.public_key();

    Ok(output::success_response(
        "generate",
        network.as_str(),
        output::GenerateBody {
            wif: key.to_wif(),
            address: public_key.address(),
            public_key: hex::encode(public_key.serialize()),
        },
    ))
}

fn run_get_address(network: Network, wif: &str) -> Result<String, String> {
    let key = PrivateKey::from_wif(wif, network.params()).map_err(|e| format!("Invalid wif: {}", e))?;
    let public_key = key.public_key();

    Ok(output::success_response(
        "get_address",
        network.as_str(),
        output::AddressBody {
            address: public_key.address(),
            public_key: hex::encode(public_key.serialize()),
            compressed: public_key.is_compressed(),
        },
    ))
}

fn run_sign(network: Network, wif: &str, message: &str) -> Result<String, String> {
    let key = PrivateKey::from_wif(wif, network.params()).map_err(|e| format!("Invalid wif: {}", e))?;
    let (digest, signature) = signing::sign_message(&key, message)?;

    Ok(output::success_response(
        "sign",
        network.as_str(),
        output::SignBody { digest, signature },
    ))
}

fn run_verify(
    network: Network,
    public_key: &str,
    message: &str,
    signature: &str,
) -> Result<String, String> {
    let valid = signing::verify_message(public_key, message, signature, network.params())?;

    Ok(output::success_response(
        "verify",
        network.as_str(),
        output::VerifyBody { valid },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const PRIVKEY_ONE_WIF: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";

    // Requests name their network so KEYSTORE_NETWORK in the environment
    // cannot change the outcome.
    fn handle(json: &str) -> Value {
        let request = input::parse_request(json).unwrap();
        assert!(request.network.is_some(), "test request without network: {}", json);
        let out = dispatch(request).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let value = handle(r#"{"operation":"encode","network":"bitcoin","payload":"14"}"#);
        assert_eq!(value["success"], true);
        assert_eq!(value["encoded"], "3MNQE1X");

        let value = handle(r#"{"operation":"decode","network":"bitcoin","encoded":"3MNQE1X"}"#);
        assert_eq!(value["payload"], "14");
    }

    #[test]
    fn test_decode_checksum_error() {
        let request =
            input::parse_request(r#"{"operation":"decode","network":"bitcoin","encoded":"3MNQE1Y"}"#)
                .unwrap();
        let err = dispatch(request).unwrap_err();
        assert!(err.contains("checksum"), "unexpected error: {}", err);
    }

    #[test]
    fn test_get_address() {
        let json = format!(
            r#"{{"operation":"get_address","network":"bitcoin","wif":"{}"}}"#,
            PRIVKEY_ONE_WIF
        );
        let value = handle(&json);
        assert_eq!(value["address"], "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert_eq!(value["compressed"], true);
        assert_eq!(
            value["public_key"],
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_get_address_wrong_network() {
        let json = format!(
            r#"{{"operation":"get_address","network":"testnet","wif":"{}"}}"#,
            PRIVKEY_ONE_WIF
        );
        let request = input::parse_request(&json).unwrap();
        assert!(dispatch(request).unwrap_err().starts_with("Invalid wif"));
    }

    #[test]
    fn test_generate_then_get_address() {
        let generated = handle(r#"{"operation":"generate","network":"testnet"}"#);
        assert_eq!(generated["network"], "bitcoin-test");

        let json = format!(
            r#"{{"operation":"get_address","network":"testnet","wif":{}}}"#,
            generated["wif"]
        );
        let value = handle(&json);
        assert_eq!(value["address"], generated["address"]);
        assert_eq!(value["public_key"], generated["public_key"]);
    }

    #[test]
    fn test_sign_then_verify() {
        let json = format!(
            r#"{{"operation":"sign","network":"bitcoin","wif":"{}","message":"dGVzdCBkYXRh"}}"#,
            PRIVKEY_ONE_WIF
        );
        let signed = handle(&json);

        let json = format!(
            r#"{{"operation":"verify","network":"bitcoin","public_key":"0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798","message":"dGVzdCBkYXRh","signature":{}}}"#,
            signed["signature"]
        );
        assert_eq!(handle(&json)["valid"], true);
    }

    #[test]
    fn test_unknown_network() {
        let request = input::parse_request(r#"{"operation":"generate","network":"dogecoin"}"#).unwrap();
        assert!(dispatch(request).is_err());
    }
}
