//! Input parsing for the keystore worker.
//!
//! One JSON object per run. `operation` selects the request shape; every
//! request may also name a `network`.

use serde::Deserialize;

/// Parsed worker input.
#[derive(Debug, Deserialize)]
pub struct WorkerRequest {
    #[serde(default)]
    pub network: Option<String>,
    #[serde(flatten)]
    pub operation: Operation,
}

/// Operations the worker can perform.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    /// Base58check-encode a hex payload.
    Encode { payload: String },
    /// Base58check-decode to a hex payload.
    Decode { encoded: String },
    /// Create a new random key.
    Generate,
    /// Address and public key of a WIF key.
    GetAddress { wif: String },
    /// Sign a base64 message with a WIF key.
    Sign { wif: String, message: String },
    /// Check a hex DER signature over a base64 message.
    Verify {
        public_key: String,
        message: String,
        signature: String,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Encode { .. } => "encode",
            Operation::Decode { .. } => "decode",
            Operation::Generate => "generate",
            Operation::GetAddress { .. } => "get_address",
            Operation::Sign { .. } => "sign",
            Operation::Verify { .. } => "verify",
        }
    }
}

/// Parse input JSON from stdin into a WorkerRequest.
pub fn parse_request(input_str: &str) -> Result<WorkerRequest, String> {
    serde_json::from_str(input_str).map_err(|e| format!("Invalid input JSON: {}", e))
}

/// Decode a base64 message field.
pub fn decode_message(message: &str) -> Result<Vec<u8>, String> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(message)
        .map_err(|e| format!("Invalid base64 message: {}", e))
}

/// Decode a hex field, naming it in the error.
pub fn decode_hex(field: &str, value: &str) -> Result<Vec<u8>, String> {
    hex::decode(value).map_err(|e| format!("Invalid hex in {}: {}", field, e))
}
