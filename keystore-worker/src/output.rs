//! Output formatting for the keystore worker.
//!
//! Every response is one compact JSON object with `success` and `operation`.

use serde::Serialize;

/// Success envelope; `body` fields are inlined.
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    pub operation: &'static str,
    pub network: &'static str,
    #[serde(flatten)]
    pub body: T,
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub success: bool,
    pub operation: &'a str,
    pub error: &'a str,
}

#[derive(Serialize)]
pub struct EncodeBody {
    pub encoded: String,
}

#[derive(Serialize)]
pub struct DecodeBody {
    pub payload: String,
}

#[derive(Serialize)]
pub struct GenerateBody {
    pub wif: String,
    pub address: String,
    pub public_key: String,
}

#[derive(Serialize)]
pub struct AddressBody {
    pub address: String,
    pub public_key: String,
    pub compressed: bool,
}

#[derive(Serialize)]
pub struct SignBody {
    pub digest: String,
    pub signature: String,
}

#[derive(Serialize)]
pub struct VerifyBody {
    pub valid: bool,
}

/// Format a success response as JSON.
pub fn success_response<T: Serialize>(operation: &'static str, network: &'static str, body: T) -> String {
    let response = SuccessResponse {
        success: true,
        operation,
        network,
        body,
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        error_response(operation, &format!("Failed to serialize response: {}", e))
    })
}

/// Format an error response as JSON.
pub fn error_response(operation: &str, error: &str) -> String {
    let response = ErrorResponse {
        success: false,
        operation,
        error,
    };

    serde_json::to_string(&response).unwrap_or_else(|_| {
        format!(
            r#"{{"success":false,"operation":"{}","error":"{}"}}"#,
            operation.replace('"', "'"),
            error.replace('"', "'")
        )
    })
}
