//! Error types for the Vocode client.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for Vocode operations.
pub type Result<T> = std::result::Result<T, VocodeError>;

/// Errors that can occur when using the Vocode client.
#[derive(Debug, Error)]
pub enum VocodeError {
    /// Configuration error (missing API key, invalid settings, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Structured error returned by the API (400/403 responses).
    #[error("API error [{status}]: {error}")]
    Api { status: u16, error: ApiErrorBody },

    /// The API rejected the request due to rate limiting (429).
    #[error("Rate limited")]
    RateLimited,

    /// The API could not process the request entity (422).
    #[error("Unprocessable entity")]
    UnprocessableEntity,

    /// Any other non-success status.
    #[error("Unexpected status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Failed to decode a request or response body.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body returned by the API on 400/403 responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: ApiErrorDetail,
}

/// The `detail` field is either a plain message or a list of parameter
/// violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    /// A single human-readable message.
    Message(String),
    /// Per-parameter validation failures.
    Params(Vec<ParamViolation>),
}

/// A single invalid-parameter entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamViolation {
    /// Location of the offending parameter in the request.
    #[serde(default)]
    pub loc: Vec<String>,
    /// Violation message.
    pub msg: String,
    /// Violation type tag.
    #[serde(rename = "type")]
    pub kind: String,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            ApiErrorDetail::Message(msg) => f.write_str(msg),
            ApiErrorDetail::Params(params) => {
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}: {}", param.loc.join("."), param.msg)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_detail() {
        let body = r#"{"detail":"Invalid API key"}"#;
        let error: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(
            error.detail,
            ApiErrorDetail::Message("Invalid API key".to_string())
        );
        assert_eq!(error.to_string(), "Invalid API key");
    }

    #[test]
    fn test_parse_param_detail() {
        let body = r#"{"detail":[{"loc":["body","voice_name"],"msg":"field required","type":"value_error.missing"}]}"#;
        let error: ApiErrorBody = serde_json::from_str(body).unwrap();
        let ApiErrorDetail::Params(params) = &error.detail else {
            panic!("expected parameter violations");
        };
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].msg, "field required");
        assert_eq!(error.to_string(), "body.voice_name: field required");
    }
}
