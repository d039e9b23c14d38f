//! Error types for the CEX.IO client library.

use serde_json::Value;
use thiserror::Error;

/// The main error type for all CEX.IO client operations.
///
/// Errors reported by the exchange inside a successfully decoded JSON body are
/// not represented here. They are returned to the caller as ordinary data; see
/// [`ApiError::from_response`] for an opt-in way to inspect them.
#[derive(Error, Debug)]
pub enum CexioError {
    /// HTTP request failed before a response was received
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP transport failed: {0}")]
    TransportMiddleware(#[from] reqwest_middleware::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// The exchange answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body was not valid JSON
    #[error("Failed to decode response: {source}. Body: {body}")]
    Decode {
        /// Underlying JSON error
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Request parameters could not be form-encoded
    #[error("Failed to encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// A caller-supplied parameter uses a name reserved for authentication
    #[error("Parameter `{0}` is reserved for request authentication")]
    ParameterCollision(String),

    /// Missing required credentials
    #[error("Missing credentials: username, API key and secret required for private commands")]
    MissingCredentials,
}

impl CexioError {
    /// Map a middleware error, folding request timeouts into [`CexioError::Timeout`].
    pub(crate) fn from_middleware(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => CexioError::Timeout,
            reqwest_middleware::Error::Reqwest(e) => CexioError::Transport(e),
            other => CexioError::TransportMiddleware(other),
        }
    }

    /// Whether the request never produced a usable HTTP exchange
    /// (connection, DNS, timeout or non-2xx status).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CexioError::Transport(_)
                | CexioError::TransportMiddleware(_)
                | CexioError::Timeout
                | CexioError::HttpStatus { .. }
        )
    }

    /// Whether the server replied but the body was not JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, CexioError::Decode { .. })
    }
}

/// An application-level error reported by CEX.IO inside a JSON body.
///
/// CEX.IO answers failed commands with HTTP 200 and a body such as
/// `{"error": "Invalid API key"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The error message from CEX.IO
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract the `error` field from a decoded response, if present.
    pub fn from_response(value: &Value) -> Option<Self> {
        match value.get("error")? {
            Value::String(s) => Some(Self::new(s.clone())),
            Value::Null => None,
            other => Some(Self::new(other.to_string())),
        }
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.message == error_messages::INVALID_NONCE
    }

    /// Check if this is an inactive or unknown API key error.
    pub fn is_invalid_key(&self) -> bool {
        self.message == error_messages::INVALID_API_KEY
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.message == error_messages::INVALID_SIGNATURE
    }

    /// Check if this is a permission denied error.
    pub fn is_permission_denied(&self) -> bool {
        self.message == error_messages::PERMISSION_DENIED
    }
}

/// Known CEX.IO error messages for pattern matching.
pub mod error_messages {
    pub const INVALID_API_KEY: &str = "API key is not activated.";
    pub const INVALID_SIGNATURE: &str = "Invalid Signature";
    pub const INVALID_NONCE: &str = "Nonce must be incremented";
    pub const PERMISSION_DENIED: &str = "Permission denied";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_from_response() {
        let body = json!({ "error": "Nonce must be incremented" });
        let error = ApiError::from_response(&body).unwrap();
        assert_eq!(error.message, error_messages::INVALID_NONCE);
        assert!(error.is_invalid_nonce());
        assert!(!error.is_invalid_key());
    }

    #[test]
    fn test_api_error_absent_on_success() {
        let body = json!({ "timestamp": "1513177918", "BTC": { "available": "1.0" } });
        assert!(ApiError::from_response(&body).is_none());
        assert!(ApiError::from_response(&json!({ "error": null })).is_none());
        assert!(ApiError::from_response(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(error_messages::PERMISSION_DENIED);
        assert_eq!(error.to_string(), "Permission denied");
        assert!(error.is_permission_denied());
    }

    #[test]
    fn test_api_error_predicates_match_known_messages() {
        assert!(ApiError::new(error_messages::INVALID_API_KEY).is_invalid_key());
        assert!(ApiError::new(error_messages::INVALID_SIGNATURE).is_invalid_signature());
        assert!(!ApiError::new(error_messages::INVALID_SIGNATURE).is_invalid_key());
        assert!(!ApiError::new("Invalid amount").is_invalid_nonce());
    }

    #[test]
    fn test_error_kinds() {
        let decode = CexioError::Decode {
            source: serde_json::from_str::<Value>("<html>").unwrap_err(),
            body: "<html>".to_string(),
        };
        assert!(decode.is_decode());
        assert!(!decode.is_transport());

        let status = CexioError::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert!(status.is_transport());
        assert!(!status.is_decode());
        assert!(CexioError::Timeout.is_transport());
        assert!(!CexioError::ParameterCollision("nonce".into()).is_transport());
    }
}
