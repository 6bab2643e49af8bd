//! Typed errors for calls to the prediction service
//!
//! Every variant's `Display` is the message shown to the user, so callers can
//! surface `err.to_string()` directly.

use thiserror::Error;

use super::types::ErrorBody;

/// Message used when a failed response carries no usable `detail`
pub const GENERIC_FAILURE: &str = "Analysis failed";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status
    ///
    /// `message` is the body's `detail` verbatim, or [`GENERIC_FAILURE`].
    #[error("{message}")]
    Service {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Connection refused, DNS failure, timeout, broken body stream
    #[error("{0}")]
    Network(String),

    /// A success response whose body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-success response from its raw body
    pub fn from_http_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        ApiError::Service { status, message }
    }

    pub fn from_network_error(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Network(format!("Request timed out: {}", e))
        } else if e.is_connect() {
            ApiError::Network(format!("Could not reach the sentiment service: {}", e))
        } else if e.is_decode() {
            ApiError::Decode(format!("Invalid response from the sentiment service: {}", e))
        } else {
            ApiError::Network(e.to_string())
        }
    }

    pub fn from_decode_error(e: serde_json::Error) -> Self {
        ApiError::Decode(format!("Invalid response from the sentiment service: {}", e))
    }

    /// HTTP status, when the service actually answered
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The service reported its model could not be loaded (HTTP 503)
    pub fn is_unavailable(&self) -> bool {
        matches!(self.status(), Some(s) if s == reqwest::StatusCode::SERVICE_UNAVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_detail_surfaces_verbatim() {
        let err = ApiError::from_http_status(StatusCode::BAD_REQUEST, r#"{"detail":"text too long"}"#);
        assert_eq!(err.to_string(), "text too long");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_missing_detail_falls_back() {
        let err = ApiError::from_http_status(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"x"}"#);
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ApiError::from_http_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), GENERIC_FAILURE);

        let err = ApiError::from_http_status(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_unavailable() {
        let err = ApiError::from_http_status(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"detail":"Sentiment analyzer not available"}"#,
        );
        assert!(err.is_unavailable());
        assert_eq!(err.to_string(), "Sentiment analyzer not available");
    }

    #[test]
    fn test_decode_error_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ApiError::from_decode_error(parse_err);
        assert!(err.to_string().starts_with("Invalid response"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_convert_to_anyhow() {
        let err = ApiError::Network("connection refused".to_string());
        let anyhow_err: anyhow::Error = err.into();
        assert!(anyhow_err.to_string().contains("connection refused"));
    }
}
