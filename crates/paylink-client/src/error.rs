//! Client error types.

use std::fmt;

use crate::response::CallStatus;

/// Details the API returned alongside a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the body, or `HTTP <status>` when there was none.
    pub message: String,
    /// Value of the `X-Request-Id` response header, for support tickets.
    pub request_id: Option<String>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {}", self.message, self.status)?;
        if let Some(ref id) = self.request_id {
            write!(f, ", request_id: {id}")?;
        }
        write!(f, ")")
    }
}

/// Errors that can occur when using the Paylink client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be encoded or a response body decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Public or secret key is missing.
    #[error("API credentials are not set")]
    CredentialsNotSet,

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Path template and arguments do not line up.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The request was malformed (400).
    #[error("bad request: {0}")]
    BadRequest(ErrorResponse),

    /// Credentials were rejected (401).
    #[error("unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    /// Credentials lack access to the resource (403).
    #[error("forbidden: {0}")]
    Forbidden(ErrorResponse),

    /// The resource does not exist (404).
    #[error("not found: {0}")]
    NotFound(ErrorResponse),

    /// The resource already exists or is in a conflicting state (409).
    #[error("conflict: {0}")]
    Conflict(ErrorResponse),

    /// Field-level validation failed (422).
    #[error("validation failed: {response}")]
    Validation {
        /// Status and summary message.
        response: ErrorResponse,
        /// Per-field errors as returned by the API.
        fields: serde_json::Map<String, serde_json::Value>,
    },

    /// Too many requests (429).
    #[error("rate limited: {0}")]
    RateLimited(ErrorResponse),

    /// The API failed to process the request (5xx).
    #[error("server error: {0}")]
    Server(ErrorResponse),

    /// A status code the endpoint does not expect.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(ErrorResponse),
}

impl ClientError {
    /// The API's error details, if this error came from a response.
    #[must_use]
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::BadRequest(r)
            | Self::Unauthorized(r)
            | Self::Forbidden(r)
            | Self::NotFound(r)
            | Self::Conflict(r)
            | Self::RateLimited(r)
            | Self::Server(r)
            | Self::UnexpectedStatus(r)
            | Self::Validation { response: r, .. } => Some(r),
            Self::Http(_)
            | Self::Serialization(_)
            | Self::CredentialsNotSet
            | Self::Configuration(_)
            | Self::InvalidEndpoint(_)
            | Self::InvalidHeader(_) => None,
        }
    }

    /// HTTP status code, if this error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response()
            .map(|r| r.status)
            .or_else(|| match self {
                Self::Http(e) => e.status().map(|s| s.as_u16()),
                _ => None,
            })
    }

    /// Classification of the failing response, if there was one.
    #[must_use]
    pub fn call_status(&self) -> Option<CallStatus> {
        self.status().map(CallStatus::from_code)
    }

    /// Whether the resource was not found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether the call conflicted with existing state.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Whether the call was rejected for rate limiting.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> ErrorResponse {
        ErrorResponse {
            status,
            message: "boom".into(),
            request_id: Some("req-1".into()),
        }
    }

    #[test]
    fn display_includes_status_and_request_id() {
        let err = ClientError::NotFound(response(404));
        assert_eq!(err.to_string(), "not found: boom (HTTP 404, request_id: req-1)");
    }

    #[test]
    fn status_and_call_status() {
        let err = ClientError::Conflict(response(409));
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.call_status(), Some(CallStatus::StateConflict));
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn local_errors_have_no_status() {
        let err = ClientError::CredentialsNotSet;
        assert_eq!(err.status(), None);
        assert_eq!(err.call_status(), None);
        assert!(err.response().is_none());
    }

    #[test]
    fn validation_exposes_fields() {
        let mut fields = serde_json::Map::new();
        fields.insert("amount".into(), serde_json::json!("must be positive"));
        let err = ClientError::Validation {
            response: response(422),
            fields,
        };
        assert_eq!(err.call_status(), Some(CallStatus::FailedValidation));
        assert!(matches!(
            &err,
            ClientError::Validation { fields, .. } if fields.contains_key("amount")
        ));
    }
}
