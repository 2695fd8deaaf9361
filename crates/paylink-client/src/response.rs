//! Response classification and dispatch.
//!
//! Every call produces a [`CallResponse`]. Endpoints then pick the dispatch
//! helper matching what they expect back: a single object, a list, nothing, or
//! either a finished object or an acknowledgement that work was started.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, ErrorResponse};

/// Response header carrying the API's request id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// How the API answered a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallStatus {
    /// The operation finished (200, 201, 204).
    Completed,
    /// The operation was accepted and continues asynchronously (202).
    Started,
    /// 400.
    BadRequest,
    /// 401.
    Unauthorized,
    /// 403.
    Forbidden,
    /// 404.
    NotFound,
    /// The resource exists or is in a state that forbids the call (409).
    StateConflict,
    /// Field validation failed (422).
    FailedValidation,
    /// 429.
    RateLimited,
    /// Any 5xx.
    ServerError,
    /// Anything else.
    Unexpected,
}

impl CallStatus {
    /// Classify an HTTP status code.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            200 | 201 | 204 => Self::Completed,
            202 => Self::Started,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::StateConflict,
            422 => Self::FailedValidation,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Unexpected,
        }
    }

    /// Whether the call succeeded, finished or not.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Completed | Self::Started)
    }
}

/// Result of an operation that may finish synchronously or in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncOutcome<T, S> {
    /// The API finished the operation and returned the full resource.
    Completed(T),
    /// The API accepted the operation; `S` identifies the work in progress.
    Started(S),
}

impl<T, S> AsyncOutcome<T, S> {
    /// The finished resource, if the operation completed.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(t) => Some(t),
            Self::Started(_) => None,
        }
    }

    /// Whether the operation is still running.
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Error body shapes the API uses.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Message { error: String },
    Fields(serde_json::Map<String, serde_json::Value>),
}

/// A received response with its body read into memory.
#[derive(Debug, Clone)]
pub struct CallResponse {
    /// Classified status.
    pub status: CallStatus,
    /// Raw HTTP status code.
    pub http_status: u16,
    /// Value of the `X-Request-Id` header.
    pub request_id: Option<String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl CallResponse {
    /// Read a response off the wire.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read.
    pub async fn read(response: reqwest::Response) -> Result<Self, ClientError> {
        let http_status = response.status().as_u16();
        let request_id = response
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status: CallStatus::from_code(http_status),
            http_status,
            request_id,
            body,
        })
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    fn is_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Convert this response into the typed error for its status.
    #[must_use]
    pub fn into_error(self) -> ClientError {
        let mut fields = serde_json::Map::new();
        let message = match serde_json::from_slice::<ErrorBody>(&self.body) {
            Ok(ErrorBody::Message { error }) => error,
            Ok(ErrorBody::Fields(map))
                if self.status == CallStatus::FailedValidation && !map.is_empty() =>
            {
                let message = map.keys().cloned().collect::<Vec<_>>().join(", ");
                fields = map;
                format!("invalid fields: {message}")
            }
            _ => format!("HTTP {}", self.http_status),
        };

        let response = ErrorResponse {
            status: self.http_status,
            message,
            request_id: self.request_id,
        };

        match self.status {
            CallStatus::BadRequest => ClientError::BadRequest(response),
            CallStatus::Unauthorized => ClientError::Unauthorized(response),
            CallStatus::Forbidden => ClientError::Forbidden(response),
            CallStatus::NotFound => ClientError::NotFound(response),
            CallStatus::StateConflict => ClientError::Conflict(response),
            CallStatus::FailedValidation => ClientError::Validation { response, fields },
            CallStatus::RateLimited => ClientError::RateLimited(response),
            CallStatus::ServerError => ClientError::Server(response),
            CallStatus::Completed | CallStatus::Started | CallStatus::Unexpected => {
                ClientError::UnexpectedStatus(response)
            }
        }
    }

    /// Expect a completed call returning one object.
    ///
    /// # Errors
    ///
    /// Returns the typed error for any other status, or a decode error.
    pub fn completed_object<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        match self.status {
            CallStatus::Completed => self.json(),
            _ => Err(self.into_error()),
        }
    }

    /// Expect a completed call returning a list. A blank or `null` body is an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns the typed error for any other status, or a decode error.
    pub fn completed_list<T: DeserializeOwned>(self) -> Result<Vec<T>, ClientError> {
        match self.status {
            CallStatus::Completed if self.is_blank() => Ok(Vec::new()),
            CallStatus::Completed => {
                let items: Option<Vec<T>> = self.json()?;
                Ok(items.unwrap_or_default())
            }
            _ => Err(self.into_error()),
        }
    }

    /// Expect a successful call whose body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the typed error for a non-success status.
    pub fn completed_nil(self) -> Result<(), ClientError> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    /// Expect either a completed object or an acknowledgement of started work.
    ///
    /// # Errors
    ///
    /// Returns the typed error for a non-success status, or a decode error.
    pub fn completed_or_started<T, S>(self) -> Result<AsyncOutcome<T, S>, ClientError>
    where
        T: DeserializeOwned,
        S: DeserializeOwned,
    {
        match self.status {
            CallStatus::Completed => self.json().map(AsyncOutcome::Completed),
            CallStatus::Started => self.json().map(AsyncOutcome::Started),
            _ => Err(self.into_error()),
        }
    }
}
