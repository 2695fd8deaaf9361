//! Request building.
//!
//! An [`Endpoint`] names the method and path of a call; a list of [`CallArg`]s
//! supplies everything else (body, query, headers). Arguments are applied in
//! order, so a later header replaces an earlier one with the same name while
//! query parameters accumulate.

use std::fmt;

use paylink_core::IdempotencyKey;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Method, Url};
use serde::Serialize;

use crate::error::ClientError;

/// Header asking the API to hold the response until the rail answers.
pub const X_WAIT_FOR: &str = "x-wait-for";

/// Header carrying the client-generated idempotency key.
pub const X_IDEMPOTENCY_KEY: &str = "x-idempotency-key";

/// Placeholder for a path argument in endpoint templates.
const PLACEHOLDER: &str = "{}";

/// Method plus a resolved path, split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    segments: Vec<String>,
}

impl Endpoint {
    /// Resolve a path template such as `/accounts/{}/cards/{}`.
    ///
    /// Each `{}` segment is replaced by the next argument. Arguments are kept
    /// whole and percent-encoded as a single path segment when the URL is built.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if the number of placeholders and
    /// arguments differ.
    pub fn new(
        method: Method,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<Self, ClientError> {
        let mut args = args.iter();
        let mut segments = Vec::new();

        for segment in template.split('/').filter(|s| !s.is_empty()) {
            if segment == PLACEHOLDER {
                let arg = args.next().ok_or_else(|| {
                    ClientError::InvalidEndpoint(format!("missing argument for {template}"))
                })?;
                segments.push(arg.to_string());
            } else {
                segments.push(segment.to_string());
            }
        }

        if args.next().is_some() {
            return Err(ClientError::InvalidEndpoint(format!(
                "too many arguments for {template}"
            )));
        }

        Ok(Self { method, segments })
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The unencoded path, for logging.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Join this endpoint's path onto `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `base` cannot carry a path.
    pub fn url(&self, base: &Url) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Configuration(format!("host {base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

/// Values accepted by the `X-Wait-For` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitFor {
    /// Block until the payment rail returns its response.
    RailResponse,
}

impl WaitFor {
    /// Header value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RailResponse => "rail-response",
        }
    }
}

/// A single option applied to an outgoing call.
#[derive(Debug, Clone)]
pub enum CallArg {
    /// Ask for a JSON response.
    AcceptJson,
    /// Send this JSON document as the body.
    JsonBody(serde_json::Value),
    /// Append a query parameter.
    Query(String, String),
    /// Hold the response until the given event.
    WaitFor(WaitFor),
    /// Tag the request with an idempotency key.
    IdempotencyKey(IdempotencyKey),
    /// Set an arbitrary header.
    Header(HeaderName, HeaderValue),
}

impl CallArg {
    /// Serialize `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn json_body<T: Serialize + ?Sized>(body: &T) -> Result<Self, ClientError> {
        Ok(Self::JsonBody(serde_json::to_value(body)?))
    }

    /// A single query parameter.
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Query(name.into(), value.into())
    }

    /// One query parameter per pair, as rendered by the list filters.
    pub fn queries<I, K>(params: I) -> impl Iterator<Item = Self>
    where
        I: IntoIterator<Item = (K, String)>,
        K: Into<String>,
    {
        params.into_iter().map(|(k, v)| Self::Query(k.into(), v))
    }

    /// An arbitrary header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`] if the name or value is not valid HTTP.
    pub fn header(name: &str, value: &str) -> Result<Self, ClientError> {
        let name = HeaderName::try_from(name)
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
        Ok(Self::Header(name, value))
    }
}

/// The pieces of a request gathered from its [`CallArg`]s.
#[derive(Debug, Default)]
pub(crate) struct CallParts {
    pub(crate) headers: HeaderMap,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
}

impl CallParts {
    pub(crate) fn from_args(args: impl IntoIterator<Item = CallArg>) -> Self {
        let mut parts = Self::default();
        for arg in args {
            parts.apply(arg);
        }
        parts
    }

    fn apply(&mut self, arg: CallArg) {
        match arg {
            CallArg::AcceptJson => {
                self.headers
                    .insert(ACCEPT, HeaderValue::from_static("application/json"));
            }
            CallArg::JsonBody(body) => self.body = Some(body),
            CallArg::Query(name, value) => self.query.push((name, value)),
            CallArg::WaitFor(wait_for) => {
                self.headers.insert(
                    HeaderName::from_static(X_WAIT_FOR),
                    HeaderValue::from_static(wait_for.as_str()),
                );
            }
            CallArg::IdempotencyKey(key) => {
                // A hyphenated UUID is always a valid header value.
                if let Ok(value) = HeaderValue::try_from(key.to_string()) {
                    self.headers
                        .insert(HeaderName::from_static(X_IDEMPOTENCY_KEY), value);
                }
            }
            CallArg::Header(name, value) => {
                self.headers.insert(name, value);
            }
        }
    }
}
