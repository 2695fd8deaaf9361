//! Paylink HTTP client implementation.

use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Url};
use tracing::{debug, instrument, warn};

use crate::call::{CallArg, CallParts, Endpoint};
use crate::config::{ClientOptions, Credentials};
use crate::error::ClientError;
use crate::response::{CallResponse, CallStatus};

/// Paylink API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PaylinkClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl PaylinkClient {
    /// Create a client with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are blank, the host is not a valid
    /// URL, or the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_options(credentials, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Same as [`PaylinkClient::new`].
    pub fn with_options(
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let credentials = credentials.validate()?;

        let host = credentials.host.trim_end_matches('/');
        let base_url = Url::parse(host)
            .map_err(|e| ClientError::Configuration(format!("invalid host {host}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "host {host} cannot be a base URL"
            )));
        }

        let user_agent = HeaderValue::try_from(options.user_agent.as_str())
            .map_err(|e| ClientError::InvalidHeader(format!("{USER_AGENT}: {e}")))?;
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Create a client from credentials found in the environment.
    ///
    /// # Errors
    ///
    /// See [`Credentials::from_env`] and [`PaylinkClient::new`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(Credentials::from_env()?)
    }

    /// The API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send one request and read its response.
    ///
    /// The response is returned whatever its status; callers classify it with
    /// one of the [`CallResponse`] dispatch helpers.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built or the request fails in transit.
    #[instrument(
        skip(self, endpoint, args),
        fields(method = %endpoint.method(), path = %endpoint.path())
    )]
    pub async fn call_http(
        &self,
        endpoint: &Endpoint,
        args: impl IntoIterator<Item = CallArg>,
    ) -> Result<CallResponse, ClientError> {
        let url = endpoint.url(&self.base_url)?;
        let parts = CallParts::from_args(args);

        let mut request = self
            .client
            .request(endpoint.method().clone(), url)
            .basic_auth(
                &self.credentials.public_key,
                Some(&self.credentials.secret_key),
            )
            .headers(parts.headers);
        if !parts.query.is_empty() {
            request = request.query(&parts.query);
        }
        if let Some(body) = parts.body {
            request = request.json(&body);
        }

        let response = CallResponse::read(request.send().await?).await?;

        match response.status {
            CallStatus::RateLimited => {
                warn!(request_id = ?response.request_id, "Paylink rate limit hit");
            }
            CallStatus::ServerError => {
                warn!(
                    status = response.http_status,
                    request_id = ?response.request_id,
                    "Paylink server error"
                );
            }
            status => {
                debug!(?status, http_status = response.http_status, "Paylink call finished");
            }
        }

        Ok(response)
    }

    /// Check that the API is reachable and the credentials are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn ping(&self) -> Result<(), ClientError> {
        let endpoint = Endpoint::new(Method::GET, "/ping", &[])?;
        self.call_http(&endpoint, [CallArg::AcceptJson])
            .await?
            .completed_nil()
    }
}
