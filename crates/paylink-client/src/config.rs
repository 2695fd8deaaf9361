//! Credentials and client options.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::ClientError;

/// Production API host.
pub const DEFAULT_HOST: &str = "https://api.paylink.io";

/// Env var naming an explicit secrets file.
const SECRETS_FILE_VAR: &str = "PAYLINK_SECRETS_FILE";

const SECRET_PATHS: [&str; 2] = [".secrets/paylink.json", "../.secrets/paylink.json"];

/// API key pair plus the host it is valid for.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Public key, sent as the basic-auth user.
    pub public_key: String,
    /// Secret key, sent as the basic-auth password.
    pub secret_key: String,
    /// Base URL of the API.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

impl Credentials {
    /// Credentials for the production host.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            host: default_host(),
        }
    }

    /// Point the credentials at another host, such as a mock server.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Load credentials from a secrets file or the environment.
    ///
    /// A file named by `PAYLINK_SECRETS_FILE` must load. Otherwise
    /// `.secrets/paylink.json` and `../.secrets/paylink.json` are tried, and
    /// without either `PAYLINK_PUBLIC_KEY`, `PAYLINK_SECRET_KEY` and
    /// `PAYLINK_HOST` are read.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `PAYLINK_SECRETS_FILE` is set
    /// but unreadable, or [`ClientError::CredentialsNotSet`] if no keys are found.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        if let Some(path) = var(SECRETS_FILE_VAR) {
            let credentials = Self::from_file(&path)?;
            tracing::info!(path = %path, "Loaded Paylink credentials from file");
            return credentials.validate();
        }

        for path in SECRET_PATHS {
            if let Ok(credentials) = Self::from_file(path) {
                tracing::info!(path = %path, "Loaded Paylink credentials from file");
                return credentials.validate();
            }
        }

        tracing::debug!("Paylink secrets file not found, using environment variables");
        let credentials = Self {
            public_key: var("PAYLINK_PUBLIC_KEY").unwrap_or_default(),
            secret_key: var("PAYLINK_SECRET_KEY").unwrap_or_default(),
            host: var("PAYLINK_HOST").unwrap_or_else(default_host),
        };
        credentials.validate()
    }

    /// Load credentials from a JSON file with `public_key`, `secret_key` and
    /// an optional `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Configuration(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| ClientError::Configuration(format!("{}: {e}", path.display())))
    }

    /// Reject credentials with an empty key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::CredentialsNotSet`] if either key is blank.
    pub fn validate(self) -> Result<Self, ClientError> {
        if self.public_key.trim().is_empty() || self.secret_key.trim().is_empty() {
            return Err(ClientError::CredentialsNotSet);
        }
        Ok(self)
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout (default: 30 seconds).
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("paylink-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Options with a custom timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}
