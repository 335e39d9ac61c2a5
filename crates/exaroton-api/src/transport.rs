// Transport configuration for building the authenticated reqwest::Client.
//
// The bearer token is installed once as a sensitive default header, so every
// request the client sends carries it without per-call plumbing.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.exaroton.com/v1";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("exaroton-api/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a `reqwest::Client` with additional default headers.
    pub fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }

    /// Build a `reqwest::Client` that authenticates every request with
    /// `Authorization: Bearer <token>`.
    pub fn build_authenticated_client(&self, token: &SecretString) -> Result<reqwest::Client, Error> {
        self.build_client_with_headers(bearer_headers(token)?)
    }
}

/// Header map carrying the bearer token, marked sensitive so it never shows
/// up in debug output.
pub(crate) fn bearer_headers(token: &SecretString) -> Result<HeaderMap, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::InvalidToken(format!("invalid header value: {e}")))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
