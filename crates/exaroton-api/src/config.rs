//! Client configuration.
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `EXAROTON_*` environment variables. The token is resolved separately so it
//! can live in a named environment variable instead of the file.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::ExarotonClient;
use crate::transport::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, TransportConfig};

/// Environment variable consulted when no `token_env` is configured.
pub const TOKEN_ENV: &str = "EXAROTON_TOKEN";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API token configured (set `token`, `token_env`, or EXAROTON_TOKEN)")]
    NoToken,

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error(transparent)]
    Client(#[from] crate::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// API base URL.
    #[serde(default = "default_host")]
    pub host: String,

    /// API token in plaintext. Prefer `token_env`.
    #[serde(default)]
    pub token: Option<String>,

    /// Name of an environment variable holding the token.
    #[serde(default)]
    pub token_env: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: None,
            token_env: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_host() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

impl ClientConfig {
    /// Load from an optional TOML file plus `EXAROTON_*` environment variables.
    ///
    /// A missing file is not an error; the defaults and environment still apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let figment = figment.merge(Env::prefixed("EXAROTON_"));
        Ok(figment.extract()?)
    }

    /// Load from TOML text on top of the defaults. No environment lookup.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        Ok(config)
    }

    /// Resolve the API token.
    ///
    /// Order: the variable named by `token_env`, then `EXAROTON_TOKEN`, then
    /// the plaintext `token`.
    pub fn resolve_token(&self) -> Result<SecretString, ConfigError> {
        if let Some(ref env_name) = self.token_env {
            if let Ok(val) = std::env::var(env_name) {
                return Ok(SecretString::from(val));
            }
        }

        if let Ok(val) = std::env::var(TOKEN_ENV) {
            return Ok(SecretString::from(val));
        }

        if let Some(ref token) = self.token {
            return Ok(SecretString::from(token.clone()));
        }

        Err(ConfigError::NoToken)
    }

    /// Transport settings derived from this config.
    pub fn transport(&self) -> Result<TransportConfig, ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(TransportConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_user_agent(self.user_agent.clone()))
    }
}

impl ExarotonClient {
    /// Build a client from a loaded `ClientConfig`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        url::Url::parse(&config.host).map_err(|e| ConfigError::Validation {
            field: "host".into(),
            reason: format!("invalid URL {}: {e}", config.host),
        })?;
        let token = config.resolve_token()?;
        let transport = config.transport()?;
        Ok(Self::with_base_url(&token, &config.host, &transport)?)
    }
}
