use thiserror::Error;

/// Top-level error type for the `exaroton-api` crate.
///
/// Every client operation returns this. Nothing is recovered internally:
/// transport, HTTP status, content-type, and payload-shape failures all
/// surface here with enough context to tell them apart.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The API rejected the bearer token (HTTP 401/403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The token could not be encoded as an HTTP header value.
    #[error("Invalid API token: {0}")]
    InvalidToken(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A path argument (server id, list name, file path) cannot be sent as given.
    #[error("Invalid path segment {segment:?}: {reason}")]
    InvalidPath {
        segment: String,
        reason: &'static str,
    },

    // ── Remote API ──────────────────────────────────────────────────
    /// Non-2xx response other than an auth failure.
    ///
    /// `message` is taken from the envelope's `error` field when the body
    /// carries one, otherwise from the raw body or the status text.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// The response declared a content type this client does not decode.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// A JSON payload was required but the response decoded to something else.
    #[error("Unexpected payload: expected {expected}, got {got}")]
    UnexpectedPayload {
        expected: &'static str,
        got: &'static str,
    },

    /// The `{ "data": ... }` envelope (or a field inside it) was missing or null.
    #[error("Response is missing `{key}`")]
    MissingEnvelope { key: &'static str },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Client ──────────────────────────────────────────────────────
    /// Operation deliberately not implemented by this client.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl Error {
    /// Returns `true` if the token was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::InvalidToken(_))
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
