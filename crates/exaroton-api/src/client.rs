// exaroton API HTTP client
//
// Wraps `reqwest::Client` with URL construction, content-type dispatch, and
// `data` envelope unwrapping. Endpoint groups (servers, players, files,
// billing) are implemented as inherent methods in separate files to keep this
// module focused on transport mechanics.

use reqwest::{Method, StatusCode};
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::ErrorEnvelope;
use crate::payload::{self, Payload};
use crate::transport::{DEFAULT_BASE_URL, TransportConfig};

/// Async client for the exaroton API.
///
/// Every request carries `Authorization: Bearer <token>`. Each public method
/// issues exactly one request; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ExarotonClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ExarotonClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Client for the production API with default transport settings.
    ///
    /// No network call is made.
    pub fn new(token: &SecretString) -> Result<Self, Error> {
        Self::with_base_url(token, DEFAULT_BASE_URL, &TransportConfig::default())
    }

    /// Client for a custom API host (e.g. a staging endpoint).
    pub fn with_base_url(
        token: &SecretString,
        base_url: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_authenticated_client(token)?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and make sure it can take path segments.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(url)
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// Empty, `.` and `..` segments are rejected: the first would address the
    /// parent collection, the others are dropped by URL normalization.
    pub(crate) fn url<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url, Error> {
        for segment in segments.iter().map(AsRef::as_ref) {
            check_segment(segment)?;
        }
        let mut url = self.base_url.clone();
        // `normalize_base_url` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments.iter().map(AsRef::as_ref));
        }
        Ok(url)
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Send one request and decode the body by its declared content type.
    ///
    /// Non-2xx responses never reach the decoder; they are mapped to
    /// `Error::Authentication` or `Error::Api`.
    pub(crate) async fn request<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Payload, Error> {
        debug!("{method} {url}");

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = builder.send().await?;

        let status = resp.status();
        if status.is_success() {
            payload::decode(resp).await
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let raw = match resp.text().await {
            Ok(raw) => raw,
            Err(e) => {
                debug!(%status, error = %e, "failed to read error response body");
                String::new()
            }
        };
        let message = serde_json::from_str::<ErrorEnvelope>(&raw)
            .ok()
            .and_then(|env| env.error)
            .or_else(|| (!raw.trim().is_empty()).then(|| raw.clone()))
            .unwrap_or_else(|| status.to_string());

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            Error::Authentication { message }
        } else {
            Error::Api {
                status: status.as_u16(),
                message,
            }
        }
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a request and hand back the raw payload, whatever its type.
    pub(crate) async fn send_raw(&self, method: Method, url: Url) -> Result<Payload, Error> {
        self.request::<Value>(method, url, None).await
    }

    /// Send a request and deserialize the unwrapped `data` field.
    pub(crate) async fn send_data<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, Error> {
        let value = self.request(method, url, body).await?.into_json()?;
        from_data(unwrap_data(value)?)
    }

    /// `GET` and deserialize `data`.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        self.send_data::<T, Value>(Method::GET, url, None).await
    }
}

fn check_segment(segment: &str) -> Result<(), Error> {
    let reason = match segment {
        "" => "must not be empty",
        "." | ".." => "relative segments are not allowed",
        _ => return Ok(()),
    };
    Err(Error::InvalidPath {
        segment: segment.to_owned(),
        reason,
    })
}

// ── Envelope unwrapping ──────────────────────────────────────────────

/// Take `data` out of `{ "success": .., "error": .., "data": .. }`.
///
/// A missing or `null` `data` is an error rather than a silent default.
pub(crate) fn unwrap_data(value: Value) -> Result<Value, Error> {
    take_field(value, "data")
}

/// Take a required, non-null field out of a JSON object.
pub(crate) fn take_field(value: Value, key: &'static str) -> Result<Value, Error> {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Null) | None => Err(Error::MissingEnvelope { key }),
            Some(inner) => Ok(inner),
        },
        _ => Err(Error::MissingEnvelope { key }),
    }
}

/// Deserialize an already-unwrapped payload into a typed value.
pub(crate) fn from_data<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value::<T>(value.clone()).map_err(|e| {
        payload::deserialization_error(&e, value.to_string())
    })
}
