// Content-type dispatch for response bodies.
//
// The decoder looks only at the declared `Content-Type`, never at the request
// path or the caller's expectations. Recognized types form a closed enum so
// adding one is a compile-time-visible change in `decode`.

use std::fmt;

use bytes::Bytes;
use serde_json::Value;
use tracing::trace;

use crate::error::Error;
use crate::render;

/// Response content types this client knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `application/json`
    Json,
    /// `text/plain`, any charset
    Text,
    /// `application/octet-stream`
    OctetStream,
    /// `image/png` (served for some files, e.g. `server-icon.png`)
    Png,
}

impl ContentKind {
    /// Classify a raw `Content-Type` header value.
    ///
    /// Parameters after `;` are ignored and the media type is compared
    /// case-insensitively. Anything else is an `UnsupportedContentType` error.
    pub fn parse(header: &str) -> Result<Self, Error> {
        let media_type = header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match media_type.as_str() {
            "application/json" => Ok(Self::Json),
            "text/plain" => Ok(Self::Text),
            "application/octet-stream" => Ok(Self::OctetStream),
            "image/png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedContentType(header.to_owned())),
        }
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
    Bytes(Bytes),
    /// `204 No Content`.
    Empty,
}

impl Payload {
    /// Short label for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Json(_) => "JSON",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Empty => "empty body",
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Take the JSON value, failing if the body was anything else.
    pub fn into_json(self) -> Result<Value, Error> {
        match self {
            Self::Json(value) => Ok(value),
            other => Err(Error::UnexpectedPayload {
                expected: "JSON",
                got: other.kind_name(),
            }),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.write_str(&render::pretty(value).map_err(|_| fmt::Error)?),
            Self::Text(text) => f.write_str(text),
            Self::Bytes(bytes) => f.write_str(&render::bytes_marker(bytes)),
            Self::Empty => Ok(()),
        }
    }
}

/// Decode a response body according to its declared content type.
///
/// `204 No Content` decodes to `Payload::Empty` without consulting headers.
/// A body without a `Content-Type` header is rejected like any unknown type.
pub(crate) async fn decode(resp: reqwest::Response) -> Result<Payload, Error> {
    if resp.status() == reqwest::StatusCode::NO_CONTENT {
        return Ok(Payload::Empty);
    }

    let header = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    let kind = ContentKind::parse(&header)?;
    trace!(?kind, "decoding response body");

    match kind {
        ContentKind::Json => {
            let body = resp.text().await?;
            parse_json(body).map(Payload::Json)
        }
        ContentKind::Text => Ok(Payload::Text(resp.text().await?)),
        ContentKind::OctetStream | ContentKind::Png => Ok(Payload::Bytes(resp.bytes().await?)),
    }
}

/// Parse a JSON body, keeping a preview of it in the error for debugging.
pub(crate) fn parse_json(body: String) -> Result<Value, Error> {
    serde_json::from_str(&body).map_err(|e| deserialization_error(&e, body))
}

pub(crate) fn deserialization_error(err: &serde_json::Error, body: String) -> Error {
    let preview: String = body.chars().take(200).collect();
    Error::Deserialization {
        message: format!("{err} (body preview: {preview:?})"),
        body,
    }
}
