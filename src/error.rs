//! Error types returned by the Email Hunter client.

use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// Every variant is terminal for the call that produced it; the client never
/// retries on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// The client is missing an API key, was given an unusable base URL or proxy,
    /// or its HTTP client could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required endpoint parameter was missing, or the request path was invalid.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The request used an HTTP method other than GET, POST, PUT, PATCH or DELETE.
    #[error("method not supported: {0}")]
    UnsupportedMethod(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The HTTP round-trip itself failed (DNS, connect, timeout, body read).
    ///
    /// The wrapped error never carries the request URL, which holds the API key.
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body could not be decompressed or decoded.
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// The service answered with a non-success status.
    #[error("HTTP status {status}: {kind}")]
    Api {
        /// Raw HTTP status code.
        status: u16,
        /// Classification of the status code.
        kind: ApiErrorKind,
    },
}

impl Error {
    /// Returns the HTTP status code when the error came from the service.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures while turning response bytes into values.
#[derive(Debug, Error)]
pub enum DecodingError {
    /// The body was marked `Content-Encoding: gzip` but did not decompress.
    #[error("failed to decompress response body: {0}")]
    Gzip(#[source] std::io::Error),

    /// The body was not the JSON shape the endpoint returns.
    #[error("failed to decode response JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// A date field did not match `YYYY-MM-DD`.
    #[error("invalid date {input:?}: {source}")]
    Date {
        /// The text that failed to parse, quotes stripped.
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Classification of a non-success HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 401: the API key was missing or rejected.
    Unauthorized,
    /// 429: the plan's usage limit has been reached.
    UsageLimitReached,
    /// 5xx: the service failed.
    Server,
    /// Any other status.
    Unknown,
}

impl ApiErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::UsageLimitReached,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description of the failure.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unauthorized => "no valid API key provided",
            Self::UsageLimitReached => "usage limit reached, upgrade plan",
            Self::Server => "error on the service's end",
            Self::Unknown => "unknown error",
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
