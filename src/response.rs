//! Successful responses returned by [`Client::send`](crate::Client::send).

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::DecodingError;

/// A 2xx response with its body already read and decompressed.
#[derive(Debug, Clone)]
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
}

impl Response {
    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers as received, including `Content-Encoding`.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Decoded body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Take ownership of the decoded body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| DecodingError::Json(e).into())
    }
}
