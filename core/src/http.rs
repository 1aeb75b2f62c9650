//! HTTP request and response types, and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient` builds an `HttpRequest`
//! without touching the network and hands it to an `HttpTransport`, which
//! performs exactly one round trip and returns the `ApiResponse` envelope.
//! Error statuses come back as data; only a failed exchange is an error.
//! Tests swap in their own transport to observe or fake the network.

use std::fmt;

use crate::error::{ApiError, TransportError};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already percent-encoded. `body` is only ever set for
/// non-GET methods.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// Hand-written so the api key header never reaches logs.
impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(crate::client::API_KEY_HEADER) {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// The envelope produced by one HTTP exchange: status and raw body, before
/// any domain decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into a generic JSON value.
    pub fn payload(&self) -> Result<serde_json::Value, ApiError> {
        serde_json::from_str(&self.body).map_err(|source| ApiError::Decode {
            source,
            body: self.body.clone(),
        })
    }
}

/// Executes one `HttpRequest` against the network.
///
/// Implementations must perform exactly one round trip and must not retry.
/// Non-2xx statuses are returned as `Ok`.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<ApiResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<ApiResponse, TransportError> {
        (**self).execute(request)
    }
}
