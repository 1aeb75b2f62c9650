//! Error types for the word API client.
//!
//! # Design
//! Every failure a caller can observe is one of five kinds. `InvalidArgument`
//! is raised before any I/O. `Transport` covers the network exchange itself,
//! while `Remote` means the exchange succeeded but the server answered with a
//! non-2xx status; its status and raw body are kept for inspection. `Decode`
//! is reserved for bodies that do not match the expected shape, so "the call
//! failed" is never confused with "the word has no data."

use thiserror::Error;

/// Errors returned by `ApiClient` and `WordApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument (word, resource path, config field) was missing or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange could not be completed.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {}", remote_summary(.message, .body))]
    Remote {
        status: u16,
        /// The `message` field of the service's error payload, when present.
        message: Option<String>,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// True when the server reported that the requested word does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Remote { status: 404, .. })
    }

    /// The HTTP status carried by a `Remote` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn remote_summary<'a>(message: &'a Option<String>, body: &'a str) -> &'a str {
    message.as_deref().unwrap_or(body)
}

/// Failures of the network exchange, categorized by cause.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The host could not be resolved or the connection was refused.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The exchange did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The peer violated HTTP, or the request could not be expressed in it.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Reading or writing the underlying stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
