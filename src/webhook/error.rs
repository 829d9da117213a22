//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong before a complete response was received.
/// Whether to retry is decided by [`IsRetryable`](super::IsRetryable).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Includes DNS resolution failures, refused or reset connections,
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for a single dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The message could not be serialized to JSON.
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTTP exchange failed before a response was received.
    #[error(transparent)]
    Http(#[from] HttpError),
}
