//! Error types for a single invocation.

use std::time::Duration;

use thiserror::Error;

use crate::event::EventError;
use crate::webhook::{DispatchError, IsRetryable};

/// Error type for a failed invocation.
///
/// Every variant is reported to the host as a failure. The host should
/// only re-run the invocation when [`IsRetryable::is_retryable`] is true.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The inbound event could not be decoded.
    #[error("Invalid event: {0}")]
    Event(#[from] EventError),

    /// The formatted message could not be rendered to JSON.
    #[error("Failed to render message: {0}")]
    Render(#[source] serde_json::Error),

    /// No response was received from the webhook.
    #[error("Failed to post message: {0}")]
    Dispatch(#[from] DispatchError),

    /// The webhook answered with a 5xx status.
    #[error("Server error when processing message: {} - {message}", .status.as_u16())]
    ServerError {
        /// HTTP status code
        status: http::StatusCode,
        /// Reason phrase
        message: String,
    },

    /// The deadline expired before the webhook answered.
    #[error("Webhook did not respond within {}s", .0.as_secs_f64())]
    DeadlineExceeded(Duration),
}

impl IsRetryable for InvocationError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Event(_) | Self::Render(_) => false,
            Self::Dispatch(e) => e.is_retryable(),
            Self::ServerError { .. } | Self::DeadlineExceeded(_) => true,
        }
    }
}
