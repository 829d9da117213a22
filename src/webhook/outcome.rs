//! Classification of webhook responses.

use std::fmt;

use http::StatusCode;

/// How the webhook answered a delivered request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Status below 400. The message was accepted.
    Delivered,

    /// Status 400-499. The endpoint rejected the request itself; sending it
    /// again unchanged would be rejected again.
    Rejected,

    /// Status 500 or above. The endpoint failed and a later attempt may
    /// succeed.
    ServerError,
}

impl DeliveryOutcome {
    /// Classifies a response status code.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            0..=399 => Self::Delivered,
            400..=499 => Self::Rejected,
            _ => Self::ServerError,
        }
    }

    /// Returns true if the invocation should be reported as successful.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Delivered | Self::Rejected)
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Delivered => "delivered",
            Self::Rejected => "rejected",
            Self::ServerError => "server error",
        };
        f.write_str(label)
    }
}
