//! Error types for inbound event decoding.

use thiserror::Error;

/// Error type for decoding an inbound event.
///
/// All variants describe a problem with the event itself. Re-delivering
/// the same event cannot fix any of them.
#[derive(Debug, Error)]
pub enum EventError {
    /// The outer pub/sub envelope is not valid JSON or has the wrong shape.
    #[error("Failed to parse event envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The envelope carried no records.
    #[error("Event envelope contains no records")]
    EmptyBatch,

    /// The embedded notification message is not valid JSON or has the wrong shape.
    #[error("Failed to parse notification message: {0}")]
    Notification(#[source] serde_json::Error),

    /// The notification did not name its type.
    #[error("Notification has no notificationType")]
    MissingType,

    /// The notification type is not one of Bounce, Complaint or Delivery.
    #[error("Unsupported notification type '{0}'")]
    UnsupportedType(String),
}
