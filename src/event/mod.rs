//! Inbound event decoding.
//!
//! This module provides:
//! - The pub/sub envelope ([`SnsEvent`])
//! - The email notification model ([`NotificationEvent`], [`NotificationKind`])
//! - One-shot decoding of a raw event into a notification ([`decode`])
//!
//! # Known Limitation
//!
//! Only the first record of an envelope is processed. Additional records are
//! logged and dropped.

mod envelope;
mod error;
mod notification;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use envelope::{SnsEvent, SnsMessage, SnsRecord};
pub use error::EventError;
pub use notification::{
    Bounce, BouncedRecipient, CommonHeaders, ComplainedRecipient, Complaint, Delivery, Mail,
    NotificationEvent, NotificationKind,
};

/// Decodes a raw inbound event into a classified notification.
///
/// Parses the envelope, takes its first record, and parses the embedded
/// notification message exactly once.
///
/// # Errors
///
/// Returns [`EventError`] if the envelope or the notification is malformed,
/// the batch is empty, or the notification type is not supported.
pub fn decode(raw: &str) -> Result<NotificationEvent, EventError> {
    let envelope = SnsEvent::parse(raw)?;
    let record = envelope.first_record()?;

    let ignored = envelope.ignored_records();
    if ignored > 0 {
        tracing::warn!(ignored, "Event batch has extra records; only the first is processed");
    }

    tracing::debug!(
        message_id = record.sns.message_id.as_deref().unwrap_or("unknown"),
        topic = record.sns.topic_arn.as_deref().unwrap_or("unknown"),
        subscription = record.subscription_arn.as_deref().unwrap_or("unknown"),
        "Decoding notification record"
    );

    NotificationEvent::parse(&record.sns.message)
}
