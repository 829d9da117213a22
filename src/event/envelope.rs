//! Pub/sub delivery envelope.
//!
//! The notification arrives double-encoded: the envelope is JSON and each
//! record carries the notification as a JSON string in `Sns.Message`.

use serde::Deserialize;

use super::EventError;

/// Inbound event batch as delivered by the pub/sub topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnsEvent {
    /// Delivered records, usually exactly one.
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

/// A single record of an [`SnsEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnsRecord {
    /// Subscription ARN the record was delivered through.
    #[serde(rename = "EventSubscriptionArn", default)]
    pub subscription_arn: Option<String>,

    /// The topic message.
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

/// Topic message body and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnsMessage {
    /// Topic-assigned message ID.
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,

    /// Topic the message was published to.
    #[serde(rename = "TopicArn", default)]
    pub topic_arn: Option<String>,

    /// JSON-encoded notification.
    #[serde(rename = "Message")]
    pub message: String,
}

impl SnsEvent {
    /// Parses an envelope from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Envelope`] if the text is not a valid envelope.
    pub fn parse(raw: &str) -> Result<Self, EventError> {
        serde_json::from_str(raw).map_err(EventError::Envelope)
    }

    /// Returns the record that will be processed.
    ///
    /// Only the first record is used; batches are not fanned out.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EmptyBatch`] if there are no records.
    pub fn first_record(&self) -> Result<&SnsRecord, EventError> {
        self.records.first().ok_or(EventError::EmptyBatch)
    }

    /// Returns how many records follow the first and will be ignored.
    #[must_use]
    pub fn ignored_records(&self) -> usize {
        self.records.len().saturating_sub(1)
    }
}
