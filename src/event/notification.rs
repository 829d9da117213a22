//! Email notification model.
//!
//! Every nested field is optional on the wire. Formatting is best-effort,
//! so an absent value degrades to a placeholder instead of failing the
//! whole notification.

use std::fmt;

use serde::Deserialize;

use super::EventError;

/// A parsed email notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Notification timestamp (ISO-8601), if the publisher set one.
    pub timestamp: Option<String>,
    /// The original message this notification refers to.
    pub mail: Mail,
    /// Type-specific payload.
    pub kind: NotificationKind,
}

/// The three notification shapes, selected by `notificationType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// The message was accepted by the recipient's mail server.
    Delivery(Delivery),
    /// The message was rejected by the recipient's mail server.
    Bounce(Bounce),
    /// A recipient marked the message as unwanted.
    Complaint(Complaint),
}

impl NotificationKind {
    /// Returns the wire name of this notification type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Delivery(_) => "Delivery",
            Self::Bounce(_) => "Bounce",
            Self::Complaint(_) => "Complaint",
        }
    }

    /// Returns the timestamp carried inside the type-specific payload.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        match self {
            Self::Delivery(d) => d.timestamp.as_deref(),
            Self::Bounce(b) => b.timestamp.as_deref(),
            Self::Complaint(c) => c.timestamp.as_deref(),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common mail metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mail {
    /// Envelope sender address.
    #[serde(default)]
    pub source: Option<String>,

    /// Provider-assigned message ID.
    #[serde(default)]
    pub message_id: Option<String>,

    /// Whether the provider truncated the original headers.
    #[serde(default)]
    pub headers_truncated: Option<bool>,

    /// Selected headers of the original message.
    #[serde(default)]
    pub common_headers: Option<CommonHeaders>,
}

impl Mail {
    /// Returns the common headers only when they are known to be complete.
    ///
    /// A missing `headersTruncated` flag counts as truncated.
    #[must_use]
    pub fn trusted_headers(&self) -> Option<&CommonHeaders> {
        if self.headers_truncated == Some(false) {
            self.common_headers.as_ref()
        } else {
            None
        }
    }
}

/// Headers copied from the original message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonHeaders {
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// From addresses, in header order.
    #[serde(default)]
    pub from: Vec<String>,
}

/// Delivery payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Accepted recipients.
    #[serde(default)]
    pub recipients: Vec<String>,

    /// Time of delivery.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Bounce payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounce {
    /// `Permanent`, `Transient` or `Undetermined`.
    #[serde(default)]
    pub bounce_type: Option<String>,

    /// Finer-grained reason, e.g. `General` or `NoEmail`.
    #[serde(default)]
    pub bounce_sub_type: Option<String>,

    /// Rejected recipients.
    #[serde(default)]
    pub bounced_recipients: Vec<BouncedRecipient>,

    /// Time of the bounce.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Bounce {
    /// Returns true if the bounce is temporary.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.bounce_type.as_deref() == Some("Transient")
    }
}

/// A single rejected recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BouncedRecipient {
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub diagnostic_code: Option<String>,
}

/// Complaint payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Feedback type reported by the mailbox provider, e.g. `abuse`.
    #[serde(default)]
    pub complaint_feedback_type: Option<String>,

    /// Recipients that complained.
    #[serde(default)]
    pub complained_recipients: Vec<ComplainedRecipient>,

    /// Time of the complaint.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Complaint {
    /// Returns true if the feedback type is `abuse`.
    #[must_use]
    pub fn is_abuse(&self) -> bool {
        self.complaint_feedback_type.as_deref() == Some("abuse")
    }
}

/// A single complaining recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplainedRecipient {
    #[serde(default)]
    pub email_address: Option<String>,
}

/// Wire shape before the type tag is resolved.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNotification {
    // Configuration-set event publishing uses `eventType` for the same tag.
    #[serde(default, alias = "eventType")]
    notification_type: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    mail: Mail,
    #[serde(default)]
    delivery: Option<Delivery>,
    #[serde(default)]
    bounce: Option<Bounce>,
    #[serde(default)]
    complaint: Option<Complaint>,
}

impl NotificationEvent {
    /// Parses a notification from its JSON message text.
    ///
    /// A missing type-specific payload is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not a JSON object of the expected shape
    /// - `notificationType` is missing
    /// - `notificationType` is not `Delivery`, `Bounce` or `Complaint`
    pub fn parse(message: &str) -> Result<Self, EventError> {
        let raw: RawNotification =
            serde_json::from_str(message).map_err(EventError::Notification)?;
        Self::from_raw(raw)
    }

    /// Returns the notification timestamp, falling back to the payload's own.
    #[must_use]
    pub fn effective_timestamp(&self) -> Option<&str> {
        self.timestamp
            .as_deref()
            .or_else(|| self.kind.timestamp())
    }

    fn from_raw(raw: RawNotification) -> Result<Self, EventError> {
        let kind = match raw.notification_type.as_deref() {
            Some("Delivery") => NotificationKind::Delivery(raw.delivery.unwrap_or_default()),
            Some("Bounce") => NotificationKind::Bounce(raw.bounce.unwrap_or_default()),
            Some("Complaint") => NotificationKind::Complaint(raw.complaint.unwrap_or_default()),
            Some(other) => return Err(EventError::UnsupportedType(other.to_string())),
            None => return Err(EventError::MissingType),
        };

        Ok(Self {
            timestamp: raw.timestamp,
            mail: raw.mail,
            kind,
        })
    }
}
