//! Chat message payload types.
//!
//! Field names follow the Slack incoming-webhook attachment format, which is
//! also accepted by Mattermost and Rocket.Chat.

use serde::Serialize;

/// A message with one or more attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredMessage {
    /// Headline text.
    pub text: String,
    /// Attachments, in display order.
    pub attachments: Vec<Attachment>,
}

/// A colored attachment with titled fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Fields, in display order.
    pub fields: Vec<Field>,
    /// Severity marker shown as the attachment's side bar.
    pub color: Color,
    /// Event timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    /// Display icon.
    pub icon_emoji: String,
}

/// A titled value inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    /// Whether the field may be rendered side by side with others.
    pub short: bool,
}

impl Field {
    /// Creates a full-width field.
    #[must_use]
    pub fn wide(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}

/// Attachment severity color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Good,
    Warning,
    Danger,
}
