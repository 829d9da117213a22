//! Chat message construction.
//!
//! This module provides:
//! - Payload types ([`StructuredMessage`], [`Attachment`], [`Field`], [`Color`])
//! - The notification formatter ([`format`], [`Formatter`])
//! - Base template merging ([`MessageTemplate`])
//!
//! Everything here is pure: no I/O and no shared mutable state.

mod format;
mod slack;
mod template;


pub use format::{Icons, SUBJECT_PLACEHOLDER, format, title};
pub use slack::{Attachment, Color, Field, StructuredMessage};
pub use template::{MessageTemplate, merge_defaults};

use crate::event::NotificationEvent;

/// Formats notifications and applies the base template.
///
/// Built once at startup and shared read-only across invocations.
///
/// # Example
///
/// ```
/// use ses_notify::message::{Formatter, Icons, MessageTemplate};
/// use serde_json::json;
///
/// let template = MessageTemplate::from_value(json!({ "channel": "#mail" })).unwrap();
/// let formatter = Formatter::new()
///     .with_icons(Icons::new(":email:", ":warning:"))
///     .with_template(template);
///
/// assert_eq!(formatter.icons().default, ":email:");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    icons: Icons,
    template: MessageTemplate,
}

impl Formatter {
    /// Creates a formatter with default icons and an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the icon markers.
    #[must_use]
    pub fn with_icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    /// Sets the base message template.
    #[must_use]
    pub fn with_template(mut self, template: MessageTemplate) -> Self {
        self.template = template;
        self
    }

    /// Returns the configured icons.
    #[must_use]
    pub const fn icons(&self) -> &Icons {
        &self.icons
    }

    /// Returns the configured template.
    #[must_use]
    pub const fn template(&self) -> &MessageTemplate {
        &self.template
    }

    /// Formats a notification without applying the template.
    #[must_use]
    pub fn format(&self, event: &NotificationEvent) -> StructuredMessage {
        format(event, &self.icons)
    }

    /// Formats a notification and merges the template into the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be serialized to JSON.
    pub fn render(&self, event: &NotificationEvent) -> Result<serde_json::Value, serde_json::Error> {
        self.template.apply(&self.format(event))
    }
}
