//! Notification to chat message transformation.

use std::fmt::Write as _;

use crate::event::{Bounce, Complaint, Delivery, Mail, NotificationEvent, NotificationKind};

use super::{Attachment, Color, Field, StructuredMessage};

/// Subject shown when the original headers cannot be trusted.
pub const SUBJECT_PLACEHOLDER: &str = "n/a";

/// Icon markers attached to outgoing messages.
///
/// Bounces and deliveries share one icon; complaints use a distinct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    /// Icon for bounce and delivery messages.
    pub default: String,
    /// Icon for complaint messages.
    pub complaint: String,
}

impl Icons {
    /// Default icon for bounce and delivery messages.
    pub const DEFAULT_ICON: &'static str = ":aws-ses:";

    /// Default icon for complaint messages.
    pub const DEFAULT_COMPLAINT_ICON: &'static str = ":regas:";

    /// Creates a custom icon set.
    #[must_use]
    pub fn new(default: impl Into<String>, complaint: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            complaint: complaint.into(),
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ICON, Self::DEFAULT_COMPLAINT_ICON)
    }
}

/// Formats a notification into a chat message.
///
/// Produces exactly one attachment. Absent values never fail: they render
/// as an empty string, or as the subject placeholder / envelope sender for
/// the Subject and From fields.
#[must_use]
pub fn format(event: &NotificationEvent, icons: &Icons) -> StructuredMessage {
    let headers = Headers::from_mail(&event.mail);
    let ts = event.effective_timestamp().map(str::to_string);

    let attachment = match &event.kind {
        NotificationKind::Bounce(bounce) => Attachment {
            fields: vec![
                headers.subject_field(),
                headers.from_field(),
                Field::wide("Recipients", bounce_recipients(bounce)),
            ],
            color: bounce_color(bounce),
            ts,
            icon_emoji: icons.default.clone(),
        },
        NotificationKind::Delivery(delivery) => Attachment {
            fields: vec![
                headers.subject_field(),
                headers.from_field(),
                Field::wide("Recipients", delivery_recipients(delivery)),
            ],
            color: Color::Good,
            ts,
            icon_emoji: icons.default.clone(),
        },
        // Complaints lead with the sender.
        NotificationKind::Complaint(complaint) => Attachment {
            fields: vec![
                headers.from_field(),
                headers.subject_field(),
                Field::wide("Recipients", complaint_recipients(complaint)),
            ],
            color: complaint_color(complaint),
            ts,
            icon_emoji: icons.complaint.clone(),
        },
    };

    StructuredMessage {
        text: format!("*{}*", title(&event.kind)),
        attachments: vec![attachment],
    }
}

/// Returns the plain message title for a notification.
#[must_use]
pub fn title(kind: &NotificationKind) -> String {
    match kind {
        NotificationKind::Bounce(bounce) => format!(
            "SES Message Bounce ({} - {})",
            text(bounce.bounce_type.as_ref()),
            text(bounce.bounce_sub_type.as_ref())
        ),
        NotificationKind::Delivery(_) => "SES Message Delivery".to_string(),
        NotificationKind::Complaint(_) => "SES Message Complaint".to_string(),
    }
}

/// Subject and From as they will be displayed.
struct Headers<'a> {
    subject: &'a str,
    from: &'a str,
}

impl<'a> Headers<'a> {
    fn from_mail(mail: &'a Mail) -> Self {
        let mut headers = Self {
            subject: SUBJECT_PLACEHOLDER,
            from: text(mail.source.as_ref()),
        };

        if let Some(common) = mail.trusted_headers() {
            if let Some(subject) = common.subject.as_deref() {
                headers.subject = subject;
            }
            if let Some(from) = common.from.first() {
                headers.from = from;
            }
        }

        headers
    }

    fn subject_field(&self) -> Field {
        Field::wide("Subject", self.subject)
    }

    fn from_field(&self) -> Field {
        Field::wide("From", self.from)
    }
}

fn bounce_color(bounce: &Bounce) -> Color {
    if bounce.is_transient() {
        Color::Warning
    } else {
        Color::Danger
    }
}

fn complaint_color(complaint: &Complaint) -> Color {
    if complaint.is_abuse() {
        Color::Warning
    } else {
        Color::Danger
    }
}

fn bounce_recipients(bounce: &Bounce) -> String {
    bounce
        .bounced_recipients
        .iter()
        .fold(String::new(), |mut out, r| {
            let _ = writeln!(
                out,
                "* {} ({}): {}",
                text(r.email_address.as_ref()),
                text(r.action.as_ref()),
                text(r.diagnostic_code.as_ref())
            );
            out
        })
}

fn complaint_recipients(complaint: &Complaint) -> String {
    // The feedback type is notification-wide and repeats on every line.
    let feedback = text(complaint.complaint_feedback_type.as_ref());

    complaint
        .complained_recipients
        .iter()
        .fold(String::new(), |mut out, r| {
            let _ = writeln!(out, "* {}: {feedback}", text(r.email_address.as_ref()));
            out
        })
}

fn delivery_recipients(delivery: &Delivery) -> String {
    delivery
        .recipients
        .iter()
        .fold(String::new(), |mut out, r| {
            let _ = writeln!(out, "* {r}");
            out
        })
}

fn text(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}
