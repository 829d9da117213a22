//! Shared test fixtures for notification tests.

use serde_json::{Value, json};

use super::NotificationEvent;

/// Mail block with complete headers.
pub fn mail_with_headers(subject: &str, from: &[&str]) -> Value {
    json!({
        "source": "bounces@sender.example",
        "messageId": "0100018c-test",
        "headersTruncated": false,
        "commonHeaders": {
            "subject": subject,
            "from": from,
        },
    })
}

/// Mail block whose headers the provider truncated.
pub fn truncated_mail() -> Value {
    json!({
        "source": "bounces@sender.example",
        "headersTruncated": true,
        "commonHeaders": {
            "subject": "should not be trusted",
            "from": ["Untrusted <untrusted@sender.example>"],
        },
    })
}

/// Bounce notification with one recipient per `(email, action, diagnostic)` entry.
pub fn bounce_json(bounce_type: &str, sub_type: &str, recipients: &[(&str, &str, &str)]) -> Value {
    let recipients: Vec<Value> = recipients
        .iter()
        .map(|(email, action, code)| {
            json!({ "emailAddress": email, "action": action, "diagnosticCode": code })
        })
        .collect();

    json!({
        "notificationType": "Bounce",
        "timestamp": "2024-01-15T10:00:00.000Z",
        "mail": mail_with_headers("Welcome", &["Team <team@sender.example>"]),
        "bounce": {
            "bounceType": bounce_type,
            "bounceSubType": sub_type,
            "bouncedRecipients": recipients,
        },
    })
}

/// Complaint notification for the given recipients.
pub fn complaint_json(feedback_type: &str, recipients: &[&str]) -> Value {
    let recipients: Vec<Value> = recipients
        .iter()
        .map(|email| json!({ "emailAddress": email }))
        .collect();

    json!({
        "notificationType": "Complaint",
        "timestamp": "2024-01-15T11:00:00.000Z",
        "mail": mail_with_headers("Newsletter", &["News <news@sender.example>"]),
        "complaint": {
            "complaintFeedbackType": feedback_type,
            "complainedRecipients": recipients,
        },
    })
}

/// Delivery notification for the given recipients.
pub fn delivery_json(recipients: &[&str]) -> Value {
    json!({
        "notificationType": "Delivery",
        "timestamp": "2024-01-15T12:00:00.000Z",
        "mail": mail_with_headers("Receipt", &["Shop <shop@sender.example>", "other@sender.example"]),
        "delivery": {
            "recipients": recipients,
        },
    })
}

/// Wraps notifications into a pub/sub envelope, one record each.
pub fn envelope(notifications: &[Value]) -> String {
    let records: Vec<Value> = notifications
        .iter()
        .enumerate()
        .map(|(i, n)| {
            json!({
                "EventSource": "aws:sns",
                "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:ses-events:sub",
                "Sns": {
                    "MessageId": format!("msg-{i}"),
                    "TopicArn": "arn:aws:sns:us-east-1:123456789012:ses-events",
                    "Message": n.to_string(),
                },
            })
        })
        .collect();

    json!({ "Records": records }).to_string()
}

/// Parses a notification fixture.
pub fn parse(notification: &Value) -> NotificationEvent {
    NotificationEvent::parse(&notification.to_string()).unwrap()
}
