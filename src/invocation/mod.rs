//! Single-invocation pipeline.
//!
//! Decodes one inbound event, formats it, delivers it, and reports the
//! result to the host:
//!
//! | Webhook result        | Reported as                       |
//! |-----------------------|-----------------------------------|
//! | status < 400          | [`Disposition::Delivered`]        |
//! | 400 <= status < 500   | [`Disposition::Rejected`] (logged as error, not retried) |
//! | status >= 500         | [`InvocationError::ServerError`]  |
//! | no response           | [`InvocationError::Dispatch`]     |
//! | deadline expired      | [`InvocationError::DeadlineExceeded`] |
//!
//! Nothing is retried here. Retries are the host's job, driven by
//! [`IsRetryable`](crate::webhook::IsRetryable).

mod error;


pub use error::InvocationError;

use std::time::Duration;

use serde_json::Value;

use crate::event::{self, NotificationEvent};
use crate::message::Formatter;
use crate::webhook::{DeliveryOutcome, DeliveryResult, HttpClient, WebhookDispatcher};

/// Successful end state of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The webhook accepted the message.
    Delivered(DeliveryResult),

    /// The webhook rejected the request with a 4xx status. Retrying the same
    /// message would fail again, so the host is told the invocation succeeded.
    Rejected(DeliveryResult),

    /// Dry-run mode: the payload was rendered but not sent.
    DryRun(Value),
}

/// Runs the decode, format and deliver pipeline for one event.
///
/// # Type Parameters
///
/// - `H`: The HTTP client used by the dispatcher
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ses_notify::invocation::Invocation;
/// use ses_notify::message::Formatter;
/// use ses_notify::webhook::{ReqwestClient, WebhookDispatcher};
/// use url::Url;
///
/// # async fn example(raw_event: &str) -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = WebhookDispatcher::new(
///     ReqwestClient::new()?,
///     Url::parse("https://hooks.example.com/services/T000/B000/XXXX")?,
/// );
/// let invocation = Invocation::new(dispatcher, Formatter::new())
///     .with_deadline(Duration::from_secs(10));
///
/// let disposition = invocation.handle(raw_event).await?;
/// println!("{disposition:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Invocation<H> {
    dispatcher: WebhookDispatcher<H>,
    formatter: Formatter,
    deadline: Option<Duration>,
    dry_run: bool,
}

impl<H> Invocation<H> {
    /// Creates an invocation with no deadline that sends messages.
    #[must_use]
    pub const fn new(dispatcher: WebhookDispatcher<H>, formatter: Formatter) -> Self {
        Self {
            dispatcher,
            formatter,
            deadline: None,
            dry_run: false,
        }
    }

    /// Bounds the webhook exchange by a deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Enables dry-run mode (render and log, never send).
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured deadline.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

impl<H: HttpClient> Invocation<H> {
    /// Handles one raw inbound event.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] when the event is invalid, the webhook
    /// answers with a 5xx status, the exchange fails, or the deadline
    /// expires.
    pub async fn handle(&self, raw_event: &str) -> Result<Disposition, InvocationError> {
        tracing::debug!(event = raw_event, "Message received");

        let notification = event::decode(raw_event)?;
        self.handle_notification(&notification).await
    }

    /// Handles an already decoded notification.
    ///
    /// # Errors
    ///
    /// Same as [`Invocation::handle`], minus decoding failures.
    pub async fn handle_notification(
        &self,
        notification: &NotificationEvent,
    ) -> Result<Disposition, InvocationError> {
        tracing::info!(
            kind = %notification.kind,
            message_id = notification.mail.message_id.as_deref().unwrap_or("unknown"),
            "Processing notification"
        );

        let payload = self
            .formatter
            .render(notification)
            .map_err(InvocationError::Render)?;

        if self.dry_run {
            tracing::info!(%payload, "Dry-run: message not sent");
            return Ok(Disposition::DryRun(payload));
        }

        let result = self.dispatch(&payload).await?;
        Self::report(result)
    }

    async fn dispatch(&self, payload: &Value) -> Result<DeliveryResult, InvocationError> {
        let post = self.dispatcher.post(payload);

        let result = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, post)
                .await
                .map_err(|_| InvocationError::DeadlineExceeded(deadline))?,
            None => post.await,
        };

        result.map_err(InvocationError::from)
    }

    fn report(result: DeliveryResult) -> Result<Disposition, InvocationError> {
        match result.outcome() {
            DeliveryOutcome::Delivered => {
                tracing::info!(status = result.status.as_u16(), "Message posted successfully");
                Ok(Disposition::Delivered(result))
            }
            DeliveryOutcome::Rejected => {
                tracing::error!(
                    status = result.status.as_u16(),
                    reason = %result.status_message,
                    body = %result.body,
                    "Error posting message to webhook; not retrying"
                );
                Ok(Disposition::Rejected(result))
            }
            DeliveryOutcome::ServerError => Err(InvocationError::ServerError {
                status: result.status,
                message: result.status_message,
            }),
        }
    }
}
