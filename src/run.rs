//! Application execution logic.
//!
//! Reads one inbound event, wires the HTTP client, dispatcher and
//! formatter together, and runs a single invocation.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use ses_notify::config::ValidatedConfig;
use ses_notify::invocation::{Disposition, Invocation, InvocationError};
use ses_notify::message::Formatter;
use ses_notify::webhook::{HttpClient, HttpError, IsRetryable, ReqwestClient, WebhookDispatcher};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the inbound event.
    #[error("Failed to read event from {}: {source}", display_source(path.as_deref()))]
    Input {
        /// Event file, `None` for stdin
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The invocation itself failed.
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl IsRetryable for RunError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Input { .. } | Self::Client(_) => false,
            Self::Invocation(e) => e.is_retryable(),
        }
    }
}

fn display_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}

/// Executes one invocation with the production HTTP client.
///
/// # Errors
///
/// Returns an error if:
/// - The event cannot be read
/// - The HTTP client cannot be built
/// - The invocation fails (invalid event, 5xx, transport failure, deadline)
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<Disposition, RunError> {
    let raw_event = read_event(config.event.as_deref()).await?;
    let client = ReqwestClient::new().map_err(RunError::Client)?;

    execute_with(client, config, &raw_event).await
}

/// Executes one invocation with the given client and raw event.
///
/// # Errors
///
/// Returns an error if the invocation fails.
pub async fn execute_with<H: HttpClient>(
    client: H,
    config: ValidatedConfig,
    raw_event: &str,
) -> Result<Disposition, RunError> {
    let invocation = build_invocation(client, config);

    if let Some(deadline) = invocation.deadline() {
        tracing::debug!("Webhook deadline: {}s", deadline.as_secs());
    }

    Ok(invocation.handle(raw_event).await?)
}

fn build_invocation<H>(client: H, config: ValidatedConfig) -> Invocation<H> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - the message will be logged but not sent");
    }

    let formatter = Formatter::new()
        .with_icons(config.icons)
        .with_template(config.template);
    let dispatcher = WebhookDispatcher::new(client, config.url);

    let invocation = Invocation::new(dispatcher, formatter).with_dry_run(config.dry_run);
    match config.deadline {
        Some(deadline) => invocation.with_deadline(deadline),
        None => invocation,
    }
}

/// Reads the raw event from a file, or from stdin when `path` is `None`.
async fn read_event(path: Option<&Path>) -> Result<String, RunError> {
    let to_error = |source| RunError::Input {
        path: path.map(Path::to_path_buf),
        source,
    };

    match path {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(to_error),
        None => read_to_string(tokio::io::stdin()).await.map_err(to_error),
    }
}

async fn read_to_string<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).await?;
    Ok(buf)
}
