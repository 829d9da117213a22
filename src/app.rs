//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use ses_notify::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
///
/// The invoking host retries on [`retryable_failure`] only.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0) - delivered, rejected with 4xx, or dry run.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing URL, unreadable event, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Retryable failure (exit code 2) - 5xx, transport failure, deadline.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn retryable_failure() -> ExitCode {
        ExitCode::from(2)
    }

    /// Permanent failure (exit code 3) - the event itself is invalid.
    pub fn permanent_failure() -> ExitCode {
        ExitCode::from(3)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => {
            eprintln!("\nSet the HOOK_URL environment variable, or run 'ses-notify init'");
            eprintln!("to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'ses-notify init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout stays free for the caller.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
