//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ses-notify: forward email notifications to a chat webhook
///
/// Reads one pub/sub event carrying a Delivery, Bounce or Complaint
/// notification, formats it, and posts it to the webhook. The exit code
/// tells the caller whether to retry.
#[derive(Debug, Parser)]
#[command(name = "ses-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Webhook URL (overrides HOOK_URL and the config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Path to the inbound event JSON ('-' or omitted reads stdin)
    #[arg(long, short)]
    pub event: Option<PathBuf>,

    /// Deadline for the webhook exchange in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Base message JSON object merged into every message as defaults
    #[arg(long = "base-message", value_name = "JSON")]
    pub base_message: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Test mode - log the message without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ses-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ses-notify.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
