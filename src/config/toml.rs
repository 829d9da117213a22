//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message configuration section
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,

    /// Deadline for the webhook exchange in seconds
    pub timeout: Option<u64>,
}

/// Message configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Icon for bounce and delivery messages
    pub icon: Option<String>,

    /// Icon for complaint messages
    pub complaint_icon: Option<String>,

    /// Base message merged into every message as defaults
    pub base: Option<Map<String, Value>>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# ses-notify Configuration File

[webhook]
# Webhook URL (required unless set via --url or the HOOK_URL environment variable)
# url = "https://hooks.slack.com/services/T000/B000/XXXX"

# Deadline for the webhook exchange in seconds (default: none)
# An expired deadline is reported as a retryable failure.
# timeout = 10

[message]
# Icon for bounce and delivery messages (default: ":aws-ses:")
# icon = ":aws-ses:"

# Icon for complaint messages (default: ":regas:")
# complaint_icon = ":regas:"

# Base message merged into every message. Values set by the formatter always
# win; everything else is filled in from here, including attachment defaults
# such as attachments = [{ footer = "SES" }].
# Note: --base-message on the command line REPLACES this table entirely.
# [message.base]
# channel = "#email-events"
# username = "SES"
"##
    .to_string()
}
