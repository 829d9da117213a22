//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::message::{Icons, MessageTemplate};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Built once at process start and never mutated afterwards.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] in production, or
/// [`ValidatedConfig::from_raw`] to supply every source explicitly.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Inbound event file; `None` reads stdin
    pub event: Option<PathBuf>,

    /// Deadline for the webhook exchange; `None` waits indefinitely
    pub deadline: Option<Duration>,

    /// Base message template
    pub template: MessageTemplate,

    /// Icon markers
    pub icons: Icons,

    /// Dry-run mode (log the message without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The full URL usually embeds a secret token.
        let endpoint = format!(
            "{}://{}",
            self.url.scheme(),
            self.url.host_str().unwrap_or_default()
        );
        let event = self
            .event
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
        let deadline = self
            .deadline
            .map_or_else(|| "none".to_string(), |d| format!("{}s", d.as_secs()));

        write!(
            f,
            "Config {{ endpoint: {endpoint}, event: {event}, deadline: {deadline}, \
             base_message_keys: {}, dry_run: {} }}",
            self.template.len(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from every source.
    ///
    /// Priority: CLI > `HOOK_URL` environment value > TOML > defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing or invalid
    /// - The timeout is zero
    /// - The base message is not a JSON object
    /// - An icon is empty
    pub fn from_raw(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml, env_url)?;
        let deadline = Self::resolve_deadline(cli, toml)?;
        let template = Self::resolve_template(cli, toml)?;
        let icons = Self::resolve_icons(toml)?;

        Ok(Self {
            url,
            event: Self::resolve_event(cli),
            deadline,
            template,
            icons,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, environment and optional config file.
    ///
    /// The webhook URL environment variable is read here, once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };
        let env_url = std::env::var(defaults::HOOK_URL_ENV).ok();

        Self::from_raw(cli, toml.as_ref(), env_url.as_deref())
    }

    fn resolve_url(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env_url: Option<&str>,
    ) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| env_url.filter(|s| !s.is_empty()))
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::URL,
                    "Use --url, set HOOK_URL, or set webhook.url in config file",
                )
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_deadline(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        let Some(seconds) = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
        else {
            return Ok(None);
        };

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Some(Duration::from_secs(seconds)))
    }

    fn resolve_template(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<MessageTemplate, ConfigError> {
        // CLI replaces the TOML table entirely
        if let Some(ref json) = cli.base_message {
            let value: Value =
                serde_json::from_str(json).map_err(|e| ConfigError::InvalidBaseMessage {
                    reason: e.to_string(),
                })?;
            return MessageTemplate::from_value(value).ok_or_else(|| {
                ConfigError::InvalidBaseMessage {
                    reason: "must be a JSON object".to_string(),
                }
            });
        }

        Ok(toml
            .and_then(|t| t.message.base.clone())
            .map(MessageTemplate::new)
            .unwrap_or_default())
    }

    fn resolve_icons(toml: Option<&TomlConfig>) -> Result<Icons, ConfigError> {
        let section = toml.map(|t| &t.message);

        let icon = section
            .and_then(|m| m.icon.as_deref())
            .unwrap_or(defaults::ICON);
        let complaint_icon = section
            .and_then(|m| m.complaint_icon.as_deref())
            .unwrap_or(defaults::COMPLAINT_ICON);

        if icon.trim().is_empty() {
            return Err(ConfigError::InvalidIcon { field: "icon" });
        }
        if complaint_icon.trim().is_empty() {
            return Err(ConfigError::InvalidIcon {
                field: "complaint_icon",
            });
        }

        Ok(Icons::new(icon, complaint_icon))
    }

    fn resolve_event(cli: &Cli) -> Option<PathBuf> {
        cli.event
            .as_ref()
            .filter(|p| p.as_os_str() != defaults::STDIN_PATH)
            .cloned()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
