//! Configuration layer for ses-notify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **`HOOK_URL` environment variable** - Webhook URL only
//! 3. **TOML config file** - Values from the configuration file
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The base message from `--base-message` **replaces** the TOML `[message.base]`
//! table entirely (not merged).
//!
//! # TOML-Only Options
//!
//! Icon markers (`message.icon`, `message.complaint_icon`) are only
//! configurable through the config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{MessageSection, TomlConfig, WebhookSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
