//! Default values for configuration options.

use crate::message::Icons;

/// Environment variable holding the webhook URL.
pub const HOOK_URL_ENV: &str = "HOOK_URL";

/// Event path meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Default icon for bounce and delivery messages.
pub const ICON: &str = Icons::DEFAULT_ICON;

/// Default icon for complaint messages.
pub const COMPLAINT_ICON: &str = Icons::DEFAULT_COMPLAINT_ICON;
