//! Shared configuration for the bang-command bot host.
//!
//! Configuration is layered by [`ortho_config`]: built-in defaults, then an
//! optional TOML file (`--config-path` or `BANGBOT_CONFIG_PATH`), then
//! `BANGBOT_*` environment variables, then command-line flags. The resolved
//! [`Config`] drives telemetry, the built-in `help` command, and the error
//! reporter that surfaces failed commands back into the chat.

mod chat;
mod defaults;
mod logging;

use serde::{Deserialize, Serialize};

use ortho_config::OrthoConfig;

pub use chat::ChatTarget;
pub use defaults::{
    DEFAULT_DEBUG_CHAT, DEFAULT_LOG_FILTER, DEFAULT_LONG_MESSAGE_LIMIT, default_debug_chat,
    default_log_filter, default_log_format, default_long_message_limit,
    default_remove_command_on_error,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved bot host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "BANGBOT")]
pub struct Config {
    /// `tracing` filter expression applied to the global subscriber.
    #[ortho_config(default = defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Output format of the global subscriber.
    #[ortho_config(default = defaults::default_log_format())]
    pub log_format: LogFormat,
    /// Chat receiving error reports and non-local help output.
    #[ortho_config(default = defaults::default_debug_chat_string())]
    pub debug_chat: String,
    /// Whether a failed command message is deleted after it was reported.
    ///
    /// Unset means [`default_remove_command_on_error`]; the CLI takes an
    /// explicit `true` or `false`.
    pub remove_command_on_error: Option<bool>,
    /// Longest text sent inline before it is attached as a document instead.
    #[ortho_config(default = defaults::default_long_message_limit())]
    pub long_message_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: defaults::default_log_filter_string(),
            log_format: defaults::default_log_format(),
            debug_chat: defaults::default_debug_chat_string(),
            remove_command_on_error: None,
            long_message_limit: defaults::default_long_message_limit(),
        }
    }
}

impl Config {
    /// Filter expression for the telemetry subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for the telemetry subscriber.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Destination for error reports and non-local help output.
    #[must_use]
    pub fn debug_chat(&self) -> ChatTarget {
        ChatTarget::parse(&self.debug_chat)
    }

    /// Whether failed command messages are deleted once reported.
    #[must_use]
    pub fn remove_command_on_error(&self) -> bool {
        self.remove_command_on_error
            .unwrap_or_else(defaults::default_remove_command_on_error)
    }

    /// Character limit above which outgoing text becomes an attachment.
    #[must_use]
    pub const fn long_message_limit(&self) -> usize {
        self.long_message_limit
    }
}
