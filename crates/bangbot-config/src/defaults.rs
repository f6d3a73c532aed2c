/// Default log filter expression used by the bot host.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Chat that receives error reports when nothing else is configured.
///
/// `me` is the account's own saved-messages chat.
pub const DEFAULT_DEBUG_CHAT: &str = "me";

/// Longest text sent inline; anything longer is attached as a document.
pub const DEFAULT_LONG_MESSAGE_LIMIT: usize = 3900;

/// Default log filter expression used by the bot host.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub(crate) fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the bot host.
#[must_use]
pub const fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Json
}

/// Default chat that receives error reports.
#[must_use]
pub const fn default_debug_chat() -> &'static str {
    DEFAULT_DEBUG_CHAT
}

pub(crate) fn default_debug_chat_string() -> String {
    DEFAULT_DEBUG_CHAT.to_owned()
}

/// Failed command messages are removed from the chat by default.
#[must_use]
pub const fn default_remove_command_on_error() -> bool {
    true
}

/// Default inline text limit in characters.
#[must_use]
pub const fn default_long_message_limit() -> usize {
    DEFAULT_LONG_MESSAGE_LIMIT
}
