//! Chat destinations named in configuration.

use std::fmt;

/// A chat referenced either by numeric identifier or by handle.
///
/// Configuration values are free text: anything that parses as an integer is
/// treated as an identifier (group chats carry negative identifiers), the rest
/// as a handle such as `me` or `@someone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatTarget {
    /// Numeric chat identifier.
    Id(i64),
    /// Handle resolved by the transport.
    Handle(String),
}

impl ChatTarget {
    /// Classifies a configured chat value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Handle(trimmed.to_owned()), Self::Id)
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Handle(handle) => f.write_str(handle),
        }
    }
}
