//! Error types for command parsing and dispatch failures.
//!
//! Every failure a user can trigger from chat text maps to one of these
//! types. None of them is fatal to the host: the dispatcher returns them
//! wrapped in a [`CommandFailure`] that also identifies the triggering
//! message, and the host decides how to surface them.

use std::fmt;

use thiserror::Error;

use crate::client::ClientError;
use crate::ids::MessageOrigin;

use super::suggest::suggest;

/// An argument was missing or could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    reason: String,
}

impl ValidationError {
    /// Creates a validation error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// A required argument has no value.
    pub fn missing_required(key: &str) -> Self {
        Self::new(format!("missing required field '{key}'"))
    }

    /// A `message` argument was neither a pointer nor numeric.
    pub fn non_numeric_message(value: &str) -> Self {
        Self::new(format!("message id must be a number but got `{value}`"))
    }

    /// A `number` argument received text that is not a number.
    pub fn non_numeric_argument(key: &str, value: &str) -> Self {
        Self::new(format!("argument '{key}' must be a number but got `{value}`"))
    }

    /// A `boolean` argument received something other than `true`/`false`.
    pub fn non_boolean_argument(key: &str, value: &str) -> Self {
        Self::new(format!("argument '{key}' must be true or false but got `{value}`"))
    }

    /// A list value appeared inside an array element.
    pub fn nested_list(key: &str) -> Self {
        Self::new(format!("argument '{key}' does not accept nested lists"))
    }

    /// Why validation failed.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// No handler is registered under the requested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandNotFound {
    input: String,
    existing: Vec<String>,
    suggestion: Option<String>,
}

impl CommandNotFound {
    /// Records the failed lookup and computes the closest registered name.
    pub fn new(input: impl Into<String>, existing: Vec<String>) -> Self {
        let input = input.into();
        let suggestion = suggest(&input, &existing).map(str::to_owned);
        Self {
            input,
            existing,
            suggestion,
        }
    }

    /// The name that failed to match.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Every name registered at lookup time.
    #[must_use]
    pub fn existing(&self) -> &[String] {
        &self.existing
    }

    /// The closest registered name, when one is close enough to offer.
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}

impl fmt::Display for CommandNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command '{}' not found", self.input)?;
        if let Some(guess) = &self.suggestion {
            write!(f, ", did you mean '{guess}'?")?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandNotFound {}

/// Failure raised by a command handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler looked up another command that does not exist.
    #[error(transparent)]
    NotFound(#[from] CommandNotFound),

    /// A transport call made by the handler failed.
    #[error("chat client error: {0}")]
    Client(#[from] ClientError),

    /// The handler could not reach the command registry.
    #[error("command registry is no longer available")]
    RegistryUnavailable,

    /// Any other handler-specific failure.
    #[error("{message}")]
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl HandlerError {
    /// Creates a handler-specific failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// A command name that could never be extracted from message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The name is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid command name '{name}': only letters, digits, '_' and '-' are allowed")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// Errors surfaced while dispatching a single message.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The extracted command name matches no registered handler.
    #[error(transparent)]
    CommandNotFound(#[from] CommandNotFound),

    /// An argument was missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The handler ran and failed.
    #[error("command '{command}' failed: {source}")]
    Handler {
        /// Name the handler is registered under.
        command: String,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Creates a validation error.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(reason))
    }

    /// Wraps a handler failure with the command it came from.
    pub fn handler(command: impl Into<String>, source: HandlerError) -> Self {
        Self::Handler {
            command: command.into(),
            source,
        }
    }

    /// Short classification used as a structured logging field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CommandNotFound(_) => "command_not_found",
            Self::Validation(_) => "validation",
            Self::Handler { .. } => "handler",
        }
    }
}

/// A dispatch error together with the message that caused it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct CommandFailure {
    origin: MessageOrigin,
    #[source]
    error: DispatchError,
}

impl CommandFailure {
    /// Attaches the triggering message to an error.
    #[must_use]
    pub const fn new(origin: MessageOrigin, error: DispatchError) -> Self {
        Self { origin, error }
    }

    /// Location of the triggering message.
    #[must_use]
    pub const fn origin(&self) -> MessageOrigin {
        self.origin
    }

    /// The underlying error.
    #[must_use]
    pub const fn error(&self) -> &DispatchError {
        &self.error
    }
}
