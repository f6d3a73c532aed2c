//! Command dispatch for chat messages.
//!
//! A message whose trimmed text starts with `!` names a command:
//!
//! ```text
//! !log -c here --message 1234
//! ```
//!
//! The [`Dispatcher`] extracts the name (`log`), finds the handler in the
//! [`CommandRegistry`], parses the rest against the handler's
//! [`CommandDefinition`](crate::CommandDefinition), and awaits the handler.
//!
//! ## Failures
//!
//! Unknown names produce [`CommandNotFound`], which carries every registered
//! name and, when one is close enough, a suggestion:
//!
//! ```text
//! command 'lgo' not found, did you mean 'log'?
//! ```
//!
//! Missing or malformed arguments produce [`ValidationError`]. Neither is
//! fatal; both reach the host wrapped in a [`CommandFailure`].

mod command_line;
mod errors;
mod handler;
mod registry;
mod router;
mod suggest;

pub use self::command_line::{COMMAND_PREFIX, CommandLine, is_valid_command_name};
pub use self::errors::{
    CommandFailure, CommandNotFound, DispatchError, HandlerError, RegistrationError,
    ValidationError,
};
pub use self::handler::CommandHandler;
pub use self::registry::CommandRegistry;
pub use self::router::{DispatchOutcome, Dispatcher};
