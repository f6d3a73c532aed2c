//! Bang-command engine for chat bots.
//!
//! Messages such as `!log -c here --message 1234` are routed to registered
//! [`CommandHandler`]s. Each handler declares its arguments as a
//! [`CommandDefinition`]; the engine parses the text after the command name
//! against it, resolves chat, user, and message references, checks required
//! fields, and hands the handler a typed [`ParsedArguments`] bag.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use bangbot::{
//!     ArgumentDefinition, CommandDefinition, CommandHandler, HandlerError, ParsedArguments,
//!     Pointer,
//! };
//!
//! struct Log;
//!
//! #[async_trait]
//! impl CommandHandler for Log {
//!     fn definition(&self) -> CommandDefinition {
//!         CommandDefinition::new()
//!             .with_description("Dumps a message")
//!             .argument(
//!                 "chat",
//!                 ArgumentDefinition::chat_or_user()
//!                     .alias("c")
//!                     .default_value(Pointer::CurrentChat),
//!             )
//!             .argument(
//!                 "message",
//!                 ArgumentDefinition::message()
//!                     .alias("m")
//!                     .required()
//!                     .default_value(Pointer::ReplyMessage),
//!             )
//!     }
//!
//!     async fn handle(&self, arguments: ParsedArguments) -> Result<(), HandlerError> {
//!         let _chat = arguments.entity("chat");
//!         let _message = arguments.message("message");
//!         Ok(())
//!     }
//! }
//!
//! # fn register(dispatcher: &bangbot::Dispatcher) -> Result<(), bangbot::RegistrationError> {
//! dispatcher.register("log", Arc::new(Log))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Pointers
//!
//! `chat_or_user` and `message` arguments accept [`Pointer`] literals that
//! refer to the triggering message: `here`/`current-chat` (its chat),
//! `reply-user` (the sender of the message it replies to), and
//! `reply-message` (the message it replies to). A pointer that cannot be
//! resolved, like `reply-user` outside a reply, leaves the argument unset;
//! required arguments then fail validation.
//!
//! ## Collaborators
//!
//! The engine does not talk to a chat network. Hosts implement
//! [`TriggerMessage`], [`EntityResolver`], and [`ChatClient`] over their
//! client library, build a [`Dispatcher`] from a [`Collaborators`] bundle,
//! and pass failures to an [`ErrorReporter`].

mod client;
pub mod dispatch;
mod help;
mod ids;
mod outgoing;
mod parse;
mod pointer;
mod reporting;
mod schema;
pub mod telemetry;
mod value;

pub use client::{
    ChatClient, ClientError, Collaborators, EntityResolver, ReplyMessage, TriggerMessage,
};
pub use dispatch::{
    COMMAND_PREFIX, CommandFailure, CommandHandler, CommandLine, CommandNotFound,
    CommandRegistry, DispatchError, DispatchOutcome, Dispatcher, HandlerError, RegistrationError,
    ValidationError,
};
pub use help::{HELP_COMMAND, HelpCommandHandler};
pub use ids::{EntityId, MessageId, MessageOrigin};
pub use outgoing::{LONG_MESSAGE_FILE_NAME, OutgoingMessage, ParseMode, prepare_long_message};
pub use parse::{CommandArgumentParser, validate};
pub use pointer::Pointer;
pub use reporting::{ErrorReporter, ReportSummary};
pub use schema::{ArgumentDefinition, ArgumentType, CommandDefinition};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use value::{ArgValue, ParsedArguments, RawValue};

#[cfg(test)]
mod tests;
