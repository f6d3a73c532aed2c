//! Routing of chat messages to registered command handlers.
//!
//! The dispatcher extracts the command name from a message, looks the
//! handler up in the [`CommandRegistry`], parses the argument text against
//! the handler's schema, and awaits the handler. Failures are returned to the
//! caller together with the triggering message's location; the dispatcher
//! never retries and never reports to the chat on its own.

use std::sync::Arc;

use tracing::{Level, debug, info, warn};

use bangbot_config::Config;

use crate::client::{Collaborators, TriggerMessage};
use crate::help::{HELP_COMMAND, HelpCommandHandler};
use crate::parse::CommandArgumentParser;
use crate::value::ParsedArguments;

use super::command_line::CommandLine;
use super::errors::{
    CommandFailure, CommandNotFound, DispatchError, HandlerError, RegistrationError,
};
use super::handler::CommandHandler;
use super::registry::CommandRegistry;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// How a message that did not fail was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message is not a command.
    Ignored,
    /// The named command ran to completion.
    Executed {
        /// Name the handler is registered under.
        command: String,
    },
}

/// Routes command messages to handlers.
///
/// Each call to [`handle_message`](Self::handle_message) is independent, so
/// hosts may dispatch several messages concurrently. The registry can be
/// changed between and during dispatches.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    collaborators: Collaborators,
}

impl Dispatcher {
    /// Creates a dispatcher with the built-in `help` command registered.
    #[must_use]
    pub fn new(collaborators: Collaborators, config: &Config) -> Self {
        let registry = Arc::new(CommandRegistry::new());
        let help = HelpCommandHandler::new(
            Arc::downgrade(&registry),
            Arc::clone(&collaborators.client),
            config,
        );
        registry.insert(HELP_COMMAND.to_owned(), Arc::new(help));
        Self {
            registry,
            collaborators,
        }
    }

    /// The registry this dispatcher routes through.
    #[must_use]
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Registers `handler` under `name`; see [`CommandRegistry::register`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidName`] for names that cannot be
    /// typed as a command.
    pub fn register(
        &self,
        name: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Result<(), RegistrationError> {
        self.registry.register(name, handler)
    }

    /// Removes the handler registered under `name`, returning it.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.registry.unregister(name)
    }

    /// Dispatches one inbound message.
    ///
    /// Messages that are not commands yield [`DispatchOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns a [`CommandFailure`] when the command is unknown, an argument
    /// fails validation, or the handler fails. A handler that looks up an
    /// unknown command (like `help lgo`) fails with [`CommandNotFound`].
    pub async fn handle_message(
        &self,
        message: &dyn TriggerMessage,
    ) -> Result<DispatchOutcome, CommandFailure> {
        let Some(line) = CommandLine::extract(message.text()) else {
            return Ok(DispatchOutcome::Ignored);
        };
        let origin = message.origin();
        debug!(
            target: DISPATCH_TARGET,
            command = line.name,
            origin = %origin,
            "command received"
        );

        match self.execute(message, line).await {
            Ok(()) => {
                info!(target: DISPATCH_TARGET, command = line.name, "command executed");
                Ok(DispatchOutcome::Executed {
                    command: line.name.to_owned(),
                })
            }
            Err(error) => {
                warn!(
                    target: DISPATCH_TARGET,
                    command = line.name,
                    origin = %origin,
                    kind = error.kind(),
                    error = %error,
                    "command failed"
                );
                Err(CommandFailure::new(origin, error))
            }
        }
    }

    async fn execute(
        &self,
        message: &dyn TriggerMessage,
        line: CommandLine<'_>,
    ) -> Result<(), DispatchError> {
        let handler = self
            .registry
            .get(line.name)
            .ok_or_else(|| CommandNotFound::new(line.name, self.registry.names()))?;

        let definition = handler.definition();
        let arguments = if definition.has_no_arguments() {
            ParsedArguments::default()
        } else {
            CommandArgumentParser::new(&definition, message, self.collaborators.resolver.as_ref())
                .parse(line.arguments)
                .await?
        };
        log_arguments(line.name, &arguments);

        handler
            .handle(arguments)
            .await
            .map_err(|source| match source {
                HandlerError::NotFound(not_found) => DispatchError::CommandNotFound(not_found),
                source => DispatchError::handler(line.name, source),
            })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

fn log_arguments(command: &str, arguments: &ParsedArguments) {
    if !tracing::enabled!(target: DISPATCH_TARGET, Level::DEBUG) {
        return;
    }
    match serde_json::to_string(arguments) {
        Ok(json) => debug!(
            target: DISPATCH_TARGET,
            command,
            arguments = %json,
            "arguments parsed"
        ),
        Err(error) => debug!(
            target: DISPATCH_TARGET,
            command,
            error = %error,
            "arguments could not be serialised"
        ),
    }
}
