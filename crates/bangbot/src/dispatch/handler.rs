//! The trait every command implementation provides.

use async_trait::async_trait;

use crate::schema::CommandDefinition;
use crate::value::ParsedArguments;

use super::errors::HandlerError;

/// A command the dispatcher can route to.
///
/// The dispatcher reads [`definition`](Self::definition) on every invocation
/// to parse the argument text, then awaits [`handle`](Self::handle) with the
/// resolved arguments. Implementations are registered by name on the
/// [`CommandRegistry`](super::CommandRegistry); the dispatcher itself never
/// changes when commands are added.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The command's description and argument schema.
    fn definition(&self) -> CommandDefinition;

    /// Runs the command.
    async fn handle(&self, arguments: ParsedArguments) -> Result<(), HandlerError>;
}
