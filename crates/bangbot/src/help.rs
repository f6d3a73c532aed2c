//! The built-in `help` command.
//!
//! `!help` lists every registered command with its description. `!help log`
//! describes one command and its arguments. Output is HTML, sent as a `<pre>`
//! block or as an attachment when long, to the chat given by `--chat`
//! (default: the chat the command was typed in), or to the configured debug
//! chat with `--here false`.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use tracing::debug;

use bangbot_config::{ChatTarget, Config};

use crate::client::ChatClient;
use crate::dispatch::{CommandHandler, CommandNotFound, CommandRegistry, HandlerError};
use crate::outgoing::prepare_long_message;
use crate::pointer::Pointer;
use crate::schema::{ArgumentDefinition, CommandDefinition};
use crate::value::ParsedArguments;

/// Name the dispatcher registers [`HelpCommandHandler`] under.
pub const HELP_COMMAND: &str = "help";

const NOTHING_TO_SHOW: &str = "Nothing to show";
const HELP_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::help");

/// Renders help for the commands in a registry.
///
/// The handler holds the registry weakly; the registry owns the handler.
pub struct HelpCommandHandler {
    registry: Weak<CommandRegistry>,
    client: Arc<dyn ChatClient>,
    debug_chat: ChatTarget,
    long_message_limit: usize,
}

impl HelpCommandHandler {
    /// Creates the handler for `registry`.
    #[must_use]
    pub fn new(
        registry: Weak<CommandRegistry>,
        client: Arc<dyn ChatClient>,
        config: &Config,
    ) -> Self {
        Self {
            registry,
            client,
            debug_chat: config.debug_chat(),
            long_message_limit: config.long_message_limit(),
        }
    }

    fn destination(&self, arguments: &ParsedArguments) -> ChatTarget {
        if !arguments.flag("here") {
            return self.debug_chat.clone();
        }
        arguments.entity("chat").map_or_else(
            || {
                debug!(target: HELP_TARGET, "help chat unresolved; using the debug chat");
                self.debug_chat.clone()
            },
            ChatTarget::from,
        )
    }
}

#[async_trait]
impl CommandHandler for HelpCommandHandler {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new()
            .with_description("Lists commands, or describes the command named by the first word")
            .argument(
                "here",
                ArgumentDefinition::boolean()
                    .alias("h")
                    .default_value(true)
                    .describe("send to --chat; false sends to the debug chat"),
            )
            .argument(
                "chat",
                ArgumentDefinition::chat_or_user()
                    .alias("c")
                    .default_value(Pointer::CurrentChat)
                    .describe("chat that receives the help"),
            )
    }

    async fn handle(&self, arguments: ParsedArguments) -> Result<(), HandlerError> {
        let registry = self
            .registry
            .upgrade()
            .ok_or(HandlerError::RegistryUnavailable)?;

        let text = match arguments.positional().first() {
            Some(topic) => command_help(&registry, topic)?,
            None => general_help(&registry),
        };
        let text = if text.trim().is_empty() {
            NOTHING_TO_SHOW.to_owned()
        } else {
            text
        };

        let destination = self.destination(&arguments);
        self.client
            .send_message(&destination, prepare_long_message(&text, self.long_message_limit))
            .await?;
        Ok(())
    }
}

/// Every command in registration order with its description.
fn general_help(registry: &CommandRegistry) -> String {
    registry
        .entries()
        .into_iter()
        .map(|(name, handler)| {
            let definition = handler.definition();
            let description = definition
                .description()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .unwrap_or("<no definition provided>");
            format!("<b>{name}</b> \n  -     {description}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One command's description and arguments.
fn command_help(registry: &CommandRegistry, topic: &str) -> Result<String, CommandNotFound> {
    let handler = registry
        .get(topic)
        .ok_or_else(|| CommandNotFound::new(topic, registry.names()))?;
    let definition = handler.definition();
    let description = definition
        .description()
        .filter(|text| !text.is_empty())
        .unwrap_or("<No description>");
    let arguments = definition
        .arguments()
        .map(|(name, argument)| argument_help(name, argument))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(format!("<b>{topic}</b>\n -  {description}\n\n{arguments}"))
}

fn argument_help(name: &str, argument: &ArgumentDefinition) -> String {
    let names = std::iter::once(name)
        .chain(argument.aliases.iter().map(String::as_str))
        .map(|flag| {
            if flag.chars().count() == 1 {
                format!("-{flag}")
            } else {
                format!("--{flag}")
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    let kind = if argument.is_array {
        format!("[...{}]", argument.argument_type)
    } else {
        argument.argument_type.to_string()
    };
    let default = argument
        .default
        .as_ref()
        .map(|value| format!("(default: <i>{value})</i>"))
        .unwrap_or_default();
    let required = if argument.required {
        "required"
    } else {
        "[optional]"
    };
    let description = argument
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or("<No description>");
    format!("<b>{names}</b> - {kind} {default} {required}\n{description}")
}
