//! BDD test world: a dispatcher wired to recording collaborators.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use bangbot_config::Config;

use crate::client::{Collaborators, ReplyMessage};
use crate::dispatch::{
    CommandFailure, CommandHandler, DispatchOutcome, Dispatcher, HandlerError,
};
use crate::ids::{EntityId, MessageId};
use crate::pointer::Pointer;
use crate::schema::{ArgumentDefinition, CommandDefinition};
use crate::value::ParsedArguments;

use super::block_on;
use super::chat_client::RecordingChatClient;
use super::message::FakeMessage;
use super::resolver::StaticResolver;

/// Handler that records the arguments of every invocation.
pub struct RecordingHandler {
    definition: CommandDefinition,
    received: Mutex<Vec<ParsedArguments>>,
    failure: Option<String>,
}

impl RecordingHandler {
    /// A handler that always succeeds.
    pub fn new(definition: CommandDefinition) -> Self {
        Self {
            definition,
            received: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// A handler that records, then fails with `message`.
    pub fn failing(definition: CommandDefinition, message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::new(definition)
        }
    }

    /// Arguments of every invocation so far.
    pub fn received(&self) -> Vec<ParsedArguments> {
        self.received
            .lock()
            .expect("handler mutex poisoned")
            .clone()
    }

    /// Arguments of the latest invocation.
    pub fn last(&self) -> Option<ParsedArguments> {
        self.received().pop()
    }
}

#[async_trait]
impl CommandHandler for RecordingHandler {
    fn definition(&self) -> CommandDefinition {
        self.definition.clone()
    }

    async fn handle(&self, arguments: ParsedArguments) -> Result<(), HandlerError> {
        self.received
            .lock()
            .expect("handler mutex poisoned")
            .push(arguments);
        match &self.failure {
            Some(message) => Err(HandlerError::failed(message.clone())),
            None => Ok(()),
        }
    }
}

/// `!log`: dumps a message.
pub fn log_definition() -> CommandDefinition {
    CommandDefinition::new()
        .with_description("Dumps a message as JSON")
        .argument(
            "here",
            ArgumentDefinition::boolean()
                .alias("h")
                .default_value(false),
        )
        .argument(
            "chat",
            ArgumentDefinition::chat_or_user()
                .alias("c")
                .default_value(Pointer::CurrentChat),
        )
        .argument(
            "message",
            ArgumentDefinition::message()
                .alias("m")
                .required()
                .default_value(Pointer::ReplyMessage),
        )
}

/// `!all`: mentions users.
pub fn all_definition() -> CommandDefinition {
    CommandDefinition::new()
        .with_description("Mentions everyone in a chat")
        .argument(
            "chat",
            ArgumentDefinition::chat_or_user()
                .alias("c")
                .default_value(Pointer::CurrentChat),
        )
        .argument(
            "users",
            ArgumentDefinition::chat_or_user().alias("u").array(),
        )
        .argument("count", ArgumentDefinition::number().alias("n"))
}

/// Scenario world shared across BDD steps.
pub struct DispatchWorld {
    pub client: Arc<RecordingChatClient>,
    pub dispatcher: Dispatcher,
    handlers: HashMap<String, Arc<RecordingHandler>>,
    reply: Option<ReplyMessage>,
    outcome: Option<Result<DispatchOutcome, CommandFailure>>,
}

impl DispatchWorld {
    /// Builds a dispatcher that knows `alice` (11) and `bob` (12).
    pub fn new() -> Self {
        let client = Arc::new(RecordingChatClient::default());
        let resolver = Arc::new(StaticResolver::default().with("alice", 11).with("bob", 12));
        let collaborators = Collaborators::new(resolver, Arc::clone(&client) as _);
        Self {
            client,
            dispatcher: Dispatcher::new(collaborators, &Config::default()),
            handlers: HashMap::new(),
            reply: None,
            outcome: None,
        }
    }

    /// Registers a recording handler.
    pub fn register(&mut self, name: &str, handler: RecordingHandler) {
        let handler = Arc::new(handler);
        self.dispatcher
            .register(name, Arc::clone(&handler) as Arc<dyn CommandHandler>)
            .expect("valid command name");
        self.handlers.insert(name.to_owned(), handler);
    }

    /// Makes the next dispatched message a reply.
    pub fn reply_to(&mut self, message: i64, sender: Option<i64>) {
        self.reply = Some(ReplyMessage {
            id: MessageId(message),
            sender_id: sender.map(EntityId),
        });
    }

    /// Dispatches `text` from chat `-100`.
    pub fn dispatch(&mut self, text: &str) {
        let mut message = FakeMessage::new(text);
        if let Some(reply) = self.reply {
            message = message.replying_to(reply);
        }
        self.outcome = Some(block_on(self.dispatcher.handle_message(&message)));
    }

    /// The latest dispatch result.
    pub fn outcome(&self) -> &Result<DispatchOutcome, CommandFailure> {
        self.outcome.as_ref().expect("a message was dispatched")
    }

    /// Arguments the named handler received last.
    pub fn arguments_of(&self, name: &str) -> ParsedArguments {
        self.handlers
            .get(name)
            .and_then(|handler| handler.last())
            .expect("handler was invoked")
    }
}
