//! Capabilities the engine borrows from the chat transport.
//!
//! The engine never talks to a chat network directly. Hosts implement these
//! traits over their client library and hand them to the
//! [`Dispatcher`](crate::Dispatcher) as a [`Collaborators`] bundle.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use bangbot_config::ChatTarget;

use crate::ids::{EntityId, MessageId, MessageOrigin};
use crate::outgoing::OutgoingMessage;

/// Failure reported by a transport capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientError {
    message: String,
}

impl ClientError {
    /// Creates a client error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The transport's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The message a trigger replies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyMessage {
    /// Identifier of the replied-to message.
    pub id: MessageId,
    /// Sender of the replied-to message, when the transport knows it.
    pub sender_id: Option<EntityId>,
}

/// The inbound message that may carry a command.
#[async_trait]
pub trait TriggerMessage: Send + Sync {
    /// Raw message text.
    fn text(&self) -> &str;

    /// Chat the message was sent in.
    fn chat_id(&self) -> EntityId;

    /// Identifier of the message itself.
    fn message_id(&self) -> MessageId;

    /// Identifier of the message this one replies to, if any.
    fn reply_to_message_id(&self) -> Option<MessageId>;

    /// Fetches the replied-to message.
    ///
    /// Returns `Ok(None)` when the message is not a reply.
    async fn reply_message(&self) -> Result<Option<ReplyMessage>, ClientError>;

    /// Location of this message, for failure reports.
    fn origin(&self) -> MessageOrigin {
        MessageOrigin {
            chat_id: self.chat_id(),
            message_id: self.message_id(),
        }
    }
}

/// Resolves user-supplied handles (usernames, numeric ids) to entities.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    /// Looks up `handle`, returning `Ok(None)` when nothing matches.
    async fn resolve_entity(&self, handle: &str) -> Result<Option<EntityId>, ClientError>;
}

/// Outbound chat operations used by the `help` command and error reporting.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `message` to `chat`, returning the new message's identifier.
    async fn send_message(
        &self,
        chat: &ChatTarget,
        message: OutgoingMessage,
    ) -> Result<MessageId, ClientError>;

    /// Forwards the message at `origin` into `chat`, returning the copy's identifier.
    async fn forward_message(
        &self,
        origin: MessageOrigin,
        chat: &ChatTarget,
    ) -> Result<MessageId, ClientError>;

    /// Deletes the message at `origin` for every participant.
    async fn delete_message(&self, origin: MessageOrigin) -> Result<(), ClientError>;
}

/// Explicit dependency bundle handed to the dispatcher.
#[derive(Clone)]
pub struct Collaborators {
    /// Handle and username resolution.
    pub resolver: Arc<dyn EntityResolver>,
    /// Outbound messaging.
    pub client: Arc<dyn ChatClient>,
}

impl Collaborators {
    /// Bundles the transport capabilities.
    pub fn new(resolver: Arc<dyn EntityResolver>, client: Arc<dyn ChatClient>) -> Self {
        Self { resolver, client }
    }
}

impl From<EntityId> for ChatTarget {
    fn from(id: EntityId) -> Self {
        Self::Id(id.0)
    }
}
