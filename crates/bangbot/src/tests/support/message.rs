//! Scriptable triggering message.

use async_trait::async_trait;

use crate::client::{ClientError, ReplyMessage, TriggerMessage};
use crate::ids::{EntityId, MessageId};

/// Message id reported by [`FakeMessage::failing_reply_lookup`].
pub const UNREACHABLE_REPLY_ID: MessageId = MessageId(404);

#[derive(Debug, Clone, Copy)]
enum Reply {
    Absent,
    Present(ReplyMessage),
    Failing,
}

/// A [`TriggerMessage`] with fixed text, chat, and reply.
#[derive(Debug, Clone)]
pub struct FakeMessage {
    text: String,
    chat_id: EntityId,
    message_id: MessageId,
    reply: Reply,
}

impl FakeMessage {
    /// A message in chat `-100` with id `1` that replies to nothing.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chat_id: EntityId(-100),
            message_id: MessageId(1),
            reply: Reply::Absent,
        }
    }

    /// Moves the message to another chat.
    #[must_use]
    pub fn in_chat(mut self, chat: i64) -> Self {
        self.chat_id = EntityId(chat);
        self
    }

    /// Changes the message's own id.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.message_id = MessageId(id);
        self
    }

    /// Makes the message a reply to `reply`.
    #[must_use]
    pub fn replying_to(mut self, reply: ReplyMessage) -> Self {
        self.reply = Reply::Present(reply);
        self
    }

    /// Makes the message a reply whose lookup fails.
    #[must_use]
    pub fn failing_reply_lookup(mut self) -> Self {
        self.reply = Reply::Failing;
        self
    }
}

#[async_trait]
impl TriggerMessage for FakeMessage {
    fn text(&self) -> &str {
        &self.text
    }

    fn chat_id(&self) -> EntityId {
        self.chat_id
    }

    fn message_id(&self) -> MessageId {
        self.message_id
    }

    fn reply_to_message_id(&self) -> Option<MessageId> {
        match self.reply {
            Reply::Absent => None,
            Reply::Present(reply) => Some(reply.id),
            Reply::Failing => Some(UNREACHABLE_REPLY_ID),
        }
    }

    async fn reply_message(&self) -> Result<Option<ReplyMessage>, ClientError> {
        match self.reply {
            Reply::Absent => Ok(None),
            Reply::Present(reply) => Ok(Some(reply)),
            Reply::Failing => Err(ClientError::new("MESSAGE_ID_INVALID")),
        }
    }
}
