//! Identifier newtypes shared by the parse pipeline and the collaborators.

use std::fmt;

use serde::Serialize;

/// Opaque identifier of a chat or user, as resolved by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a message within its chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a triggering message lives; carried by failures so hosts can
/// forward or delete the offending command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageOrigin {
    /// Chat the message was sent in.
    pub chat_id: EntityId,
    /// The message itself.
    pub message_id: MessageId,
}

impl fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chat_id, self.message_id)
    }
}
