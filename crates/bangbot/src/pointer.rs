//! Pointer sentinels: argument values that refer to the triggering message.
//!
//! A user can write `!log -c here` instead of spelling out the chat, or a
//! command can default an argument to "the message being replied to". Each
//! pointer has a closed family of literal spellings; the literals never leave
//! this module.

use std::fmt;

use crate::schema::ArgumentType;

const CURRENT_CHAT_LITERALS: &[&str] = &["current-chat", "here"];
const REPLY_USER_LITERALS: &[&str] = &["reply-user", "replyed-user"];
const REPLY_MESSAGE_LITERALS: &[&str] = &["reply-message"];

/// A contextual reference resolved against the triggering message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    /// The chat the triggering message was sent in.
    CurrentChat,
    /// The sender of the message being replied to.
    ReplyUser,
    /// The message being replied to.
    ReplyMessage,
}

impl Pointer {
    /// Every accepted spelling of this pointer; the first is canonical.
    #[must_use]
    pub const fn literals(self) -> &'static [&'static str] {
        match self {
            Self::CurrentChat => CURRENT_CHAT_LITERALS,
            Self::ReplyUser => REPLY_USER_LITERALS,
            Self::ReplyMessage => REPLY_MESSAGE_LITERALS,
        }
    }

    /// The canonical spelling, used when a pointer is a declared default.
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::CurrentChat => "current-chat",
            Self::ReplyUser => "reply-user",
            Self::ReplyMessage => "reply-message",
        }
    }

    /// Argument type whose values may use this pointer.
    #[must_use]
    pub const fn applies_to(self) -> ArgumentType {
        match self {
            Self::CurrentChat | Self::ReplyUser => ArgumentType::ChatOrUser,
            Self::ReplyMessage => ArgumentType::Message,
        }
    }

    /// Recognises a pointer literal in a value of the given argument type.
    ///
    /// Literals from another type's family are not pointers there: `here`
    /// given to a `message` argument is ordinary text.
    #[must_use]
    pub fn recognise(value: &str, argument_type: ArgumentType) -> Option<Self> {
        [Self::CurrentChat, Self::ReplyUser, Self::ReplyMessage]
            .into_iter()
            .filter(|pointer| pointer.applies_to() == argument_type)
            .find(|pointer| pointer.literals().contains(&value))
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
