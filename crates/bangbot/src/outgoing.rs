//! Messages the engine asks the chat client to send.

use crate::ids::MessageId;

/// File name used when long text is sent as an attachment.
pub const LONG_MESSAGE_FILE_NAME: &str = "help.txt";

/// How the transport should interpret message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Text is sent verbatim.
    #[default]
    Plain,
    /// Text carries HTML markup (`<b>`, `<i>`, `<pre>`).
    Html,
}

/// An outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingMessage {
    /// A text message.
    Text {
        /// Message body.
        text: String,
        /// Markup interpretation.
        parse_mode: ParseMode,
        /// Message this one replies to.
        reply_to: Option<MessageId>,
    },
    /// A file attachment.
    Document {
        /// Attachment name shown to the recipient.
        file_name: String,
        /// Attachment bytes.
        contents: Vec<u8>,
        /// Message this one replies to.
        reply_to: Option<MessageId>,
    },
}

impl OutgoingMessage {
    /// Plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            parse_mode: ParseMode::Plain,
            reply_to: None,
        }
    }

    /// HTML-formatted text.
    pub fn html(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            parse_mode: ParseMode::Html,
            reply_to: None,
        }
    }

    /// A file attachment.
    pub fn document(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self::Document {
            file_name: file_name.into(),
            contents: contents.into(),
            reply_to: None,
        }
    }

    /// Marks the message as a reply to `message`.
    #[must_use]
    pub fn in_reply_to(mut self, message: MessageId) -> Self {
        match &mut self {
            Self::Text { reply_to, .. } | Self::Document { reply_to, .. } => {
                *reply_to = Some(message);
            }
        }
        self
    }

    /// The message this one replies to, if any.
    #[must_use]
    pub const fn reply_to(&self) -> Option<MessageId> {
        match self {
            Self::Text { reply_to, .. } | Self::Document { reply_to, .. } => *reply_to,
        }
    }

    /// The body of a text message.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Document { .. } => None,
        }
    }
}

/// Shapes possibly long text for sending.
///
/// Text of at most `limit` characters is wrapped in `<pre>` and sent as HTML.
/// Longer text is sent as a [`LONG_MESSAGE_FILE_NAME`] attachment instead,
/// since chat networks cap message length.
#[must_use]
pub fn prepare_long_message(text: &str, limit: usize) -> OutgoingMessage {
    if text.chars().count() > limit {
        OutgoingMessage::document(LONG_MESSAGE_FILE_NAME, text.as_bytes())
    } else {
        OutgoingMessage::html(format!("<pre>{text}</pre>"))
    }
}
