//! Test double for [`ChatClient`] that records every call for assertions.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use bangbot_config::ChatTarget;

use crate::client::{ChatClient, ClientError};
use crate::ids::{MessageId, MessageOrigin};
use crate::outgoing::OutgoingMessage;

/// A recorded client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    /// `send_message`.
    Send {
        chat: ChatTarget,
        message: OutgoingMessage,
    },
    /// `forward_message`.
    Forward {
        origin: MessageOrigin,
        chat: ChatTarget,
    },
    /// `delete_message`.
    Delete(MessageOrigin),
}

/// Records calls and hands out increasing message ids from 1000.
#[derive(Debug)]
pub struct RecordingChatClient {
    calls: Mutex<Vec<ClientCall>>,
    next_id: AtomicI64,
    fail_forward: bool,
    fail_delete: bool,
}

impl Default for RecordingChatClient {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1000),
            fail_forward: false,
            fail_delete: false,
        }
    }
}

impl RecordingChatClient {
    /// Makes `forward_message` fail.
    #[must_use]
    pub fn failing_forward(mut self) -> Self {
        self.fail_forward = true;
        self
    }

    /// Makes `delete_message` fail.
    #[must_use]
    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Captures a copy of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls
            .lock()
            .expect("chat client mutex poisoned")
            .clone()
    }

    /// Messages sent so far, with their destinations.
    #[must_use]
    pub fn sent(&self) -> Vec<(ChatTarget, OutgoingMessage)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ClientCall::Send { chat, message } => Some((chat, message)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ClientCall) {
        self.calls
            .lock()
            .expect("chat client mutex poisoned")
            .push(call);
    }

    fn allocate(&self) -> MessageId {
        MessageId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn send_message(
        &self,
        chat: &ChatTarget,
        message: OutgoingMessage,
    ) -> Result<MessageId, ClientError> {
        self.record(ClientCall::Send {
            chat: chat.clone(),
            message,
        });
        Ok(self.allocate())
    }

    async fn forward_message(
        &self,
        origin: MessageOrigin,
        chat: &ChatTarget,
    ) -> Result<MessageId, ClientError> {
        self.record(ClientCall::Forward {
            origin,
            chat: chat.clone(),
        });
        if self.fail_forward {
            return Err(ClientError::new("CHAT_FORWARDS_RESTRICTED"));
        }
        Ok(self.allocate())
    }

    async fn delete_message(&self, origin: MessageOrigin) -> Result<(), ClientError> {
        self.record(ClientCall::Delete(origin));
        if self.fail_delete {
            return Err(ClientError::new("MESSAGE_DELETE_FORBIDDEN"));
        }
        Ok(())
    }
}
