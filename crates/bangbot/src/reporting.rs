//! Surfacing dispatch failures back into the chat.
//!
//! Hosts pass every [`CommandFailure`] to [`ErrorReporter::report`]. The
//! offending command is forwarded to the debug chat, the error text is
//! posted as a reply to the forwarded copy, and the original is deleted when
//! configured. Each step is attempted independently; failures are logged.

use std::sync::Arc;

use tracing::{info, warn};

use bangbot_config::{ChatTarget, Config};

use crate::client::ChatClient;
use crate::dispatch::CommandFailure;
use crate::ids::MessageId;
use crate::outgoing::OutgoingMessage;

const REPORT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::report");

/// What [`ErrorReporter::report`] managed to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Identifier of the forwarded copy in the debug chat.
    pub forwarded: Option<MessageId>,
    /// Identifier of the error notice.
    pub notice: Option<MessageId>,
    /// Whether the triggering message was deleted.
    pub deleted: bool,
}

/// Reports command failures to the debug chat.
pub struct ErrorReporter {
    client: Arc<dyn ChatClient>,
    debug_chat: ChatTarget,
    remove_command_on_error: bool,
}

impl ErrorReporter {
    /// Creates a reporter using the configured debug chat and removal policy.
    #[must_use]
    pub fn new(client: Arc<dyn ChatClient>, config: &Config) -> Self {
        Self {
            client,
            debug_chat: config.debug_chat(),
            remove_command_on_error: config.remove_command_on_error(),
        }
    }

    /// Reports `failure`. Never fails; see the returned summary.
    pub async fn report(&self, failure: &CommandFailure) -> ReportSummary {
        let origin = failure.origin();
        let mut summary = ReportSummary::default();

        match self.client.forward_message(origin, &self.debug_chat).await {
            Ok(id) => summary.forwarded = Some(id),
            Err(error) => warn!(
                target: REPORT_TARGET,
                origin = %origin,
                chat = %self.debug_chat,
                error = %error,
                "failed to forward failing command"
            ),
        }

        let mut notice = OutgoingMessage::text(failure.to_string());
        if let Some(forwarded) = summary.forwarded {
            notice = notice.in_reply_to(forwarded);
        }
        match self.client.send_message(&self.debug_chat, notice).await {
            Ok(id) => summary.notice = Some(id),
            Err(error) => warn!(
                target: REPORT_TARGET,
                origin = %origin,
                chat = %self.debug_chat,
                error = %error,
                "failed to send error notice"
            ),
        }

        if self.remove_command_on_error {
            match self.client.delete_message(origin).await {
                Ok(()) => summary.deleted = true,
                Err(error) => warn!(
                    target: REPORT_TARGET,
                    origin = %origin,
                    error = %error,
                    "failed to delete failing command"
                ),
            }
        }

        info!(
            target: REPORT_TARGET,
            origin = %origin,
            kind = failure.error().kind(),
            deleted = summary.deleted,
            "command failure reported"
        );
        summary
    }
}
