//! Resolution of domain-typed values against the triggering message.
//!
//! `chat_or_user` and `message` values arrive as text (typed by the user or
//! declared as a default). Pointer literals are resolved from the triggering
//! message, handles through the [`EntityResolver`]. Lookups that find nothing
//! or fail yield `None`; whether that matters is decided by the second
//! validation pass.

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::client::{EntityResolver, TriggerMessage};
use crate::dispatch::ValidationError;
use crate::ids::MessageId;
use crate::pointer::Pointer;
use crate::schema::{ArgumentDefinition, ArgumentType};
use crate::value::{ArgValue, RawValue};

use super::tokenizer::parse_number;

/// Tracing target for value resolution.
pub(crate) const SANITIZE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::sanitize");

/// Resolves raw values for one triggering message.
pub(crate) struct Sanitizer<'a> {
    message: &'a dyn TriggerMessage,
    resolver: &'a dyn EntityResolver,
}

impl<'a> Sanitizer<'a> {
    pub(crate) fn new(message: &'a dyn TriggerMessage, resolver: &'a dyn EntityResolver) -> Self {
        Self { message, resolver }
    }

    /// Resolves the value of argument `key`.
    ///
    /// Absent values pass through untouched. Array elements are resolved
    /// concurrently and keep their input order.
    pub(crate) async fn sanitize(
        &self,
        key: &str,
        argument: &ArgumentDefinition,
        value: Option<RawValue>,
    ) -> Result<Option<ArgValue>, ValidationError> {
        let items = match value {
            None => return Ok(None),
            Some(RawValue::List(items)) => items,
            Some(scalar) if argument.is_array => vec![scalar],
            Some(scalar) => return self.resolve(key, argument.argument_type, scalar).await,
        };

        let resolved = try_join_all(
            items
                .into_iter()
                .map(|item| self.resolve(key, argument.argument_type, item)),
        )
        .await?;
        Ok(Some(ArgValue::List(resolved)))
    }

    async fn resolve(
        &self,
        key: &str,
        argument_type: ArgumentType,
        value: RawValue,
    ) -> Result<Option<ArgValue>, ValidationError> {
        if matches!(value, RawValue::List(_)) {
            return Err(ValidationError::nested_list(key));
        }

        match argument_type {
            ArgumentType::String => Ok(Some(ArgValue::String(value.to_string()))),
            ArgumentType::Number => number(key, &value).map(Some),
            ArgumentType::Boolean => boolean(key, &value).map(Some),
            ArgumentType::ChatOrUser => Ok(self.chat_or_user(&value.to_string()).await),
            ArgumentType::Message => self.message_id(&value.to_string()),
        }
    }

    async fn chat_or_user(&self, value: &str) -> Option<ArgValue> {
        match Pointer::recognise(value, ArgumentType::ChatOrUser) {
            Some(Pointer::CurrentChat) => Some(ArgValue::Entity(self.message.chat_id())),
            Some(Pointer::ReplyUser) => self.reply_sender().await,
            _ => self.resolve_handle(value).await,
        }
    }

    fn message_id(&self, value: &str) -> Result<Option<ArgValue>, ValidationError> {
        if Pointer::recognise(value, ArgumentType::Message) == Some(Pointer::ReplyMessage) {
            return Ok(self.message.reply_to_message_id().map(ArgValue::Message));
        }
        value
            .parse::<i64>()
            .map(|id| Some(ArgValue::Message(MessageId(id))))
            .map_err(|_| ValidationError::non_numeric_message(value))
    }

    async fn reply_sender(&self) -> Option<ArgValue> {
        match self.message.reply_message().await {
            Ok(Some(reply)) => reply.sender_id.map(ArgValue::Entity),
            Ok(None) => {
                debug!(target: SANITIZE_TARGET, "reply-user pointer used outside a reply");
                None
            }
            Err(error) => {
                warn!(
                    target: SANITIZE_TARGET,
                    error = %error,
                    "reply lookup failed; treating sender as unset"
                );
                None
            }
        }
    }

    async fn resolve_handle(&self, value: &str) -> Option<ArgValue> {
        let handle = value.strip_prefix('@').unwrap_or(value);
        match self.resolver.resolve_entity(handle).await {
            Ok(Some(id)) => Some(ArgValue::Entity(id)),
            Ok(None) => {
                debug!(target: SANITIZE_TARGET, handle, "handle did not resolve");
                None
            }
            Err(error) => {
                warn!(
                    target: SANITIZE_TARGET,
                    handle,
                    error = %error,
                    "entity resolution failed; treating value as unset"
                );
                None
            }
        }
    }
}

fn number(key: &str, value: &RawValue) -> Result<ArgValue, ValidationError> {
    match value {
        RawValue::Number(number) => Ok(ArgValue::Number(*number)),
        other => {
            let text = other.to_string();
            parse_number(&text)
                .map(ArgValue::Number)
                .ok_or_else(|| ValidationError::non_numeric_argument(key, &text))
        }
    }
}

fn boolean(key: &str, value: &RawValue) -> Result<ArgValue, ValidationError> {
    match value {
        RawValue::Boolean(flag) => Ok(ArgValue::Boolean(*flag)),
        RawValue::Text(text) if text == "true" => Ok(ArgValue::Boolean(true)),
        RawValue::Text(text) if text == "false" => Ok(ArgValue::Boolean(false)),
        other => Err(ValidationError::non_boolean_argument(key, &other.to_string())),
    }
}
