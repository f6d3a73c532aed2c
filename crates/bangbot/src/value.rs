//! Argument values before and after sanitization.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::ids::{EntityId, MessageId};
use crate::pointer::Pointer;

/// A coerced value straight from the tokenizer, or a declared default.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Uncoerced text, including pointer literals and entity handles.
    Text(String),
    /// A `number` argument's value.
    Number(f64),
    /// A `boolean` argument's value.
    Boolean(bool),
    /// Every occurrence of an array argument, in input order.
    List(Vec<RawValue>),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Pointer> for RawValue {
    fn from(pointer: Pointer) -> Self {
        Self::Text(pointer.canonical().to_owned())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// A fully resolved argument value handed to command handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Text from a `string` argument.
    String(String),
    /// A `number` argument's value.
    Number(f64),
    /// A `boolean` argument's value.
    Boolean(bool),
    /// A resolved `chat_or_user` argument.
    Entity(EntityId),
    /// A resolved `message` argument.
    Message(MessageId),
    /// Array arguments; unresolvable elements stay in place as `None`.
    List(Vec<Option<ArgValue>>),
}

impl ArgValue {
    /// The text of a `string` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// The number of a `number` value.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The flag of a `boolean` value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The entity of a `chat_or_user` value.
    #[must_use]
    pub const fn as_entity(&self) -> Option<EntityId> {
        match self {
            Self::Entity(id) => Some(*id),
            _ => None,
        }
    }

    /// The message of a `message` value.
    #[must_use]
    pub const fn as_message(&self) -> Option<MessageId> {
        match self {
            Self::Message(id) => Some(*id),
            _ => None,
        }
    }

    /// The elements of an array value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Option<Self>]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// The argument bag a handler receives.
///
/// Every declared argument has an entry; `None` means "not supplied" (or
/// supplied but unresolvable, see the sanitizer). Unbound words are kept in
/// order as positionals, serialised under `_`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedArguments {
    #[serde(rename = "_")]
    positional: Vec<String>,
    #[serde(flatten)]
    values: BTreeMap<String, Option<ArgValue>>,
}

impl ParsedArguments {
    pub(crate) fn with_positional(positional: Vec<String>) -> Self {
        Self {
            positional,
            values: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Option<ArgValue>) {
        self.values.insert(key.into(), value);
    }

    /// The resolved value of `key`, if supplied.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.values.get(key).and_then(Option::as_ref)
    }

    /// Whether `key` is a declared argument of the command.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Text of a `string` argument.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ArgValue::as_str)
    }

    /// Value of a `number` argument.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ArgValue::as_number)
    }

    /// Value of a `boolean` argument; unset flags read as `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(ArgValue::as_bool).unwrap_or(false)
    }

    /// Resolved entity of a `chat_or_user` argument.
    #[must_use]
    pub fn entity(&self, key: &str) -> Option<EntityId> {
        self.get(key).and_then(ArgValue::as_entity)
    }

    /// Resolved message of a `message` argument.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<MessageId> {
        self.get(key).and_then(ArgValue::as_message)
    }

    /// Elements of an array argument; empty when unset.
    #[must_use]
    pub fn list(&self, key: &str) -> &[Option<ArgValue>] {
        self.get(key).and_then(ArgValue::as_list).unwrap_or_default()
    }

    /// Words not bound to any argument, in input order.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Whether no argument and no positional was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.values.is_empty()
    }

    /// Declared argument names with their values, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ArgValue>)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> ParsedArguments {
        let mut arguments = ParsedArguments::with_positional(vec!["topic".to_owned()]);
        arguments.insert("chat", Some(ArgValue::Entity(EntityId(-100))));
        arguments.insert("count", Some(ArgValue::Number(5.0)));
        arguments.insert("here", Some(ArgValue::Boolean(true)));
        arguments.insert("message", None);
        arguments.insert(
            "ids",
            Some(ArgValue::List(vec![
                Some(ArgValue::Message(MessageId(1))),
                None,
            ])),
        );
        arguments
    }

    #[test]
    fn typed_accessors_read_matching_values() {
        let arguments = bag();
        assert_eq!(arguments.entity("chat"), Some(EntityId(-100)));
        assert_eq!(arguments.number("count"), Some(5.0));
        assert!(arguments.flag("here"));
        assert_eq!(arguments.message("message"), None);
        assert_eq!(arguments.list("ids").len(), 2);
        assert_eq!(arguments.positional(), ["topic".to_owned()]);
    }

    #[test]
    fn mismatched_accessors_return_nothing() {
        let arguments = bag();
        assert_eq!(arguments.string("count"), None);
        assert!(!arguments.flag("chat"));
        assert!(arguments.list("chat").is_empty());
        assert!(arguments.contains_key("message"));
        assert!(!arguments.contains_key("missing"));
    }

    #[test]
    fn serialises_positionals_under_underscore() {
        let json = serde_json::to_value(bag()).expect("serialise");
        assert_eq!(json["_"], serde_json::json!(["topic"]));
        assert_eq!(json["chat"], serde_json::json!(-100));
        assert_eq!(json["message"], serde_json::Value::Null);
        assert_eq!(json["ids"], serde_json::json!([1, null]));
    }

    #[test]
    fn raw_numbers_render_without_trailing_zero() {
        assert_eq!(RawValue::from(1000).to_string(), "1000");
        assert_eq!(
            RawValue::List(vec![RawValue::from("a"), RawValue::from(true)]).to_string(),
            "a,true"
        );
    }
}
