//! Declarative argument schemas for commands.
//!
//! A [`CommandDefinition`] names each argument a command accepts and how its
//! text is turned into a value. Schemas are pure data: the tokenizer,
//! sanitizer, and validator read them, and the `help` command renders them.

use std::fmt;

use crate::value::RawValue;

/// The closed set of argument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// Free text.
    String,
    /// Floating-point number.
    Number,
    /// Presence flag, optionally with an explicit `true`/`false`.
    Boolean,
    /// A chat or user, resolved to an [`EntityId`](crate::EntityId).
    ChatOrUser,
    /// A message in the triggering chat, resolved to a
    /// [`MessageId`](crate::MessageId).
    Message,
}

impl ArgumentType {
    /// The schema spelling of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::ChatOrUser => "chat_or_user",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named argument slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDefinition {
    /// How the argument's text is coerced and resolved.
    pub argument_type: ArgumentType,
    /// Alternate names bound to the same slot.
    pub aliases: Vec<String>,
    /// Whether a missing value fails the command.
    pub required: bool,
    /// Whether the argument collects every occurrence into a list.
    pub is_array: bool,
    /// Value used when the caller supplies nothing.
    pub default: Option<RawValue>,
    /// Text shown by `help`.
    pub description: Option<String>,
}

impl ArgumentDefinition {
    /// An optional, scalar argument of the given type.
    #[must_use]
    pub const fn new(argument_type: ArgumentType) -> Self {
        Self {
            argument_type,
            aliases: Vec::new(),
            required: false,
            is_array: false,
            default: None,
            description: None,
        }
    }

    /// Shorthand for a `string` argument.
    #[must_use]
    pub const fn string() -> Self {
        Self::new(ArgumentType::String)
    }

    /// Shorthand for a `number` argument.
    #[must_use]
    pub const fn number() -> Self {
        Self::new(ArgumentType::Number)
    }

    /// Shorthand for a `boolean` argument.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::new(ArgumentType::Boolean)
    }

    /// Shorthand for a `chat_or_user` argument.
    #[must_use]
    pub const fn chat_or_user() -> Self {
        Self::new(ArgumentType::ChatOrUser)
    }

    /// Shorthand for a `message` argument.
    #[must_use]
    pub const fn message() -> Self {
        Self::new(ArgumentType::Message)
    }

    /// Adds an alternate name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Marks the argument as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Collects every occurrence into an ordered list.
    #[must_use]
    pub const fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Sets the value used when the caller supplies nothing.
    ///
    /// Pointers are accepted directly: `.default_value(Pointer::CurrentChat)`.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<RawValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the `help` description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A command's description and its argument schema.
///
/// Argument names are unique; declaring a name twice replaces the earlier
/// definition in place. Declaration order is the order `help` lists
/// arguments in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandDefinition {
    description: Option<String>,
    arguments: Vec<(String, ArgumentDefinition)>,
}

impl CommandDefinition {
    /// An undescribed command without arguments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: None,
            arguments: Vec::new(),
        }
    }

    /// Sets the `help` description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares an argument.
    #[must_use]
    pub fn argument(mut self, name: impl Into<String>, definition: ArgumentDefinition) -> Self {
        let name = name.into();
        match self.arguments.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = definition,
            None => self.arguments.push((name, definition)),
        }
        self
    }

    /// The `help` description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Declared arguments in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &ArgumentDefinition)> {
        self.arguments
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Looks up an argument by its canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, definition)| definition)
    }

    /// Whether the command declares no arguments at all.
    #[must_use]
    pub fn has_no_arguments(&self) -> bool {
        self.arguments.is_empty()
    }
}
