//! Turns argument text into a resolved [`ParsedArguments`] bag.
//!
//! For every declared argument, in declaration order:
//!
//! 1. take the tokenized value, or the declared default when none was given;
//! 2. validate it (a required argument must have a value);
//! 3. resolve it against the triggering message (see [`sanitizer`]);
//! 4. validate again, since resolution may have produced nothing.
//!
//! Absent optional arrays become empty lists between steps 2 and 3.

mod sanitizer;
mod tokenizer;
mod validator;

use crate::client::{EntityResolver, TriggerMessage};
use crate::dispatch::ValidationError;
use crate::schema::CommandDefinition;
use crate::value::{ParsedArguments, RawValue};

use self::sanitizer::Sanitizer;
use self::tokenizer::tokenize;
pub use self::validator::validate;

/// Tracing target for tokenizing.
pub(crate) const PARSE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::parse");

/// Parses argument text against one command's schema for one message.
pub struct CommandArgumentParser<'a> {
    definition: &'a CommandDefinition,
    message: &'a dyn TriggerMessage,
    resolver: &'a dyn EntityResolver,
}

impl<'a> CommandArgumentParser<'a> {
    /// Binds a schema to the triggering message and the entity resolver.
    pub fn new(
        definition: &'a CommandDefinition,
        message: &'a dyn TriggerMessage,
        resolver: &'a dyn EntityResolver,
    ) -> Self {
        Self {
            definition,
            message,
            resolver,
        }
    }

    /// Runs the full pipeline over `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a value cannot be coerced, a
    /// `message` value is not numeric, or a required argument is missing
    /// before or after resolution.
    pub async fn parse(&self, text: &str) -> Result<ParsedArguments, ValidationError> {
        let raw = tokenize(text, self.definition)?;
        let mut values = raw.values;
        let mut parsed = ParsedArguments::with_positional(raw.positional);
        let sanitizer = Sanitizer::new(self.message, self.resolver);

        for (key, argument) in self.definition.arguments() {
            let value = values.remove(key).or_else(|| argument.default.clone());
            validate(key, argument, value.as_ref())?;

            let value = match value {
                None if argument.is_array => Some(RawValue::List(Vec::new())),
                value => value,
            };
            let resolved = sanitizer.sanitize(key, argument, value).await?;
            validate(key, argument, resolved.as_ref())?;

            parsed.insert(key, resolved);
        }
        Ok(parsed)
    }
}
