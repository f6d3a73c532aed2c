//! Schema-driven splitting of argument text into raw values.
//!
//! The tokenizer knows the scalar types (`string`, `number`, `boolean`) and
//! array-ness of each argument, so it can decide whether a flag takes a value
//! and coerce numbers on the spot. `chat_or_user` and `message` values stay as
//! text for the sanitizer.

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::vec::IntoIter;

use tracing::debug;

use crate::dispatch::ValidationError;
use crate::schema::{ArgumentDefinition, ArgumentType, CommandDefinition};
use crate::value::RawValue;

use super::PARSE_TARGET;

/// Tokenizer output: raw values keyed by canonical argument name, plus
/// unbound words.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct RawArguments {
    pub(crate) values: BTreeMap<String, RawValue>,
    pub(crate) positional: Vec<String>,
}

/// Splits `text` according to `definition`.
///
/// # Errors
///
/// Returns a [`ValidationError`] when a `number` argument receives text that
/// is not a finite number, or a `boolean` argument is given an inline value
/// other than `true`/`false`.
pub(crate) fn tokenize(
    text: &str,
    definition: &CommandDefinition,
) -> Result<RawArguments, ValidationError> {
    Tokenizer {
        definition,
        words: split_words(text).into_iter().peekable(),
        parsed: RawArguments::default(),
    }
    .run()
}

/// Parses a finite number, accepting the forms `f64` parsing accepts.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Word {
    text: String,
    quoted: bool,
}

impl Word {
    /// Quoted words and negative numbers are always values.
    fn is_flag(&self) -> bool {
        !self.quoted
            && self.text.len() > 1
            && self.text.starts_with('-')
            && parse_number(&self.text).is_none()
    }
}

/// Splits on whitespace; a quote opening a word groups everything up to the
/// matching quote. There are no escapes, and an unterminated quote runs to
/// the end of the text.
fn split_words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut quote = None::<char>;

    for ch in text.chars() {
        match quote {
            Some(active) if ch == active => quote = None,
            Some(_) => current.push(ch),
            None if (ch == '"' || ch == '\'') && current.is_empty() && !quoted => {
                quote = Some(ch);
                quoted = true;
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() || quoted {
                    words.push(Word {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    quoted = false;
                }
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() || quoted {
        words.push(Word {
            text: current,
            quoted,
        });
    }
    words
}

fn split_inline(flag: &str) -> (&str, Option<&str>) {
    match flag.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (flag, None),
    }
}

struct Tokenizer<'a> {
    definition: &'a CommandDefinition,
    words: Peekable<IntoIter<Word>>,
    parsed: RawArguments,
}

impl<'a> Tokenizer<'a> {
    fn run(mut self) -> Result<RawArguments, ValidationError> {
        while let Some(word) = self.words.next() {
            if !word.is_flag() {
                self.parsed.positional.push(word.text);
                continue;
            }
            if word.text == "--" {
                let rest = self.words.by_ref().map(|word| word.text);
                self.parsed.positional.extend(rest);
                break;
            }
            if let Some(long) = word.text.strip_prefix("--") {
                self.long_flag(long)?;
            } else if let Some(short) = word.text.strip_prefix('-') {
                self.short_flags(short)?;
            }
        }
        Ok(self.parsed)
    }

    fn long_flag(&mut self, body: &str) -> Result<(), ValidationError> {
        let (name, inline) = split_inline(body);
        if inline.is_none() && self.lookup(name).is_none() {
            let negated = name
                .strip_prefix("no-")
                .and_then(|negated| self.lookup(negated))
                .filter(|(_, argument)| argument.argument_type == ArgumentType::Boolean);
            if let Some((key, argument)) = negated {
                self.store(key, argument, RawValue::Boolean(false));
                return Ok(());
            }
        }
        self.apply(name, inline)
    }

    /// `-abc` sets `a` and `b` as bare flags; `c` follows the usual rules.
    ///
    /// A letter naming a non-boolean argument takes the rest of the cluster
    /// as its value, so `-m5` and `-vn-3` bind `5` and `-3`.
    fn short_flags(&mut self, body: &str) -> Result<(), ValidationError> {
        let mut letters = body.chars();
        while let Some(letter) = letters.next() {
            let name = letter.to_string();
            let rest = letters.as_str();
            if let Some(inline) = rest.strip_prefix('=') {
                return self.apply(&name, Some(inline));
            }
            if rest.is_empty() {
                return self.apply(&name, None);
            }
            match self.lookup(&name) {
                Some((_, argument)) if argument.argument_type != ArgumentType::Boolean => {
                    return self.apply(&name, Some(rest));
                }
                _ => self.bare(&name),
            }
        }
        Ok(())
    }

    fn bare(&mut self, name: &str) {
        match self.lookup(name) {
            Some((key, argument)) if argument.argument_type == ArgumentType::Boolean => {
                self.store(key, argument, RawValue::Boolean(true));
            }
            Some((key, _)) => {
                debug!(target: PARSE_TARGET, argument = key, "flag grouped without a value");
            }
            None => debug!(target: PARSE_TARGET, flag = name, "ignoring undeclared flag"),
        }
    }

    fn apply(&mut self, name: &str, inline: Option<&str>) -> Result<(), ValidationError> {
        let Some((key, argument)) = self.lookup(name) else {
            if inline.is_none() {
                self.next_value();
            }
            debug!(target: PARSE_TARGET, flag = name, "ignoring undeclared flag");
            return Ok(());
        };

        if argument.argument_type == ArgumentType::Boolean {
            let flag = match inline {
                Some(value) => parse_bool(value)
                    .ok_or_else(|| ValidationError::non_boolean_argument(key, value))?,
                None => self.next_boolean().unwrap_or(true),
            };
            self.store(key, argument, RawValue::Boolean(flag));
            return Ok(());
        }

        let mut values: Vec<String> = inline.map(str::to_owned).into_iter().collect();
        if argument.is_array {
            self.parsed
                .values
                .entry(key.to_owned())
                .or_insert_with(|| RawValue::List(Vec::new()));
            while let Some(value) = self.next_value() {
                values.push(value);
            }
        } else if values.is_empty() {
            values.extend(self.next_value());
        }

        for value in values {
            let raw = coerce(key, argument.argument_type, value)?;
            self.store(key, argument, raw);
        }
        Ok(())
    }

    /// Canonical names take precedence over aliases.
    fn lookup(&self, flag: &str) -> Option<(&'a str, &'a ArgumentDefinition)> {
        let definition = self.definition;
        definition
            .arguments()
            .find(|(name, _)| *name == flag)
            .or_else(|| {
                definition
                    .arguments()
                    .find(|(_, argument)| argument.aliases.iter().any(|alias| alias == flag))
            })
    }

    fn next_value(&mut self) -> Option<String> {
        self.words.next_if(|word| !word.is_flag()).map(|word| word.text)
    }

    fn next_boolean(&mut self) -> Option<bool> {
        self.words
            .next_if(|word| parse_bool(&word.text).is_some())
            .and_then(|word| parse_bool(&word.text))
    }

    /// Arrays append; scalars keep the last occurrence.
    fn store(&mut self, key: &str, argument: &ArgumentDefinition, value: RawValue) {
        if !argument.is_array {
            self.parsed.values.insert(key.to_owned(), value);
            return;
        }
        let slot = self
            .parsed
            .values
            .entry(key.to_owned())
            .or_insert_with(|| RawValue::List(Vec::new()));
        match slot {
            RawValue::List(items) => items.push(value),
            other => *other = RawValue::List(vec![value]),
        }
    }
}

fn coerce(
    key: &str,
    argument_type: ArgumentType,
    value: String,
) -> Result<RawValue, ValidationError> {
    match argument_type {
        ArgumentType::Number => parse_number(&value)
            .map(RawValue::Number)
            .ok_or_else(|| ValidationError::non_numeric_argument(key, &value)),
        _ => Ok(RawValue::Text(value)),
    }
}
