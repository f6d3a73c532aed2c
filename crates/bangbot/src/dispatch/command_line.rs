//! Splits `!name rest` message text into a command name and argument text.

/// Marker that distinguishes commands from ordinary chat messages.
pub const COMMAND_PREFIX: char = '!';

/// A command invocation found at the start of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    /// The longest `[A-Za-z0-9_-]` run after the prefix.
    pub name: &'a str,
    /// Text after the command token and one separating space.
    pub arguments: &'a str,
}

impl<'a> CommandLine<'a> {
    /// Extracts a command from message text.
    ///
    /// The text is trimmed first. Returns `None` when it does not start with
    /// [`COMMAND_PREFIX`] or no name characters follow it; such messages are
    /// not commands. The command token is everything up to the first space,
    /// so trailing junk glued to the name (`!log@bot`) is dropped together
    /// with the name rather than leaking into the arguments.
    #[must_use]
    pub fn extract(text: &'a str) -> Option<Self> {
        let body = text.trim().strip_prefix(COMMAND_PREFIX)?;
        let name_len = body
            .char_indices()
            .find(|(_, ch)| !is_name_char(*ch))
            .map_or(body.len(), |(index, _)| index);
        let name = body.get(..name_len).filter(|name| !name.is_empty())?;

        let arguments = body.find(' ').map_or("", |space| {
            body.get(space + 1..).unwrap_or_default()
        });

        Some(Self { name, arguments })
    }
}

/// Whether `name` can be extracted from message text in full.
#[must_use]
pub fn is_valid_command_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

const fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}
