//! Turning a line of user input into a command.
//!
//! Lines starting with `/` are slash-commands: built-ins are dispatched to
//! their own parsing routine, other registered names are validated against
//! their syntax template and handed back as a [`CustomCommand`]. Anything
//! else is a message to the current destination.

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::builtin::{Builtin, Invocation};
use crate::command::Command;
use crate::error::{ParseError, Result, SyntaxError};
use crate::registry::{canonical_name, Registry};
use crate::syntax::SyntaxTemplate;

/// Prefix that marks a line as a slash-command.
pub const COMMAND_PREFIX: char = '/';

/// A registered custom command that matched its syntax.
///
/// The parser does not know what custom commands do; the caller executes
/// them (alias expansion, scripting, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomCommand {
    /// Upper-cased command name.
    pub name: String,
    /// Argument words as typed.
    pub args: Vec<String>,
}

/// Successful result of parsing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsedInput {
    /// A protocol command ready to send.
    Command(Command),
    /// A custom command for the caller to execute.
    Custom(CustomCommand),
}

impl ParsedInput {
    /// The protocol command, if this is one.
    pub fn command(&self) -> Option<&Command> {
        match self {
            Self::Command(cmd) => Some(cmd),
            Self::Custom(_) => None,
        }
    }

    /// The custom command, if this is one.
    pub fn custom(&self) -> Option<&CustomCommand> {
        match self {
            Self::Command(_) => None,
            Self::Custom(custom) => Some(custom),
        }
    }
}

/// Slash-command parser with its own command registry.
///
/// Reads (parse, completion, usage) take a shared lock on the registry;
/// adding or removing custom commands takes it exclusively. The parser can
/// be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct CommandParser {
    registry: RwLock<Registry>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Create a parser whose registry holds the built-in commands.
    pub fn new() -> Self {
        Self::with_registry(Registry::with_builtins())
    }

    /// Create a parser over an existing registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Parse one line of input addressed to `destination`.
    ///
    /// ```
    /// use slirc_cmd::{Command, CommandParser, ParsedInput};
    ///
    /// let parser = CommandParser::new();
    /// let parsed = parser.parse("#rust", "/join #tokio").unwrap();
    /// assert_eq!(parsed, ParsedInput::Command(Command::JOIN("#tokio".into(), None)));
    /// assert!(parser.parse("#rust", "/join").is_err());
    /// ```
    pub fn parse(&self, destination: &str, text: &str) -> Result<ParsedInput> {
        self.parse_at(destination, text, chrono::Utc::now().timestamp())
    }

    /// Like [`parse`](Self::parse), with the Unix timestamp used by PING supplied.
    pub fn parse_at(&self, destination: &str, text: &str, now: i64) -> Result<ParsedInput> {
        let Some(line) = text.strip_prefix(COMMAND_PREFIX) else {
            trace!(destination, "plain message");
            return Ok(ParsedInput::Command(Command::PRIVMSG(
                destination.to_owned(),
                text.to_owned(),
            )));
        };

        let mut words = line.split_whitespace();
        let name = canonical_name(words.next().unwrap_or_default());
        let args: Vec<&str> = words.collect();

        if let Some(builtin) = Builtin::from_name(&name) {
            let inv = Invocation {
                destination,
                args: &args,
                now,
            };
            return match builtin.parse(&inv) {
                Some(cmd) => {
                    trace!(command = %name, args = args.len(), "built-in command");
                    Ok(ParsedInput::Command(cmd))
                }
                None => {
                    debug!(command = %name, args = args.len(), "built-in arguments rejected");
                    Err(ParseError::MalformedArguments {
                        command: name,
                        got: args.len(),
                        usage: builtin.usage(),
                    })
                }
            };
        }

        let registry = self.registry.read();
        let Some(template) = registry.template_canonical(&name) else {
            debug!(command = %name, "unknown command");
            return Err(ParseError::UnknownCommand(name));
        };

        if !template.accepts(&args) {
            debug!(command = %name, args = args.len(), "custom command arguments rejected");
            let usage = registry.syntax(&name).unwrap_or_else(|| name.clone());
            return Err(ParseError::MalformedArguments {
                command: name,
                got: args.len(),
                usage,
            });
        }

        trace!(command = %name, args = args.len(), "custom command");
        Ok(ParsedInput::Custom(CustomCommand {
            name,
            args: args.into_iter().map(str::to_owned).collect(),
        }))
    }

    /// All registered command names, sorted.
    pub fn commands(&self) -> Vec<String> {
        self.registry.read().names().map(str::to_owned).collect()
    }

    /// Completion candidates; see [`Registry::suggest`].
    pub fn suggest<S: AsRef<str>>(&self, command: &str, args: &[S]) -> Vec<String> {
        self.registry.read().suggest(command, args)
    }

    /// Usage line for `name`, e.g. `JOIN <channel> (<key>)`.
    pub fn syntax(&self, name: &str) -> Option<String> {
        self.registry.read().syntax(name)
    }

    /// Template registered for `name`.
    pub fn template(&self, name: &str) -> Option<SyntaxTemplate> {
        self.registry.read().template(name).cloned()
    }

    /// Register or replace a custom command. Malformed templates are rejected.
    pub fn add_custom(&self, name: &str, syntax: &str) -> std::result::Result<(), SyntaxError> {
        self.registry.write().add_custom(name, syntax)
    }

    /// Remove a command from the registry. Returns whether it was present.
    ///
    /// Built-in names may be removed; their dispatch routine still handles
    /// them, only completion and usage lookups lose the entry.
    pub fn remove_custom(&self, name: &str) -> bool {
        self.registry.write().remove(name).is_some()
    }

    /// A copy of the current registry.
    pub fn snapshot(&self) -> Registry {
        self.registry.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn parse(parser: &CommandParser, text: &str) -> Result<ParsedInput> {
        parser.parse_at("#rust", text, NOW)
    }

    #[test]
    fn test_plain_text_is_privmsg() {
        let parser = CommandParser::new();
        assert_eq!(
            parse(&parser, "hello world"),
            Ok(ParsedInput::Command(Command::PRIVMSG(
                "#rust".into(),
                "hello world".into()
            )))
        );
        assert_eq!(
            parse(&parser, ""),
            Ok(ParsedInput::Command(Command::PRIVMSG("#rust".into(), String::new())))
        );
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        let parser = CommandParser::new();
        assert_eq!(
            parse(&parser, "/NiCk neo").unwrap().command(),
            Some(&Command::NICK("neo".into()))
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let parser = CommandParser::new();
        assert_eq!(
            parse(&parser, "/kick   bob \t too   loud ").unwrap().command(),
            Some(&Command::KICK(
                "#rust".into(),
                "bob".into(),
                Some("too loud".into())
            ))
        );
    }

    #[test]
    fn test_bare_prefix_is_unknown() {
        let parser = CommandParser::new();
        assert_eq!(
            parse(&parser, "/"),
            Err(ParseError::UnknownCommand(String::new()))
        );
        assert_eq!(
            parse(&parser, "/   "),
            Err(ParseError::UnknownCommand(String::new()))
        );
    }

    #[test]
    fn test_builtin_failure_skips_registry() {
        let parser = CommandParser::new();
        parser.add_custom("join", "(<a>) (<b>) (<c>)").unwrap();
        assert!(matches!(
            parse(&parser, "/join"),
            Err(ParseError::MalformedArguments { ref command, got: 0, .. }) if command == "JOIN"
        ));
    }

    #[test]
    fn test_removed_builtin_still_dispatches() {
        let parser = CommandParser::new();
        assert!(parser.remove_custom("nick"));
        assert_eq!(parser.syntax("nick"), None);
        assert!(parse(&parser, "/nick neo").is_ok());
    }

    #[test]
    fn test_custom_usage_in_error() {
        let parser = CommandParser::new();
        parser.add_custom("slap", "<nick> (<fish>)").unwrap();
        assert_eq!(
            parse(&parser, "/slap"),
            Err(ParseError::MalformedArguments {
                command: "SLAP".into(),
                got: 0,
                usage: "SLAP <nick> (<fish>)".into(),
            })
        );
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommandParser>();
    }
}
