//! Error types for slash-command parsing.
//!
//! Every parse call reports its failure through [`ParseError`] in its own
//! return value; there is no shared error state between calls.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors produced when a line of user input cannot be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The command name matches neither a built-in nor a registered custom command.
    ///
    /// A bare `/` yields an empty name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command is known but its arguments do not fit its syntax.
    #[error("invalid arguments for {command} (got {got}), usage: {usage}")]
    MalformedArguments {
        /// Upper-cased command name.
        command: String,
        /// Number of arguments supplied.
        got: usize,
        /// Usage string, e.g. `JOIN <channel> (<key>)`.
        usage: String,
    },
}

impl ParseError {
    /// Get a static error code string for logging and status display.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::MalformedArguments { .. } => "malformed_arguments",
        }
    }

    /// The upper-cased command name the error refers to.
    pub fn command(&self) -> &str {
        match self {
            Self::UnknownCommand(name) => name,
            Self::MalformedArguments { command, .. } => command,
        }
    }
}

/// Errors in a custom command's syntax template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A token is neither `<label>` nor `(<label>)`.
    #[error("invalid syntax token {token:?} at position {position}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based token index.
        position: usize,
    },

    /// A token has no label between its angle brackets.
    #[error("empty label at position {position}")]
    EmptyLabel {
        /// Zero-based token index.
        position: usize,
    },

    /// The command name is empty or contains whitespace.
    #[error("invalid command name: {0:?}")]
    InvalidName(String),
}

/// Errors rendering a command as a protocol line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A parameter would break line framing (CR, LF or NUL), or a
    /// non-trailing parameter is empty, contains a space or starts with `:`.
    #[error("invalid parameter: {0:?}")]
    InvalidParameter(String),
}
