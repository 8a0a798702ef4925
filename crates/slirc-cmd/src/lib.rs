//! # slirc-cmd
//!
//! Slash-command parsing for IRC clients: turns a line typed by the user into
//! a structured command ready for the connection layer.
//!
//! ## Features
//!
//! - Built-in commands (`/join`, `/me`, `/kick`, ...) with their own argument rules
//! - Custom commands declared with a syntax template such as `<nick> (<reason>)`
//! - Completion candidates and usage strings from the command registry
//! - Wire rendering of every produced command
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_cmd::{Command, CommandParser, ParsedInput, ParseError};
//!
//! let parser = CommandParser::new();
//!
//! // Plain text goes to the current destination
//! let parsed = parser.parse("#rust", "hello world").unwrap();
//! assert_eq!(
//!     parsed,
//!     ParsedInput::Command(Command::PRIVMSG("#rust".into(), "hello world".into()))
//! );
//!
//! // Slash-commands are dispatched by name
//! let parsed = parser.parse("#rust", "/me waves").unwrap();
//! assert_eq!(parsed.command().unwrap().to_line().unwrap(), "PRIVMSG #rust :\x01ACTION waves\x01");
//!
//! // Custom commands are validated and handed back to the caller
//! parser.add_custom("hello", "<name>").unwrap();
//! let parsed = parser.parse("#rust", "/hello world").unwrap();
//! assert_eq!(parsed.custom().unwrap().args, vec!["world"]);
//!
//! assert!(matches!(
//!     parser.parse("#rust", "/nosuch"),
//!     Err(ParseError::UnknownCommand(_))
//! ));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod builtin;
pub mod command;
pub mod ctcp;
pub mod error;
pub mod parser;
pub mod registry;
pub mod syntax;

pub use self::builtin::{Builtin, Invocation};
pub use self::command::Command;
pub use self::ctcp::{Ctcp, CtcpKind};
pub use self::error::{ParseError, RenderError, SyntaxError};
pub use self::parser::{CommandParser, CustomCommand, ParsedInput, COMMAND_PREFIX};
pub use self::registry::{canonical_name, Registry};
pub use self::syntax::{SyntaxTemplate, SyntaxToken};
