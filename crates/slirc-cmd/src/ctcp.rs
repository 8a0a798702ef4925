//! CTCP (Client-to-Client Protocol) requests sent by slash-commands.
//!
//! `/me`, `/ping <nick>`, `/time <nick>` and `/version <nick>` do not map to
//! server commands; they travel as CTCP payloads inside a PRIVMSG body,
//! delimited by `\x01`.
//!
//! # Reference
//! - CTCP specification: <https://modern.ircdocs.horse/ctcp.html>
//!
//! # Example
//!
//! ```
//! use slirc_cmd::ctcp::Ctcp;
//!
//! let action = Ctcp::action("dances");
//! assert_eq!(action.to_string(), "\x01ACTION dances\x01");
//! ```

use std::fmt;

/// The CTCP delimiter character (`\x01`).
pub(crate) const CTCP_DELIM: char = '\x01';

/// CTCP request kinds a client issues from slash-commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CtcpKind {
    /// ACTION - describes an action performed by the user (`/me`).
    Action,
    /// PING - measures round-trip latency.
    Ping,
    /// TIME - requests local time from the client.
    Time,
    /// VERSION - requests client version information.
    Version,
}

impl CtcpKind {
    /// Returns the canonical uppercase name of this CTCP command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Ping => "PING",
            Self::Time => "TIME",
            Self::Version => "VERSION",
        }
    }
}

impl fmt::Display for CtcpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CTCP payload with its optional parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ctcp {
    /// The CTCP command type.
    pub kind: CtcpKind,
    /// Optional parameters following the command.
    pub params: Option<String>,
}

impl Ctcp {
    /// Create an ACTION payload.
    pub fn action(text: impl Into<String>) -> Self {
        Self {
            kind: CtcpKind::Action,
            params: Some(text.into()),
        }
    }

    /// Create a PING request carrying a Unix timestamp.
    ///
    /// ```
    /// use slirc_cmd::ctcp::Ctcp;
    ///
    /// assert_eq!(Ctcp::ping(1700000000).to_string(), "\x01PING 1700000000\x01");
    /// ```
    pub fn ping(timestamp: i64) -> Self {
        Self {
            kind: CtcpKind::Ping,
            params: Some(timestamp.to_string()),
        }
    }

    /// Create a TIME request.
    pub fn time() -> Self {
        Self {
            kind: CtcpKind::Time,
            params: None,
        }
    }

    /// Create a VERSION request.
    pub fn version() -> Self {
        Self {
            kind: CtcpKind::Version,
            params: None,
        }
    }
}

impl fmt::Display for Ctcp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CTCP_DELIM, self.kind)?;
        if let Some(params) = &self.params {
            write!(f, " {}", params)?;
        }
        write!(f, "{}", CTCP_DELIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_params() {
        assert_eq!(Ctcp::version().to_string(), "\x01VERSION\x01");
        assert_eq!(Ctcp::time().to_string(), "\x01TIME\x01");
    }

    #[test]
    fn test_display_with_params() {
        assert_eq!(Ctcp::action("waves hello").to_string(), "\x01ACTION waves hello\x01");
        assert_eq!(Ctcp::ping(42).params.as_deref(), Some("42"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CtcpKind::Action.as_str(), "ACTION");
        assert_eq!(CtcpKind::Ping.to_string(), "PING");
    }
}
