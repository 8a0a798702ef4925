//! Outbound IRC command types.
//!
//! Each variant is one action a client sends to the server, with its
//! parameters already resolved against the current destination.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol

use crate::ctcp::Ctcp;

/// IRC command produced from user input, ready for the connection layer.
///
/// Variants are named after the protocol verb they render as. Free-text
/// parameters hold the joined words of the input line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Command {
    // === Channel Operations ===
    /// `JOIN channel [key]`
    JOIN(String, Option<String>),
    /// `PART channel [:message]`
    PART(String, Option<String>),
    /// `TOPIC channel [:topic]`; no topic queries the current one.
    TOPIC(String, Option<String>),
    /// `NAMES channels` (comma-separated on the wire)
    NAMES(Vec<String>),
    /// `LIST [channels]` (comma-separated on the wire)
    LIST(Vec<String>),
    /// `INVITE nickname channel`
    INVITE(String, String),
    /// `KICK channel nickname [:comment]`
    KICK(String, String, Option<String>),
    /// `KNOCK channel [:message]`
    KNOCK(String, Option<String>),
    /// `MODE target [modes] [argument]`
    MODE(String, Option<String>, Option<String>),

    // === Messaging ===
    /// `PRIVMSG target :text`
    PRIVMSG(String, String),
    /// `NOTICE target :text`
    NOTICE(String, String),
    /// CTCP request wrapped in a PRIVMSG: `PRIVMSG target :\x01KIND params\x01`
    CTCP(String, Ctcp),

    // === Connection ===
    /// `NICK nickname`
    NICK(String),
    /// `QUIT [:message]`
    QUIT(Option<String>),
    /// `AWAY [:message]`; no message clears the away status.
    AWAY(Option<String>),

    // === Server Queries ===
    /// `ADMIN [target]`
    ADMIN(Option<String>),
    /// `INFO [target]`
    INFO(Option<String>),
    /// `MOTD [target]`
    MOTD(Option<String>),
    /// `STATS query [target]`
    STATS(String, Option<String>),
    /// `TIME [target]`
    TIME(Option<String>),
    /// `TRACE [target]`
    TRACE(Option<String>),
    /// `USERS [target]`
    USERS(Option<String>),
    /// `VERSION [target]`
    VERSION(Option<String>),

    // === User Queries ===
    /// `WHO mask`
    WHO(String),
    /// `WHOIS nickname`
    WHOIS(String),
    /// `WHOWAS nickname`
    WHOWAS(String),

    /// Words sent verbatim as one line, separated by single spaces.
    Raw(Vec<String>),
}

impl Command {
    /// The protocol verb this command renders as.
    pub fn name(&self) -> &'static str {
        match self {
            Command::JOIN(..) => "JOIN",
            Command::PART(..) => "PART",
            Command::TOPIC(..) => "TOPIC",
            Command::NAMES(..) => "NAMES",
            Command::LIST(..) => "LIST",
            Command::INVITE(..) => "INVITE",
            Command::KICK(..) => "KICK",
            Command::KNOCK(..) => "KNOCK",
            Command::MODE(..) => "MODE",
            Command::PRIVMSG(..) | Command::CTCP(..) => "PRIVMSG",
            Command::NOTICE(..) => "NOTICE",
            Command::NICK(..) => "NICK",
            Command::QUIT(..) => "QUIT",
            Command::AWAY(..) => "AWAY",
            Command::ADMIN(..) => "ADMIN",
            Command::INFO(..) => "INFO",
            Command::MOTD(..) => "MOTD",
            Command::STATS(..) => "STATS",
            Command::TIME(..) => "TIME",
            Command::TRACE(..) => "TRACE",
            Command::USERS(..) => "USERS",
            Command::VERSION(..) => "VERSION",
            Command::WHO(..) => "WHO",
            Command::WHOIS(..) => "WHOIS",
            Command::WHOWAS(..) => "WHOWAS",
            Command::Raw(..) => "RAW",
        }
    }

    /// The channel or nickname this command is addressed to, if any.
    ///
    /// ```
    /// use slirc_cmd::Command;
    ///
    /// let cmd = Command::PRIVMSG("#rust".into(), "hi".into());
    /// assert_eq!(cmd.target(), Some("#rust"));
    /// assert_eq!(Command::QUIT(None).target(), None);
    /// ```
    pub fn target(&self) -> Option<&str> {
        match self {
            Command::JOIN(t, _)
            | Command::PART(t, _)
            | Command::TOPIC(t, _)
            | Command::KICK(t, _, _)
            | Command::KNOCK(t, _)
            | Command::MODE(t, _, _)
            | Command::PRIVMSG(t, _)
            | Command::NOTICE(t, _)
            | Command::CTCP(t, _)
            | Command::INVITE(_, t) => Some(t),
            Command::NAMES(ts) => ts.first().map(String::as_str),
            _ => None,
        }
    }

    /// All string parameters, in wire order.
    pub(crate) fn params(&self) -> Vec<&str> {
        fn opt(v: &Option<String>) -> Option<&str> {
            v.as_deref()
        }

        let mut out: Vec<&str> = Vec::new();
        match self {
            Command::JOIN(a, b)
            | Command::PART(a, b)
            | Command::TOPIC(a, b)
            | Command::KNOCK(a, b)
            | Command::STATS(a, b) => {
                out.push(a);
                out.extend(opt(b));
            }
            Command::KICK(a, b, c) => {
                out.push(a);
                out.push(b);
                out.extend(opt(c));
            }
            Command::MODE(a, b, c) => {
                out.push(a);
                out.extend(opt(b));
                out.extend(opt(c));
            }
            Command::INVITE(a, b) | Command::PRIVMSG(a, b) | Command::NOTICE(a, b) => {
                out.push(a);
                out.push(b);
            }
            Command::CTCP(a, ctcp) => {
                out.push(a);
                out.extend(opt(&ctcp.params));
            }
            Command::NICK(a) | Command::WHO(a) | Command::WHOIS(a) | Command::WHOWAS(a) => {
                out.push(a)
            }
            Command::QUIT(a)
            | Command::AWAY(a)
            | Command::ADMIN(a)
            | Command::INFO(a)
            | Command::MOTD(a)
            | Command::TIME(a)
            | Command::TRACE(a)
            | Command::USERS(a)
            | Command::VERSION(a) => out.extend(opt(a)),
            Command::NAMES(v) | Command::LIST(v) | Command::Raw(v) => {
                out.extend(v.iter().map(String::as_str))
            }
        }
        out
    }
}
