//! Built-in slash-commands.
//!
//! [`Builtin`] is the closed dispatch table: every variant knows its name,
//! its usage template and the routine that turns argument words into a
//! [`Command`]. Routines return `None` when the arguments do not fit.

mod channel;
mod messaging;
mod server;
mod user;

use crate::command::Command;

/// Inputs of one built-in command invocation.
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    /// Current channel or nick the user is talking to.
    pub destination: &'a str,
    /// Argument words after the command name.
    pub args: &'a [&'a str],
    /// Unix timestamp in seconds, used as the PING payload.
    pub now: i64,
}

impl Invocation<'_> {
    /// Argument at `index`, owned.
    pub(crate) fn arg(&self, index: usize) -> Option<String> {
        self.args.get(index).map(|s| (*s).to_owned())
    }

    /// Arguments from `start` on, joined with single spaces; `None` if there are none.
    pub(crate) fn joined_from(&self, start: usize) -> Option<String> {
        self.args
            .get(start..)
            .filter(|rest| !rest.is_empty())
            .map(|rest| rest.join(" "))
    }

    pub(crate) fn owned_args(&self) -> Vec<String> {
        self.args.iter().map(|s| (*s).to_owned()).collect()
    }
}

/// A built-in command with a dedicated parsing routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Builtin {
    /// `/admin (<server>)`
    Admin,
    /// `/away (<reason>)`
    Away,
    /// `/info (<server>)`
    Info,
    /// `/invite <user>`
    Invite,
    /// `/join <channel> (<key>)`
    Join,
    /// `/kick <user> (<reason>)`
    Kick,
    /// `/knock <channel> (<message>)`
    Knock,
    /// `/list (<channels>) (<server>)`
    List,
    /// `/me <message>`
    Me,
    /// `/mode <channel/user> (<mode>) (<arg>)`
    Mode,
    /// `/motd (<server>)`
    Motd,
    /// `/names (<channel>)`
    Names,
    /// `/nick <nick>`
    Nick,
    /// `/notice <channel/user> <message>`
    Notice,
    /// `/part (<reason>)`
    Part,
    /// `/ping (<user>)`
    Ping,
    /// `/quit (<message>)`
    Quit,
    /// `/quote <command> (<parameters>)`
    Quote,
    /// `/stats <query> (<server>)`
    Stats,
    /// `/time (<user>)`
    Time,
    /// `/topic (<topic>)`
    Topic,
    /// `/trace (<target>)`
    Trace,
    /// `/users (<server>)`
    Users,
    /// `/version (<user>)`
    Version,
    /// `/who <user>`
    Who,
    /// `/whois <user>`
    Whois,
    /// `/whowas <user>`
    Whowas,
}

impl Builtin {
    /// Every built-in, in name order.
    pub const ALL: [Builtin; 27] = [
        Builtin::Admin,
        Builtin::Away,
        Builtin::Info,
        Builtin::Invite,
        Builtin::Join,
        Builtin::Kick,
        Builtin::Knock,
        Builtin::List,
        Builtin::Me,
        Builtin::Mode,
        Builtin::Motd,
        Builtin::Names,
        Builtin::Nick,
        Builtin::Notice,
        Builtin::Part,
        Builtin::Ping,
        Builtin::Quit,
        Builtin::Quote,
        Builtin::Stats,
        Builtin::Time,
        Builtin::Topic,
        Builtin::Trace,
        Builtin::Users,
        Builtin::Version,
        Builtin::Who,
        Builtin::Whois,
        Builtin::Whowas,
    ];

    /// Look up a built-in by its upper-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        let builtin = match name {
            "ADMIN" => Self::Admin,
            "AWAY" => Self::Away,
            "INFO" => Self::Info,
            "INVITE" => Self::Invite,
            "JOIN" => Self::Join,
            "KICK" => Self::Kick,
            "KNOCK" => Self::Knock,
            "LIST" => Self::List,
            "ME" => Self::Me,
            "MODE" => Self::Mode,
            "MOTD" => Self::Motd,
            "NAMES" => Self::Names,
            "NICK" => Self::Nick,
            "NOTICE" => Self::Notice,
            "PART" => Self::Part,
            "PING" => Self::Ping,
            "QUIT" => Self::Quit,
            "QUOTE" => Self::Quote,
            "STATS" => Self::Stats,
            "TIME" => Self::Time,
            "TOPIC" => Self::Topic,
            "TRACE" => Self::Trace,
            "USERS" => Self::Users,
            "VERSION" => Self::Version,
            "WHO" => Self::Who,
            "WHOIS" => Self::Whois,
            "WHOWAS" => Self::Whowas,
            _ => return None,
        };
        Some(builtin)
    }

    /// Upper-case command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Away => "AWAY",
            Self::Info => "INFO",
            Self::Invite => "INVITE",
            Self::Join => "JOIN",
            Self::Kick => "KICK",
            Self::Knock => "KNOCK",
            Self::List => "LIST",
            Self::Me => "ME",
            Self::Mode => "MODE",
            Self::Motd => "MOTD",
            Self::Names => "NAMES",
            Self::Nick => "NICK",
            Self::Notice => "NOTICE",
            Self::Part => "PART",
            Self::Ping => "PING",
            Self::Quit => "QUIT",
            Self::Quote => "QUOTE",
            Self::Stats => "STATS",
            Self::Time => "TIME",
            Self::Topic => "TOPIC",
            Self::Trace => "TRACE",
            Self::Users => "USERS",
            Self::Version => "VERSION",
            Self::Who => "WHO",
            Self::Whois => "WHOIS",
            Self::Whowas => "WHOWAS",
        }
    }

    /// Usage template shown to the user, without the command name.
    pub fn syntax(self) -> &'static str {
        match self {
            Self::Admin => "(<server>)",
            Self::Away => "(<reason>)",
            Self::Info => "(<server>)",
            Self::Invite => "<user>",
            Self::Join => "<channel> (<key>)",
            Self::Kick => "<user> (<reason>)",
            Self::Knock => "<channel> (<message>)",
            Self::List => "(<channels>) (<server>)",
            Self::Me => "<message>",
            Self::Mode => "<channel/user> (<mode>) (<arg>)",
            Self::Motd => "(<server>)",
            Self::Names => "(<channel>)",
            Self::Nick => "<nick>",
            Self::Notice => "<channel/user> <message>",
            Self::Part => "(<reason>)",
            Self::Ping => "(<user>)",
            Self::Quit => "(<message>)",
            Self::Quote => "<command> (<parameters>)",
            Self::Stats => "<query> (<server>)",
            Self::Time => "(<user>)",
            Self::Topic => "(<topic>)",
            Self::Trace => "(<target>)",
            Self::Users => "(<server>)",
            Self::Version => "(<user>)",
            Self::Who => "<user>",
            Self::Whois => "<user>",
            Self::Whowas => "<user>",
        }
    }

    /// Full usage line, e.g. `JOIN <channel> (<key>)`.
    pub fn usage(self) -> String {
        format!("{} {}", self.name(), self.syntax())
    }

    /// Run this command's parsing routine.
    pub fn parse(self, inv: &Invocation<'_>) -> Option<Command> {
        match self {
            Self::Invite
            | Self::Join
            | Self::Kick
            | Self::Knock
            | Self::List
            | Self::Mode
            | Self::Names
            | Self::Part
            | Self::Topic => channel::parse(self, inv),

            Self::Me | Self::Notice | Self::Ping | Self::Quote => messaging::parse(self, inv),

            Self::Admin
            | Self::Info
            | Self::Motd
            | Self::Stats
            | Self::Time
            | Self::Trace
            | Self::Users
            | Self::Version => server::parse(self, inv),

            Self::Away | Self::Nick | Self::Quit | Self::Who | Self::Whois | Self::Whowas => {
                user::parse(self, inv)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTemplate;

    #[test]
    fn test_names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::from_name("join"), None);
        assert_eq!(Builtin::from_name(""), None);
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        let names: Vec<_> = Builtin::ALL.iter().map(|b| b.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_syntax_templates_are_well_formed() {
        for builtin in Builtin::ALL {
            assert!(
                builtin.syntax().parse::<SyntaxTemplate>().is_ok(),
                "{} has a malformed template",
                builtin.name()
            );
        }
    }

    #[test]
    fn test_invocation_helpers() {
        let args = ["bob", "too", "noisy"];
        let inv = Invocation {
            destination: "#rust",
            args: &args,
            now: 0,
        };
        assert_eq!(inv.arg(0).as_deref(), Some("bob"));
        assert_eq!(inv.arg(3), None);
        assert_eq!(inv.joined_from(1).as_deref(), Some("too noisy"));
        assert_eq!(inv.joined_from(3), None);
        assert_eq!(inv.joined_from(9), None);
    }
}
