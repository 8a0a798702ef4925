//! Server queries: ADMIN, INFO, MOTD, STATS, TIME, TRACE, USERS, VERSION.

use super::{Builtin, Invocation};
use crate::command::Command;
use crate::ctcp::Ctcp;

pub(super) fn parse(builtin: Builtin, inv: &Invocation<'_>) -> Option<Command> {
    let cmd = match builtin {
        Builtin::Admin => Command::ADMIN(inv.arg(0)),
        Builtin::Info => Command::INFO(inv.joined_from(0)),
        Builtin::Motd => Command::MOTD(inv.joined_from(0)),
        Builtin::Users => Command::USERS(inv.joined_from(0)),
        Builtin::Trace => Command::TRACE(inv.joined_from(0)),
        Builtin::Stats => Command::STATS(inv.arg(0)?, inv.joined_from(1)),
        // With a nick, TIME and VERSION ask the user's client instead of the server.
        Builtin::Time => match inv.arg(0) {
            None => Command::TIME(None),
            Some(target) => Command::CTCP(target, Ctcp::time()),
        },
        Builtin::Version => match inv.arg(0) {
            None => Command::VERSION(None),
            Some(target) => Command::CTCP(target, Ctcp::version()),
        },
        _ => unreachable!("server::parse called with non-server command: {:?}", builtin),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(builtin: Builtin, args: &[&str]) -> Option<Command> {
        let inv = Invocation {
            destination: "#rust",
            args,
            now: 0,
        };
        parse(builtin, &inv)
    }

    #[test]
    fn test_server_forms_without_arguments() {
        assert_eq!(run(Builtin::Admin, &[]), Some(Command::ADMIN(None)));
        assert_eq!(run(Builtin::Info, &[]), Some(Command::INFO(None)));
        assert_eq!(run(Builtin::Motd, &[]), Some(Command::MOTD(None)));
        assert_eq!(run(Builtin::Users, &[]), Some(Command::USERS(None)));
        assert_eq!(run(Builtin::Trace, &[]), Some(Command::TRACE(None)));
        assert_eq!(run(Builtin::Time, &[]), Some(Command::TIME(None)));
        assert_eq!(run(Builtin::Version, &[]), Some(Command::VERSION(None)));
    }

    #[test]
    fn test_time_and_version_query_a_user() {
        assert_eq!(
            run(Builtin::Time, &["bob"]),
            Some(Command::CTCP("bob".into(), Ctcp::time()))
        );
        assert_eq!(
            run(Builtin::Version, &["bob"]),
            Some(Command::CTCP("bob".into(), Ctcp::version()))
        );
    }

    #[test]
    fn test_stats_requires_query() {
        assert_eq!(run(Builtin::Stats, &[]), None);
        assert_eq!(
            run(Builtin::Stats, &["u"]),
            Some(Command::STATS("u".into(), None))
        );
        assert_eq!(
            run(Builtin::Stats, &["l", "irc.example.net"]),
            Some(Command::STATS("l".into(), Some("irc.example.net".into())))
        );
    }

    #[test]
    fn test_admin_takes_first_word() {
        assert_eq!(
            run(Builtin::Admin, &["irc.example.net", "ignored"]),
            Some(Command::ADMIN(Some("irc.example.net".into())))
        );
    }
}
