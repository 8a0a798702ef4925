//! Channel commands: JOIN, PART, TOPIC, NAMES, LIST, INVITE, KICK, KNOCK, MODE.

use super::{Builtin, Invocation};
use crate::command::Command;

pub(super) fn parse(builtin: Builtin, inv: &Invocation<'_>) -> Option<Command> {
    let args = inv.args;
    let dest = inv.destination;

    let cmd = match builtin {
        Builtin::Join => {
            if !(1..=2).contains(&args.len()) {
                return None;
            }
            Command::JOIN(args[0].to_owned(), inv.arg(1))
        }
        Builtin::Part => Command::PART(dest.to_owned(), inv.joined_from(0)),
        Builtin::Topic => Command::TOPIC(dest.to_owned(), inv.joined_from(0)),
        Builtin::Names => {
            if args.is_empty() {
                Command::NAMES(vec![dest.to_owned()])
            } else {
                Command::NAMES(inv.owned_args())
            }
        }
        Builtin::List => Command::LIST(inv.owned_args()),
        Builtin::Invite => {
            if args.len() != 1 {
                return None;
            }
            Command::INVITE(args[0].to_owned(), dest.to_owned())
        }
        Builtin::Kick => {
            let user = args.first()?;
            Command::KICK(dest.to_owned(), (*user).to_owned(), inv.joined_from(1))
        }
        Builtin::Knock => {
            let channel = args.first()?;
            Command::KNOCK((*channel).to_owned(), inv.joined_from(1))
        }
        Builtin::Mode => {
            // A fourth word is tolerated and dropped.
            if !(1..=4).contains(&args.len()) {
                return None;
            }
            Command::MODE(args[0].to_owned(), inv.arg(1), inv.arg(2))
        }
        _ => unreachable!("channel::parse called with non-channel command: {:?}", builtin),
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
    fn test_join_arity() {
        assert_eq!(run(Builtin::Join, &[]), None);
        assert_eq!(
            run(Builtin::Join, &["#a"]),
            Some(Command::JOIN("#a".into(), None))
        );
        assert_eq!(
            run(Builtin::Join, &["#a", "key"]),
            Some(Command::JOIN("#a".into(), Some("key".into())))
        );
        assert_eq!(run(Builtin::Join, &["#a", "b", "c"]), None);
    }

    #[test]
    fn test_part_and_topic_use_destination() {
        assert_eq!(
            run(Builtin::Part, &[]),
            Some(Command::PART("#rust".into(), None))
        );
        assert_eq!(
            run(Builtin::Topic, &["new", "topic"]),
            Some(Command::TOPIC("#rust".into(), Some("new topic".into())))
        );
    }

    #[test]
    fn test_kick_reason_joined() {
        assert_eq!(run(Builtin::Kick, &[]), None);
        assert_eq!(
            run(Builtin::Kick, &["bob", "too", "loud"]),
            Some(Command::KICK("#rust".into(), "bob".into(), Some("too loud".into())))
        );
    }

    #[test]
    fn test_names_defaults_to_destination() {
        assert_eq!(
            run(Builtin::Names, &[]),
            Some(Command::NAMES(vec!["#rust".into()]))
        );
        assert_eq!(
            run(Builtin::Names, &["#a", "#b"]),
            Some(Command::NAMES(vec!["#a".into(), "#b".into()]))
        );
    }

    #[test]
    fn test_mode_arity() {
        assert_eq!(run(Builtin::Mode, &[]), None);
        assert_eq!(
            run(Builtin::Mode, &["#a", "+o", "bob", "extra"]),
            Some(Command::MODE("#a".into(), Some("+o".into()), Some("bob".into())))
        );
        assert_eq!(run(Builtin::Mode, &["1", "2", "3", "4", "5"]), None);
    }

    #[test]
    fn test_invite_targets_destination() {
        assert_eq!(
            run(Builtin::Invite, &["bob"]),
            Some(Command::INVITE("bob".into(), "#rust".into()))
        );
        assert_eq!(run(Builtin::Invite, &["bob", "#other"]), None);
    }
}
