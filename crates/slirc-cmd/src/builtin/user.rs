//! User commands: AWAY, NICK, QUIT, WHO, WHOIS, WHOWAS.

use super::{Builtin, Invocation};
use crate::command::Command;

pub(super) fn parse(builtin: Builtin, inv: &Invocation<'_>) -> Option<Command> {
    let cmd = match builtin {
        Builtin::Away => Command::AWAY(inv.joined_from(0)),
        Builtin::Quit => Command::QUIT(inv.joined_from(0)),
        Builtin::Nick | Builtin::Who | Builtin::Whois | Builtin::Whowas => {
            let [target] = inv.args else {
                return None;
            };
            let target = (*target).to_owned();
            match builtin {
                Builtin::Nick => Command::NICK(target),
                Builtin::Who => Command::WHO(target),
                Builtin::Whois => Command::WHOIS(target),
                _ => Command::WHOWAS(target),
            }
        }
        _ => unreachable!("user::parse called with non-user command: {:?}", builtin),
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
    fn test_single_target_commands() {
        for builtin in [Builtin::Nick, Builtin::Who, Builtin::Whois, Builtin::Whowas] {
            assert_eq!(run(builtin, &[]), None, "{:?} without target", builtin);
            assert_eq!(run(builtin, &["a", "b"]), None, "{:?} with two targets", builtin);
        }
        assert_eq!(run(Builtin::Nick, &["neo"]), Some(Command::NICK("neo".into())));
        assert_eq!(run(Builtin::Whowas, &["neo"]), Some(Command::WHOWAS("neo".into())));
    }

    #[test]
    fn test_away_and_quit_join_words() {
        assert_eq!(run(Builtin::Away, &[]), Some(Command::AWAY(None)));
        assert_eq!(
            run(Builtin::Away, &["gone", "fishing"]),
            Some(Command::AWAY(Some("gone fishing".into())))
        );
        assert_eq!(
            run(Builtin::Quit, &["see", "you"]),
            Some(Command::QUIT(Some("see you".into())))
        );
    }
}
