//! Messaging commands: ME, NOTICE, PING, QUOTE.

use super::{Builtin, Invocation};
use crate::command::Command;
use crate::ctcp::Ctcp;

pub(super) fn parse(builtin: Builtin, inv: &Invocation<'_>) -> Option<Command> {
    let args = inv.args;

    let cmd = match builtin {
        Builtin::Me => Command::CTCP(inv.destination.to_owned(), Ctcp::action(inv.joined_from(0)?)),
        Builtin::Notice => {
            if args.len() < 2 {
                return None;
            }
            Command::NOTICE(args[0].to_owned(), inv.joined_from(1)?)
        }
        Builtin::Ping => match args.first() {
            None => Command::Raw(vec!["PING".to_owned(), inv.now.to_string()]),
            Some(target) => Command::CTCP((*target).to_owned(), Ctcp::ping(inv.now)),
        },
        Builtin::Quote => Command::Raw(inv.owned_args()),
        _ => unreachable!("messaging::parse called with non-messaging command: {:?}", builtin),
    };

    Some(cmd)
}
