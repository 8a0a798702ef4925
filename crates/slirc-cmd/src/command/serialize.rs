use std::fmt::{self, Write};

use super::types::Command;
use super::util::{
    is_valid_middle_param, is_valid_param, write_cmd, write_cmd_freeform, write_cmd_list,
    write_words,
};
use crate::error::RenderError;

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::JOIN(c, Some(k)) => write_cmd(f, "JOIN", &[c, k]),
            Command::JOIN(c, None) => write_cmd(f, "JOIN", &[c]),
            Command::PART(c, Some(m)) => write_cmd_freeform(f, "PART", &[c, m]),
            Command::PART(c, None) => write_cmd(f, "PART", &[c]),
            Command::TOPIC(c, Some(t)) => write_cmd_freeform(f, "TOPIC", &[c, t]),
            Command::TOPIC(c, None) => write_cmd(f, "TOPIC", &[c]),
            Command::NAMES(channels) => write_cmd_list(f, "NAMES", channels),
            Command::LIST(channels) => write_cmd_list(f, "LIST", channels),
            Command::INVITE(n, c) => write_cmd(f, "INVITE", &[n, c]),
            Command::KICK(c, n, Some(r)) => write_cmd_freeform(f, "KICK", &[c, n, r]),
            Command::KICK(c, n, None) => write_cmd(f, "KICK", &[c, n]),
            Command::KNOCK(c, Some(m)) => write_cmd_freeform(f, "KNOCK", &[c, m]),
            Command::KNOCK(c, None) => write_cmd(f, "KNOCK", &[c]),
            Command::MODE(t, Some(m), Some(a)) => write_cmd(f, "MODE", &[t, m, a]),
            Command::MODE(t, Some(m), None) => write_cmd(f, "MODE", &[t, m]),
            Command::MODE(t, None, _) => write_cmd(f, "MODE", &[t]),
            Command::PRIVMSG(t, m) => write_cmd_freeform(f, "PRIVMSG", &[t, m]),
            Command::NOTICE(t, m) => write_cmd_freeform(f, "NOTICE", &[t, m]),
            Command::CTCP(t, ctcp) => {
                let body = ctcp.to_string();
                write_cmd_freeform(f, "PRIVMSG", &[t, &body])
            }
            Command::NICK(n) => write_cmd(f, "NICK", &[n]),
            Command::QUIT(Some(m)) => write_cmd_freeform(f, "QUIT", &[m]),
            Command::QUIT(None) => write_cmd(f, "QUIT", &[]),
            Command::AWAY(Some(m)) => write_cmd_freeform(f, "AWAY", &[m]),
            Command::AWAY(None) => write_cmd(f, "AWAY", &[]),
            Command::ADMIN(Some(t)) => write_cmd(f, "ADMIN", &[t]),
            Command::ADMIN(None) => write_cmd(f, "ADMIN", &[]),
            Command::INFO(Some(t)) => write_cmd(f, "INFO", &[t]),
            Command::INFO(None) => write_cmd(f, "INFO", &[]),
            Command::MOTD(Some(t)) => write_cmd(f, "MOTD", &[t]),
            Command::MOTD(None) => write_cmd(f, "MOTD", &[]),
            Command::STATS(q, Some(t)) => write_cmd(f, "STATS", &[q, t]),
            Command::STATS(q, None) => write_cmd(f, "STATS", &[q]),
            Command::TIME(Some(t)) => write_cmd(f, "TIME", &[t]),
            Command::TIME(None) => write_cmd(f, "TIME", &[]),
            Command::TRACE(Some(t)) => write_cmd(f, "TRACE", &[t]),
            Command::TRACE(None) => write_cmd(f, "TRACE", &[]),
            Command::USERS(Some(t)) => write_cmd(f, "USERS", &[t]),
            Command::USERS(None) => write_cmd(f, "USERS", &[]),
            Command::VERSION(Some(t)) => write_cmd(f, "VERSION", &[t]),
            Command::VERSION(None) => write_cmd(f, "VERSION", &[]),
            Command::WHO(m) => write_cmd(f, "WHO", &[m]),
            Command::WHOIS(n) => write_cmd(f, "WHOIS", &[n]),
            Command::WHOWAS(n) => write_cmd(f, "WHOWAS", &[n]),
            Command::Raw(words) => write_words(f, words),
        }
    }
}

impl Command {
    /// Render this command as one protocol line, without the trailing CRLF.
    ///
    /// Unlike `to_string()`, which panics when `Display` fails, this reports
    /// parameters that would break line framing as an error, as well as
    /// non-trailing parameters that are empty, contain a space or start
    /// with `:`.
    ///
    /// ```
    /// use slirc_cmd::Command;
    ///
    /// let join = Command::JOIN("#rust".into(), Some("secret".into()));
    /// assert_eq!(join.to_line().unwrap(), "JOIN #rust secret");
    ///
    /// let bad = Command::PRIVMSG("#rust".into(), "hi\r\nQUIT".into());
    /// assert!(bad.to_line().is_err());
    ///
    /// let shifted = Command::KICK("#rust".into(), ":bob".into(), Some("bye".into()));
    /// assert!(shifted.to_line().is_err());
    /// ```
    pub fn to_line(&self) -> Result<String, RenderError> {
        let params = self.params();
        if let Some(bad) = params.iter().find(|p| !is_valid_param(p)) {
            return Err(RenderError::InvalidParameter((*bad).to_owned()));
        }

        let mut line = String::new();
        if write!(line, "{}", self).is_err() {
            // Trailing parameters come last, so the first failure is a middle one
            let bad = params
                .iter()
                .find(|p| !is_valid_middle_param(p))
                .copied()
                .unwrap_or_default();
            return Err(RenderError::InvalidParameter(bad.to_owned()));
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctcp::Ctcp;

    #[test]
    fn test_channel_commands() {
        assert_eq!(Command::JOIN("#a".into(), None).to_string(), "JOIN #a");
        assert_eq!(
            Command::PART("#a".into(), Some("bye all".into())).to_string(),
            "PART #a :bye all"
        );
        assert_eq!(Command::TOPIC("#a".into(), None).to_string(), "TOPIC #a");
        assert_eq!(
            Command::KICK("#a".into(), "bob".into(), Some("spam".into())).to_string(),
            "KICK #a bob :spam"
        );
        assert_eq!(
            Command::INVITE("bob".into(), "#a".into()).to_string(),
            "INVITE bob #a"
        );
        assert_eq!(
            Command::MODE("#a".into(), Some("+k".into()), Some("key".into())).to_string(),
            "MODE #a +k key"
        );
    }

    #[test]
    fn test_ctcp_wrapped_in_privmsg() {
        let cmd = Command::CTCP("#a".into(), Ctcp::action("waves"));
        assert_eq!(cmd.to_string(), "PRIVMSG #a :\x01ACTION waves\x01");
        assert_eq!(cmd.name(), "PRIVMSG");
    }

    #[test]
    fn test_optional_server_forms() {
        assert_eq!(Command::TIME(None).to_string(), "TIME");
        assert_eq!(Command::MOTD(Some("irc.example.net".into())).to_string(), "MOTD irc.example.net");
        assert_eq!(Command::AWAY(None).to_string(), "AWAY");
        assert_eq!(Command::QUIT(Some("bye".into())).to_string(), "QUIT :bye");
    }

    #[test]
    fn test_raw_words_verbatim() {
        let cmd = Command::Raw(vec!["PING".into(), "1700000000".into()]);
        assert_eq!(cmd.to_string(), "PING 1700000000");
        assert_eq!(Command::Raw(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_to_line_rejects_line_breaks() {
        let cmd = Command::NOTICE("bob".into(), "hi\nQUIT".into());
        assert_eq!(
            cmd.to_line(),
            Err(RenderError::InvalidParameter("hi\nQUIT".into()))
        );
        let cmd = Command::CTCP("bob".into(), Ctcp::action("a\rb"));
        assert!(cmd.to_line().is_err());
    }

    #[test]
    fn test_to_line_rejects_misplaced_trailing() {
        let cmd = Command::KICK("#rust".into(), ":bob".into(), Some("bye".into()));
        assert_eq!(cmd.to_line(), Err(RenderError::InvalidParameter(":bob".into())));

        let cmd = Command::MODE("#a".into(), Some(":+o".into()), Some("x".into()));
        assert_eq!(cmd.to_line(), Err(RenderError::InvalidParameter(":+o".into())));

        let cmd = Command::NOTICE(":x".into(), "hi".into());
        assert_eq!(cmd.to_line(), Err(RenderError::InvalidParameter(":x".into())));

        let cmd = Command::PRIVMSG(String::new(), "hi".into());
        assert_eq!(cmd.to_line(), Err(RenderError::InvalidParameter(String::new())));

        // A trailing parameter may still start with a colon
        let cmd = Command::KICK("#rust".into(), "bob".into(), Some(":)".into()));
        assert_eq!(cmd.to_line().unwrap(), "KICK #rust bob ::)");
    }
}
