//! Console session: destination tracking, alias expansion and output.
//!
//! A [`Session`] owns the state the parser itself does not keep: which
//! channel plain text goes to, and what each configured custom command
//! expands to. Each input line yields one output line on the writer, either
//! the rendered command or a short status line for the error.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use slirc_cmd::{canonical_name, Command, CommandParser, ParsedInput};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::alias;
use crate::config::{Config, OutputFormat};
use crate::error::LineError;

/// State of one interactive console.
#[derive(Debug)]
pub struct Session {
    parser: Arc<CommandParser>,
    destination: Option<String>,
    follow_joins: bool,
    aliases: HashMap<String, String>,
    format: OutputFormat,
}

impl Session {
    /// Create a session with no aliases, printing protocol lines.
    pub fn new(parser: Arc<CommandParser>) -> Self {
        Self {
            parser,
            destination: None,
            follow_joins: true,
            aliases: HashMap::new(),
            format: OutputFormat::Line,
        }
    }

    /// Create a session from a validated config, registering its custom commands.
    pub fn from_config(parser: Arc<CommandParser>, config: &Config) -> anyhow::Result<Self> {
        let mut session = Self::new(parser);
        session.destination = config.session.destination.clone();
        session.follow_joins = config.session.follow_joins;
        session.format = config.output.format;

        for command in &config.commands {
            session.parser.add_custom(&command.name, &command.syntax)?;
            if let Some(body) = &command.expand {
                session
                    .aliases
                    .insert(canonical_name(&command.name), body.clone());
            }
        }
        Ok(session)
    }

    /// Channel or nick plain text is currently sent to.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Turn one line of input into a command, updating the destination.
    ///
    /// Blank lines produce nothing. A custom command with an alias body is
    /// expanded and parsed once more; the expansion must not be another
    /// custom command.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Command>, LineError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let destination = self.destination.clone().unwrap_or_default();

        let cmd = match self.parser.parse(&destination, line)? {
            ParsedInput::Command(cmd) => cmd,
            ParsedInput::Custom(custom) => {
                let body = self
                    .aliases
                    .get(&custom.name)
                    .ok_or_else(|| LineError::NoExpansion(custom.name.clone()))?;
                let expanded = alias::expand(body, &custom.args, &destination);
                debug!(command = %custom.name, expanded = %expanded, "expanded alias");
                match self.parser.parse(&destination, &expanded)? {
                    ParsedInput::Command(cmd) => cmd,
                    ParsedInput::Custom(_) => return Err(LineError::NestedAlias(custom.name)),
                }
            }
        };

        if cmd.target() == Some("") {
            return Err(LineError::NoDestination);
        }
        self.track(&cmd);
        Ok(Some(cmd))
    }

    fn track(&mut self, cmd: &Command) {
        match cmd {
            Command::JOIN(channel, _) if self.follow_joins => {
                info!(channel = %channel, "destination changed");
                self.destination = Some(channel.clone());
            }
            Command::PART(channel, _) if self.destination.as_deref() == Some(channel) => {
                info!(channel = %channel, "destination cleared");
                self.destination = None;
            }
            _ => {}
        }
    }

    /// Output line for a produced command.
    pub fn render(&self, cmd: &Command) -> Result<String, LineError> {
        let line = cmd.to_line()?;
        match self.format {
            OutputFormat::Line => Ok(line),
            OutputFormat::Json => {
                let parsed = serde_json::to_value(cmd)?;
                Ok(json!({
                    "command": cmd.name(),
                    "target": cmd.target(),
                    "line": line,
                    "parsed": parsed,
                })
                .to_string())
            }
        }
    }

    /// Status line for a failed input line.
    pub fn render_error(&self, err: &LineError) -> String {
        match self.format {
            OutputFormat::Line => format!("error: {}", err),
            OutputFormat::Json => json!({
                "error": err.error_code(),
                "message": err.to_string(),
            })
            .to_string(),
        }
    }

    /// Output for one input line, and whether the session should end.
    fn process(&mut self, line: &str) -> (Option<String>, bool) {
        let result = self
            .handle_line(line)
            .and_then(|cmd| match cmd {
                Some(cmd) => {
                    let quit = matches!(cmd, Command::QUIT(_));
                    Ok((Some(self.render(&cmd)?), quit))
                }
                None => Ok((None, false)),
            });
        match result {
            Ok(out) => out,
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "input rejected");
                (Some(self.render_error(&e)), false)
            }
        }
    }

    /// Read lines until EOF or `/quit`, writing one output line per command.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let (output, quit) = self.process(&line);
            if let Some(output) = output {
                writer.write_all(output.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            if quit {
                debug!("quit requested");
                break;
            }
        }
        Ok(())
    }
}
