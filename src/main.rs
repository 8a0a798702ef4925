//! slirc-console - Straylight IRC slash-command console
//!
//! Reads lines from stdin, turns them into IRC protocol commands and prints
//! them on stdout. Logs go to stderr.

mod alias;
mod config;
mod error;
mod session;

use crate::config::{Config, validation};
use crate::session::Session;
use slirc_cmd::CommandParser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for rendered commands
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = std::env::args().nth(1);
    let config = Config::load_or_default(config_path.as_deref()).map_err(|e| {
        error!(path = ?config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = validation::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "configuration has {} error(s), see log above",
            errors.len()
        ));
    }

    let parser = Arc::new(CommandParser::new());
    let mut session = Session::from_config(Arc::clone(&parser), &config)?;

    info!(
        nick = config.session.nick.as_deref().unwrap_or("-"),
        destination = session.destination().unwrap_or("-"),
        commands = parser.commands().len(),
        custom = config.commands.len(),
        "Starting slirc-console"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await?;

    info!("Console closed");
    Ok(())
}
