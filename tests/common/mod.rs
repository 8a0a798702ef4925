//! Test harness for driving slirc-console.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use tempfile::NamedTempFile;

/// Captured result of one console run.
pub struct ConsoleOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// A console binary bound to a temporary config file.
pub struct TestConsole {
    config: NamedTempFile,
}

impl TestConsole {
    /// Write `config` to a temporary file.
    pub fn with_config(config: &str) -> anyhow::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(config.as_bytes())?;
        file.flush()?;
        Ok(Self { config: file })
    }

    /// Run the console with `input` on stdin until it exits.
    pub fn run(&self, input: &str) -> anyhow::Result<ConsoleOutput> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_slirc-console"))
            .arg(self.config.path())
            .env("RUST_LOG", "info")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // The console may exit (on /quit or a bad config) before reading everything
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(input.as_bytes()) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        Ok(ConsoleOutput {
            status: output.status,
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }
}
