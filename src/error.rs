//! Errors reported for one line of console input.

use slirc_cmd::{ParseError, RenderError};
use thiserror::Error;

/// Why a line of input produced no command.
#[derive(Debug, Error)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no active destination, /join a channel first")]
    NoDestination,

    #[error("{0} has no expansion configured")]
    NoExpansion(String),

    #[error("{0} expands to another custom command")]
    NestedAlias(String),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl LineError {
    /// Get a static error code string for status output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Render(_) => "invalid_parameter",
            Self::NoDestination => "no_destination",
            Self::NoExpansion(_) => "no_expansion",
            Self::NestedAlias(_) => "nested_alias",
            Self::Json(_) => "encode_error",
        }
    }
}
