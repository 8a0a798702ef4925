//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::alias;
use slirc_cmd::{Builtin, SyntaxError, SyntaxTemplate, canonical_name};
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("commands[{0}].name is required")]
    MissingCommandName(usize),
    #[error("command name must be a single word without a leading '/', got {0:?}")]
    InvalidCommandName(String),
    #[error("command {0} shadows a built-in command")]
    ShadowsBuiltin(String),
    #[error("command {0} is declared more than once")]
    DuplicateCommand(String),
    #[error("command {name} has an invalid syntax: {source}")]
    InvalidSyntax {
        name: String,
        #[source]
        source: SyntaxError,
    },
    #[error("command {name} expands ${reference} but its syntax accepts at most {max} arguments")]
    AliasArgumentOutOfRange {
        name: String,
        reference: usize,
        max: usize,
    },
    #[error("session.destination must not be empty or contain spaces")]
    InvalidDestination,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .session
        .destination
        .as_deref()
        .is_some_and(|dest| dest.is_empty() || dest.chars().any(char::is_whitespace))
    {
        errors.push(ValidationError::InvalidDestination);
    }

    let mut seen = HashSet::new();
    for (index, command) in config.commands.iter().enumerate() {
        let name = command.name.as_str();
        if name.is_empty() {
            errors.push(ValidationError::MissingCommandName(index));
            continue;
        }
        if name.starts_with('/') || name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidCommandName(name.to_string()));
            continue;
        }
        let canonical = canonical_name(name);
        if Builtin::from_name(&canonical).is_some() {
            errors.push(ValidationError::ShadowsBuiltin(canonical));
            continue;
        }
        if !seen.insert(canonical.clone()) {
            errors.push(ValidationError::DuplicateCommand(canonical.clone()));
        }

        let template = match command.syntax.parse::<SyntaxTemplate>() {
            Ok(template) => template,
            Err(source) => {
                errors.push(ValidationError::InvalidSyntax {
                    name: canonical,
                    source,
                });
                continue;
            }
        };

        if let Some(body) = &command.expand {
            let reference = alias::highest_reference(body);
            if reference > template.max_args() {
                errors.push(ValidationError::AliasArgumentOutOfRange {
                    name: canonical,
                    reference,
                    max: template.max_args(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
