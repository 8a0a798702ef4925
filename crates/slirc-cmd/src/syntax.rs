//! Declarative argument syntax for commands.
//!
//! A template is a space-separated list of `<label>` (required) and
//! `(<label>)` (optional) tokens, e.g. `<channel> (<key>)`. Validation only
//! counts arguments; labels and positions are documentation for the user.

use std::fmt;
use std::str::FromStr;

use crate::error::SyntaxError;

/// One token of a [`SyntaxTemplate`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxToken {
    /// Text between the angle brackets.
    pub label: String,
    /// Whether an argument must be supplied for this token.
    pub required: bool,
}

impl SyntaxToken {
    /// Create a required token.
    pub fn required(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: true,
        }
    }

    /// Create an optional token.
    pub fn optional(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: false,
        }
    }

    fn parse(token: &str, position: usize) -> Result<Self, SyntaxError> {
        let (inner, required) = match token.strip_prefix('(') {
            Some(rest) => (rest.strip_suffix(')'), false),
            None => (Some(token), true),
        };
        let label = inner
            .and_then(|t| t.strip_prefix('<'))
            .and_then(|t| t.strip_suffix('>'))
            .ok_or_else(|| SyntaxError::InvalidToken {
                token: token.to_owned(),
                position,
            })?;

        if label.contains(['<', '>', '(', ')']) {
            return Err(SyntaxError::InvalidToken {
                token: token.to_owned(),
                position,
            });
        }
        if label.is_empty() {
            return Err(SyntaxError::EmptyLabel { position });
        }

        Ok(Self {
            label: label.to_owned(),
            required,
        })
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(f, "<{}>", self.label)
        } else {
            write!(f, "(<{}>)", self.label)
        }
    }
}

/// Ordered argument syntax of a command.
///
/// ```
/// use slirc_cmd::SyntaxTemplate;
///
/// let template: SyntaxTemplate = "<a> (<b>) (<c>)".parse().unwrap();
/// assert_eq!((template.min_args(), template.max_args()), (1, 3));
/// assert!(template.accepts(&["x", "y"]));
/// assert!(!template.accepts_count(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxTemplate {
    tokens: Vec<SyntaxToken>,
}

impl SyntaxTemplate {
    /// Build a template from already-validated tokens.
    pub fn new(tokens: Vec<SyntaxToken>) -> Self {
        Self { tokens }
    }

    /// Tokens in declaration order.
    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    /// Number of required tokens.
    pub fn min_args(&self) -> usize {
        self.tokens.iter().filter(|t| t.required).count()
    }

    /// Total number of tokens.
    pub fn max_args(&self) -> usize {
        self.tokens.len()
    }

    /// Whether `count` arguments fit this template.
    pub fn accepts_count(&self, count: usize) -> bool {
        (self.min_args()..=self.max_args()).contains(&count)
    }

    /// Whether the argument list fits this template. Only the count matters.
    pub fn accepts<S: AsRef<str>>(&self, args: &[S]) -> bool {
        self.accepts_count(args.len())
    }
}

impl FromStr for SyntaxTemplate {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| SyntaxToken::parse(token, position))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }
}

impl fmt::Display for SyntaxTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
