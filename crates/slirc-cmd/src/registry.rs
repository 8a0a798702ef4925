//! Command registry: name to argument syntax.
//!
//! The registry is what the user sees: completion, usage strings and the
//! syntax custom commands are validated against. It is seeded with the
//! built-ins and grows or shrinks as custom commands are added and removed.
//! Names are stored upper-cased and iterate in sorted order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::builtin::Builtin;
use crate::error::SyntaxError;
use crate::syntax::SyntaxTemplate;

/// Canonical (upper-case) form of a command name.
pub fn canonical_name(name: &str) -> String {
    name.to_uppercase()
}

/// Mapping from command name to syntax template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, SyntaxTemplate>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in command.
    pub fn with_builtins() -> Self {
        let entries = Builtin::ALL
            .iter()
            .map(|builtin| {
                let template = builtin
                    .syntax()
                    .parse()
                    .expect("built-in syntax templates are well-formed");
                (builtin.name().to_owned(), template)
            })
            .collect();
        Self { entries }
    }

    /// Insert or replace an entry with an already-parsed template.
    pub fn insert(&mut self, name: &str, template: SyntaxTemplate) -> Result<(), SyntaxError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(SyntaxError::InvalidName(name.to_owned()));
        }
        let name = canonical_name(name);
        debug!(command = %name, syntax = %template, "registering command");
        self.entries.insert(name, template);
        Ok(())
    }

    /// Parse `syntax` and insert or replace the entry for `name`.
    ///
    /// ```
    /// use slirc_cmd::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.add_custom("hello", "<name>").unwrap();
    /// assert_eq!(registry.syntax("HeLLo").as_deref(), Some("HELLO <name>"));
    /// assert!(registry.add_custom("bad", "name").is_err());
    /// ```
    pub fn add_custom(&mut self, name: &str, syntax: &str) -> Result<(), SyntaxError> {
        let template = syntax.parse()?;
        self.insert(name, template)
    }

    /// Remove the entry for `name`, returning its template if it was present.
    pub fn remove(&mut self, name: &str) -> Option<SyntaxTemplate> {
        let removed = self.entries.remove(&canonical_name(name));
        if removed.is_some() {
            debug!(command = %canonical_name(name), "removed command");
        }
        removed
    }

    /// Template registered for `name`.
    pub fn template(&self, name: &str) -> Option<&SyntaxTemplate> {
        self.entries.get(&canonical_name(name))
    }

    /// Template registered for an already upper-cased name.
    pub(crate) fn template_canonical(&self, name: &str) -> Option<&SyntaxTemplate> {
        self.entries.get(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.template(name).is_some()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usage line for `name`: the upper-cased name followed by its template.
    pub fn syntax(&self, name: &str) -> Option<String> {
        let name = canonical_name(name);
        let template = self.entries.get(&name)?;
        if template.tokens().is_empty() {
            Some(name)
        } else {
            Some(format!("{} {}", name, template))
        }
    }

    /// Completion candidates for a partially typed command.
    ///
    /// A name matches when it equals `command` ignoring case, or, while no
    /// arguments have been typed yet, when it starts with `command`.
    pub fn suggest<S: AsRef<str>>(&self, command: &str, args: &[S]) -> Vec<String> {
        let wanted = canonical_name(command);
        self.names()
            .filter(|name| *name == wanted || (args.is_empty() && name.starts_with(&wanted)))
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = Registry::with_builtins();
        assert_eq!(registry.len(), Builtin::ALL.len());
        assert_eq!(
            registry.syntax("join").as_deref(),
            Some("JOIN <channel> (<key>)")
        );
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = Registry::with_builtins();
        registry.add_custom("aaa", "").unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.first(), Some(&"AAA"));
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_add_overwrites_case_insensitively() {
        let mut registry = Registry::new();
        registry.add_custom("greet", "<name>").unwrap();
        registry.add_custom("GREET", "<name> (<greeting>)").unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.template("Greet").map(|t| t.max_args()), Some(2));
    }

    #[test]
    fn test_empty_template_syntax_is_bare_name() {
        let mut registry = Registry::new();
        registry.add_custom("clear", "").unwrap();
        assert_eq!(registry.syntax("clear").as_deref(), Some("CLEAR"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.add_custom("", "<x>"),
            Err(SyntaxError::InvalidName(String::new()))
        );
        assert!(registry.add_custom("two words", "<x>").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut registry = Registry::with_builtins();
        assert!(registry.remove("nosuch").is_none());
        assert!(registry.remove("who").is_some());
        assert!(!registry.contains("WHO"));
    }

    #[test]
    fn test_suggest_prefix_only_without_args() {
        let registry = Registry::with_builtins();
        assert_eq!(registry.suggest("wh", &[] as &[&str]), vec!["WHO", "WHOIS", "WHOWAS"]);
        assert_eq!(registry.suggest("who", &["x"]), vec!["WHO"]);
        assert!(registry.suggest("wh", &["x"]).is_empty());
    }
}
