//! Command guard - advisory deny list for commands
//!
//! The guard refuses commands containing any configured substring. It is a
//! guardrail against obvious accidents (`rm -rf`, `shutdown`), not an
//! isolation boundary: trivial rewrites such as `rm -r -f` or variable
//! expansion get past it, and nothing here constrains what an allowed
//! command can do.

use crate::types::Config;

/// Substring deny list checked before anything is spawned
#[derive(Debug, Clone, Default)]
pub struct CommandGuard {
    forbidden_words: Vec<String>,
}

impl CommandGuard {
    /// Build a guard from an ordered list of forbidden substrings
    ///
    /// Empty entries are dropped since they would match every command.
    pub fn new<I, S>(forbidden_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let forbidden_words = forbidden_words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self { forbidden_words }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.commands.forbidden_words.iter().cloned())
    }

    /// First forbidden substring found in `command`, in configuration order
    pub fn first_match(&self, command: &str) -> Option<&str> {
        self.forbidden_words
            .iter()
            .find(|w| command.contains(w.as_str()))
            .map(String::as_str)
    }

    /// Case-sensitive containment check against every forbidden substring
    pub fn is_blocked(&self, command: &str) -> bool {
        self.first_match(command).is_some()
    }

    pub fn forbidden_words(&self) -> &[String] {
        &self.forbidden_words
    }
}
