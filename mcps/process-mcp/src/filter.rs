//! Output filter - strips terminal control sequences from decoded output

use regex::Regex;

use crate::types::{Config, ExecError};

/// Ordered set of patterns removed from rendered text
///
/// Patterns are compiled once here and never recompiled afterwards.
#[derive(Debug, Clone, Default)]
pub struct OutputFilter {
    patterns: Vec<Regex>,
}

impl OutputFilter {
    pub fn new<I, S>(patterns: I) -> Result<Self, ExecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| ExecError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn from_config(config: &Config) -> Result<Self, ExecError> {
        Self::new(&config.output.filter_patterns)
    }

    /// Remove every match of every pattern, in configuration order
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for pattern in &self.patterns {
            if pattern.is_match(&out) {
                out = pattern.replace_all(&out, "").into_owned();
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> OutputFilter {
        OutputFilter::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_strips_bell_and_hide_cursor() {
        let filter = default_filter();
        assert_eq!(filter.apply("\x07ready\x1b[25l\n"), "ready\n");
    }

    #[test]
    fn test_leaves_other_escapes() {
        let filter = default_filter();
        assert_eq!(filter.apply("\x1b[31mred\x1b[0m"), "\x1b[31mred\x1b[0m");
    }

    #[test]
    fn test_idempotent() {
        let filter = OutputFilter::new([r"\x1b\[[0-9;]*m", r"\x07"]).unwrap();
        let once = filter.apply("\x1b[1mbold\x07\x1b[0m done");
        assert_eq!(once, "bold done");
        assert_eq!(filter.apply(&once), once);
    }

    #[test]
    fn test_patterns_applied_in_order() {
        // "ab" only exists after the first pattern removes the "X".
        let filter = OutputFilter::new(["X", "ab"]).unwrap();
        assert_eq!(filter.apply("aXb!"), "!");

        let reversed = OutputFilter::new(["ab", "X"]).unwrap();
        assert_eq!(reversed.apply("aXb!"), "ab!");
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = OutputFilter::new(["(unclosed"]).unwrap_err();
        assert!(matches!(err, ExecError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filter = OutputFilter::new(Vec::<String>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.apply("\x07"), "\x07");
    }
}
