//! Allow-list pattern for committed buffer values.

use regex::Regex;
use thiserror::Error;

/// Failure to compile an allow-list pattern. Compiling an invalid pattern
/// is the only fallible operation in the crate.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The supplied pattern is not a valid regular expression.
    #[error(transparent)]
    Invalid(#[from] regex::Error),
}

/// Default pattern: matches anything, so every input is allowed.
const MATCH_ALL: &str = "(.*?)";

/// Compiled allow-list predicate for the text buffer.
///
/// The predicate is always evaluated against the *entire* proposed buffer
/// value, never incrementally against the new character. Patterns with
/// anchors or lookaround-like structure would diverge under incremental
/// matching, so the whole-string semantic is part of the contract.
#[derive(Clone, Debug)]
pub struct AllowedPattern {
    regex: Regex,
}

impl AllowedPattern {
    /// Compiles `pattern` into an allow-list predicate.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Returns whether the full proposed buffer value is allowed.
    pub fn matches(&self, proposed: &str) -> bool {
        self.regex.is_match(proposed)
    }

    /// Returns the pattern source string.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for AllowedPattern {
    /// The permissive match-all pattern.
    fn default() -> Self {
        Self {
            regex: Regex::new(MATCH_ALL).expect("match-all pattern must compile"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_allows_anything() {
        let pattern = AllowedPattern::default();
        assert!(pattern.matches(""));
        assert!(pattern.matches("hello world"));
        assert!(pattern.matches("日本語 🦀"));
    }

    #[test]
    fn anchored_pattern_checks_the_whole_string() {
        let digits = AllowedPattern::new("^[0-9]*$").expect("valid pattern");
        assert!(digits.matches("123"));
        assert!(!digits.matches("12a"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(AllowedPattern::new("(").is_err());
    }
}
