//! Pattern list matcher

use super::RedactionTest;
use super::WildcardPattern;
use crate::error::PatternError;

/// Matches node ids against a list of wildcard patterns.
///
/// All patterns are validated and compiled up front, so a bad pattern fails
/// here rather than halfway through a build. A node matches if any pattern
/// does; an empty list matches nothing.
///
/// # Example
///
/// ```
/// use objview_lib::redact::{RedactionMatcher, RedactionTest};
///
/// let matcher = RedactionMatcher::new(["list.*.token", "password"]).unwrap();
/// assert!(matcher.is_redacted("list.0.token"));
/// assert!(matcher.is_redacted("password"));
/// assert!(!matcher.is_redacted("list.0.name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RedactionMatcher {
    patterns: Vec<WildcardPattern>,
}

impl RedactionMatcher {
    /// Compiles a list of patterns.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(WildcardPattern::new)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("[redact] compiled {} pattern(s)", patterns.len());
        Ok(Self { patterns })
    }

    /// Creates a matcher that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the configured patterns as written.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.as_str())
    }

    /// Returns the first pattern matching `id`, if any.
    pub fn matching_pattern(&self, id: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.matches(id))
            .map(|p| p.as_str())
    }
}

impl RedactionTest for RedactionMatcher {
    fn is_redacted(&self, id: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matches_nothing() {
        let matcher = RedactionMatcher::new(Vec::<String>::new()).unwrap();
        assert!(matcher.is_empty());
        assert!(!matcher.is_redacted("a"));
        assert!(!matcher.is_redacted(""));
    }

    #[test]
    fn test_any_pattern_matches() {
        let matcher = RedactionMatcher::new(["a.*", "b"]).unwrap();
        assert!(!matcher.is_redacted("a"));
        assert!(matcher.is_redacted("a.x"));
        assert!(matcher.is_redacted("b"));
        assert!(!matcher.is_redacted("b.x"));
        assert_eq!(matcher.matching_pattern("a.x"), Some("a.*"));
        assert_eq!(matcher.matching_pattern("c"), None);
    }

    #[test]
    fn test_reports_offending_pattern() {
        let err = RedactionMatcher::new(["ok.*", "bad..path", "also.ok"]).unwrap_err();
        assert_eq!(err.pattern(), "bad..path");
    }

    #[test]
    fn test_patterns_kept_in_order() {
        let matcher = RedactionMatcher::new(["z", "a.*"]).unwrap();
        let patterns: Vec<&str> = matcher.patterns().collect();
        assert_eq!(patterns, ["z", "a.*"]);
    }
}
