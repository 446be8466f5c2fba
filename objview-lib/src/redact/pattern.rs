//! Wildcard path patterns
//!
//! A pattern is a dot-separated list of segments matched against a whole
//! node id. Within a segment `*` matches any run of characters other than
//! `.` and `?` matches a single character other than `.`; everything else
//! is literal. A `*` segment therefore stands for exactly one id segment:
//! `list.*.name` matches `list.3.name` but not `list.3.4.name`.

use regex::Regex;

use crate::error::PatternError;

const SEPARATOR: char = '.';

/// A single compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
enum PatternKind {
    /// No wildcards: plain string comparison.
    Literal,
    /// Anchored translation of the pattern.
    Glob(Regex),
}

impl WildcardPattern {
    /// Parses and compiles a pattern.
    pub fn new(pattern: impl Into<String>) -> Result<Self, PatternError> {
        let source = pattern.into();
        validate(&source)?;

        let kind = if source.contains(['*', '?']) {
            let regex = Regex::new(&translate(&source))
                .map_err(|e| PatternError::compile(source.as_str(), e.to_string()))?;
            PatternKind::Glob(regex)
        } else {
            PatternKind::Literal
        };

        Ok(Self { source, kind })
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the pattern matches the whole id.
    pub fn matches(&self, id: &str) -> bool {
        match &self.kind {
            PatternKind::Literal => self.source == id,
            PatternKind::Glob(regex) => regex.is_match(id),
        }
    }
}

fn validate(pattern: &str) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    for (index, segment) in pattern.split(SEPARATOR).enumerate() {
        if segment.is_empty() {
            return Err(PatternError::empty_segment(pattern, index));
        }
        if segment.contains("**") {
            return Err(PatternError::recursive_wildcard(pattern));
        }
    }
    Ok(())
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');
    for c in pattern.chars() {
        match c {
            '*' => out.push_str("[^.]*"),
            '?' => out.push_str("[^.]"),
            _ => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }
    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, id: &str) -> bool {
        WildcardPattern::new(pattern).unwrap().matches(id)
    }

    #[test]
    fn test_literal() {
        assert!(matches("a.b", "a.b"));
        assert!(!matches("a.b", "a.bc"));
        assert!(!matches("a.b", "a"));
        assert!(!matches("a.b", "a.b.c"));
    }

    #[test]
    fn test_star_matches_one_segment() {
        assert!(matches("list.*.test.redactme", "list.2.test.redactme"));
        assert!(!matches("list.*.test.redactme", "list.2.test.other"));
        assert!(!matches("list.*.test.redactme", "list.2.3.test.redactme"));
        assert!(!matches("a.*", "a"));
        assert!(matches("a.*", "a.b"));
    }

    #[test]
    fn test_partial_segment_wildcards() {
        assert!(matches("user.pass*", "user.password"));
        assert!(matches("user.pass*", "user.pass"));
        assert!(!matches("user.pass*", "user.pass.hash"));
        assert!(matches("key?", "key1"));
        assert!(!matches("key?", "key"));
        assert!(!matches("a?b", "a.b"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(matches("price($)", "price($)"));
        assert!(matches("a+b.*", "a+b.c"));
        assert!(!matches("a+b.*", "aab.c"));
    }

    #[test]
    fn test_invalid_patterns() {
        let err = WildcardPattern::new("").unwrap_err();
        assert_eq!(err, PatternError::Empty);
        assert_eq!(err.pattern(), "");
        assert_eq!(
            WildcardPattern::new("a..b").unwrap_err(),
            PatternError::empty_segment("a..b", 1)
        );
        assert_eq!(
            WildcardPattern::new(".a").unwrap_err(),
            PatternError::empty_segment(".a", 0)
        );
        assert_eq!(
            WildcardPattern::new("a.").unwrap_err(),
            PatternError::empty_segment("a.", 1)
        );
        assert_eq!(
            WildcardPattern::new("a.**").unwrap_err(),
            PatternError::recursive_wildcard("a.**")
        );
    }
}
