//! Redaction pattern errors

/// Error type for redaction patterns rejected at matcher construction.
///
/// Every variant with a non-empty pattern names it, so a caller handed a
/// list of patterns from configuration can report which one to fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is the empty string.
    #[error("Redaction pattern is empty")]
    Empty,

    /// The pattern has a leading, trailing or doubled `.` separator.
    #[error("Redaction pattern '{pattern}' has an empty segment at position {segment}")]
    EmptySegment { pattern: String, segment: usize },

    /// The pattern uses `**`, which would match across segments.
    #[error("Redaction pattern '{pattern}' uses '**'; a wildcard matches exactly one segment")]
    RecursiveWildcard { pattern: String },

    /// The translated pattern failed to compile.
    #[error("Redaction pattern '{pattern}' failed to compile: {message}")]
    Compile { pattern: String, message: String },
}

impl PatternError {
    /// Creates a new empty segment error.
    pub fn empty_segment(pattern: impl Into<String>, segment: usize) -> Self {
        Self::EmptySegment {
            pattern: pattern.into(),
            segment,
        }
    }

    /// Creates a new recursive wildcard error.
    pub fn recursive_wildcard(pattern: impl Into<String>) -> Self {
        Self::RecursiveWildcard {
            pattern: pattern.into(),
        }
    }

    /// Creates a new compile error.
    pub fn compile(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Compile {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Returns the pattern that was rejected. Empty for [`PatternError::Empty`].
    pub fn pattern(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::EmptySegment { pattern, .. }
            | Self::RecursiveWildcard { pattern }
            | Self::Compile { pattern, .. } => pattern,
        }
    }
}
