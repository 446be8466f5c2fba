//! Tree build errors

use super::PatternError;
use crate::model::NodeType;

/// Errors that can occur while building a display tree.
///
/// A build is all-or-nothing: on error no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The top-level value is not a record or sequence.
    #[error("Invalid input: expected an object or array at the top level, got {found}")]
    InvalidInput {
        /// Display type of the value that was passed in.
        found: NodeType,
    },

    /// The value nests deeper than the configured recursion limit.
    #[error("Resource exhausted: value nests deeper than the recursion limit of {limit}")]
    ResourceExhausted {
        /// The recursion limit that was hit.
        limit: usize,
    },

    /// An option was out of range.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the option.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A redaction pattern was rejected.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl BuildError {
    /// Creates a new invalid input error.
    pub fn invalid_input(found: NodeType) -> Self {
        Self::InvalidInput { found }
    }

    /// Creates a new resource exhausted error.
    pub fn resource_exhausted(limit: usize) -> Self {
        Self::ResourceExhausted { limit }
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}
