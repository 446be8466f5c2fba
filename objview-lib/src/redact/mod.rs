//! Redaction by dotted wildcard path

mod matcher;
mod pattern;

pub use matcher::*;
pub use pattern::*;

/// Decides whether a node, identified by its path id, is redacted.
///
/// The builder calls this exactly once per node it constructs, before it
/// decides whether to descend. Children of a redacted node are never
/// visited, so they are never tested.
///
/// Implemented for [`RedactionMatcher`], [`NoRedaction`] and any
/// `Fn(&str) -> bool`.
///
/// # Example
///
/// ```
/// use objview_lib::redact::RedactionTest;
///
/// let secrets = |id: &str| id.ends_with(".token");
/// assert!(secrets.is_redacted("auth.token"));
/// assert!(!secrets.is_redacted("auth.user"));
/// ```
pub trait RedactionTest {
    /// Returns `true` if the node with this id should be redacted.
    fn is_redacted(&self, id: &str) -> bool;
}

impl<F> RedactionTest for F
where
    F: Fn(&str) -> bool,
{
    fn is_redacted(&self, id: &str) -> bool {
        self(id)
    }
}

/// A redaction test that never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRedaction;

impl RedactionTest for NoRedaction {
    fn is_redacted(&self, _id: &str) -> bool {
        false
    }
}
