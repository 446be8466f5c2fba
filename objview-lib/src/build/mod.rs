//! Tree builder
//!
//! Walks a [`Value`] into a tree of [`DisplayNode`]s. Each node goes through
//! three steps: it is classified, then tested for redaction, then finalized
//! either as a redacted leaf or with its (possibly depth-capped) children.

mod options;

pub use options::*;

use crate::classify::classify;
use crate::classify::render;
use crate::error::BuildError;
use crate::model::DisplayNode;
use crate::model::NodeType;
use crate::model::Value;
use crate::redact::RedactionTest;

/// Builds the display tree for a record or sequence.
///
/// Returns the top-level nodes in input order, with nested nodes under
/// their parents.
///
/// # Errors
///
/// - [`BuildError::InvalidInput`] if `value` is not a record or sequence.
/// - [`BuildError::ResourceExhausted`] if `value` nests deeper than
///   `options.recursion_limit`.
/// - [`BuildError::InvalidArgument`] if `options.recursion_limit` is zero.
pub fn build(value: &Value, options: &BuildOptions) -> Result<Vec<DisplayNode>, BuildError> {
    TreeBuilder::new(&options.redaction)
        .with_max_level(options.max_level)
        .with_recursion_limit(options.recursion_limit)
        .build(value)
}

/// Tree builder with a caller-supplied redaction test.
///
/// [`build`] covers the common case of pattern-based redaction; use this
/// directly to plug in any other [`RedactionTest`].
///
/// # Example
///
/// ```
/// use objview_lib::build::TreeBuilder;
/// use objview_lib::model::{NodeType, Value};
///
/// let value = Value::from(serde_json::json!({"token": "abc", "user": "ada"}));
/// let redact_tokens = |id: &str| id.ends_with("token");
///
/// let nodes = TreeBuilder::new(&redact_tokens).build(&value).unwrap();
/// assert_eq!(nodes[0].node_type(), NodeType::Redacted);
/// assert_eq!(nodes[1].value(), Some("ada"));
/// ```
pub struct TreeBuilder<'r, R: RedactionTest + ?Sized> {
    redaction: &'r R,
    max_level: usize,
    recursion_limit: usize,
}

/// Position of the entries currently being built.
#[derive(Clone, Copy)]
struct Context<'p> {
    level: usize,
    in_array: bool,
    parent_id: Option<&'p str>,
}

impl<'r, R: RedactionTest + ?Sized> TreeBuilder<'r, R> {
    /// Creates a builder with unlimited depth and the default recursion limit.
    pub fn new(redaction: &'r R) -> Self {
        Self {
            redaction,
            max_level: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Sets the depth cap. `0` means unlimited.
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the nesting cap.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Builds the display tree for a record or sequence.
    pub fn build(&self, value: &Value) -> Result<Vec<DisplayNode>, BuildError> {
        if self.recursion_limit == 0 {
            return Err(BuildError::invalid_argument(
                "recursion_limit",
                "must be positive",
            ));
        }
        if !value.is_container() {
            return Err(BuildError::invalid_input(classify(value)));
        }

        let root = Context {
            level: 0,
            in_array: false,
            parent_id: None,
        };
        let nodes = self.build_container(value, root)?;

        log::debug!(
            "[build] built {} top-level node(s) (max_level={}, recursion_limit={})",
            nodes.len(),
            self.max_level,
            self.recursion_limit
        );
        Ok(nodes)
    }

    fn build_container(
        &self,
        value: &Value,
        cx: Context<'_>,
    ) -> Result<Vec<DisplayNode>, BuildError> {
        if cx.level >= self.recursion_limit {
            return Err(BuildError::resource_exhausted(self.recursion_limit));
        }

        match value {
            Value::Record(record) => record
                .iter()
                .map(|(name, child)| self.build_entry(name.to_string(), child, cx))
                .collect(),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(index, child)| self.build_entry(index.to_string(), child, cx))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }

    fn build_entry(
        &self,
        name: String,
        value: &Value,
        cx: Context<'_>,
    ) -> Result<DisplayNode, BuildError> {
        let pending = PendingNode::classify(name, value, cx);

        if self.redaction.is_redacted(&pending.id) {
            log::trace!("[build] redacted {}", pending.id);
            return Ok(pending.redact());
        }

        if !pending.node_type.is_container() {
            return Ok(pending.finish(None));
        }

        if !self.expands(cx.level) {
            log::trace!("[build] not expanding {} at level {}", pending.id, cx.level);
            return Ok(pending.finish(None));
        }

        let child_cx = Context {
            level: cx.level + 1,
            in_array: pending.node_type == NodeType::Array,
            parent_id: Some(&pending.id),
        };
        let children = self.build_container(value, child_cx)?;
        Ok(pending.finish(Some(children)))
    }

    /// Whether container nodes at `level` get children.
    fn expands(&self, level: usize) -> bool {
        self.max_level == 0 || level < self.max_level
    }
}

/// A classified node whose redaction and children are not decided yet.
struct PendingNode<'v> {
    id: String,
    name: String,
    level: usize,
    in_array: bool,
    node_type: NodeType,
    value: &'v Value,
}

impl<'v> PendingNode<'v> {
    fn classify(name: String, value: &'v Value, cx: Context<'_>) -> Self {
        let id = match cx.parent_id {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.clone(),
        };
        Self {
            id,
            name,
            level: cx.level,
            in_array: cx.in_array,
            node_type: classify(value),
            value,
        }
    }

    fn redact(self) -> DisplayNode {
        self.into_node(NodeType::Redacted, None, None)
    }

    fn finish(self, children: Option<Vec<DisplayNode>>) -> DisplayNode {
        let node_type = self.node_type;
        let rendered = render(self.value);
        self.into_node(node_type, rendered, children)
    }

    fn into_node(
        self,
        node_type: NodeType,
        value: Option<String>,
        children: Option<Vec<DisplayNode>>,
    ) -> DisplayNode {
        let key = format!("{}.{}", self.name, self.level);
        DisplayNode::new(
            self.id,
            key,
            self.name,
            self.level,
            node_type,
            value,
            self.in_array,
            children,
        )
    }
}
