//! Display nodes produced by the tree builder

use std::fmt;

use serde::Serialize;

/// The display type of a node.
///
/// Every scalar maps to exactly one of the scalar variants and every
/// container to `Object` or `Array`. `Redacted` is never produced by
/// classification; the builder applies it afterwards.
///
/// The lowercase name (see [`NodeType::as_str`]) doubles as a style class
/// for rendering layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    String,
    Integer,
    Float,
    Nan,
    Null,
    Undefined,
    Boolean,
    Callable,
    Object,
    Array,
    Redacted,
}

impl NodeType {
    /// Returns the lowercase type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::String => "string",
            NodeType::Integer => "integer",
            NodeType::Float => "float",
            NodeType::Nan => "nan",
            NodeType::Null => "null",
            NodeType::Undefined => "undefined",
            NodeType::Boolean => "boolean",
            NodeType::Callable => "callable",
            NodeType::Object => "object",
            NodeType::Array => "array",
            NodeType::Redacted => "redacted",
        }
    }

    /// Returns `true` for `Object` and `Array`.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeType::Object | NodeType::Array)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named or indexed value in the display tree.
///
/// Nodes are immutable once built. A rebuild from an unchanged value yields
/// the same ids for structurally corresponding nodes, which is what
/// renderers key on between builds.
///
/// Serializes with the field names `id`, `key`, `name`, `level`, `type`,
/// `value`, `inArray` and `children`; `value` and `children` are omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
    id: String,
    key: String,
    name: String,
    level: usize,
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    in_array: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<DisplayNode>>,
}

impl DisplayNode {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: String,
        key: String,
        name: String,
        level: usize,
        node_type: NodeType,
        value: Option<String>,
        in_array: bool,
        children: Option<Vec<DisplayNode>>,
    ) -> Self {
        Self {
            id,
            key,
            name,
            level,
            node_type,
            value,
            in_array,
            children,
        }
    }

    /// Dotted path from the root, e.g. `list.0.test.redactme`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rendering key, `"{name}.{level}"`. Unique among siblings only.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Field name, or the element index for nodes inside an array.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depth in the tree (0 = root level).
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// String rendering of a scalar. `None` for objects, arrays and
    /// redacted nodes.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the parent container is an array.
    pub fn in_array(&self) -> bool {
        self.in_array
    }

    /// Child nodes. `None` unless this is an expanded object or array.
    pub fn children(&self) -> Option<&[DisplayNode]> {
        self.children.as_deref()
    }

    pub fn is_redacted(&self) -> bool {
        self.node_type == NodeType::Redacted
    }

    /// Iterates over this node and all of its descendants, depth-first.
    pub fn descendants(&self) -> super::nodes::Walk<'_> {
        super::nodes::walk(std::slice::from_ref(self))
    }
}
