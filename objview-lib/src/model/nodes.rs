//! Traversal helpers over built node trees.

use super::DisplayNode;

/// Depth-first, pre-order iterator over a node sequence and its descendants.
///
/// Created by [`walk`] and [`DisplayNode::descendants`].
pub struct Walk<'a> {
    stack: Vec<std::slice::Iter<'a, DisplayNode>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a DisplayNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(node) => {
                    if let Some(children) = node.children() {
                        self.stack.push(children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Walks `nodes` and everything below them in display order.
///
/// # Example
///
/// ```
/// use objview_lib::build::{build, BuildOptions};
/// use objview_lib::model::{nodes, Value};
///
/// let value = Value::from(serde_json::json!({"a": {"b": 1}, "c": 2}));
/// let tree = build(&value, &BuildOptions::default()).unwrap();
///
/// let ids: Vec<&str> = nodes::walk(&tree).map(|n| n.id()).collect();
/// assert_eq!(ids, ["a", "a.b", "c"]);
/// ```
pub fn walk(nodes: &[DisplayNode]) -> Walk<'_> {
    Walk {
        stack: vec![nodes.iter()],
    }
}

/// Finds the node with the given path id.
///
/// Descends only along the branch whose id prefixes `id`, so lookups do not
/// visit unrelated subtrees.
pub fn find<'a>(nodes: &'a [DisplayNode], id: &str) -> Option<&'a DisplayNode> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        let under = id
            .strip_prefix(node.id())
            .is_some_and(|rest| rest.starts_with('.'));
        if under {
            if let Some(found) = node.children().and_then(|children| find(children, id)) {
                return Some(found);
            }
        }
    }
    None
}
