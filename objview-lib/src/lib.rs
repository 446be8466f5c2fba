//! Object tree viewer core
//!
//! Turns a nested [`Value`](model::Value) into a tree of
//! [`DisplayNode`](model::DisplayNode)s ready for a rendering layer: every
//! node gets a dotted path id, a depth level, a classified display type and
//! a string rendering of its scalar value. Fields can be redacted by
//! wildcard path pattern and expansion can be capped at a maximum depth.
//!
//! # Example
//!
//! ```
//! use objview_lib::build::{build, BuildOptions};
//! use objview_lib::model::{NodeType, Value};
//!
//! let value = Value::from(serde_json::json!({
//!     "user": { "name": "Ada", "password": "hunter2" }
//! }));
//! let options = BuildOptions::new()
//!     .with_redact_keys(["user.password"])
//!     .unwrap();
//!
//! let nodes = build(&value, &options).unwrap();
//! let user = &nodes[0];
//! let children = user.children().unwrap();
//! assert_eq!(children[0].value(), Some("Ada"));
//! assert_eq!(children[1].node_type(), NodeType::Redacted);
//! ```

pub mod build;
pub mod classify;
pub mod error;
pub mod model;
pub mod redact;

pub use build::build;
pub use build::BuildOptions;
pub use error::BuildError;
pub use error::PatternError;
pub use model::DisplayNode;
pub use model::NodeType;
pub use model::Value;
pub use redact::RedactionMatcher;
pub use redact::RedactionTest;
