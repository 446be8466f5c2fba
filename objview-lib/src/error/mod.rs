//! Error types

mod build;
mod pattern;

pub use build::*;
pub use pattern::*;
