//! Input values and output display nodes

mod node;
pub mod nodes;
mod record;
mod value;
mod value_serde;

pub use node::*;
pub use record::*;
pub use value::*;
