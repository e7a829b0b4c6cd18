mod diagram;
mod tree;

pub use diagram::{DEFAULT_DIAGRAM_STYLE, DiagramStyle};
pub use keysort::{Identity, KeyFn};
pub use tree::{Iter, KeyedTree};
