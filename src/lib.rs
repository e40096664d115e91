//! An ordered map from `i32` ids to text, stored in an unbalanced binary
//! search tree, with pre-, in- and post-order traversals and a fixed text
//! report.

pub mod binary_tree;
pub mod record;
pub mod report;
pub mod tree;

pub use binary_tree::{Order, OrderedTree, Traversal};
pub use record::{ParseRecordError, Record};
pub use report::{DisplayOrder, DisplayTree};
pub use tree::TreeOps;
