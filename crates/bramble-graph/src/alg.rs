//! Graph algorithms.
//!
//! Everything except the traversal orders is built on the visitor-driven
//! [`depth_first_search`] engine.

mod dfs;
mod is_tree;
mod order;
mod path_exists;
mod topological_sort;

pub use dfs::{DfsOptions, DfsVisitor, depth_first_search};
pub use is_tree::is_tree;
pub use order::{postorder, preorder};
pub use path_exists::{can_add_dag_edge, can_move_dag_edge, path_exists};
pub use topological_sort::{is_dag, topological_sort};
