#![forbid(unsafe_code)]

//! Tree edit distance (Zhang-Shasha) over `bramble-graph` trees.
//!
//! [`edit_distance`] computes the minimum edit cost between two ordered labeled trees and an
//! [`EditScript`] that realizes it; [`apply_editing_operations`] replays such a script on a
//! [`Tree`](bramble_graph::Tree) to materialize the target shape.

mod annotated;
mod apply;
mod costs;
mod distance;
mod operation;

pub use annotated::AnnotatedTree;
pub use apply::{apply_editing_operations, apply_editing_operations_with};
pub use bramble_graph::{Error, Result};
pub use costs::{EditCosts, EditOptions};
pub use distance::{edit_distance, edit_distance_with};
pub use operation::{EditOperation, EditScript, NodeRef};
