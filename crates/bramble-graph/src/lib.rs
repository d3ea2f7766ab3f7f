#![forbid(unsafe_code)]

//! Typed, invariant-preserving graph data structures.
//!
//! - [`Graph`]: directed multigraph whose outgoing edges are kept either in id order or in a
//!   caller-controlled sibling order ([`GraphOptions::ordered`]).
//! - [`Tree`], [`Dag`] and [`Compound`]: wrappers that validate their invariant on
//!   construction and on every mutation.
//! - [`alg`]: a visitor-driven depth-first search engine and the algorithms built on it.
//! - [`GraphDifference`]: structural diff and patch between graph snapshots.
//!
//! Read-only access goes through [`ViewableGraph`]; bring [`prelude`] into scope to use the
//! capability traits.

pub mod alg;
pub mod compound;
pub mod dag;
pub mod difference;
pub mod edge_set;
pub mod error;
pub mod graph;
mod id;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod traits;
pub mod tree;

pub use compound::{Compound, CompoundSubtree};
pub use dag::Dag;
pub use difference::{GraphDifference, GraphMutation};
pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions};
pub use id::ElementId;
pub use traits::{EditableGraph, OrderedEditableGraph, ViewableGraph};
pub use tree::{SubtreeView, Tree, ViewableTree};

pub mod prelude {
    pub use crate::edge_set::EdgeSet;
    pub use crate::traits::{EditableGraph, OrderedEditableGraph, ViewableGraph};
    pub use crate::tree::ViewableTree;
}
