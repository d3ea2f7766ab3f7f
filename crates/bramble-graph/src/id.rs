use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a node or an edge.
///
/// Canonical iteration order of a graph is the `Ord` order of its identifiers. Any type with
/// the required bounds is an identifier; strings and integers are the usual choice.
pub trait ElementId: Clone + Ord + Hash + Debug {}

impl<T> ElementId for T where T: Clone + Ord + Hash + Debug {}
