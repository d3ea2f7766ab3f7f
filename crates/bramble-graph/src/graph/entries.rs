//! Internal storage entries for [`Graph`](super::Graph).

use crate::ElementId;
use crate::edge_set::{OutEdges, SortedEdgeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::graph) struct NodeEntry<E: ElementId, ND> {
    pub(in crate::graph) data: ND,
    pub(in crate::graph) in_edges: SortedEdgeSet<E>,
    pub(in crate::graph) out_edges: OutEdges<E>,
}

impl<E: ElementId, ND> NodeEntry<E, ND> {
    pub(in crate::graph) fn new(data: ND, ordered: bool) -> Self {
        Self {
            data,
            in_edges: SortedEdgeSet::new(),
            out_edges: OutEdges::new(ordered),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::graph) struct EdgeEntry<N, ED> {
    pub(in crate::graph) tail: N,
    pub(in crate::graph) head: N,
    pub(in crate::graph) data: ED,
}
