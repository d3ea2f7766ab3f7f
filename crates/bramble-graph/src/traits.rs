//! Capability traits shared by graphs and the wrappers built on top of them.
//!
//! [`ViewableGraph`] is the read-only surface consumed by algorithms and exporters.
//! [`EditableGraph`] adds the mutations every graph supports, and [`OrderedEditableGraph`]
//! the positional ones that only make sense when sibling order is kept. Positional operations
//! on a graph built without sibling order fail with [`Error::NotOrdered`].

use crate::{ElementId, Error, Result};
use std::collections::BTreeSet;

pub trait ViewableGraph {
    type NodeId: ElementId;
    type EdgeId: ElementId;
    type NodeData;
    type EdgeData;

    /// Whether outgoing edges keep caller-controlled sibling order.
    fn is_ordered(&self) -> bool;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// All node ids in canonical (id) order.
    fn nodes(&self) -> Vec<Self::NodeId>;

    /// All edge ids in canonical (id) order.
    fn edges(&self) -> Vec<Self::EdgeId>;

    fn has_node(&self, node: &Self::NodeId) -> bool;

    fn has_edge(&self, edge: &Self::EdgeId) -> bool;

    fn node_data(&self, node: &Self::NodeId) -> Result<&Self::NodeData>;

    fn edge_data(&self, edge: &Self::EdgeId) -> Result<&Self::EdgeData>;

    /// Outgoing edges in sibling order (id order when the graph is not ordered).
    fn out_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>>;

    /// Incoming edges in id order.
    fn in_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>>;

    fn edge_ends(&self, edge: &Self::EdgeId) -> Result<(Self::NodeId, Self::NodeId)>;

    fn edge_tail(&self, edge: &Self::EdgeId) -> Result<Self::NodeId> {
        Ok(self.edge_ends(edge)?.0)
    }

    fn edge_head(&self, edge: &Self::EdgeId) -> Result<Self::NodeId> {
        Ok(self.edge_ends(edge)?.1)
    }

    fn out_degree(&self, node: &Self::NodeId) -> Result<usize> {
        Ok(self.out_edges(node)?.len())
    }

    fn in_degree(&self, node: &Self::NodeId) -> Result<usize> {
        Ok(self.in_edges(node)?.len())
    }

    /// Incoming and outgoing edges together, in id order.
    fn node_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>> {
        let mut edges: BTreeSet<Self::EdgeId> = self.out_edges(node)?.into_iter().collect();
        edges.extend(self.in_edges(node)?);
        Ok(edges.into_iter().collect())
    }

    /// Heads of the outgoing edges. Ordered graphs list them in sibling order (first
    /// occurrence wins for parallel edges); sorted graphs list them in id order.
    fn successors(&self, node: &Self::NodeId) -> Result<Vec<Self::NodeId>> {
        let heads = self
            .out_edges(node)?
            .iter()
            .map(|edge| self.edge_head(edge))
            .collect::<Result<Vec<_>>>()?;
        if self.is_ordered() {
            let mut seen = BTreeSet::new();
            Ok(heads
                .into_iter()
                .filter(|head| seen.insert(head.clone()))
                .collect())
        } else {
            let heads: BTreeSet<_> = heads.into_iter().collect();
            Ok(heads.into_iter().collect())
        }
    }

    fn predecessors(&self, node: &Self::NodeId) -> Result<Vec<Self::NodeId>> {
        let tails = self
            .in_edges(node)?
            .iter()
            .map(|edge| self.edge_tail(edge))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(tails.into_iter().collect())
    }

    fn neighbors(&self, node: &Self::NodeId) -> Result<Vec<Self::NodeId>> {
        let mut out: BTreeSet<_> = self.successors(node)?.into_iter().collect();
        out.extend(self.predecessors(node)?);
        Ok(out.into_iter().collect())
    }

    /// Position of `edge` among its tail's outgoing edges.
    fn edge_index(&self, edge: &Self::EdgeId) -> Result<usize> {
        let tail = self.edge_tail(edge)?;
        self.out_edges(&tail)?
            .iter()
            .position(|e| e == edge)
            .ok_or(Error::NotFound)
    }
}

pub trait EditableGraph: ViewableGraph {
    fn new_node(&mut self, node: Self::NodeId, data: Self::NodeData) -> Result<()>;

    /// Removes `node` together with every edge incident to it.
    fn remove_node(&mut self, node: &Self::NodeId) -> Result<()>;

    fn new_edge(
        &mut self,
        edge: Self::EdgeId,
        tail: Self::NodeId,
        head: Self::NodeId,
        data: Self::EdgeData,
    ) -> Result<()>;

    fn remove_edge(&mut self, edge: &Self::EdgeId) -> Result<()>;

    fn remove_node_edges(&mut self, node: &Self::NodeId) -> Result<()>;

    /// Reattaches `edge` to new endpoints. Moving an edge onto its current ends is a no-op.
    fn move_edge(
        &mut self,
        edge: &Self::EdgeId,
        new_tail: &Self::NodeId,
        new_head: &Self::NodeId,
    ) -> Result<()>;

    fn node_data_mut(&mut self, node: &Self::NodeId) -> Result<&mut Self::NodeData>;

    fn edge_data_mut(&mut self, edge: &Self::EdgeId) -> Result<&mut Self::EdgeData>;

    fn set_node_data(&mut self, node: &Self::NodeId, data: Self::NodeData) -> Result<()> {
        *self.node_data_mut(node)? = data;
        Ok(())
    }

    fn set_edge_data(&mut self, edge: &Self::EdgeId, data: Self::EdgeData) -> Result<()> {
        *self.edge_data_mut(edge)? = data;
        Ok(())
    }

    fn with_node_data<T, F>(&mut self, node: &Self::NodeId, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self::NodeData) -> T,
    {
        Ok(f(self.node_data_mut(node)?))
    }

    fn with_edge_data<T, F>(&mut self, edge: &Self::EdgeId, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self::EdgeData) -> T,
    {
        Ok(f(self.edge_data_mut(edge)?))
    }
}

pub trait OrderedEditableGraph: EditableGraph {
    /// Adds an edge at sibling position `index` among `tail`'s outgoing edges.
    fn new_edge_at(
        &mut self,
        edge: Self::EdgeId,
        tail: Self::NodeId,
        index: usize,
        head: Self::NodeId,
        data: Self::EdgeData,
    ) -> Result<()>;

    /// Reattaches `edge` and places it at sibling position `index` under `new_tail`.
    fn move_edge_at(
        &mut self,
        edge: &Self::EdgeId,
        new_tail: &Self::NodeId,
        index: usize,
        new_head: &Self::NodeId,
    ) -> Result<()>;

    /// Repositions `edge` among its tail's outgoing edges.
    fn move_edge_to(&mut self, edge: &Self::EdgeId, index: usize) -> Result<()>;

    fn move_edge_to_front(&mut self, edge: &Self::EdgeId) -> Result<()> {
        self.move_edge_to(edge, 0)
    }

    fn move_edge_to_back(&mut self, edge: &Self::EdgeId) -> Result<()> {
        let tail = self.edge_tail(edge)?;
        let last = self.out_degree(&tail)?.saturating_sub(1);
        self.move_edge_to(edge, last)
    }
}
