//! Directed acyclic graphs.
//!
//! [`Dag`] wraps a graph and rejects every edge insertion or move that would close a cycle.
//! Parallel edges are fine; self-loops are cycles.

use crate::alg;
use crate::traits::{EditableGraph, OrderedEditableGraph, ViewableGraph};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag<G> {
    graph: G,
}

impl<G: ViewableGraph> Dag<G> {
    /// Wraps `graph`, failing with [`Error::NotADag`] if it contains a directed cycle.
    pub fn new(graph: G) -> Result<Self> {
        if !alg::is_dag(&graph)? {
            tracing::debug!("rejected graph: contains a cycle");
            return Err(Error::NotADag);
        }
        Ok(Self { graph })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Replaces the inner graph; the new graph is validated.
    pub fn with_graph(self, graph: G) -> Result<Self> {
        Self::new(graph)
    }

    /// Nodes in depth-first finish order: every node precedes the nodes that reach it.
    pub fn topological_sort(&self) -> Result<Vec<G::NodeId>> {
        alg::topological_sort(&self.graph, &[], false)
    }

    fn check_add(&self, tail: &G::NodeId, head: &G::NodeId) -> Result<()> {
        if !alg::can_add_dag_edge(&self.graph, tail, head)? {
            tracing::debug!(?tail, ?head, "rejected edge: would close a cycle");
            return Err(Error::NotADag);
        }
        Ok(())
    }

    fn check_move(
        &self,
        edge: &G::EdgeId,
        new_tail: &G::NodeId,
        new_head: &G::NodeId,
    ) -> Result<()> {
        if !alg::can_move_dag_edge(&self.graph, edge, new_tail, new_head)? {
            tracing::debug!(
                ?edge,
                ?new_tail,
                ?new_head,
                "rejected move: would close a cycle"
            );
            return Err(Error::NotADag);
        }
        Ok(())
    }
}

impl<G: ViewableGraph> ViewableGraph for Dag<G> {
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
    type NodeData = G::NodeData;
    type EdgeData = G::EdgeData;

    fn is_ordered(&self) -> bool {
        self.graph.is_ordered()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn nodes(&self) -> Vec<Self::NodeId> {
        self.graph.nodes()
    }

    fn edges(&self) -> Vec<Self::EdgeId> {
        self.graph.edges()
    }

    fn has_node(&self, node: &Self::NodeId) -> bool {
        self.graph.has_node(node)
    }

    fn has_edge(&self, edge: &Self::EdgeId) -> bool {
        self.graph.has_edge(edge)
    }

    fn node_data(&self, node: &Self::NodeId) -> Result<&Self::NodeData> {
        self.graph.node_data(node)
    }

    fn edge_data(&self, edge: &Self::EdgeId) -> Result<&Self::EdgeData> {
        self.graph.edge_data(edge)
    }

    fn out_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>> {
        self.graph.out_edges(node)
    }

    fn in_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>> {
        self.graph.in_edges(node)
    }

    fn edge_ends(&self, edge: &Self::EdgeId) -> Result<(Self::NodeId, Self::NodeId)> {
        self.graph.edge_ends(edge)
    }

    fn out_degree(&self, node: &Self::NodeId) -> Result<usize> {
        self.graph.out_degree(node)
    }

    fn in_degree(&self, node: &Self::NodeId) -> Result<usize> {
        self.graph.in_degree(node)
    }

    fn edge_index(&self, edge: &Self::EdgeId) -> Result<usize> {
        self.graph.edge_index(edge)
    }
}

impl<G: EditableGraph> EditableGraph for Dag<G> {
    fn new_node(&mut self, node: Self::NodeId, data: Self::NodeData) -> Result<()> {
        self.graph.new_node(node, data)
    }

    fn remove_node(&mut self, node: &Self::NodeId) -> Result<()> {
        self.graph.remove_node(node)
    }

    fn new_edge(
        &mut self,
        edge: Self::EdgeId,
        tail: Self::NodeId,
        head: Self::NodeId,
        data: Self::EdgeData,
    ) -> Result<()> {
        self.check_add(&tail, &head)?;
        self.graph.new_edge(edge, tail, head, data)
    }

    fn remove_edge(&mut self, edge: &Self::EdgeId) -> Result<()> {
        self.graph.remove_edge(edge)
    }

    fn remove_node_edges(&mut self, node: &Self::NodeId) -> Result<()> {
        self.graph.remove_node_edges(node)
    }

    fn move_edge(
        &mut self,
        edge: &Self::EdgeId,
        new_tail: &Self::NodeId,
        new_head: &Self::NodeId,
    ) -> Result<()> {
        self.check_move(edge, new_tail, new_head)?;
        self.graph.move_edge(edge, new_tail, new_head)
    }

    fn node_data_mut(&mut self, node: &Self::NodeId) -> Result<&mut Self::NodeData> {
        self.graph.node_data_mut(node)
    }

    fn edge_data_mut(&mut self, edge: &Self::EdgeId) -> Result<&mut Self::EdgeData> {
        self.graph.edge_data_mut(edge)
    }
}

impl<G: OrderedEditableGraph> OrderedEditableGraph for Dag<G> {
    fn new_edge_at(
        &mut self,
        edge: Self::EdgeId,
        tail: Self::NodeId,
        index: usize,
        head: Self::NodeId,
        data: Self::EdgeData,
    ) -> Result<()> {
        self.check_add(&tail, &head)?;
        self.graph.new_edge_at(edge, tail, index, head, data)
    }

    fn move_edge_at(
        &mut self,
        edge: &Self::EdgeId,
        new_tail: &Self::NodeId,
        index: usize,
        new_head: &Self::NodeId,
    ) -> Result<()> {
        self.check_move(edge, new_tail, new_head)?;
        self.graph.move_edge_at(edge, new_tail, index, new_head)
    }

    fn move_edge_to(&mut self, edge: &Self::EdgeId, index: usize) -> Result<()> {
        self.graph.move_edge_to(edge, index)
    }
}
