use crate::traits::ViewableGraph;
use crate::tree::{SubtreeView, ViewableTree};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Read-only view of one hierarchy subtree of a [`Compound`](super::Compound).
///
/// The view's root plays the synthetic root: its graph nodes are the root's descendants, and
/// its graph edges are those with both ends among them.
#[derive(Debug)]
pub struct CompoundSubtree<'a, G, TG>
where
    G: ViewableGraph,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId>,
{
    graph: &'a G,
    tree: SubtreeView<'a, TG>,
}

impl<'a, G, TG> CompoundSubtree<'a, G, TG>
where
    G: ViewableGraph,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId>,
{
    pub(crate) fn new(graph: &'a G, tree: SubtreeView<'a, TG>) -> Self {
        Self { graph, tree }
    }

    pub fn root(&self) -> &G::NodeId {
        self.tree.root()
    }

    pub fn tree(&self) -> &SubtreeView<'a, TG> {
        &self.tree
    }

    /// Hierarchy parent of `node` inside the view; children of the view's root report it.
    pub fn parent(&self, node: &G::NodeId) -> Result<G::NodeId> {
        self.tree.parent(node)?.ok_or(Error::NotFound)
    }

    pub fn children(&self, node: &G::NodeId) -> Result<Vec<G::NodeId>> {
        self.tree.children(node)
    }

    fn check_node(&self, node: &G::NodeId) -> Result<()> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    fn check_edge(&self, edge: &G::EdgeId) -> Result<()> {
        if self.has_edge(edge) {
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    fn inside(&self, edges: Vec<G::EdgeId>) -> Vec<G::EdgeId> {
        edges.into_iter().filter(|edge| self.has_edge(edge)).collect()
    }
}

impl<G, TG> ViewableGraph for CompoundSubtree<'_, G, TG>
where
    G: ViewableGraph,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId>,
{
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
    type NodeData = G::NodeData;
    type EdgeData = G::EdgeData;

    fn is_ordered(&self) -> bool {
        self.graph.is_ordered()
    }

    fn node_count(&self) -> usize {
        self.tree.node_count() - 1
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    fn nodes(&self) -> Vec<Self::NodeId> {
        self.tree.non_root_nodes()
    }

    fn edges(&self) -> Vec<Self::EdgeId> {
        let mut edges = BTreeSet::new();
        for node in self.nodes() {
            if let Ok(out) = self.graph.out_edges(&node) {
                edges.extend(self.inside(out));
            }
        }
        edges.into_iter().collect()
    }

    fn has_node(&self, node: &Self::NodeId) -> bool {
        node != self.tree.root() && self.tree.has_node(node)
    }

    fn has_edge(&self, edge: &Self::EdgeId) -> bool {
        self.graph
            .edge_ends(edge)
            .is_ok_and(|(tail, head)| self.has_node(&tail) && self.has_node(&head))
    }

    fn node_data(&self, node: &Self::NodeId) -> Result<&Self::NodeData> {
        self.check_node(node)?;
        self.graph.node_data(node)
    }

    fn edge_data(&self, edge: &Self::EdgeId) -> Result<&Self::EdgeData> {
        self.check_edge(edge)?;
        self.graph.edge_data(edge)
    }

    fn out_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>> {
        self.check_node(node)?;
        Ok(self.inside(self.graph.out_edges(node)?))
    }

    fn in_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>> {
        self.check_node(node)?;
        Ok(self.inside(self.graph.in_edges(node)?))
    }

    fn edge_ends(&self, edge: &Self::EdgeId) -> Result<(Self::NodeId, Self::NodeId)> {
        self.check_edge(edge)?;
        self.graph.edge_ends(edge)
    }

    fn edge_index(&self, edge: &Self::EdgeId) -> Result<usize> {
        let tail = self.edge_tail(edge)?;
        self.out_edges(&tail)?
            .iter()
            .position(|e| e == edge)
            .ok_or(Error::NotFound)
    }
}
