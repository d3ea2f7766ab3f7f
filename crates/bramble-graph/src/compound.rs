//! Compound graphs: a graph plus a hierarchy tree over the same nodes.
//!
//! The tree's root is a synthetic node that does not exist in the graph; every other tree
//! node is a graph node and vice versa. Graph edges and tree edges live in separate graphs and
//! never share ids.

mod subtree;

pub use subtree::CompoundSubtree;

use crate::traits::{OrderedEditableGraph, ViewableGraph};
use crate::tree::{Tree, ViewableTree};
use crate::{Error, Result};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound<G, TG>
where
    G: ViewableGraph,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId>,
{
    graph: G,
    tree: Tree<TG>,
}

impl<G, TG> Compound<G, TG>
where
    G: ViewableGraph,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId>,
{
    /// Pairs `graph` with `tree`, failing with [`Error::NotACompound`] unless the tree's
    /// non-root nodes are exactly the graph's nodes and no edge id is used by both.
    pub fn new(graph: G, tree: Tree<TG>) -> Result<Self> {
        let graph_nodes: BTreeSet<_> = graph.nodes().into_iter().collect();
        let tree_nodes: BTreeSet<_> = tree.non_root_nodes().into_iter().collect();
        if graph_nodes != tree_nodes || graph.has_node(tree.root()) {
            tracing::debug!("rejected compound: graph and tree nodes differ");
            return Err(Error::NotACompound);
        }
        if tree.edges().iter().any(|edge| graph.has_edge(edge)) {
            tracing::debug!("rejected compound: graph and tree share an edge id");
            return Err(Error::NotACompound);
        }
        Ok(Self { graph, tree })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn tree(&self) -> &Tree<TG> {
        &self.tree
    }

    pub fn into_parts(self) -> (G, Tree<TG>) {
        (self.graph, self.tree)
    }

    /// Replaces the graph half; the pair is validated again.
    pub fn with_graph(self, graph: G) -> Result<Self> {
        Self::new(graph, self.tree)
    }

    /// Replaces the tree half; the pair is validated again.
    pub fn with_tree(self, tree: Tree<TG>) -> Result<Self> {
        Self::new(self.graph, tree)
    }

    /// The synthetic hierarchy root.
    pub fn root(&self) -> &G::NodeId {
        self.tree.root()
    }

    /// Hierarchy parent of `node`; top-level nodes report the synthetic root.
    pub fn parent(&self, node: &G::NodeId) -> Result<G::NodeId> {
        self.tree.parent(node)?.ok_or(Error::NotFound)
    }

    /// Hierarchy children of `node` (or of the synthetic root).
    pub fn children(&self, node: &G::NodeId) -> Result<Vec<G::NodeId>> {
        self.tree.children(node)
    }

    /// The part of the compound below `root` in the hierarchy, sharing this compound's storage.
    pub fn subtree(&self, root: &G::NodeId) -> Result<CompoundSubtree<'_, G, TG>> {
        Ok(CompoundSubtree::new(&self.graph, self.tree.subtree(root)?))
    }
}

impl<G, TG> Compound<G, TG>
where
    G: OrderedEditableGraph,
    TG: OrderedEditableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId>,
    TG::NodeData: Default,
    TG::EdgeData: Default,
{
    /// Adds `node` to the graph and, through `tree_edge`, as the last child of `parent` in
    /// the hierarchy.
    pub fn new_node(
        &mut self,
        node: G::NodeId,
        data: G::NodeData,
        parent: &G::NodeId,
        tree_edge: G::EdgeId,
    ) -> Result<()> {
        if self.graph.has_node(&node) || self.graph.has_edge(&tree_edge) {
            return Err(Error::Duplicate);
        }
        self.tree.new_node(
            node.clone(),
            parent,
            tree_edge,
            TG::NodeData::default(),
            TG::EdgeData::default(),
        )?;
        self.graph.new_node(node, data)
    }

    /// Removes `node` from both halves; its hierarchy children move up to its parent.
    pub fn remove_node(&mut self, node: &G::NodeId) -> Result<()> {
        if !self.graph.has_node(node) {
            return Err(Error::NotFound);
        }
        self.tree.remove_node_ungrouping(node)?;
        self.graph.remove_node(node)
    }

    pub fn move_node(&mut self, node: &G::NodeId, new_parent: &G::NodeId) -> Result<()> {
        self.tree.move_node(node, new_parent)
    }

    pub fn move_node_at(
        &mut self,
        node: &G::NodeId,
        new_parent: &G::NodeId,
        index: usize,
    ) -> Result<()> {
        self.tree.move_node_at(node, new_parent, index)
    }

    fn check_edge_id(&self, edge: &G::EdgeId) -> Result<()> {
        if self.tree.has_edge(edge) {
            return Err(Error::Duplicate);
        }
        Ok(())
    }

    pub fn new_edge(
        &mut self,
        edge: G::EdgeId,
        tail: G::NodeId,
        head: G::NodeId,
        data: G::EdgeData,
    ) -> Result<()> {
        self.check_edge_id(&edge)?;
        self.graph.new_edge(edge, tail, head, data)
    }

    pub fn new_edge_at(
        &mut self,
        edge: G::EdgeId,
        tail: G::NodeId,
        index: usize,
        head: G::NodeId,
        data: G::EdgeData,
    ) -> Result<()> {
        self.check_edge_id(&edge)?;
        self.graph.new_edge_at(edge, tail, index, head, data)
    }

    pub fn remove_edge(&mut self, edge: &G::EdgeId) -> Result<()> {
        self.graph.remove_edge(edge)
    }

    pub fn remove_node_edges(&mut self, node: &G::NodeId) -> Result<()> {
        self.graph.remove_node_edges(node)
    }

    pub fn move_edge(
        &mut self,
        edge: &G::EdgeId,
        new_tail: &G::NodeId,
        new_head: &G::NodeId,
    ) -> Result<()> {
        self.graph.move_edge(edge, new_tail, new_head)
    }

    pub fn move_edge_at(
        &mut self,
        edge: &G::EdgeId,
        new_tail: &G::NodeId,
        index: usize,
        new_head: &G::NodeId,
    ) -> Result<()> {
        self.graph.move_edge_at(edge, new_tail, index, new_head)
    }

    pub fn move_edge_to(&mut self, edge: &G::EdgeId, index: usize) -> Result<()> {
        self.graph.move_edge_to(edge, index)
    }

    pub fn set_node_data(&mut self, node: &G::NodeId, data: G::NodeData) -> Result<()> {
        self.graph.set_node_data(node, data)
    }

    pub fn set_edge_data(&mut self, edge: &G::EdgeId, data: G::EdgeData) -> Result<()> {
        self.graph.set_edge_data(edge, data)
    }
}

impl<G, TG> ViewableGraph for Compound<G, TG>
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

    fn edge_index(&self, edge: &Self::EdgeId) -> Result<usize> {
        self.graph.edge_index(edge)
    }
}
