//! Rooted trees over any graph.
//!
//! A [`Tree`] owns an inner graph and a root id and guarantees that every node is reachable
//! from the root by exactly one path. Every mutation either keeps that invariant by
//! construction or validates the result; failures leave the tree unchanged.

mod subtree;

pub use subtree::SubtreeView;

use crate::alg;
use crate::traits::{OrderedEditableGraph, ViewableGraph};
use crate::{Error, Result};

/// Read-only tree queries on top of [`ViewableGraph`].
pub trait ViewableTree: ViewableGraph {
    fn root(&self) -> &Self::NodeId;

    /// The edge from `node`'s parent, `None` for the root.
    fn in_edge(&self, node: &Self::NodeId) -> Result<Option<Self::EdgeId>> {
        Ok(self.in_edges(node)?.into_iter().next())
    }

    fn parent(&self, node: &Self::NodeId) -> Result<Option<Self::NodeId>> {
        match self.in_edge(node)? {
            Some(edge) => Ok(Some(self.edge_tail(&edge)?)),
            None => Ok(None),
        }
    }

    /// Children in sibling order.
    fn children(&self, node: &Self::NodeId) -> Result<Vec<Self::NodeId>> {
        self.out_edges(node)?
            .iter()
            .map(|edge| self.edge_head(edge))
            .collect()
    }

    fn has_children(&self, node: &Self::NodeId) -> Result<bool> {
        Ok(self.out_degree(node)? > 0)
    }

    /// Position of `node` among its siblings, `None` for the root.
    fn child_index(&self, node: &Self::NodeId) -> Result<Option<usize>> {
        match self.in_edge(node)? {
            Some(edge) => Ok(Some(self.edge_index(&edge)?)),
            None => Ok(None),
        }
    }

    fn non_root_nodes(&self) -> Vec<Self::NodeId> {
        let root = self.root();
        self.nodes()
            .into_iter()
            .filter(|node| node != root)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<G: ViewableGraph> {
    root: G::NodeId,
    graph: G,
}

impl<G: ViewableGraph> Tree<G> {
    /// Wraps `graph`, failing with [`Error::NotATree`] unless it is a tree rooted at `root`.
    pub fn new(graph: G, root: G::NodeId) -> Result<Self> {
        if !alg::is_tree(&graph, &root)? {
            tracing::debug!(?root, "rejected graph: not a tree");
            return Err(Error::NotATree);
        }
        Ok(Self { root, graph })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }

    pub fn into_parts(self) -> (G, G::NodeId) {
        (self.graph, self.root)
    }

    /// Replaces the inner graph, keeping the root; the new graph is validated.
    pub fn with_graph(self, graph: G) -> Result<Self> {
        Self::new(graph, self.root)
    }

    /// Re-roots the tree. Only a node from which the whole graph is a tree qualifies.
    pub fn set_root(&mut self, root: G::NodeId) -> Result<()> {
        if !alg::is_tree(&self.graph, &root)? {
            return Err(Error::NotATree);
        }
        self.root = root;
        Ok(())
    }

    /// A view of the subtree below `root`, sharing this tree's storage.
    pub fn subtree(&self, root: &G::NodeId) -> Result<SubtreeView<'_, G>> {
        SubtreeView::new(&self.graph, root.clone())
    }
}

impl<G: OrderedEditableGraph> Tree<G> {
    /// Applies arbitrary edits to a copy of the inner graph and commits them only if the
    /// result is still a tree with the same root.
    pub fn modify<T, F>(&mut self, f: F) -> Result<T>
    where
        G: Clone,
        F: FnOnce(&mut G) -> Result<T>,
    {
        let mut graph = self.graph.clone();
        let output = f(&mut graph)?;
        match alg::is_tree(&graph, &self.root) {
            Ok(true) => {}
            Ok(false) | Err(Error::NotFound) => {
                tracing::debug!(root = ?self.root, "rejected modification: not a tree");
                return Err(Error::NotATree);
            }
            Err(err) => return Err(err),
        }
        self.graph = graph;
        Ok(output)
    }

    pub fn set_node_data(&mut self, node: &G::NodeId, data: G::NodeData) -> Result<()> {
        self.graph.set_node_data(node, data)
    }

    pub fn set_edge_data(&mut self, edge: &G::EdgeId, data: G::EdgeData) -> Result<()> {
        self.graph.set_edge_data(edge, data)
    }

    pub fn node_data_mut(&mut self, node: &G::NodeId) -> Result<&mut G::NodeData> {
        self.graph.node_data_mut(node)
    }

    pub fn edge_data_mut(&mut self, edge: &G::EdgeId) -> Result<&mut G::EdgeData> {
        self.graph.edge_data_mut(edge)
    }

    pub fn with_node_data<T, F>(&mut self, node: &G::NodeId, f: F) -> Result<T>
    where
        F: FnOnce(&mut G::NodeData) -> T,
    {
        self.graph.with_node_data(node, f)
    }

    fn check_new_child(
        &self,
        node: &G::NodeId,
        parent: &G::NodeId,
        edge: &G::EdgeId,
    ) -> Result<()> {
        if self.graph.has_node(node) || self.graph.has_edge(edge) {
            return Err(Error::Duplicate);
        }
        if !self.graph.has_node(parent) {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Adds `node` as the last child of `parent` (or in edge-id order on sorted trees).
    pub fn new_node(
        &mut self,
        node: G::NodeId,
        parent: &G::NodeId,
        edge: G::EdgeId,
        node_data: G::NodeData,
        edge_data: G::EdgeData,
    ) -> Result<()> {
        self.check_new_child(&node, parent, &edge)?;
        self.graph.new_node(node.clone(), node_data)?;
        self.graph.new_edge(edge, parent.clone(), node, edge_data)
    }

    /// Adds `node` as child number `index` of `parent`.
    pub fn new_node_at(
        &mut self,
        node: G::NodeId,
        parent: &G::NodeId,
        index: usize,
        edge: G::EdgeId,
        node_data: G::NodeData,
        edge_data: G::EdgeData,
    ) -> Result<()> {
        if !self.graph.is_ordered() {
            return Err(Error::NotOrdered);
        }
        self.check_new_child(&node, parent, &edge)?;
        if index > self.graph.out_degree(parent)? {
            return Err(Error::InvalidIndex);
        }
        self.graph.new_node(node.clone(), node_data)?;
        self.graph
            .new_edge_at(edge, parent.clone(), index, node, edge_data)
    }

    /// Inserts `node` directly above `existing`: the new node takes `existing`'s place among
    /// its siblings and `existing` becomes its only child. Inserting above the root makes the
    /// new node the root.
    pub fn insert_node(
        &mut self,
        node: G::NodeId,
        existing: &G::NodeId,
        edge: G::EdgeId,
        node_data: G::NodeData,
        edge_data: G::EdgeData,
    ) -> Result<()> {
        if *existing == self.root {
            if self.graph.has_node(&node) || self.graph.has_edge(&edge) {
                return Err(Error::Duplicate);
            }
            self.graph.new_node(node.clone(), node_data)?;
            self.graph
                .new_edge(edge, node.clone(), existing.clone(), edge_data)?;
            self.root = node;
            return Ok(());
        }

        let Some(existing_edge) = self.in_edge(existing)? else {
            return Err(Error::NotATree);
        };
        let parent = self.graph.edge_tail(&existing_edge)?;
        if self.graph.is_ordered() {
            let index = self.graph.edge_index(&existing_edge)?;
            self.new_node_at(node.clone(), &parent, index, edge, node_data, edge_data)?;
        } else {
            self.new_node(node.clone(), &parent, edge, node_data, edge_data)?;
        }
        self.graph.move_edge(&existing_edge, &node, existing)
    }

    /// Inserts `node` as child number `index` of `parent` and moves the `count` siblings that
    /// followed it underneath, preserving their order. Undoes
    /// [`remove_node_ungrouping`](Self::remove_node_ungrouping).
    #[allow(clippy::too_many_arguments)]
    pub fn new_node_grouping(
        &mut self,
        node: G::NodeId,
        parent: &G::NodeId,
        index: usize,
        count: usize,
        edge: G::EdgeId,
        node_data: G::NodeData,
        edge_data: G::EdgeData,
    ) -> Result<()> {
        if !self.graph.is_ordered() {
            return Err(Error::NotOrdered);
        }
        self.check_new_child(&node, parent, &edge)?;
        let siblings = self.graph.out_edges(parent)?;
        let adopted = index
            .checked_add(count)
            .and_then(|end| siblings.get(index..end));
        let Some(adopted) = adopted else {
            return Err(Error::InvalidIndex);
        };
        let adopted = adopted.to_vec();

        self.graph.new_node(node.clone(), node_data)?;
        self.graph
            .new_edge_at(edge, parent.clone(), index, node.clone(), edge_data)?;
        for (position, child_edge) in adopted.iter().enumerate() {
            let child = self.graph.edge_head(child_edge)?;
            self.graph
                .move_edge_at(child_edge, &node, position, &child)?;
        }
        Ok(())
    }

    /// Removes `node` and promotes its children to its parent, in its sibling slot. The root
    /// can only be removed while it has exactly one child, which becomes the new root.
    pub fn remove_node_ungrouping(&mut self, node: &G::NodeId) -> Result<()> {
        if !self.graph.has_node(node) {
            return Err(Error::NotFound);
        }

        if *node == self.root {
            let children = self.children(node)?;
            let [new_root] = children.as_slice() else {
                tracing::debug!(root = ?node, "cannot ungroup a root without exactly one child");
                return Err(Error::NotATree);
            };
            let new_root = new_root.clone();
            self.graph.remove_node(node)?;
            self.root = new_root;
            return Ok(());
        }

        let Some(node_edge) = self.in_edge(node)? else {
            return Err(Error::NotATree);
        };
        let parent = self.graph.edge_tail(&node_edge)?;
        let child_edges = self.graph.out_edges(node)?;
        if self.graph.is_ordered() {
            let slot = self.graph.edge_index(&node_edge)?;
            for (offset, child_edge) in child_edges.iter().enumerate() {
                let child = self.graph.edge_head(child_edge)?;
                self.graph
                    .move_edge_at(child_edge, &parent, slot + offset, &child)?;
            }
        } else {
            for child_edge in &child_edges {
                let child = self.graph.edge_head(child_edge)?;
                self.graph.move_edge(child_edge, &parent, &child)?;
            }
        }
        self.graph.remove_node(node)
    }

    /// Removes `node` and all of its descendants. The root cannot be removed this way.
    pub fn remove_node_and_children(&mut self, node: &G::NodeId) -> Result<()> {
        if *node == self.root {
            return Err(Error::NotATree);
        }
        for doomed in alg::topological_sort(&self.graph, std::slice::from_ref(node), true)? {
            self.graph.remove_node(&doomed)?;
        }
        Ok(())
    }

    fn check_move(&self, node: &G::NodeId, new_parent: &G::NodeId) -> Result<G::EdgeId> {
        if !self.graph.has_node(node) || !self.graph.has_node(new_parent) {
            return Err(Error::NotFound);
        }
        let Some(edge) = self.in_edge(node)? else {
            return Err(Error::NotATree);
        };
        if !alg::can_move_dag_edge(&self.graph, &edge, new_parent, node)? {
            tracing::debug!(?node, ?new_parent, "rejected move below own subtree");
            return Err(Error::NotATree);
        }
        Ok(edge)
    }

    /// Reattaches `node` (with its subtree) under `new_parent`. Moving the root or moving a node
    /// below itself fails with [`Error::NotATree`].
    pub fn move_node(&mut self, node: &G::NodeId, new_parent: &G::NodeId) -> Result<()> {
        let edge = self.check_move(node, new_parent)?;
        self.graph.move_edge(&edge, new_parent, node)
    }

    pub fn move_node_at(
        &mut self,
        node: &G::NodeId,
        new_parent: &G::NodeId,
        index: usize,
    ) -> Result<()> {
        let edge = self.check_move(node, new_parent)?;
        self.graph.move_edge_at(&edge, new_parent, index, node)
    }
}

impl<G: ViewableGraph> ViewableGraph for Tree<G> {
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

impl<G: ViewableGraph> ViewableTree for Tree<G> {
    fn root(&self) -> &Self::NodeId {
        &self.root
    }
}
