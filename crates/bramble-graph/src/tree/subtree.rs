use super::ViewableTree;
use crate::traits::ViewableGraph;
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Read-only view of the subtree below one node, borrowing the tree's graph.
///
/// Only the descendants of the view's root (and the root itself) are visible; the root has no
/// incoming edge inside the view.
#[derive(Debug, Clone)]
pub struct SubtreeView<'a, G: ViewableGraph> {
    graph: &'a G,
    root: G::NodeId,
    nodes: BTreeSet<G::NodeId>,
}

impl<'a, G: ViewableGraph> SubtreeView<'a, G> {
    pub(crate) fn new(graph: &'a G, root: G::NodeId) -> Result<Self> {
        if !graph.has_node(&root) {
            return Err(Error::NotFound);
        }
        let mut nodes = BTreeSet::new();
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            for edge in graph.out_edges(&node)? {
                stack.push(graph.edge_head(&edge)?);
            }
            nodes.insert(node);
        }
        Ok(Self { graph, root, nodes })
    }

    fn check_node(&self, node: &G::NodeId) -> Result<()> {
        if self.nodes.contains(node) {
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
}

impl<G: ViewableGraph> ViewableGraph for SubtreeView<'_, G> {
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
    type NodeData = G::NodeData;
    type EdgeData = G::EdgeData;

    fn is_ordered(&self) -> bool {
        self.graph.is_ordered()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    fn nodes(&self) -> Vec<Self::NodeId> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Vec<Self::EdgeId> {
        let mut edges = BTreeSet::new();
        for node in &self.nodes {
            if let Ok(out) = self.graph.out_edges(node) {
                edges.extend(out);
            }
        }
        edges.into_iter().collect()
    }

    fn has_node(&self, node: &Self::NodeId) -> bool {
        self.nodes.contains(node)
    }

    fn has_edge(&self, edge: &Self::EdgeId) -> bool {
        self.graph
            .edge_ends(edge)
            .is_ok_and(|(tail, _)| self.nodes.contains(&tail))
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
        self.graph.out_edges(node)
    }

    fn in_edges(&self, node: &Self::NodeId) -> Result<Vec<Self::EdgeId>> {
        self.check_node(node)?;
        if *node == self.root {
            return Ok(Vec::new());
        }
        self.graph.in_edges(node)
    }

    fn edge_ends(&self, edge: &Self::EdgeId) -> Result<(Self::NodeId, Self::NodeId)> {
        self.check_edge(edge)?;
        self.graph.edge_ends(edge)
    }

    fn edge_index(&self, edge: &Self::EdgeId) -> Result<usize> {
        self.check_edge(edge)?;
        self.graph.edge_index(edge)
    }
}

impl<G: ViewableGraph> ViewableTree for SubtreeView<'_, G> {
    fn root(&self) -> &Self::NodeId {
        &self.root
    }
}
