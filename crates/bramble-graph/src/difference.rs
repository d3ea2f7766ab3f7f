//! Structural differences between two graph snapshots.
//!
//! [`GraphDifference::between`] produces the mutation list that turns one graph into another;
//! replaying it with [`GraphDifference::apply_to`] reproduces the target's nodes, edges, ends
//! and data. Between two ordered graphs it also reproduces every node's sibling order.

use crate::traits::{OrderedEditableGraph, ViewableGraph};
use crate::{ElementId, Result};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphMutation<N, E, ND, ED> {
    NewNode(N, ND),
    SetNodeData(N, ND),
    NewEdge(E, N, N, ED),
    SetEdgeData(E, ED),
    MoveEdge(E, N, N),
    RemoveEdge(E),
    RemoveNode(N),
    /// Repositions an edge among its tail's outgoing edges (ordered graphs only).
    MoveEdgeTo(E, usize),
}

impl<N, E, ND, ED> GraphMutation<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
    ND: Clone,
    ED: Clone,
{
    pub fn apply_to<G>(&self, graph: &mut G) -> Result<()>
    where
        G: OrderedEditableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + ?Sized,
    {
        match self {
            Self::NewNode(node, data) => graph.new_node(node.clone(), data.clone()),
            Self::SetNodeData(node, data) => graph.set_node_data(node, data.clone()),
            Self::NewEdge(edge, tail, head, data) => {
                graph.new_edge(edge.clone(), tail.clone(), head.clone(), data.clone())
            }
            Self::SetEdgeData(edge, data) => graph.set_edge_data(edge, data.clone()),
            Self::MoveEdge(edge, tail, head) => graph.move_edge(edge, tail, head),
            Self::RemoveEdge(edge) => graph.remove_edge(edge),
            Self::RemoveNode(node) => graph.remove_node(node),
            Self::MoveEdgeTo(edge, index) => graph.move_edge_to(edge, *index),
        }
    }
}

impl<N, E, ND, ED> fmt::Display for GraphMutation<N, E, ND, ED>
where
    N: fmt::Display,
    E: fmt::Display,
    ND: fmt::Display,
    ED: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewNode(node, data) => write!(f, "new_node({node}, {data})"),
            Self::SetNodeData(node, data) => write!(f, "set_node_data({node}, {data})"),
            Self::NewEdge(edge, tail, head, data) => {
                write!(f, "new_edge({edge}, {tail}, {head}, {data})")
            }
            Self::SetEdgeData(edge, data) => write!(f, "set_edge_data({edge}, {data})"),
            Self::MoveEdge(edge, tail, head) => write!(f, "move_edge({edge}, {tail}, {head})"),
            Self::RemoveEdge(edge) => write!(f, "remove_edge({edge})"),
            Self::RemoveNode(node) => write!(f, "remove_node({node})"),
            Self::MoveEdgeTo(edge, index) => write!(f, "move_edge_to({edge}, {index})"),
        }
    }
}

/// Ordered mutation list between two graphs.
///
/// Mutations are grouped as new nodes, node data updates, new edges, edge data updates, edge
/// moves, edge removals and node removals; each group is in id order. When both graphs are
/// ordered, a final group of `MoveEdgeTo` mutations restores the target's sibling order, tail by
/// tail in id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDifference<N, E, ND, ED> {
    mutations: Vec<GraphMutation<N, E, ND, ED>>,
}

impl<N, E, ND, ED> GraphDifference<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
    ND: Clone + PartialEq,
    ED: Clone + PartialEq,
{
    pub fn between<A, B>(from: &A, to: &B) -> Result<Self>
    where
        A: ViewableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + ?Sized,
        B: ViewableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + ?Sized,
    {
        let start_nodes: BTreeSet<N> = from.nodes().into_iter().collect();
        let end_nodes: BTreeSet<N> = to.nodes().into_iter().collect();
        let start_edges: BTreeSet<E> = from.edges().into_iter().collect();
        let end_edges: BTreeSet<E> = to.edges().into_iter().collect();

        let mut new_nodes = Vec::new();
        let mut node_updates = Vec::new();
        for node in &end_nodes {
            let data = to.node_data(node)?;
            if !start_nodes.contains(node) {
                new_nodes.push(GraphMutation::NewNode(node.clone(), data.clone()));
            } else if from.node_data(node)? != data {
                node_updates.push(GraphMutation::SetNodeData(node.clone(), data.clone()));
            }
        }

        let mut new_edges = Vec::new();
        let mut edge_updates = Vec::new();
        let mut edge_moves = Vec::new();
        for edge in &end_edges {
            let (tail, head) = to.edge_ends(edge)?;
            let data = to.edge_data(edge)?;
            if !start_edges.contains(edge) {
                new_edges.push(GraphMutation::NewEdge(edge.clone(), tail, head, data.clone()));
                continue;
            }
            if from.edge_data(edge)? != data {
                edge_updates.push(GraphMutation::SetEdgeData(edge.clone(), data.clone()));
            }
            if from.edge_ends(edge)? != (tail.clone(), head.clone()) {
                edge_moves.push(GraphMutation::MoveEdge(edge.clone(), tail, head));
            }
        }

        let edge_removals = start_edges
            .difference(&end_edges)
            .map(|edge| GraphMutation::RemoveEdge(edge.clone()));
        let node_removals = start_nodes
            .difference(&end_nodes)
            .map(|node| GraphMutation::RemoveNode(node.clone()));

        let mut mutations = new_nodes;
        mutations.extend(node_updates);
        mutations.extend(new_edges);
        mutations.extend(edge_updates);
        mutations.extend(edge_moves);
        mutations.extend(edge_removals);
        mutations.extend(node_removals);
        if from.is_ordered() && to.is_ordered() {
            mutations.extend(sibling_reorders(from, to, &start_edges, &end_nodes)?);
        }

        tracing::debug!(mutations = mutations.len(), "computed graph difference");
        Ok(Self { mutations })
    }

    /// Replays the mutations on `graph` in order. Replay stops at the first failing mutation;
    /// mutations before it stay applied.
    pub fn apply_to<G>(&self, graph: &mut G) -> Result<()>
    where
        G: OrderedEditableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + ?Sized,
    {
        for mutation in &self.mutations {
            if let Err(err) = mutation.apply_to(graph) {
                tracing::debug!(?err, "graph difference replay failed");
                return Err(err);
            }
        }
        tracing::trace!(mutations = self.mutations.len(), "applied graph difference");
        Ok(())
    }

    /// Returns a copy of `graph` with the mutations applied.
    pub fn applying_to<G>(&self, graph: &G) -> Result<G>
    where
        G: OrderedEditableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + Clone,
    {
        let mut graph = graph.clone();
        self.apply_to(&mut graph)?;
        Ok(graph)
    }
}

impl<N, E, ND, ED> GraphDifference<N, E, ND, ED> {
    pub fn mutations(&self) -> &[GraphMutation<N, E, ND, ED>] {
        &self.mutations
    }

    pub fn into_mutations(self) -> Vec<GraphMutation<N, E, ND, ED>> {
        self.mutations
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }
}

impl<N, E, ND, ED> GraphDifference<N, E, ND, ED>
where
    GraphMutation<N, E, ND, ED>: fmt::Display,
{
    /// One mutation per line.
    pub fn formatted_list(&self) -> String {
        self.mutations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `MoveEdgeTo` mutations that turn each tail's outgoing order, as left by the other groups,
/// into the order `to` has.
///
/// Replay keeps surviving edges in their old relative order, then appends new edges and edges
/// moved in from another tail, each in id order.
fn sibling_reorders<N, E, ND, ED, A, B>(
    from: &A,
    to: &B,
    start_edges: &BTreeSet<E>,
    end_nodes: &BTreeSet<N>,
) -> Result<Vec<GraphMutation<N, E, ND, ED>>>
where
    N: ElementId,
    E: ElementId,
    A: ViewableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + ?Sized,
    B: ViewableGraph<NodeId = N, EdgeId = E, NodeData = ND, EdgeData = ED> + ?Sized,
{
    let mut reorders = Vec::new();
    for node in end_nodes {
        let target = to.out_edges(node)?;
        if target.len() < 2 {
            continue;
        }

        let mut current = Vec::with_capacity(target.len());
        if from.has_node(node) {
            for edge in from.out_edges(node)? {
                if to.has_edge(&edge) && to.edge_tail(&edge)? == *node {
                    current.push(edge);
                }
            }
        }
        let mut created = BTreeSet::new();
        let mut arrived = BTreeSet::new();
        for edge in &target {
            if !start_edges.contains(edge) {
                created.insert(edge.clone());
            } else if from.edge_tail(edge)? != *node {
                arrived.insert(edge.clone());
            }
        }
        current.extend(created);
        current.extend(arrived);

        for (index, edge) in target.iter().enumerate() {
            if current.get(index) == Some(edge) {
                continue;
            }
            current.retain(|e| e != edge);
            current.insert(index, edge.clone());
            reorders.push(GraphMutation::MoveEdgeTo(edge.clone(), index));
        }
    }
    Ok(reorders)
}
