//! Serialization glue behind the `serde` feature.
//!
//! A graph is encoded as `{ ordered, nodes: [[id, data]..], edges: [[id, tail, head, data]..] }`.
//! Ordered graphs list edges grouped by tail in sibling order, so decoding (which replays
//! `new_node` then `new_edge`) restores the sibling order. Wrappers re-validate on decode.

use crate::compound::Compound;
use crate::dag::Dag;
use crate::graph::{Graph, GraphOptions};
use crate::traits::{EditableGraph, ViewableGraph};
use crate::tree::{Tree, ViewableTree};
use crate::{ElementId, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct GraphRef<'a, N, E, ND, ED> {
    ordered: bool,
    nodes: Vec<(&'a N, &'a ND)>,
    edges: Vec<(&'a E, &'a N, &'a N, &'a ED)>,
}

#[derive(Deserialize)]
struct GraphRepr<N, E, ND, ED> {
    ordered: bool,
    nodes: Vec<(N, ND)>,
    edges: Vec<(E, N, N, ED)>,
}

impl<N: ElementId, E: ElementId, ND, ED> GraphRepr<N, E, ND, ED> {
    fn into_graph(self) -> Result<Graph<N, E, ND, ED>> {
        let mut graph = Graph::new(GraphOptions {
            ordered: self.ordered,
        });
        for (node, data) in self.nodes {
            graph.new_node(node, data)?;
        }
        for (edge, tail, head, data) in self.edges {
            graph.new_edge(edge, tail, head, data)?;
        }
        Ok(graph)
    }
}

impl<N, E, ND, ED> Serialize for Graph<N, E, ND, ED>
where
    N: ElementId + Serialize,
    E: ElementId + Serialize,
    ND: Serialize,
    ED: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let ordered = self.is_ordered();
        let edges = if ordered {
            self.iter_edges_by_tail().collect()
        } else {
            self.iter_edges().collect()
        };
        GraphRef {
            ordered,
            nodes: self.iter_nodes().collect(),
            edges,
        }
        .serialize(serializer)
    }
}

impl<'de, N, E, ND, ED> Deserialize<'de> for Graph<N, E, ND, ED>
where
    N: ElementId + Deserialize<'de>,
    E: ElementId + Deserialize<'de>,
    ND: Deserialize<'de>,
    ED: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        GraphRepr::deserialize(deserializer)?
            .into_graph()
            .map_err(D::Error::custom)
    }
}

#[derive(Serialize)]
struct TreeRef<'a, N, G> {
    root: &'a N,
    graph: &'a G,
}

#[derive(Deserialize)]
struct TreeRepr<N, G> {
    root: N,
    graph: G,
}

impl<G> Serialize for Tree<G>
where
    G: ViewableGraph + Serialize,
    G::NodeId: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        TreeRef {
            root: self.root(),
            graph: self.graph(),
        }
        .serialize(serializer)
    }
}

impl<'de, G> Deserialize<'de> for Tree<G>
where
    G: ViewableGraph + Deserialize<'de>,
    G::NodeId: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let TreeRepr { root, graph } = TreeRepr::deserialize(deserializer)?;
        Tree::new(graph, root).map_err(D::Error::custom)
    }
}

impl<G: Serialize> Serialize for Dag<G>
where
    G: ViewableGraph,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.graph().serialize(serializer)
    }
}

impl<'de, G> Deserialize<'de> for Dag<G>
where
    G: ViewableGraph + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Dag::new(G::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

#[derive(Serialize)]
struct CompoundRef<'a, G, T> {
    graph: &'a G,
    tree: &'a T,
}

#[derive(Deserialize)]
struct CompoundRepr<G, T> {
    graph: G,
    tree: T,
}

impl<G, TG> Serialize for Compound<G, TG>
where
    G: ViewableGraph + Serialize,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId> + Serialize,
    G::NodeId: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        CompoundRef {
            graph: self.graph(),
            tree: self.tree(),
        }
        .serialize(serializer)
    }
}

impl<'de, G, TG> Deserialize<'de> for Compound<G, TG>
where
    G: ViewableGraph + Deserialize<'de>,
    TG: ViewableGraph<NodeId = G::NodeId, EdgeId = G::EdgeId> + Deserialize<'de>,
    G::NodeId: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr: CompoundRepr<G, Tree<TG>> = CompoundRepr::deserialize(deserializer)?;
        Compound::new(repr.graph, repr.tree).map_err(D::Error::custom)
    }
}
