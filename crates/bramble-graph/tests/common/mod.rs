#![allow(dead_code)]

use bramble_graph::prelude::*;
use bramble_graph::{Graph, GraphOptions, Tree};

pub type TestGraph = Graph<String, String, String, String>;

/// Builds a graph from `(edge, tail, head)` triples. Node data is the node id and edge data is
/// the edge id.
pub fn graph_from_edges(options: GraphOptions, edges: &[(&str, &str, &str)]) -> TestGraph {
    let mut graph = Graph::new(options);
    for &(edge, tail, head) in edges {
        for node in [tail, head] {
            if !graph.has_node(&node.to_string()) {
                graph.new_node(node.to_string(), node.to_string()).unwrap();
            }
        }
        graph
            .new_edge(edge.to_string(), tail.to_string(), head.to_string(), edge.to_string())
            .unwrap();
    }
    graph
}

pub fn make_graph() -> TestGraph {
    graph_from_edges(
        GraphOptions::sorted(),
        &[
            ("AC", "A", "C"),
            ("AD", "A", "D"),
            ("AE", "A", "E"),
            ("BA", "B", "A"),
            ("BC", "B", "C"),
            ("BG", "B", "G"),
            ("CD", "C", "D"),
            ("ED", "E", "D"),
            ("FD", "F", "D"),
            ("FE", "F", "E"),
            ("HJ", "H", "J"),
            ("IC", "I", "C"),
            ("IK", "I", "K"),
            ("JA", "J", "A"),
            ("JE", "J", "E"),
            ("JF", "J", "F"),
            ("GI", "G", "I"),
            ("IB", "I", "B"),
        ],
    )
}

/// `make_graph` with `GI` and `IB` reversed, which breaks every cycle.
pub fn make_dag() -> TestGraph {
    graph_from_edges(
        GraphOptions::sorted(),
        &[
            ("AC", "A", "C"),
            ("AD", "A", "D"),
            ("AE", "A", "E"),
            ("BA", "B", "A"),
            ("BC", "B", "C"),
            ("BG", "B", "G"),
            ("CD", "C", "D"),
            ("ED", "E", "D"),
            ("FD", "F", "D"),
            ("FE", "F", "E"),
            ("HJ", "H", "J"),
            ("IC", "I", "C"),
            ("IK", "I", "K"),
            ("JA", "J", "A"),
            ("JE", "J", "E"),
            ("JF", "J", "F"),
            ("GI", "I", "G"),
            ("IB", "B", "I"),
        ],
    )
}

pub fn make_tree_graph(options: GraphOptions) -> TestGraph {
    graph_from_edges(
        options,
        &[
            ("AB", "A", "B"),
            ("AC", "A", "C"),
            ("AD", "A", "D"),
            ("DE", "D", "E"),
            ("DF", "D", "F"),
            ("DG", "D", "G"),
            ("CH", "C", "H"),
            ("BI", "B", "I"),
            ("HJ", "H", "J"),
            ("HK", "H", "K"),
            ("FL", "F", "L"),
            ("EM", "E", "M"),
            ("EN", "E", "N"),
            ("EO", "E", "O"),
        ],
    )
}

pub fn make_tree() -> Tree<TestGraph> {
    Tree::new(make_tree_graph(GraphOptions::sorted()), "A".to_string()).unwrap()
}

pub fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn id(s: &str) -> String {
    s.to_string()
}

/// Renders a tree as `root{child{..} child}` using node ids.
pub fn outline<T>(tree: &T, node: &String) -> String
where
    T: ViewableTree<NodeId = String>,
{
    let children = tree.children(node).unwrap();
    if children.is_empty() {
        return node.clone();
    }
    let inner: Vec<String> = children.iter().map(|child| outline(tree, child)).collect();
    format!("{node}{{{}}}", inner.join(" "))
}
