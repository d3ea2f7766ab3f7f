use bramble_graph::alg::is_tree;
use bramble_graph::prelude::*;
use bramble_graph::{Error, Graph};

type G = Graph<&'static str, &'static str>;

fn branching() -> G {
    let mut g = G::new_sorted();
    for node in ["root", "A", "B", "C", "D", "E", "F"] {
        g.new_node(node, ()).unwrap();
    }
    for (edge, tail, head) in [
        ("rA", "root", "A"),
        ("rB", "root", "B"),
        ("AC", "A", "C"),
        ("AD", "A", "D"),
        ("BE", "B", "E"),
        ("BF", "B", "F"),
    ] {
        g.new_edge(edge, tail, head, ()).unwrap();
    }
    g
}

#[test]
fn growing_a_tree() {
    let mut g = G::new_sorted();
    g.new_node("root", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(true));

    g.new_node("A", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(false), "unconnected node");

    g.new_edge("rA", "root", "A", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(true));
    assert_eq!(is_tree(&g, &"A"), Ok(false), "wrong root");
}

#[test]
fn branching_graph_is_a_tree() {
    assert_eq!(is_tree(&branching(), &"root"), Ok(true));
}

#[test]
fn cross_edges_are_not_allowed() {
    let mut g = branching();
    g.new_edge("CE", "C", "E", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(false));
}

#[test]
fn back_edges_are_not_allowed() {
    let mut g = branching();
    g.new_edge("Cr", "C", "root", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(false));
}

#[test]
fn parallel_edges_are_not_allowed() {
    let mut g = branching();
    g.new_edge("BE2", "B", "E", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(false));
}

#[test]
fn self_loops_are_not_allowed() {
    let mut g = branching();
    g.new_edge("FF", "F", "F", ()).unwrap();
    assert_eq!(is_tree(&g, &"root"), Ok(false));
}

#[test]
fn missing_root_is_not_found() {
    assert_eq!(is_tree(&branching(), &"nope"), Err(Error::NotFound));
}
