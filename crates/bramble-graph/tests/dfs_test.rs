mod common;

use bramble_graph::EditableGraph;
use bramble_graph::alg::{DfsOptions, DfsVisitor, depth_first_search, postorder, preorder};
use bramble_graph::{Error, GraphOptions};
use common::{TestGraph, graph_from_edges, id, ids, make_tree_graph};
use std::ops::ControlFlow;

#[derive(Default, Debug)]
struct Recorder {
    init: Vec<String>,
    started: Vec<String>,
    discovered: Vec<String>,
    finished: Vec<String>,
    examined: Vec<String>,
    tree: Vec<String>,
    back: Vec<String>,
    forward_or_cross: Vec<String>,
    finished_edges: Vec<String>,
}

impl DfsVisitor<String, String> for Recorder {
    type Output = ();

    fn init_node(&mut self, node: &String) -> ControlFlow<()> {
        self.init.push(node.clone());
        ControlFlow::Continue(())
    }

    fn start_node(&mut self, node: &String) -> ControlFlow<()> {
        self.started.push(node.clone());
        ControlFlow::Continue(())
    }

    fn discover_node(&mut self, node: &String) -> ControlFlow<()> {
        self.discovered.push(node.clone());
        ControlFlow::Continue(())
    }

    fn finish_node(&mut self, node: &String) -> ControlFlow<()> {
        self.finished.push(node.clone());
        ControlFlow::Continue(())
    }

    fn examine_edge(&mut self, edge: &String) -> ControlFlow<()> {
        self.examined.push(edge.clone());
        ControlFlow::Continue(())
    }

    fn tree_edge(&mut self, edge: &String) -> ControlFlow<()> {
        self.tree.push(edge.clone());
        ControlFlow::Continue(())
    }

    fn back_edge(&mut self, edge: &String) -> ControlFlow<()> {
        self.back.push(edge.clone());
        ControlFlow::Continue(())
    }

    fn forward_or_cross_edge(&mut self, edge: &String) -> ControlFlow<()> {
        self.forward_or_cross.push(edge.clone());
        ControlFlow::Continue(())
    }

    fn finish_edge(&mut self, edge: &String) -> ControlFlow<()> {
        self.finished_edges.push(edge.clone());
        ControlFlow::Continue(())
    }

    fn finish(&mut self) {}
}

fn diamond() -> TestGraph {
    graph_from_edges(
        GraphOptions::sorted(),
        &[
            ("AB", "A", "B"),
            ("AC", "A", "C"),
            ("BD", "B", "D"),
            ("CD", "C", "D"),
            ("DA", "D", "A"),
        ],
    )
}

#[test]
fn events_fire_in_depth_first_order() {
    let g = diamond();
    let mut recorder = Recorder::default();
    depth_first_search(&g, &mut recorder, &DfsOptions::from_roots([id("A")])).unwrap();

    assert_eq!(recorder.init, ids(&["A", "B", "C", "D"]));
    assert_eq!(recorder.started, ids(&["A"]));
    assert_eq!(recorder.discovered, ids(&["A", "C", "D", "B"]));
    assert_eq!(recorder.finished, ids(&["D", "C", "B", "A"]));
    assert_eq!(recorder.examined, ids(&["AC", "CD", "DA", "AB", "BD"]));
    assert_eq!(recorder.tree, ids(&["AC", "CD", "AB"]));
    assert_eq!(recorder.back, ids(&["DA"]));
    assert_eq!(recorder.forward_or_cross, ids(&["BD"]));
    assert_eq!(recorder.finished_edges, ids(&["DA", "CD", "AC", "BD", "AB"]));
}

#[test]
fn undiscovered_nodes_start_new_search_trees() {
    let mut g = diamond();
    g.new_node(id("E"), id("E")).unwrap();
    g.new_node(id("F"), id("F")).unwrap();
    g.new_edge(id("FE"), id("F"), id("E"), id("FE")).unwrap();

    let mut recorder = Recorder::default();
    depth_first_search(&g, &mut recorder, &DfsOptions::from_roots([id("B")])).unwrap();
    assert_eq!(recorder.started, ids(&["B", "E", "F"]));
    assert_eq!(recorder.forward_or_cross, ids(&["FE"]));

    let mut recorder = Recorder::default();
    let options = DfsOptions::from_roots([id("B")]).roots_only(true);
    depth_first_search(&g, &mut recorder, &options).unwrap();
    assert_eq!(recorder.started, ids(&["B"]));
    assert_eq!(recorder.discovered, ids(&["B", "D", "A", "C"]));
}

#[test]
fn excluded_edge_is_invisible() {
    let g = diamond();
    let mut recorder = Recorder::default();
    let options = DfsOptions::from_roots([id("A")])
        .roots_only(true)
        .excluding(id("DA"));
    depth_first_search(&g, &mut recorder, &options).unwrap();

    assert!(!recorder.examined.contains(&id("DA")));
    assert!(recorder.back.is_empty());
    assert_eq!(recorder.discovered, ids(&["A", "C", "D", "B"]));
}

#[test]
fn missing_root_is_not_found() {
    let g = diamond();
    let mut recorder = Recorder::default();
    let result = depth_first_search(&g, &mut recorder, &DfsOptions::from_roots([id("Z")]));
    assert_eq!(result, Err(Error::NotFound));
}

struct StopAt(&'static str);

impl DfsVisitor<String, String> for StopAt {
    type Output = Option<String>;

    fn discover_node(&mut self, node: &String) -> ControlFlow<Option<String>> {
        if node == self.0 {
            ControlFlow::Break(Some(node.clone()))
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(&mut self) -> Option<String> {
        None
    }
}

#[test]
fn breaking_stops_the_search_with_its_output() {
    let g = diamond();
    let found = depth_first_search(&g, &mut StopAt("D"), &DfsOptions::default()).unwrap();
    assert_eq!(found, Some(id("D")));

    let missing = depth_first_search(&g, &mut StopAt("Q"), &DfsOptions::default()).unwrap();
    assert_eq!(missing, None);
}

#[test]
fn traversal_orders_follow_sibling_order() {
    let g = make_tree_graph(GraphOptions::ordered());
    assert_eq!(
        preorder(&g, &[id("A")]).unwrap(),
        ids(&["A", "B", "I", "C", "H", "J", "K", "D", "E", "M", "N", "O", "F", "L", "G"])
    );
    assert_eq!(
        postorder(&g, &[id("A")]).unwrap(),
        ids(&["I", "B", "J", "K", "H", "C", "M", "N", "O", "E", "L", "F", "G", "D", "A"])
    );
    assert_eq!(preorder(&g, &[id("D")]).unwrap().len(), 8);
    assert_eq!(postorder(&g, &[id("Z")]), Err(Error::NotFound));
}
