mod common;

use bramble_graph::alg::is_tree;
use bramble_graph::prelude::*;
use bramble_graph::{Error, Graph, GraphOptions, Tree};
use common::{id, ids, make_graph, make_tree, make_tree_graph, outline};

const FULL: &str = "A{B{I} C{H{J K}} D{E{M N O} F{L} G}}";

#[test]
fn construction_validates_the_graph() {
    assert_eq!(
        Tree::new(make_graph(), id("A")).map(|_| ()),
        Err(Error::NotATree)
    );
    assert_eq!(
        Tree::new(make_tree_graph(GraphOptions::sorted()), id("B")).map(|_| ()),
        Err(Error::NotATree)
    );
    assert_eq!(
        Tree::new(make_tree_graph(GraphOptions::sorted()), id("Z")).map(|_| ()),
        Err(Error::NotFound)
    );

    let tree = make_tree();
    assert_eq!(tree.root(), &id("A"));
    assert_eq!(outline(&tree, &id("A")), FULL);
}

#[test]
fn tree_queries() {
    let tree = make_tree();
    assert_eq!(tree.parent(&id("E")), Ok(Some(id("D"))));
    assert_eq!(tree.parent(&id("A")), Ok(None));
    assert_eq!(tree.in_edge(&id("E")), Ok(Some(id("DE"))));
    assert_eq!(tree.in_edge(&id("A")), Ok(None));
    assert_eq!(tree.children(&id("D")), Ok(ids(&["E", "F", "G"])));
    assert_eq!(tree.child_index(&id("F")), Ok(Some(1)));
    assert_eq!(tree.child_index(&id("A")), Ok(None));
    assert_eq!(tree.has_children(&id("G")), Ok(false));
    assert_eq!(tree.has_children(&id("H")), Ok(true));
    assert_eq!(tree.non_root_nodes().len(), 14);
    assert!(!tree.non_root_nodes().contains(&id("A")));
    assert_eq!(tree.parent(&id("Z")), Err(Error::NotFound));
}

#[test]
fn new_node_adds_a_leaf() {
    let mut tree = make_tree();
    tree.new_node(id("P"), &id("G"), id("GP"), id("P"), id("GP"))
        .unwrap();
    assert_eq!(tree.parent(&id("P")), Ok(Some(id("G"))));
    assert_eq!(
        outline(&tree, &id("A")),
        "A{B{I} C{H{J K}} D{E{M N O} F{L} G{P}}}"
    );

    let before = tree.clone();
    assert_eq!(
        tree.new_node(id("P"), &id("A"), id("AP"), id("P"), id("AP")),
        Err(Error::Duplicate)
    );
    assert_eq!(
        tree.new_node(id("Q"), &id("A"), id("GP"), id("Q"), id("GP")),
        Err(Error::Duplicate)
    );
    assert_eq!(
        tree.new_node(id("Q"), &id("Z"), id("ZQ"), id("Q"), id("ZQ")),
        Err(Error::NotFound)
    );
    assert_eq!(
        tree.new_node_at(id("Q"), &id("A"), 0, id("AQ"), id("Q"), id("AQ")),
        Err(Error::NotOrdered)
    );
    assert_eq!(tree, before);
}

#[test]
fn move_node_keeps_the_tree_valid() {
    let mut tree = make_tree();
    tree.move_node(&id("H"), &id("B")).unwrap();
    assert_eq!(
        outline(&tree, &id("A")),
        "A{B{I H{J K}} C D{E{M N O} F{L} G}}"
    );

    let before = tree.clone();
    assert_eq!(tree.move_node(&id("D"), &id("E")), Err(Error::NotATree));
    assert_eq!(tree.move_node(&id("D"), &id("D")), Err(Error::NotATree));
    assert_eq!(tree.move_node(&id("A"), &id("B")), Err(Error::NotATree));
    assert_eq!(tree.move_node(&id("D"), &id("Z")), Err(Error::NotFound));
    assert_eq!(tree, before);
}

#[test]
fn remove_node_and_children_drops_the_subtree() {
    let mut tree = make_tree();
    tree.remove_node_and_children(&id("D")).unwrap();
    assert_eq!(tree.node_count(), 7);
    assert_eq!(outline(&tree, &id("A")), "A{B{I} C{H{J K}}}");
    for gone in ["D", "E", "F", "G", "L", "M", "N", "O"] {
        assert!(!tree.has_node(&id(gone)));
    }

    assert_eq!(tree.remove_node_and_children(&id("A")), Err(Error::NotATree));
    assert_eq!(tree.remove_node_and_children(&id("D")), Err(Error::NotFound));
}

#[test]
fn ungrouping_promotes_children() {
    let mut tree = make_tree();
    tree.remove_node_ungrouping(&id("D")).unwrap();
    assert_eq!(outline(&tree, &id("A")), "A{B{I} C{H{J K}} E{M N O} F{L} G}");
    assert_eq!(tree.parent(&id("E")), Ok(Some(id("A"))));
    assert_eq!(tree.in_edge(&id("E")), Ok(Some(id("DE"))));
}

#[test]
fn ungrouping_the_root_needs_a_single_child() {
    let mut tree = make_tree();
    let before = tree.clone();
    assert_eq!(tree.remove_node_ungrouping(&id("A")), Err(Error::NotATree));
    assert_eq!(tree, before);

    tree.remove_node_and_children(&id("B")).unwrap();
    tree.remove_node_and_children(&id("C")).unwrap();
    tree.remove_node_ungrouping(&id("A")).unwrap();
    assert_eq!(tree.root(), &id("D"));
    assert_eq!(outline(&tree, &id("D")), "D{E{M N O} F{L} G}");
    assert_eq!(tree.in_edge(&id("D")), Ok(None));
}

#[test]
fn insert_node_takes_the_existing_slot() {
    let mut tree = make_tree();
    tree.insert_node(id("P"), &id("E"), id("DP"), id("P"), id("DP"))
        .unwrap();
    assert_eq!(tree.parent(&id("P")), Ok(Some(id("D"))));
    assert_eq!(tree.parent(&id("E")), Ok(Some(id("P"))));
    assert_eq!(tree.children(&id("P")), Ok(ids(&["E"])));

    tree.insert_node(id("R"), &id("A"), id("RA"), id("R"), id("RA"))
        .unwrap();
    assert_eq!(tree.root(), &id("R"));
    assert_eq!(tree.children(&id("R")), Ok(ids(&["A"])));
    assert_eq!(is_tree(tree.graph(), &id("R")), Ok(true));
}

#[test]
fn subtree_views_share_storage() {
    let tree = make_tree();
    let view = tree.subtree(&id("D")).unwrap();

    assert_eq!(view.root(), &id("D"));
    assert_eq!(view.nodes(), ids(&["D", "E", "F", "G", "L", "M", "N", "O"]));
    assert_eq!(
        view.edges(),
        ids(&["DE", "DF", "DG", "EM", "EN", "EO", "FL"])
    );
    assert_eq!(view.edge_count(), 7);
    assert_eq!(view.in_edges(&id("D")), Ok(vec![]));
    assert_eq!(view.parent(&id("D")), Ok(None));
    assert_eq!(view.parent(&id("L")), Ok(Some(id("F"))));
    assert_eq!(view.children(&id("D")), Ok(ids(&["E", "F", "G"])));
    assert!(!view.has_node(&id("A")));
    assert!(!view.has_edge(&id("AD")));
    assert_eq!(view.node_data(&id("A")), Err(Error::NotFound));
    assert_eq!(view.edge_data(&id("AD")), Err(Error::NotFound));
    assert_eq!(is_tree(&view, &id("D")), Ok(true));
    assert_eq!(outline(&view, &id("D")), "D{E{M N O} F{L} G}");

    assert_eq!(tree.subtree(&id("Z")).map(|_| ()), Err(Error::NotFound));
}

#[test]
fn modify_commits_only_valid_trees() {
    let mut tree = make_tree();
    let before = tree.clone();

    let result = tree.modify(|g| g.new_edge(id("IK"), id("I"), id("K"), id("IK")));
    assert_eq!(result, Err(Error::NotATree));
    assert_eq!(tree, before);

    assert_eq!(tree.modify(|g| g.remove_node(&id("A"))), Err(Error::NotATree));
    assert_eq!(tree, before);

    let count = tree
        .modify(|g| {
            g.new_node(id("P"), id("P"))?;
            g.new_edge(id("KP"), id("K"), id("P"), id("KP"))?;
            Ok(g.node_count())
        })
        .unwrap();
    assert_eq!(count, 16);
    assert_eq!(tree.parent(&id("P")), Ok(Some(id("K"))));
}

#[test]
fn root_and_graph_replacement_are_validated() {
    let mut tree = make_tree();
    assert_eq!(tree.set_root(id("B")), Err(Error::NotATree));
    assert_eq!(tree.set_root(id("A")), Ok(()));

    assert_eq!(
        make_tree().with_graph(make_graph()).map(|_| ()),
        Err(Error::NotATree)
    );

    let single: Graph<&str, &str> = {
        let mut g = Graph::new_sorted();
        g.new_node("only", ()).unwrap();
        g
    };
    let tree = Tree::new(single, "only").unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.non_root_nodes(), Vec::<&str>::new());
}

#[test]
fn data_setters_pass_through() {
    let mut tree = make_tree();
    tree.set_node_data(&id("A"), id("Alpha")).unwrap();
    tree.set_edge_data(&id("AB"), id("A-B")).unwrap();
    tree.with_node_data(&id("B"), |data| data.push('!')).unwrap();
    assert_eq!(tree.node_data(&id("A")).unwrap(), "Alpha");
    assert_eq!(tree.edge_data(&id("AB")).unwrap(), "A-B");
    assert_eq!(tree.node_data(&id("B")).unwrap(), "B!");
    assert_eq!(tree.set_node_data(&id("Z"), id("Z")), Err(Error::NotFound));
}
