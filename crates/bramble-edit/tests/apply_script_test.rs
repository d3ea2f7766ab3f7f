mod common;

use bramble_edit::{
    EditOperation, Error, NodeRef, apply_editing_operations, apply_editing_operations_with,
    edit_distance,
};
use bramble_graph::prelude::*;
use bramble_graph::{Graph, Tree};
use common::{LabelTree, apply, from_parents, parse, shape};
use proptest::prelude::*;

fn transform(from: &str, to: &str) -> String {
    let source = parse(from);
    let script = edit_distance(&source, &parse(to)).unwrap();
    shape(&apply(&source, &script.operations))
}

#[test]
fn script_reproduces_the_target() {
    assert_eq!(
        transform("f{d{a c{b}} e}", "f{c{d{a b}} e}"),
        "f{c{d{a b}} e}"
    );
    assert_eq!(transform("a{b{x y}}", "a{x b{y}}"), "a{x b{y}}");
    assert_eq!(transform("f{a{h c{l}} e}", "f{a{d r{b}} e}"), "f{a{d r{b}} e}");
    assert_eq!(transform("a{b c}", "a"), "a");
    assert_eq!(transform("a", "a{b c}"), "a{b c}");
}

#[test]
fn script_can_replace_the_root() {
    assert_eq!(transform("a{b}", "x{a{b}}"), "x{a{b}}");
    assert_eq!(transform("r{a{b} z}", "a{b}"), "a{b}");
    assert_eq!(transform("a", "b"), "b");
    assert_eq!(transform("p{q r s}", "t{u{q r} s}"), "t{u{q r} s}");
}

#[test]
fn callback_sees_every_step() {
    let source = parse("a{b c}");
    let script = edit_distance(&source, &parse("a{x{b c}}")).unwrap();
    assert_eq!(script.cost, 1.0);

    let mut seen = Vec::new();
    let mut next = 100;
    let result = apply_editing_operations_with(
        &source,
        &script.operations,
        || {
            next += 1;
            next
        },
        || 500,
        || (),
        |operation, tree| seen.push((operation.clone(), shape(tree))),
    )
    .unwrap();

    assert_eq!(shape(&result), "a{x{b c}}");
    assert_eq!(
        seen,
        vec![(
            EditOperation::Insert {
                target: 2,
                parent: Some(NodeRef::Source(2)),
                position: 0,
                adopt: 2,
                data: "x".to_string(),
            },
            "a{x{b c}}".to_string(),
        )]
    );
    assert_eq!(result.parent(&101), Ok(Some(0)));
    assert_eq!(result.in_edge(&101), Ok(Some(500)));
    assert_eq!(shape(&source), "a{b c}");
}

#[test]
fn sorted_trees_are_rejected() {
    let mut graph: Graph<u32, u32, String> = Graph::new_sorted();
    graph.new_node(0, "a".to_string()).unwrap();
    let tree = Tree::new(graph, 0).unwrap();
    let operations = vec![EditOperation::Update {
        source: 0,
        target: 0,
        data: "b".to_string(),
    }];
    assert_eq!(
        apply_editing_operations(&tree, &operations, || 1, || 1, || ()).map(|_| ()),
        Err(Error::NotOrdered)
    );
}

#[test]
fn unknown_references_are_invalid() {
    let tree = parse("a{b}");
    let run = |operations: Vec<EditOperation<String>>| {
        apply_editing_operations(&tree, &operations, || 50, || 50, || ()).map(|t| shape(&t))
    };

    assert_eq!(
        run(vec![EditOperation::Remove {
            source: 7,
            data: "q".to_string(),
        }]),
        Err(Error::InvalidEditingOperation)
    );
    assert_eq!(
        run(vec![EditOperation::Insert {
            target: 3,
            parent: Some(NodeRef::Inserted(2)),
            position: 0,
            adopt: 0,
            data: "q".to_string(),
        }]),
        Err(Error::InvalidEditingOperation)
    );
    assert_eq!(
        run(vec![EditOperation::Insert {
            target: 3,
            parent: Some(NodeRef::Source(0)),
            position: 2,
            adopt: 0,
            data: "q".to_string(),
        }]),
        Err(Error::InvalidIndex)
    );
    assert_eq!(
        run(vec![EditOperation::Match {
            source: 1,
            target: 1,
            data: "a".to_string(),
        }]),
        Ok("a{b}".to_string())
    );
}

fn arb_tree() -> impl Strategy<Value = LabelTree> {
    (0u8..3, prop::collection::vec((any::<usize>(), 0u8..3), 0..8))
        .prop_map(|(root, nodes)| from_parents(root, &nodes))
}

proptest! {
    #[test]
    fn applying_the_script_yields_the_target(a in arb_tree(), b in arb_tree()) {
        let script = edit_distance(&a, &b).unwrap();
        let edited = apply(&a, &script.operations);
        prop_assert_eq!(shape(&edited), shape(&b));
        prop_assert_eq!(edited.node_count(), b.node_count());
    }
}
