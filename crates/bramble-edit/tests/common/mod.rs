#![allow(dead_code)]

use bramble_edit::{EditOperation, apply_editing_operations};
use bramble_graph::prelude::*;
use bramble_graph::{Graph, Tree};
use std::iter::Peekable;
use std::str::Chars;

pub type LabelGraph = Graph<u32, u32, String>;
pub type LabelTree = Tree<LabelGraph>;

struct Parser<'t> {
    chars: Peekable<Chars<'t>>,
    graph: LabelGraph,
    next_id: u32,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn node(&mut self, parent: Option<u32>) -> u32 {
        self.skip_whitespace();
        let mut label = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_alphanumeric()) {
            label.push(c);
        }
        assert!(!label.is_empty(), "expected a label");

        let id = self.next_id;
        self.next_id += 1;
        self.graph.new_node(id, label).unwrap();
        if let Some(parent) = parent {
            self.graph.new_edge(id, parent, id, ()).unwrap();
        }

        self.skip_whitespace();
        if self.chars.next_if_eq(&'{').is_some() {
            loop {
                self.skip_whitespace();
                if self.chars.next_if_eq(&'}').is_some() {
                    break;
                }
                self.node(Some(id));
            }
        }
        id
    }
}

/// Parses `f{d{a c{b}} e}` into an ordered tree. Node ids count up from 0 in pre-order; each
/// edge shares its child's id.
pub fn parse(text: &str) -> LabelTree {
    let mut parser = Parser {
        chars: text.chars().peekable(),
        graph: Graph::new_ordered(),
        next_id: 0,
    };
    let root = parser.node(None);
    Tree::new(parser.graph, root).unwrap()
}

/// Builds a tree from `(parent choice, label)` pairs: node `i + 1` hangs below node
/// `choice % (i + 1)`.
pub fn from_parents(root_label: u8, nodes: &[(usize, u8)]) -> LabelTree {
    let label = |l: u8| char::from(b'a' + l % 26).to_string();
    let mut graph: LabelGraph = Graph::new_ordered();
    graph.new_node(0, label(root_label)).unwrap();
    for (i, &(choice, l)) in nodes.iter().enumerate() {
        let id = i as u32 + 1;
        let parent = (choice % (i + 1)) as u32;
        graph.new_node(id, label(l)).unwrap();
        graph.new_edge(id, parent, id, ()).unwrap();
    }
    Tree::new(graph, 0).unwrap()
}

/// Renders a tree by labels, `label{child child}`.
pub fn shape<T>(tree: &T) -> String
where
    T: ViewableTree<NodeData = String>,
{
    fn render<T: ViewableTree<NodeData = String>>(tree: &T, node: &T::NodeId) -> String {
        let label = tree.node_data(node).unwrap();
        let children = tree.children(node).unwrap();
        if children.is_empty() {
            return label.clone();
        }
        let inner: Vec<String> = children.iter().map(|child| render(tree, child)).collect();
        format!("{label}{{{}}}", inner.join(" "))
    }
    render(tree, tree.root())
}

/// Applies `operations` to `tree`, numbering new nodes and edges from 1000.
pub fn apply(tree: &LabelTree, operations: &[EditOperation<String>]) -> LabelTree {
    let mut next_node = 1000;
    let mut next_edge = 1000;
    apply_editing_operations(
        tree,
        operations,
        || {
            next_node += 1;
            next_node
        },
        || {
            next_edge += 1;
            next_edge
        },
        || (),
    )
    .unwrap()
}
