//! Post-order annotation used by the edit distance.
//!
//! Every node gets an index equal to its position in a left-to-right post-order walk. On top of
//! that the annotation records each node's left-most leaf descendant (`lmds`) and the keyroots:
//! the highest node for every distinct left-most descendant.

use bramble_graph::{Result, ViewableTree};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

enum Frame<N> {
    Enter(N),
    Exit(N, Vec<N>),
}

pub struct AnnotatedTree<'a, T: ViewableTree> {
    tree: &'a T,
    nodes: Vec<T::NodeId>,
    labels: Vec<&'a T::NodeData>,
    index: HashMap<T::NodeId, usize>,
    lmds: Vec<usize>,
    keyroots: Vec<usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
}

impl<'a, T: ViewableTree> AnnotatedTree<'a, T> {
    pub fn new(tree: &'a T) -> Result<Self> {
        let capacity = tree.node_count();
        let mut nodes = Vec::with_capacity(capacity);
        let mut labels = Vec::with_capacity(capacity);
        let mut index: HashMap<T::NodeId, usize> = HashMap::default();
        let mut lmds = Vec::with_capacity(capacity);
        let mut parents: Vec<Option<usize>> = Vec::with_capacity(capacity);
        let mut children = Vec::with_capacity(capacity);

        let mut stack = vec![Frame::Enter(tree.root().clone())];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(node) => {
                    let kids = tree.children(&node)?;
                    let pending: Vec<_> = kids.iter().rev().cloned().map(Frame::Enter).collect();
                    stack.push(Frame::Exit(node, kids));
                    stack.extend(pending);
                }
                Frame::Exit(node, kids) => {
                    let position = nodes.len();
                    let kids: Vec<usize> = kids.iter().map(|kid| index[kid]).collect();
                    for &kid in &kids {
                        parents[kid] = Some(position);
                    }
                    let lmd = kids.first().map_or(position, |&first| lmds[first]);
                    lmds.push(lmd);
                    labels.push(tree.node_data(&node)?);
                    parents.push(None);
                    children.push(kids);
                    index.insert(node.clone(), position);
                    nodes.push(node);
                }
            }
        }

        let mut highest: Vec<Option<usize>> = vec![None; nodes.len()];
        for (position, &lmd) in lmds.iter().enumerate() {
            highest[lmd] = Some(position);
        }
        let mut keyroots: Vec<usize> = highest.into_iter().flatten().collect();
        keyroots.sort_unstable();

        Ok(Self {
            tree,
            nodes,
            labels,
            index,
            lmds,
            keyroots,
            parents,
            children,
        })
    }

    pub fn tree(&self) -> &'a T {
        self.tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in post-order.
    pub fn nodes(&self) -> &[T::NodeId] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&T::NodeId> {
        self.nodes.get(index)
    }

    pub fn index_of(&self, node: &T::NodeId) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn label(&self, index: usize) -> &'a T::NodeData {
        self.labels[index]
    }

    /// Post-order index of each node's left-most leaf descendant.
    pub fn lmds(&self) -> &[usize] {
        &self.lmds
    }

    /// Sorted keyroot indices. The root is always the last one.
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }

    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    pub fn root(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Indices in pre-order, children left to right.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.children[index].iter().rev().copied());
        }
        order
    }
}
