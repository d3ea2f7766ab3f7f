//! Visitor-driven depth-first search.
//!
//! The search is iterative (an explicit stack of frames), so deep graphs do not exhaust the
//! call stack. Edges of a node are examined from the end of its outgoing list, i.e. in reverse
//! sibling (or id) order.

use crate::traits::ViewableGraph;
use crate::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::ops::ControlFlow;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Callbacks fired by [`depth_first_search`].
///
/// Every callback defaults to continuing. Returning `ControlFlow::Break(output)` stops the
/// search immediately and makes `output` the result; otherwise the result is [`finish`].
///
/// [`finish`]: DfsVisitor::finish
pub trait DfsVisitor<N, E> {
    type Output;

    /// Fired once for every node, in canonical order, before the search starts.
    fn init_node(&mut self, _node: &N) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    /// Fired for each node a new search tree starts from.
    fn start_node(&mut self, _node: &N) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn discover_node(&mut self, _node: &N) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn finish_node(&mut self, _node: &N) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn examine_edge(&mut self, _edge: &E) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    /// The edge leads to an undiscovered node.
    fn tree_edge(&mut self, _edge: &E) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    /// The edge leads to a node that is discovered but not finished.
    fn back_edge(&mut self, _edge: &E) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    /// The edge leads to a finished node.
    fn forward_or_cross_edge(&mut self, _edge: &E) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    /// Fired once per examined edge: immediately for back and forward/cross edges, after the
    /// head is finished for tree edges.
    fn finish_edge(&mut self, _edge: &E) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn finish(&mut self) -> Self::Output;
}

#[derive(Debug, Clone)]
pub struct DfsOptions<N, E> {
    /// Nodes to start from, in order.
    pub roots: Vec<N>,
    /// Do not continue from undiscovered nodes once the roots are exhausted.
    pub roots_only: bool,
    /// Edge treated as absent for the whole search.
    pub excluded_edge: Option<E>,
}

impl<N, E> Default for DfsOptions<N, E> {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            roots_only: false,
            excluded_edge: None,
        }
    }
}

impl<N, E> DfsOptions<N, E> {
    pub fn from_roots(roots: impl IntoIterator<Item = N>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn roots_only(mut self, roots_only: bool) -> Self {
        self.roots_only = roots_only;
        self
    }

    pub fn excluding(mut self, edge: E) -> Self {
        self.excluded_edge = Some(edge);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Discovered,
    Finished,
}

struct Frame<N, E> {
    node: N,
    /// Tree edge whose head has just been finished.
    finished_edge: Option<E>,
    remaining: Vec<E>,
}

macro_rules! visit {
    ($call:expr) => {
        if let ControlFlow::Break(output) = $call {
            return Ok(ControlFlow::Break(output));
        }
    };
}

struct Search<'a, G, V>
where
    G: ViewableGraph + ?Sized,
{
    graph: &'a G,
    visitor: &'a mut V,
    excluded: Option<&'a G::EdgeId>,
    states: HashMap<G::NodeId, State>,
}

impl<G, V> Search<'_, G, V>
where
    G: ViewableGraph + ?Sized,
    V: DfsVisitor<G::NodeId, G::EdgeId>,
{
    fn out_edges(&self, node: &G::NodeId) -> Result<Vec<G::EdgeId>> {
        let mut edges = self.graph.out_edges(node)?;
        if let Some(excluded) = self.excluded {
            edges.retain(|edge| edge != excluded);
        }
        Ok(edges)
    }

    fn from_root(&mut self, root: &G::NodeId) -> Result<ControlFlow<V::Output>> {
        if self.states.contains_key(root) {
            return Ok(ControlFlow::Continue(()));
        }
        if !self.graph.has_node(root) {
            return Err(Error::NotFound);
        }

        visit!(self.visitor.start_node(root));
        self.states.insert(root.clone(), State::Discovered);
        visit!(self.visitor.discover_node(root));

        let mut stack = vec![Frame {
            node: root.clone(),
            finished_edge: None,
            remaining: self.out_edges(root)?,
        }];

        while let Some(frame) = stack.pop() {
            let Frame {
                node: mut tail,
                finished_edge,
                mut remaining,
            } = frame;

            if let Some(edge) = finished_edge {
                visit!(self.visitor.finish_edge(&edge));
            }

            while let Some(edge) = remaining.pop() {
                let head = self.graph.edge_head(&edge)?;
                visit!(self.visitor.examine_edge(&edge));
                match self.states.get(&head).copied() {
                    None => {
                        visit!(self.visitor.tree_edge(&edge));
                        stack.push(Frame {
                            node: tail,
                            finished_edge: Some(edge),
                            remaining,
                        });
                        tail = head;
                        self.states.insert(tail.clone(), State::Discovered);
                        visit!(self.visitor.discover_node(&tail));
                        remaining = self.out_edges(&tail)?;
                    }
                    Some(State::Discovered) => {
                        visit!(self.visitor.back_edge(&edge));
                        visit!(self.visitor.finish_edge(&edge));
                    }
                    Some(State::Finished) => {
                        visit!(self.visitor.forward_or_cross_edge(&edge));
                        visit!(self.visitor.finish_edge(&edge));
                    }
                }
            }

            self.states.insert(tail.clone(), State::Finished);
            visit!(self.visitor.finish_node(&tail));
        }

        Ok(ControlFlow::Continue(()))
    }
}

/// Runs a depth-first search over `graph`, reporting events to `visitor`.
///
/// Nodes are initialized in canonical order, then searched from each of `options.roots`, then
/// (unless `options.roots_only`) from every node still undiscovered, in canonical order.
/// A root that is not in the graph fails with [`Error::NotFound`].
pub fn depth_first_search<G, V>(
    graph: &G,
    visitor: &mut V,
    options: &DfsOptions<G::NodeId, G::EdgeId>,
) -> Result<V::Output>
where
    G: ViewableGraph + ?Sized,
    V: DfsVisitor<G::NodeId, G::EdgeId>,
{
    let nodes = graph.nodes();
    for node in &nodes {
        if let ControlFlow::Break(output) = visitor.init_node(node) {
            return Ok(output);
        }
    }

    let mut search = Search {
        graph,
        visitor,
        excluded: options.excluded_edge.as_ref(),
        states: HashMap::default(),
    };

    for root in &options.roots {
        if let ControlFlow::Break(output) = search.from_root(root)? {
            return Ok(output);
        }
    }
    if !options.roots_only {
        for node in &nodes {
            if let ControlFlow::Break(output) = search.from_root(node)? {
                return Ok(output);
            }
        }
    }

    Ok(search.visitor.finish())
}
