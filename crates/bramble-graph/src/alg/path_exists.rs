use super::{DfsOptions, DfsVisitor, depth_first_search};
use crate::Result;
use crate::traits::ViewableGraph;
use std::ops::ControlFlow;

struct PathExistsVisitor<'a, N> {
    from: &'a N,
    to: &'a N,
}

impl<N: PartialEq, E> DfsVisitor<N, E> for PathExistsVisitor<'_, N> {
    type Output = bool;

    fn discover_node(&mut self, node: &N) -> ControlFlow<bool> {
        if node == self.to {
            ControlFlow::Break(true)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish_node(&mut self, node: &N) -> ControlFlow<bool> {
        if node == self.from {
            ControlFlow::Break(false)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn finish(&mut self) -> bool {
        false
    }
}

/// Whether a directed path leads from `from` to `to`, ignoring `excluded_edge`.
///
/// A node always reaches itself.
pub fn path_exists<G>(
    graph: &G,
    from: &G::NodeId,
    to: &G::NodeId,
    excluded_edge: Option<&G::EdgeId>,
) -> Result<bool>
where
    G: ViewableGraph + ?Sized,
{
    let options = DfsOptions {
        roots: vec![from.clone()],
        roots_only: true,
        excluded_edge: excluded_edge.cloned(),
    };
    depth_first_search(graph, &mut PathExistsVisitor { from, to }, &options)
}

/// Whether adding `tail -> head` keeps `graph` acyclic. Self-loops never do.
pub fn can_add_dag_edge<G>(graph: &G, tail: &G::NodeId, head: &G::NodeId) -> Result<bool>
where
    G: ViewableGraph + ?Sized,
{
    Ok(!path_exists(graph, head, tail, None)?)
}

/// Whether reattaching `edge` to `new_tail -> new_head` keeps `graph` acyclic.
pub fn can_move_dag_edge<G>(
    graph: &G,
    edge: &G::EdgeId,
    new_tail: &G::NodeId,
    new_head: &G::NodeId,
) -> Result<bool>
where
    G: ViewableGraph + ?Sized,
{
    Ok(!path_exists(graph, new_head, new_tail, Some(edge))?)
}
