use super::{DfsOptions, DfsVisitor, depth_first_search};
use crate::Result;
use crate::traits::ViewableGraph;
use std::ops::ControlFlow;

struct IsTreeVisitor<'a, N> {
    root: &'a N,
}

impl<N: PartialEq, E> DfsVisitor<N, E> for IsTreeVisitor<'_, N> {
    type Output = bool;

    // Any second search tree means some node is unreachable from the root.
    fn start_node(&mut self, node: &N) -> ControlFlow<bool> {
        if node == self.root {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(false)
        }
    }

    fn back_edge(&mut self, _edge: &E) -> ControlFlow<bool> {
        ControlFlow::Break(false)
    }

    fn forward_or_cross_edge(&mut self, _edge: &E) -> ControlFlow<bool> {
        ControlFlow::Break(false)
    }

    fn finish(&mut self) -> bool {
        true
    }
}

/// Whether every node of `graph` is reachable from `root` by exactly one path and `root` has no
/// incoming edge.
pub fn is_tree<G>(graph: &G, root: &G::NodeId) -> Result<bool>
where
    G: ViewableGraph + ?Sized,
{
    let options = DfsOptions::from_roots([root.clone()]);
    depth_first_search(graph, &mut IsTreeVisitor { root }, &options)
}
