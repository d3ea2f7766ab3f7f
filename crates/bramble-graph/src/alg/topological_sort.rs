use super::{DfsOptions, DfsVisitor, depth_first_search};
use crate::traits::ViewableGraph;
use crate::{Error, Result};
use std::ops::ControlFlow;

struct TopologicalSortVisitor<N> {
    order: Vec<N>,
}

impl<N: Clone, E> DfsVisitor<N, E> for TopologicalSortVisitor<N> {
    type Output = Result<Vec<N>>;

    fn back_edge(&mut self, _edge: &E) -> ControlFlow<Self::Output> {
        ControlFlow::Break(Err(Error::NotADag))
    }

    fn finish_node(&mut self, node: &N) -> ControlFlow<Self::Output> {
        self.order.push(node.clone());
        ControlFlow::Continue(())
    }

    fn finish(&mut self) -> Self::Output {
        Ok(std::mem::take(&mut self.order))
    }
}

/// Orders the nodes reachable from `roots` (all nodes unless `roots_only`) by depth-first
/// finish time.
///
/// Every node appears after all nodes reachable from it, so for each edge the head precedes
/// the tail; reverse the result for a tail-first order. Fails with [`Error::NotADag`] when a
/// cycle is reachable.
pub fn topological_sort<G>(
    graph: &G,
    roots: &[G::NodeId],
    roots_only: bool,
) -> Result<Vec<G::NodeId>>
where
    G: ViewableGraph + ?Sized,
{
    let options = DfsOptions::from_roots(roots.iter().cloned()).roots_only(roots_only);
    depth_first_search(graph, &mut TopologicalSortVisitor { order: Vec::new() }, &options)?
}

pub fn is_dag<G>(graph: &G) -> Result<bool>
where
    G: ViewableGraph + ?Sized,
{
    match topological_sort(graph, &[], false) {
        Ok(_) => Ok(true),
        Err(Error::NotADag) => Ok(false),
        Err(err) => Err(err),
    }
}
