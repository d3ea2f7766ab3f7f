use crate::traits::ViewableGraph;
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Nodes reachable from `roots` in depth-first preorder, visiting successors in out-edge order.
pub fn preorder<G>(graph: &G, roots: &[G::NodeId]) -> Result<Vec<G::NodeId>>
where
    G: ViewableGraph + ?Sized,
{
    let mut visited = BTreeSet::new();
    let mut out = Vec::new();
    for root in roots {
        if !graph.has_node(root) {
            return Err(Error::NotFound);
        }
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            if !visited.insert(node.clone()) {
                continue;
            }
            let successors = graph.successors(&node)?;
            out.push(node);
            stack.extend(
                successors
                    .into_iter()
                    .rev()
                    .filter(|next| !visited.contains(next)),
            );
        }
    }
    Ok(out)
}

/// Nodes reachable from `roots` in depth-first postorder, visiting successors in out-edge order.
pub fn postorder<G>(graph: &G, roots: &[G::NodeId]) -> Result<Vec<G::NodeId>>
where
    G: ViewableGraph + ?Sized,
{
    let mut visited = BTreeSet::new();
    let mut out = Vec::new();
    for root in roots {
        if !graph.has_node(root) {
            return Err(Error::NotFound);
        }
        let mut stack = vec![(root.clone(), false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                out.push(node);
                continue;
            }
            if !visited.insert(node.clone()) {
                continue;
            }
            let successors = graph.successors(&node)?;
            stack.push((node, true));
            stack.extend(
                successors
                    .into_iter()
                    .rev()
                    .filter(|next| !visited.contains(next))
                    .map(|next| (next, false)),
            );
        }
    }
    Ok(out)
}
