use crate::annotated::AnnotatedTree;
use crate::operation::{EditOperation, NodeRef};
use bramble_graph::{Error, OrderedEditableGraph, Result, Tree, ViewableGraph, ViewableTree};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Replays an edit script on a copy of `tree` and returns the edited copy.
///
/// `source` indices resolve against `tree` itself, so the script must have been computed with
/// `tree` (or an identically shaped tree) as the source. New nodes and edges get their ids from
/// `next_node_id` / `next_edge_id`. The tree must be ordered.
pub fn apply_editing_operations<G, FN, FE, FD>(
    tree: &Tree<G>,
    operations: &[EditOperation<G::NodeData>],
    next_node_id: FN,
    next_edge_id: FE,
    make_edge_data: FD,
) -> Result<Tree<G>>
where
    G: OrderedEditableGraph + Clone,
    G::NodeData: Clone,
    FN: FnMut() -> G::NodeId,
    FE: FnMut() -> G::EdgeId,
    FD: FnMut() -> G::EdgeData,
{
    apply_editing_operations_with(
        tree,
        operations,
        next_node_id,
        next_edge_id,
        make_edge_data,
        |_, _| {},
    )
}

/// Like [`apply_editing_operations`], calling `callback` with the working tree after every
/// operation.
pub fn apply_editing_operations_with<G, FN, FE, FD, C>(
    tree: &Tree<G>,
    operations: &[EditOperation<G::NodeData>],
    mut next_node_id: FN,
    mut next_edge_id: FE,
    mut make_edge_data: FD,
    mut callback: C,
) -> Result<Tree<G>>
where
    G: OrderedEditableGraph + Clone,
    G::NodeData: Clone,
    FN: FnMut() -> G::NodeId,
    FE: FnMut() -> G::EdgeId,
    FD: FnMut() -> G::EdgeData,
    C: FnMut(&EditOperation<G::NodeData>, &Tree<G>),
{
    if !tree.is_ordered() {
        return Err(Error::NotOrdered);
    }
    let annotated = AnnotatedTree::new(tree)?;
    let source = |index: usize| {
        annotated
            .node(index)
            .cloned()
            .ok_or(Error::InvalidEditingOperation)
    };

    let mut inserted: HashMap<usize, G::NodeId> = HashMap::default();
    let mut result = tree.clone();
    for operation in operations {
        match operation {
            EditOperation::Remove { source: index, .. } => {
                result.remove_node_ungrouping(&source(*index)?)?;
            }
            EditOperation::Update {
                source: index,
                data,
                ..
            } => {
                result.set_node_data(&source(*index)?, data.clone())?;
            }
            EditOperation::Match { .. } => {}
            EditOperation::Insert {
                target,
                parent: None,
                data,
                ..
            } => {
                let node = next_node_id();
                let root = result.root().clone();
                result.insert_node(
                    node.clone(),
                    &root,
                    next_edge_id(),
                    data.clone(),
                    make_edge_data(),
                )?;
                inserted.insert(*target, node);
            }
            EditOperation::Insert {
                target,
                parent: Some(parent),
                position,
                adopt,
                data,
            } => {
                let parent = match *parent {
                    NodeRef::Source(index) => source(index)?,
                    NodeRef::Inserted(index) => inserted
                        .get(&index)
                        .cloned()
                        .ok_or(Error::InvalidEditingOperation)?,
                };
                let node = next_node_id();
                result.new_node_grouping(
                    node.clone(),
                    &parent,
                    *position,
                    *adopt,
                    next_edge_id(),
                    data.clone(),
                    make_edge_data(),
                )?;
                inserted.insert(*target, node);
            }
        }
        tracing::trace!(nodes = result.node_count(), "applied editing operation");
        callback(operation, &result);
    }
    Ok(result)
}
