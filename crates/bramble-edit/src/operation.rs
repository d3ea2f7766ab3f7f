//! Edit operations and script assembly.
//!
//! Indices in operations are post-order positions: `source` indexes the annotated source tree,
//! `target` the annotated target tree.

use crate::annotated::AnnotatedTree;
use crate::costs::{EditCosts, EditOptions};
use crate::distance::Step;
use bramble_graph::ViewableTree;
use std::fmt;

/// Where an inserted node attaches: below a surviving source node, or below a node inserted
/// earlier in the same script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Source(usize),
    Inserted(usize),
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(index) => write!(f, "source {index}"),
            Self::Inserted(index) => write!(f, "inserted {index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOperation<D> {
    /// Drop a source node; its children move up into its slot.
    Remove { source: usize, data: D },
    /// Create the target node `target`. With `parent: None` the node becomes the new root above
    /// the current one. Otherwise it becomes child number `position` of `parent` and adopts the
    /// `adopt` siblings that currently follow that slot.
    Insert {
        target: usize,
        parent: Option<NodeRef>,
        position: usize,
        adopt: usize,
        data: D,
    },
    /// Relabel a source node with the data of its mapped target node.
    Update { source: usize, target: usize, data: D },
    /// A source node mapped to a target node at zero cost.
    Match { source: usize, target: usize, data: D },
}

impl<D> EditOperation<D> {
    pub fn data(&self) -> &D {
        match self {
            Self::Remove { data, .. }
            | Self::Insert { data, .. }
            | Self::Update { data, .. }
            | Self::Match { data, .. } => data,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

impl<D: fmt::Display> fmt::Display for EditOperation<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove { source, data } => write!(f, "remove({source}, {data})"),
            Self::Insert {
                target,
                parent: None,
                data,
                ..
            } => write!(f, "insert({target}, {data}, root)"),
            Self::Insert {
                target,
                parent: Some(parent),
                position,
                adopt,
                data,
            } => write!(
                f,
                "insert({target}, {data}, {parent} at {position} adopting {adopt})"
            ),
            Self::Update {
                source,
                target,
                data,
            } => write!(f, "update({source} -> {target}, {data})"),
            Self::Match {
                source,
                target,
                data,
            } => write!(f, "match({source} -> {target}, {data})"),
        }
    }
}

/// The minimum edit cost between two trees together with a script that realizes it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditScript<D> {
    pub cost: f64,
    pub operations: Vec<EditOperation<D>>,
}

impl<D> EditScript<D> {
    /// True when the script changes nothing (matches aside).
    pub fn is_identity(&self) -> bool {
        self.operations.iter().all(EditOperation::is_match)
    }
}

/// Turns the node mapping found by the distance computation into an applicable script:
/// updates and matches first, then a root insertion if needed, then removals in source
/// post-order, then insertions in target pre-order.
pub(crate) fn assemble<A, B>(
    source: &AnnotatedTree<'_, A>,
    target: &AnnotatedTree<'_, B>,
    steps: &[Step],
    costs: &EditCosts<'_, A::NodeData>,
    options: EditOptions,
) -> Vec<EditOperation<A::NodeData>>
where
    A: ViewableTree,
    B: ViewableTree<NodeData = A::NodeData>,
    A::NodeData: Clone,
{
    let mut target_of: Vec<Option<usize>> = vec![None; source.len()];
    let mut source_of: Vec<Option<usize>> = vec![None; target.len()];
    for step in steps {
        if let Step::Pair(x, y) = *step {
            target_of[x] = Some(y);
            source_of[y] = Some(x);
        }
    }

    let mut operations = Vec::new();
    for (x, mapped) in target_of.iter().enumerate() {
        let Some(y) = *mapped else { continue };
        let data = target.label(y).clone();
        if costs.update(source.label(x), target.label(y)) == 0.0 {
            if options.keep_matches {
                operations.push(EditOperation::Match {
                    source: x,
                    target: y,
                    data,
                });
            }
        } else {
            operations.push(EditOperation::Update {
                source: x,
                target: y,
                data,
            });
        }
    }

    let root = target.root();
    if source_of[root].is_none() {
        operations.push(EditOperation::Insert {
            target: root,
            parent: None,
            position: 0,
            adopt: 1,
            data: target.label(root).clone(),
        });
    }

    for (x, mapped) in target_of.iter().enumerate() {
        if mapped.is_none() {
            operations.push(EditOperation::Remove {
                source: x,
                data: source.label(x).clone(),
            });
        }
    }

    // Slots a not-yet-inserted node spans once every unmapped node is ungrouped.
    let mut span = vec![0usize; target.len()];
    for y in 0..target.len() {
        let width = target
            .children(y)
            .iter()
            .map(|&c| if source_of[c].is_some() { 1 } else { span[c] })
            .sum();
        span[y] = width;
    }

    for y in target.preorder() {
        if y == root || source_of[y].is_some() {
            continue;
        }
        let Some(parent) = target.parent(y) else {
            continue;
        };
        let parent_ref = match source_of[parent] {
            Some(x) => NodeRef::Source(x),
            None => NodeRef::Inserted(parent),
        };
        let position = target
            .children(parent)
            .iter()
            .position(|&c| c == y)
            .unwrap_or_default();
        operations.push(EditOperation::Insert {
            target: y,
            parent: Some(parent_ref),
            position,
            adopt: span[y],
            data: target.label(y).clone(),
        });
    }

    operations
}
