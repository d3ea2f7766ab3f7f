//! Error type shared by every fallible graph operation.

/// Failure of a graph, tree, DAG or compound operation.
///
/// Operations that return an error leave their receiver unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error("node or edge not found")]
    NotFound,
    #[error("node or edge identifier already in use")]
    Duplicate,
    #[error("graph is not a tree rooted at the given node")]
    NotATree,
    #[error("graph contains a directed cycle")]
    NotADag,
    #[error("graph and hierarchy tree do not describe the same nodes")]
    NotACompound,
    #[error("editing operation refers to an unknown node")]
    InvalidEditingOperation,
    #[error("positional edge operation on a graph without sibling order")]
    NotOrdered,
    #[error("sibling index out of range")]
    InvalidIndex,
}

pub type Result<T> = std::result::Result<T, Error>;
