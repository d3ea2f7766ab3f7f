//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GraphOptions {
    /// Keep every node's outgoing edges in caller-controlled sibling order instead of edge id
    /// order. Fixed for the lifetime of the graph.
    pub ordered: bool,
}

impl GraphOptions {
    pub fn sorted() -> Self {
        Self { ordered: false }
    }

    pub fn ordered() -> Self {
        Self { ordered: true }
    }
}
