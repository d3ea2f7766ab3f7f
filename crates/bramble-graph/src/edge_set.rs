//! Per-node edge collections.
//!
//! Every node keeps its outgoing edges in one of two backings, fixed when the graph is built:
//! [`SortedEdgeSet`] iterates in identifier order, [`OrderedEdgeSet`] keeps a caller-controlled
//! sibling order and supports positional insertion. Incoming edges are always sorted.

use crate::{ElementId, Error, Result};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeSet, btree_set};

pub trait EdgeSet<E: ElementId> {
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, edge: &E) -> bool;

    fn iter(&self) -> Self::Iter<'_>;

    /// Adds `edge`; ordered sets append it after the current last member.
    fn insert(&mut self, edge: E);

    /// Places `edge` at `index`. A current member is repositioned, with `index` counted in the
    /// set without it.
    fn insert_at(&mut self, edge: E, index: usize) -> Result<()>;

    fn remove(&mut self, edge: &E) -> bool;

    fn index_of(&self, edge: &E) -> Result<usize>;

    fn filter<F>(&self, f: F) -> Self
    where
        Self: Sized,
        F: FnMut(&E) -> bool;

    fn union<'a, I>(&self, other: I) -> BTreeSet<E>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let mut out: BTreeSet<E> = self.iter().cloned().collect();
        out.extend(other.into_iter().cloned());
        out
    }

    fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&E) -> T,
    {
        self.iter().map(f).collect()
    }

    fn to_vec(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedEdgeSet<E: ElementId> {
    set: BTreeSet<E>,
}

impl<E: ElementId> SortedEdgeSet<E> {
    pub fn new() -> Self {
        Self {
            set: BTreeSet::new(),
        }
    }
}

impl<E: ElementId> Default for SortedEdgeSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ElementId> FromIterator<E> for SortedEdgeSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

impl<E: ElementId> EdgeSet<E> for SortedEdgeSet<E> {
    type Iter<'a>
        = btree_set::Iter<'a, E>
    where
        E: 'a;

    fn len(&self) -> usize {
        self.set.len()
    }

    fn contains(&self, edge: &E) -> bool {
        self.set.contains(edge)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.set.iter()
    }

    fn insert(&mut self, edge: E) {
        self.set.insert(edge);
    }

    fn insert_at(&mut self, _edge: E, _index: usize) -> Result<()> {
        Err(Error::NotOrdered)
    }

    fn remove(&mut self, edge: &E) -> bool {
        self.set.remove(edge)
    }

    fn index_of(&self, edge: &E) -> Result<usize> {
        self.set
            .iter()
            .position(|e| e == edge)
            .ok_or(Error::NotFound)
    }

    fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&E) -> bool,
    {
        self.set.iter().filter(|e| f(e)).cloned().collect()
    }
}

#[derive(Debug, Clone)]
pub struct OrderedEdgeSet<E: ElementId> {
    set: IndexSet<E, FxBuildHasher>,
}

impl<E: ElementId> OrderedEdgeSet<E> {
    pub fn new() -> Self {
        Self {
            set: IndexSet::default(),
        }
    }
}

impl<E: ElementId> Default for OrderedEdgeSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ElementId> FromIterator<E> for OrderedEdgeSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

// `IndexSet` equality ignores order; sibling order is part of an ordered set's value.
impl<E: ElementId> PartialEq for OrderedEdgeSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.set.iter().eq(other.set.iter())
    }
}

impl<E: ElementId> Eq for OrderedEdgeSet<E> {}

impl<E: ElementId> EdgeSet<E> for OrderedEdgeSet<E> {
    type Iter<'a>
        = indexmap::set::Iter<'a, E>
    where
        E: 'a;

    fn len(&self) -> usize {
        self.set.len()
    }

    fn contains(&self, edge: &E) -> bool {
        self.set.contains(edge)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.set.iter()
    }

    fn insert(&mut self, edge: E) {
        self.set.insert(edge);
    }

    fn insert_at(&mut self, edge: E, index: usize) -> Result<()> {
        let len = if self.set.contains(&edge) {
            self.set.len() - 1
        } else {
            self.set.len()
        };
        if index > len {
            return Err(Error::InvalidIndex);
        }
        self.set.shift_remove(&edge);
        self.set.shift_insert(index, edge);
        Ok(())
    }

    fn remove(&mut self, edge: &E) -> bool {
        self.set.shift_remove(edge)
    }

    fn index_of(&self, edge: &E) -> Result<usize> {
        self.set.get_index_of(edge).ok_or(Error::NotFound)
    }

    fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&E) -> bool,
    {
        self.set.iter().filter(|e| f(e)).cloned().collect()
    }
}

/// Outgoing edges of a node in whichever backing the owning graph uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutEdges<E: ElementId> {
    Sorted(SortedEdgeSet<E>),
    Ordered(OrderedEdgeSet<E>),
}

impl<E: ElementId> OutEdges<E> {
    pub(crate) fn new(ordered: bool) -> Self {
        if ordered {
            Self::Ordered(OrderedEdgeSet::new())
        } else {
            Self::Sorted(SortedEdgeSet::new())
        }
    }
}

pub(crate) enum OutEdgesIter<'a, E> {
    Sorted(btree_set::Iter<'a, E>),
    Ordered(indexmap::set::Iter<'a, E>),
}

impl<'a, E> Iterator for OutEdgesIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sorted(it) => it.next(),
            Self::Ordered(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sorted(it) => it.size_hint(),
            Self::Ordered(it) => it.size_hint(),
        }
    }
}

impl<E: ElementId> EdgeSet<E> for OutEdges<E> {
    type Iter<'a>
        = OutEdgesIter<'a, E>
    where
        E: 'a;

    fn len(&self) -> usize {
        match self {
            Self::Sorted(set) => set.len(),
            Self::Ordered(set) => set.len(),
        }
    }

    fn contains(&self, edge: &E) -> bool {
        match self {
            Self::Sorted(set) => set.contains(edge),
            Self::Ordered(set) => set.contains(edge),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Self::Sorted(set) => OutEdgesIter::Sorted(set.iter()),
            Self::Ordered(set) => OutEdgesIter::Ordered(set.iter()),
        }
    }

    fn insert(&mut self, edge: E) {
        match self {
            Self::Sorted(set) => set.insert(edge),
            Self::Ordered(set) => set.insert(edge),
        }
    }

    fn insert_at(&mut self, edge: E, index: usize) -> Result<()> {
        match self {
            Self::Sorted(set) => set.insert_at(edge, index),
            Self::Ordered(set) => set.insert_at(edge, index),
        }
    }

    fn remove(&mut self, edge: &E) -> bool {
        match self {
            Self::Sorted(set) => set.remove(edge),
            Self::Ordered(set) => set.remove(edge),
        }
    }

    fn index_of(&self, edge: &E) -> Result<usize> {
        match self {
            Self::Sorted(set) => set.index_of(edge),
            Self::Ordered(set) => set.index_of(edge),
        }
    }

    fn filter<F>(&self, f: F) -> Self
    where
        F: FnMut(&E) -> bool,
    {
        match self {
            Self::Sorted(set) => Self::Sorted(set.filter(f)),
            Self::Ordered(set) => Self::Ordered(set.filter(f)),
        }
    }
}
