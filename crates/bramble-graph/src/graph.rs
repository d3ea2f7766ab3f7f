//! Directed multigraph container.
//!
//! `Graph` stores nodes and edges in id-keyed maps, so canonical iteration order is id order.
//! Each node tracks its incoming edges (always sorted) and its outgoing edges (sorted or in
//! sibling order, depending on [`GraphOptions::ordered`]). Parallel edges and self-loops are
//! allowed; every edge endpoint must exist.
//!
//! All mutations validate their arguments before touching storage, so a failed call leaves the
//! graph exactly as it was.

mod entries;
mod options;

pub use options::GraphOptions;

use crate::edge_set::EdgeSet;
use crate::traits::{EditableGraph, OrderedEditableGraph, ViewableGraph};
use crate::{ElementId, Error, Result};
use entries::{EdgeEntry, NodeEntry};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N, E, ND = (), ED = ()>
where
    N: ElementId,
    E: ElementId,
{
    options: GraphOptions,
    nodes: BTreeMap<N, NodeEntry<E, ND>>,
    edges: BTreeMap<E, EdgeEntry<N, ED>>,
}

impl<N, E, ND, ED> Default for Graph<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
{
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N, E, ND, ED> Graph<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn new_sorted() -> Self {
        Self::new(GraphOptions::sorted())
    }

    pub fn new_ordered() -> Self {
        Self::new(GraphOptions::ordered())
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Nodes with their data, in id order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (&N, &ND)> {
        self.nodes.iter().map(|(id, entry)| (id, &entry.data))
    }

    /// Edges as `(id, tail, head, data)`, in id order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&E, &N, &N, &ED)> {
        self.edges
            .iter()
            .map(|(id, entry)| (id, &entry.tail, &entry.head, &entry.data))
    }

    /// Edges grouped by tail (tails in id order), each group in sibling order.
    pub fn iter_edges_by_tail(&self) -> impl Iterator<Item = (&E, &N, &N, &ED)> {
        self.nodes.values().flat_map(move |node| {
            node.out_edges.iter().filter_map(move |edge| {
                let (id, entry) = self.edges.get_key_value(edge)?;
                Some((id, &entry.tail, &entry.head, &entry.data))
            })
        })
    }

    fn node_entry(&self, node: &N) -> Result<&NodeEntry<E, ND>> {
        self.nodes.get(node).ok_or(Error::NotFound)
    }

    fn node_entry_mut(&mut self, node: &N) -> Result<&mut NodeEntry<E, ND>> {
        self.nodes.get_mut(node).ok_or(Error::NotFound)
    }

    fn edge_entry(&self, edge: &E) -> Result<&EdgeEntry<N, ED>> {
        self.edges.get(edge).ok_or(Error::NotFound)
    }

    fn check_new_edge(&self, edge: &E, tail: &N, head: &N) -> Result<()> {
        if self.edges.contains_key(edge) {
            return Err(Error::Duplicate);
        }
        if !self.nodes.contains_key(tail) || !self.nodes.contains_key(head) {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn check_move(&self, edge: &E, new_tail: &N, new_head: &N) -> Result<&EdgeEntry<N, ED>> {
        if !self.nodes.contains_key(new_tail) || !self.nodes.contains_key(new_head) {
            return Err(Error::NotFound);
        }
        self.edge_entry(edge)
    }

    /// Swaps the head of `edge` in the in-edge sets. Callers have validated both nodes.
    fn retarget_head(&mut self, edge: &E, old_head: &N, new_head: &N) -> Result<()> {
        if old_head == new_head {
            return Ok(());
        }
        self.node_entry_mut(old_head)?.in_edges.remove(edge);
        self.node_entry_mut(new_head)?.in_edges.insert(edge.clone());
        Ok(())
    }

    fn set_ends(&mut self, edge: &E, tail: &N, head: &N) -> Result<()> {
        let entry = self.edges.get_mut(edge).ok_or(Error::NotFound)?;
        entry.tail = tail.clone();
        entry.head = head.clone();
        Ok(())
    }
}

impl<N, E, ND, ED> ViewableGraph for Graph<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
{
    type NodeId = N;
    type EdgeId = E;
    type NodeData = ND;
    type EdgeData = ED;

    fn is_ordered(&self) -> bool {
        self.options.ordered
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn nodes(&self) -> Vec<N> {
        self.nodes.keys().cloned().collect()
    }

    fn edges(&self) -> Vec<E> {
        self.edges.keys().cloned().collect()
    }

    fn has_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    fn has_edge(&self, edge: &E) -> bool {
        self.edges.contains_key(edge)
    }

    fn node_data(&self, node: &N) -> Result<&ND> {
        Ok(&self.node_entry(node)?.data)
    }

    fn edge_data(&self, edge: &E) -> Result<&ED> {
        Ok(&self.edge_entry(edge)?.data)
    }

    fn out_edges(&self, node: &N) -> Result<Vec<E>> {
        Ok(self.node_entry(node)?.out_edges.to_vec())
    }

    fn in_edges(&self, node: &N) -> Result<Vec<E>> {
        Ok(self.node_entry(node)?.in_edges.to_vec())
    }

    fn edge_ends(&self, edge: &E) -> Result<(N, N)> {
        let entry = self.edge_entry(edge)?;
        Ok((entry.tail.clone(), entry.head.clone()))
    }

    fn out_degree(&self, node: &N) -> Result<usize> {
        Ok(self.node_entry(node)?.out_edges.len())
    }

    fn in_degree(&self, node: &N) -> Result<usize> {
        Ok(self.node_entry(node)?.in_edges.len())
    }

    fn node_edges(&self, node: &N) -> Result<Vec<E>> {
        let entry = self.node_entry(node)?;
        Ok(entry
            .in_edges
            .union(entry.out_edges.iter())
            .into_iter()
            .collect())
    }

    fn edge_index(&self, edge: &E) -> Result<usize> {
        let tail = &self.edge_entry(edge)?.tail;
        self.node_entry(tail)?.out_edges.index_of(edge)
    }
}

impl<N, E, ND, ED> EditableGraph for Graph<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
{
    fn new_node(&mut self, node: N, data: ND) -> Result<()> {
        if self.nodes.contains_key(&node) {
            return Err(Error::Duplicate);
        }
        self.nodes
            .insert(node, NodeEntry::new(data, self.options.ordered));
        Ok(())
    }

    fn remove_node(&mut self, node: &N) -> Result<()> {
        self.remove_node_edges(node)?;
        self.nodes.remove(node);
        Ok(())
    }

    fn new_edge(&mut self, edge: E, tail: N, head: N, data: ED) -> Result<()> {
        self.check_new_edge(&edge, &tail, &head)?;
        self.node_entry_mut(&tail)?.out_edges.insert(edge.clone());
        self.node_entry_mut(&head)?.in_edges.insert(edge.clone());
        self.edges.insert(edge, EdgeEntry { tail, head, data });
        Ok(())
    }

    fn remove_edge(&mut self, edge: &E) -> Result<()> {
        let entry = self.edges.remove(edge).ok_or(Error::NotFound)?;
        if let Some(tail) = self.nodes.get_mut(&entry.tail) {
            tail.out_edges.remove(edge);
        }
        if let Some(head) = self.nodes.get_mut(&entry.head) {
            head.in_edges.remove(edge);
        }
        Ok(())
    }

    fn remove_node_edges(&mut self, node: &N) -> Result<()> {
        for edge in self.node_edges(node)? {
            self.remove_edge(&edge)?;
        }
        Ok(())
    }

    fn move_edge(&mut self, edge: &E, new_tail: &N, new_head: &N) -> Result<()> {
        let entry = self.check_move(edge, new_tail, new_head)?;
        let (old_tail, old_head) = (entry.tail.clone(), entry.head.clone());
        if old_tail != *new_tail {
            self.node_entry_mut(&old_tail)?.out_edges.remove(edge);
            self.node_entry_mut(new_tail)?.out_edges.insert(edge.clone());
        }
        self.retarget_head(edge, &old_head, new_head)?;
        self.set_ends(edge, new_tail, new_head)
    }

    fn node_data_mut(&mut self, node: &N) -> Result<&mut ND> {
        Ok(&mut self.node_entry_mut(node)?.data)
    }

    fn edge_data_mut(&mut self, edge: &E) -> Result<&mut ED> {
        Ok(&mut self.edges.get_mut(edge).ok_or(Error::NotFound)?.data)
    }
}

impl<N, E, ND, ED> OrderedEditableGraph for Graph<N, E, ND, ED>
where
    N: ElementId,
    E: ElementId,
{
    fn new_edge_at(&mut self, edge: E, tail: N, index: usize, head: N, data: ED) -> Result<()> {
        if !self.options.ordered {
            return Err(Error::NotOrdered);
        }
        self.check_new_edge(&edge, &tail, &head)?;
        let tail_entry = self.node_entry_mut(&tail)?;
        if index > tail_entry.out_edges.len() {
            return Err(Error::InvalidIndex);
        }
        tail_entry.out_edges.insert_at(edge.clone(), index)?;
        self.node_entry_mut(&head)?.in_edges.insert(edge.clone());
        self.edges.insert(edge, EdgeEntry { tail, head, data });
        Ok(())
    }

    fn move_edge_at(&mut self, edge: &E, new_tail: &N, index: usize, new_head: &N) -> Result<()> {
        if !self.options.ordered {
            return Err(Error::NotOrdered);
        }
        let entry = self.check_move(edge, new_tail, new_head)?;
        let (old_tail, old_head) = (entry.tail.clone(), entry.head.clone());
        let siblings = self.node_entry(new_tail)?.out_edges.len();
        let limit = if old_tail == *new_tail {
            siblings - 1
        } else {
            siblings
        };
        if index > limit {
            return Err(Error::InvalidIndex);
        }
        self.node_entry_mut(&old_tail)?.out_edges.remove(edge);
        self.node_entry_mut(new_tail)?
            .out_edges
            .insert_at(edge.clone(), index)?;
        self.retarget_head(edge, &old_head, new_head)?;
        self.set_ends(edge, new_tail, new_head)
    }

    fn move_edge_to(&mut self, edge: &E, index: usize) -> Result<()> {
        if !self.options.ordered {
            return Err(Error::NotOrdered);
        }
        let tail = self.edge_entry(edge)?.tail.clone();
        self.node_entry_mut(&tail)?
            .out_edges
            .insert_at(edge.clone(), index)
    }
}
