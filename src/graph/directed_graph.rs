//! Core graph structure: an ordered node store plus an ordered edge store.

use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::store::{EdgeKey, EdgeStore, NodeStore, Probe};
use crate::types::{GraphError, GraphResult};

use super::cursor::{EdgeCursor, Edges};

/// A directed, weighted multigraph over node values `N` and weights `E`.
///
/// Nodes are unique by value. Edges are unique by `(from, to, weight)`, so
/// two nodes may be joined by several edges as long as their weights differ.
/// Every edge endpoint is a node currently in the graph.
pub struct Graph<N, E> {
    /// Owns every node value.
    nodes: NodeStore<N>,
    /// Edges, holding handles into `nodes`.
    edges: EdgeStore<N, E>,
}

impl<N, E> Graph<N, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: NodeStore::new(),
            edges: EdgeStore::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing graph of {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        // edges first so no record outlives its endpoints
        self.edges.clear();
        self.nodes.clear();
    }

    /// Move the contents out, leaving this graph empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Iterate over all edges in ascending `(from, to, weight)` order.
    pub fn iter(&self) -> Edges<'_, N, E> {
        Edges::new(self.edges.iter())
    }

    pub(crate) fn node_store(&self) -> &NodeStore<N> {
        &self.nodes
    }

    pub(crate) fn edge_store(&self) -> &EdgeStore<N, E> {
        &self.edges
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    // ==================== Modifiers ====================

    /// Add a node. Returns false if an equal node is already present.
    pub fn insert_node(&mut self, value: N) -> bool {
        self.nodes.insert(value)
    }

    /// Add an edge between two existing nodes.
    ///
    /// Returns `Ok(false)` if the identical triple is already stored.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> GraphResult<bool> {
        let (Some(source), Some(destination)) = (self.nodes.handle(src), self.nodes.handle(dst))
        else {
            return Err(GraphError::InsertEdgeMissingNode);
        };
        let (source, destination) = (Rc::clone(source), Rc::clone(destination));

        let inserted = self.edges.insert(source, destination, weight);
        if inserted {
            log::trace!("edge inserted, graph now has {} edges", self.edges.len());
        }
        Ok(inserted)
    }

    /// Rename `old` to `new`, keeping all of its edges.
    ///
    /// Returns `Ok(false)` without touching the graph if `new` already
    /// exists; use [`merge_replace_node`](Self::merge_replace_node) to
    /// combine two existing nodes.
    pub fn replace_node(&mut self, old: &N, new: N) -> GraphResult<bool> {
        if !self.nodes.contains(old) {
            return Err(GraphError::ReplaceMissingNode);
        }
        if self.nodes.contains(&new) {
            return Ok(false);
        }

        let target = new.clone();
        self.nodes.insert(new);
        self.rehome(old, &target);
        Ok(true)
    }

    /// Fold `old` into `new`: every edge touching `old` is redirected to
    /// `new` and `old` is removed.
    ///
    /// Redirected edges that duplicate an existing triple collapse into
    /// one. Merging a node into itself changes nothing.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> GraphResult<()> {
        if !self.nodes.contains(old) || !self.nodes.contains(new) {
            return Err(GraphError::MergeReplaceMissingNode);
        }
        if old == new {
            return Ok(());
        }

        self.rehome(old, new);
        Ok(())
    }

    /// Remove a node and every edge touching it. Returns false if absent.
    pub fn erase_node(&mut self, value: &N) -> bool {
        if !self.nodes.contains(value) {
            return false;
        }

        let dropped = self
            .edges
            .erase_matching(|record| record.source() == value || record.destination() == value);
        self.nodes.erase(value);
        log::debug!("erased node along with {} incident edges", dropped);
        true
    }

    /// Remove the edge `src -> dst` with `weight`, returning whether it
    /// existed.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: &E) -> GraphResult<bool> {
        if !self.nodes.contains(src) || !self.nodes.contains(dst) {
            return Err(GraphError::EraseEdgeMissingNode);
        }

        Ok(self.edges.erase(&Probe::new(src, dst, weight)))
    }

    /// Remove the edge under `position` and return a cursor to the edge
    /// that followed it.
    ///
    /// A detached or end cursor removes nothing and yields [`end`](Self::end).
    pub fn erase_edge_at(&mut self, position: EdgeCursor<N, E>) -> EdgeCursor<N, E> {
        let Some(key) = position.get() else {
            return self.end();
        };

        self.edges.erase(key);
        EdgeCursor::from_record(self.edges.successor(key))
    }

    /// Remove the edges in `[first, last)` and return a cursor to the edge
    /// at `last`.
    ///
    /// A detached `last` counts as [`end`](Self::end). A range whose start
    /// lies after its end removes nothing.
    pub fn erase_edges(
        &mut self,
        first: EdgeCursor<N, E>,
        last: EdgeCursor<N, E>,
    ) -> EdgeCursor<N, E> {
        let Some(start) = first.get() else {
            return self.end();
        };

        let removed = self.edges.erase_range(start, last.get());
        log::debug!("erased {} edges by range", removed);

        match last.get() {
            Some(stop) => EdgeCursor::from_record(self.edges.lower_bound(stop)),
            None => self.end(),
        }
    }

    /// Redirect every edge touching `old` onto `new`, then drop `old`.
    ///
    /// Both nodes must exist and differ. Touching edges are pulled out of the
    /// store before any replacement goes in, so the outcome does not depend
    /// on the order they are visited in.
    fn rehome(&mut self, old: &N, new: &N) {
        let Some(target) = self.nodes.handle(new).map(Rc::clone) else {
            return;
        };

        let touching = self
            .edges
            .extract_matching(|record| record.source() == old || record.destination() == old);
        let moved = touching.len();

        let mut collapsed = 0usize;
        for record in touching {
            let source = if record.source() == old {
                Rc::clone(&target)
            } else {
                Rc::clone(record.source_handle())
            };
            let destination = if record.destination() == old {
                Rc::clone(&target)
            } else {
                Rc::clone(record.destination_handle())
            };

            if !self.edges.insert(source, destination, record.into_weight()) {
                collapsed += 1;
            }
        }

        self.nodes.erase(old);
        log::debug!(
            "re-homed {} edges onto replacement node, {} collapsed as duplicates",
            moved - collapsed,
            collapsed
        );
    }

    // ==================== Accessors ====================

    /// Whether a node equal to `value` exists.
    pub fn is_node(&self, value: &N) -> bool {
        self.nodes.contains(value)
    }

    /// Whether at least one edge runs from `src` to `dst`.
    pub fn is_connected(&self, src: &N, dst: &N) -> GraphResult<bool> {
        if !self.nodes.contains(src) || !self.nodes.contains(dst) {
            return Err(GraphError::IsConnectedMissingNode);
        }

        Ok(self
            .edges
            .iter()
            .any(|record| record.source() == src && record.destination() == dst))
    }

    /// All node values, ascending.
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.all()
    }

    /// Weights of every edge from `src` to `dst`, ascending.
    pub fn weights(&self, src: &N, dst: &N) -> GraphResult<Vec<E>> {
        if !self.nodes.contains(src) || !self.nodes.contains(dst) {
            return Err(GraphError::WeightsMissingNode);
        }

        Ok(self
            .edges
            .iter()
            .filter(|record| record.source() == src && record.destination() == dst)
            .map(|record| record.weight().clone())
            .collect())
    }

    /// Destination of every edge leaving `src`, ascending, one entry per
    /// edge.
    pub fn connections(&self, src: &N) -> GraphResult<Vec<N>> {
        if !self.nodes.contains(src) {
            return Err(GraphError::ConnectionsMissingNode);
        }

        Ok(self
            .edges
            .iter()
            .filter(|record| record.source() == src)
            .map(|record| record.destination().clone())
            .collect())
    }

    /// Cursor at the edge `src -> dst` with `weight`, or [`end`](Self::end)
    /// if there is none. Missing nodes simply fail to match.
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> EdgeCursor<N, E> {
        match self.edges.find(&Probe::new(src, dst, weight)) {
            Some(record) => EdgeCursor::at(record.to_triple()),
            None => self.end(),
        }
    }

    // ==================== Cursors ====================

    /// Cursor at the smallest edge, or [`end`](Self::end) if there are none.
    pub fn begin(&self) -> EdgeCursor<N, E> {
        EdgeCursor::from_record(self.edges.first())
    }

    /// Cursor one past the largest edge.
    pub fn end(&self) -> EdgeCursor<N, E> {
        EdgeCursor::end()
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: fresh node slots, with every edge re-resolved against them.
impl<N: Ord + Clone, E: Ord + Clone> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        let mut nodes = NodeStore::new();
        for node in self.nodes.handles() {
            nodes.insert(N::clone(node));
        }

        let mut edges = EdgeStore::new();
        for record in &self.edges {
            let source = nodes.handle(record.source()).map(Rc::clone);
            let destination = nodes.handle(record.destination()).map(Rc::clone);
            if let (Some(source), Some(destination)) = (source, destination) {
                edges.insert(source, destination, record.weight().clone());
            }
        }

        debug_assert_eq!(edges.len(), self.edges.len());
        Self { nodes, edges }
    }
}

impl<N: Ord, E: Ord> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.handles().eq(other.nodes.handles()) && self.edges.iter().eq(other.edges.iter())
    }
}

impl<N: Ord, E: Ord> Eq for Graph<N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<&N> = self.nodes.handles().map(|node| &**node).collect();
        let edges: Vec<(&N, &N, &E)> = self
            .edges
            .iter()
            .map(|record| (record.source(), record.destination(), record.weight()))
            .collect();
        f.debug_struct("Graph")
            .field("nodes", &nodes)
            .field("edges", &edges)
            .finish()
    }
}
