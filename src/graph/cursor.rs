//! Positions in a graph's edge order, and a borrowing edge iterator.

use std::collections::btree_set;
use std::iter::FusedIterator;

use crate::store::EdgeRecord;
use crate::types::Triple;

use super::Graph;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Position<N, E> {
    Detached,
    At(Triple<N, E>),
    End,
}

/// A bidirectional position in a graph's edge order.
///
/// The cursor owns a copy of the edge it sits on rather than a reference
/// into the graph, so it may be held across mutations. Stepping is done
/// against a graph with [`move_next`](Self::move_next) and
/// [`move_prev`](Self::move_prev); a cursor whose edge has since been erased
/// still steps to that edge's neighbours.
///
/// A default cursor is *detached*: it equals other detached cursors, has no
/// edge, and never moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeCursor<N, E> {
    position: Position<N, E>,
}

impl<N, E> EdgeCursor<N, E> {
    /// A detached cursor.
    pub fn new() -> Self {
        Self {
            position: Position::Detached,
        }
    }

    pub(crate) fn at(triple: Triple<N, E>) -> Self {
        Self {
            position: Position::At(triple),
        }
    }

    pub(crate) fn end() -> Self {
        Self {
            position: Position::End,
        }
    }

    /// The edge under the cursor, if it sits on one.
    pub fn get(&self) -> Option<&Triple<N, E>> {
        match &self.position {
            Position::At(triple) => Some(triple),
            Position::Detached | Position::End => None,
        }
    }

    /// Consume the cursor, returning its edge.
    pub fn into_triple(self) -> Option<Triple<N, E>> {
        match self.position {
            Position::At(triple) => Some(triple),
            Position::Detached | Position::End => None,
        }
    }

    /// Whether the cursor is one past the last edge.
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// Whether the cursor was never attached to a graph.
    pub fn is_detached(&self) -> bool {
        matches!(self.position, Position::Detached)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> EdgeCursor<N, E> {
    pub(crate) fn from_record(record: Option<&EdgeRecord<N, E>>) -> Self {
        match record {
            Some(record) => Self::at(record.to_triple()),
            None => Self::end(),
        }
    }

    /// Step to the next edge of `graph`, or to the end.
    ///
    /// An end cursor stays at the end; a detached one stays detached.
    pub fn move_next(&mut self, graph: &Graph<N, E>) {
        let next = match &self.position {
            Position::At(current) => Self::from_record(graph.edge_store().successor(current)),
            Position::Detached | Position::End => return,
        };
        *self = next;
    }

    /// Step to the previous edge of `graph`.
    ///
    /// Stepping back from the first edge detaches the cursor. Stepping back
    /// from the end of an edgeless graph leaves it at the end.
    pub fn move_prev(&mut self, graph: &Graph<N, E>) {
        let store = graph.edge_store();
        let previous = match &self.position {
            Position::At(current) => match store.predecessor(current) {
                Some(record) => Self::at(record.to_triple()),
                None => Self::new(),
            },
            Position::End => match store.last() {
                Some(record) => Self::at(record.to_triple()),
                None => return,
            },
            Position::Detached => return,
        };
        *self = previous;
    }
}

impl<N, E> Default for EdgeCursor<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a graph's edges as detached [`Triple`]s.
///
/// Created by [`Graph::iter`]. Runs in ascending `(from, to, weight)` order
/// and backwards with [`Iterator::rev`].
pub struct Edges<'a, N, E> {
    inner: btree_set::Iter<'a, EdgeRecord<N, E>>,
}

impl<'a, N, E> Edges<'a, N, E> {
    pub(crate) fn new(inner: btree_set::Iter<'a, EdgeRecord<N, E>>) -> Self {
        Self { inner }
    }
}

impl<N: Clone, E: Clone> Iterator for Edges<'_, N, E> {
    type Item = Triple<N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(EdgeRecord::to_triple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N: Clone, E: Clone> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(EdgeRecord::to_triple)
    }
}

impl<N: Clone, E: Clone> ExactSizeIterator for Edges<'_, N, E> {}

impl<N: Clone, E: Clone> FusedIterator for Edges<'_, N, E> {}

impl<'a, N: Clone, E: Clone> IntoIterator for &'a Graph<N, E> {
    type Item = Triple<N, E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
