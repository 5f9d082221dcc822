//! Ordered edge records referencing nodes held by a [`NodeStore`].
//!
//! [`NodeStore`]: super::NodeStore

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{btree_set, BTreeSet};
use std::mem;
use std::ops::Bound;
use std::rc::Rc;

use crate::types::Triple;

use super::node_store::NodeHandle;
use super::ordering::{compare_edges, EdgeKey};

/// One stored edge: two node handles and an owned weight.
#[derive(Debug)]
pub struct EdgeRecord<N, E> {
    source: NodeHandle<N>,
    destination: NodeHandle<N>,
    weight: E,
}

impl<N, E> EdgeRecord<N, E> {
    /// Create a record from handles already owned by a node store.
    pub fn new(source: NodeHandle<N>, destination: NodeHandle<N>, weight: E) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Handle of the source node.
    pub fn source_handle(&self) -> &NodeHandle<N> {
        &self.source
    }

    /// Handle of the destination node.
    pub fn destination_handle(&self) -> &NodeHandle<N> {
        &self.destination
    }

    /// Consume the record, returning its weight.
    pub fn into_weight(self) -> E {
        self.weight
    }

    /// Whether both records point at the same node slots.
    pub fn shares_endpoints(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source) && Rc::ptr_eq(&self.destination, &other.destination)
    }
}

impl<N: Clone, E: Clone> EdgeRecord<N, E> {
    /// Detached copy of this edge.
    pub fn to_triple(&self) -> Triple<N, E> {
        Triple::new(
            N::clone(&self.source),
            N::clone(&self.destination),
            self.weight.clone(),
        )
    }
}

impl<N, E: Clone> Clone for EdgeRecord<N, E> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            destination: Rc::clone(&self.destination),
            weight: self.weight.clone(),
        }
    }
}

impl<N, E> EdgeKey<N, E> for EdgeRecord<N, E> {
    fn source(&self) -> &N {
        &self.source
    }

    fn destination(&self) -> &N {
        &self.destination
    }

    fn weight(&self) -> &E {
        &self.weight
    }
}

impl<N: Ord, E: Ord> PartialEq for EdgeRecord<N, E> {
    fn eq(&self, other: &Self) -> bool {
        compare_edges(self, other) == Ordering::Equal
    }
}

impl<N: Ord, E: Ord> Eq for EdgeRecord<N, E> {}

impl<N: Ord, E: Ord> PartialOrd for EdgeRecord<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, E: Ord> Ord for EdgeRecord<N, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_edges(self, other)
    }
}

impl<'a, N: 'a, E: 'a> Borrow<dyn EdgeKey<N, E> + 'a> for EdgeRecord<N, E> {
    fn borrow(&self) -> &(dyn EdgeKey<N, E> + 'a) {
        self
    }
}

/// All edges of a graph, ascending by `(source, destination, weight)`.
pub struct EdgeStore<N, E> {
    edges: BTreeSet<EdgeRecord<N, E>>,
}

impl<N, E> EdgeStore<N, E> {
    /// Create a new, empty edge store.
    pub fn new() -> Self {
        Self {
            edges: BTreeSet::new(),
        }
    }

    /// Number of stored edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the store holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Drop every edge.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Iterate over records in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, EdgeRecord<N, E>> {
        self.edges.iter()
    }
}

impl<N: Ord, E: Ord> EdgeStore<N, E> {
    /// Store an edge between two existing node slots. Returns false if an
    /// equal triple is already stored.
    pub fn insert(&mut self, source: NodeHandle<N>, destination: NodeHandle<N>, weight: E) -> bool {
        self.insert_record(EdgeRecord::new(source, destination, weight))
    }

    /// Store a prebuilt record. Returns false if an equal triple exists.
    pub fn insert_record(&mut self, record: EdgeRecord<N, E>) -> bool {
        self.edges.insert(record)
    }

    /// Whether an edge equal to `key` is stored.
    pub fn contains<K: EdgeKey<N, E>>(&self, key: &K) -> bool {
        self.edges.contains(key as &dyn EdgeKey<N, E>)
    }

    /// The stored record equal to `key`.
    pub fn find<K: EdgeKey<N, E>>(&self, key: &K) -> Option<&EdgeRecord<N, E>> {
        self.edges.get(key as &dyn EdgeKey<N, E>)
    }

    /// Remove the record equal to `key`. Returns whether one was removed.
    pub fn erase<K: EdgeKey<N, E>>(&mut self, key: &K) -> bool {
        self.edges.remove(key as &dyn EdgeKey<N, E>)
    }

    /// Remove every record matching `predicate`, returning how many went.
    pub fn erase_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&EdgeRecord<N, E>) -> bool,
    {
        let before = self.edges.len();
        self.edges.retain(|record| !predicate(record));
        before - self.edges.len()
    }

    /// Remove every record matching `predicate` and hand them back in
    /// ascending order.
    pub fn extract_matching<F>(&mut self, mut predicate: F) -> Vec<EdgeRecord<N, E>>
    where
        F: FnMut(&EdgeRecord<N, E>) -> bool,
    {
        let (matched, kept): (BTreeSet<_>, BTreeSet<_>) = mem::take(&mut self.edges)
            .into_iter()
            .partition(|record| predicate(record));
        self.edges = kept;
        matched.into_iter().collect()
    }

    /// Smallest record.
    pub fn first(&self) -> Option<&EdgeRecord<N, E>> {
        self.edges.first()
    }

    /// Largest record.
    pub fn last(&self) -> Option<&EdgeRecord<N, E>> {
        self.edges.last()
    }

    /// Smallest record strictly greater than `key`.
    pub fn successor<K: EdgeKey<N, E>>(&self, key: &K) -> Option<&EdgeRecord<N, E>> {
        let key = key as &dyn EdgeKey<N, E>;
        self.edges
            .range::<dyn EdgeKey<N, E> + '_, _>((Bound::Excluded(key), Bound::Unbounded))
            .next()
    }

    /// Largest record strictly less than `key`.
    pub fn predecessor<K: EdgeKey<N, E>>(&self, key: &K) -> Option<&EdgeRecord<N, E>> {
        let key = key as &dyn EdgeKey<N, E>;
        self.edges
            .range::<dyn EdgeKey<N, E> + '_, _>((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
    }

    /// Smallest record greater than or equal to `key`.
    pub fn lower_bound<K: EdgeKey<N, E>>(&self, key: &K) -> Option<&EdgeRecord<N, E>> {
        let key = key as &dyn EdgeKey<N, E>;
        self.edges
            .range::<dyn EdgeKey<N, E> + '_, _>((Bound::Included(key), Bound::Unbounded))
            .next()
    }
}

impl<N: Ord, E: Ord + Clone> EdgeStore<N, E> {
    /// Remove every record in `[first, last)`; `None` for `last` means the
    /// end of the store. A reversed range removes nothing.
    pub fn erase_range<A, B>(&mut self, first: &A, last: Option<&B>) -> usize
    where
        A: EdgeKey<N, E>,
        B: EdgeKey<N, E>,
    {
        if let Some(last) = last {
            if compare_edges(first, last) == Ordering::Greater {
                return 0;
            }
        }

        let lower = Bound::Included(first as &dyn EdgeKey<N, E>);
        let upper = match last {
            Some(last) => Bound::Excluded(last as &dyn EdgeKey<N, E>),
            None => Bound::Unbounded,
        };
        let doomed: Vec<EdgeRecord<N, E>> = self
            .edges
            .range::<dyn EdgeKey<N, E> + '_, _>((lower, upper))
            .cloned()
            .collect();

        for record in &doomed {
            self.edges.remove(record);
        }
        doomed.len()
    }
}

impl<N, E> Default for EdgeStore<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N, E> IntoIterator for &'a EdgeStore<N, E> {
    type Item = &'a EdgeRecord<N, E>;
    type IntoIter = btree_set::Iter<'a, EdgeRecord<N, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
