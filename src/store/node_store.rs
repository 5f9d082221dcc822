//! Canonical ordered storage of node values.

use std::collections::BTreeSet;
use std::rc::Rc;

/// Shared handle to a stored node. Edge records hold clones of the handle
/// owned by the [`NodeStore`]; they never allocate their own node values.
pub type NodeHandle<N> = Rc<N>;

/// Owns every node value of a graph, ascending by `N`'s order.
pub struct NodeStore<N> {
    nodes: BTreeSet<NodeHandle<N>>,
}

impl<N> NodeStore<N> {
    /// Create a new, empty node store.
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
        }
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate over stored handles in ascending order.
    pub fn handles(&self) -> impl DoubleEndedIterator<Item = &NodeHandle<N>> + '_ {
        self.nodes.iter()
    }
}

impl<N: Ord> NodeStore<N> {
    /// Whether a node equal to `value` is stored.
    pub fn contains(&self, value: &N) -> bool {
        self.nodes.contains(value)
    }

    /// The stored handle for `value`, if any.
    pub fn handle(&self, value: &N) -> Option<&NodeHandle<N>> {
        self.nodes.get(value)
    }

    /// Store `value` if no equal node exists. Returns whether it was stored.
    pub fn insert(&mut self, value: N) -> bool {
        if self.nodes.contains(&value) {
            return false;
        }
        self.nodes.insert(Rc::new(value))
    }

    /// Remove the node equal to `value`. Returns whether one was removed.
    ///
    /// Edges referencing the node must already be gone.
    pub fn erase(&mut self, value: &N) -> bool {
        match self.nodes.take(value) {
            Some(removed) => {
                debug_assert_eq!(
                    Rc::strong_count(&removed),
                    1,
                    "node erased while edges still reference it"
                );
                true
            }
            None => false,
        }
    }
}

impl<N: Clone> NodeStore<N> {
    /// Ascending snapshot of every node value.
    pub fn all(&self) -> Vec<N> {
        self.nodes.iter().map(|node| N::clone(node)).collect()
    }
}

impl<N> Default for NodeStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
