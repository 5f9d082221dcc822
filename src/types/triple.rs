//! The detached `(from, to, weight)` value produced by queries and iteration.

use serde::{Deserialize, Serialize};

/// One edge as seen from outside the graph.
///
/// A `Triple` owns copies of its endpoints and weight, so it stays valid
/// after the graph it came from is mutated or dropped. The derived order is
/// lexicographic over `(from, to, weight)`, the same order the graph
/// iterates in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple<N, E> {
    /// Source node value.
    pub from: N,
    /// Destination node value.
    pub to: N,
    /// Edge weight.
    pub weight: E,
}

impl<N, E> Triple<N, E> {
    /// Create a new triple.
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }

    /// Split into a plain tuple.
    pub fn into_tuple(self) -> (N, N, E) {
        (self.from, self.to, self.weight)
    }
}

impl<N, E> From<(N, N, E)> for Triple<N, E> {
    fn from((from, to, weight): (N, N, E)) -> Self {
        Self { from, to, weight }
    }
}
