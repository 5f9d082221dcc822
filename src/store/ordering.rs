//! Total order over edges, shared by stored records and lookup keys.
//!
//! Stored edges and bare lookup triples both implement [`EdgeKey`]. The
//! edge set is keyed by `dyn EdgeKey`, so a search by `(src, dst, weight)`
//! borrows its arguments instead of building a stored record first.
//! Nodes need no equivalent: `Rc<N>` already borrows as `N`.

use std::cmp::Ordering;

use crate::types::Triple;

/// Anything that can be compared as an edge: source, then destination,
/// then weight.
pub trait EdgeKey<N, E> {
    /// Source node value.
    fn source(&self) -> &N;
    /// Destination node value.
    fn destination(&self) -> &N;
    /// Edge weight.
    fn weight(&self) -> &E;
}

/// Compare two edge keys of any concrete kind.
pub fn compare_edges<N, E, A, B>(lhs: &A, rhs: &B) -> Ordering
where
    N: Ord,
    E: Ord,
    A: EdgeKey<N, E> + ?Sized,
    B: EdgeKey<N, E> + ?Sized,
{
    lhs.source()
        .cmp(rhs.source())
        .then_with(|| lhs.destination().cmp(rhs.destination()))
        .then_with(|| lhs.weight().cmp(rhs.weight()))
}

impl<'a, N: Ord, E: Ord> PartialEq for dyn EdgeKey<N, E> + 'a {
    fn eq(&self, other: &Self) -> bool {
        compare_edges(self, other) == Ordering::Equal
    }
}

impl<'a, N: Ord, E: Ord> Eq for dyn EdgeKey<N, E> + 'a {}

impl<'a, N: Ord, E: Ord> PartialOrd for dyn EdgeKey<N, E> + 'a {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, N: Ord, E: Ord> Ord for dyn EdgeKey<N, E> + 'a {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_edges(self, other)
    }
}

/// A borrowed lookup key.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'k, N, E> {
    source: &'k N,
    destination: &'k N,
    weight: &'k E,
}

impl<'k, N, E> Probe<'k, N, E> {
    /// Build a probe from borrowed parts.
    pub fn new(source: &'k N, destination: &'k N, weight: &'k E) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl<N, E> EdgeKey<N, E> for Probe<'_, N, E> {
    fn source(&self) -> &N {
        self.source
    }

    fn destination(&self) -> &N {
        self.destination
    }

    fn weight(&self) -> &E {
        self.weight
    }
}

impl<N, E> EdgeKey<N, E> for Triple<N, E> {
    fn source(&self) -> &N {
        &self.from
    }

    fn destination(&self) -> &N {
        &self.to
    }

    fn weight(&self) -> &E {
        &self.weight
    }
}
