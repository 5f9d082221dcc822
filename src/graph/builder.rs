//! Construction helpers: a fluent builder plus the std conversion traits.

use crate::types::{GraphResult, Triple};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges are collected first; edges are validated when the graph
/// is built, so an edge may be linked before its endpoints are added.
pub struct GraphBuilder<N, E> {
    nodes: Vec<N>,
    edges: Vec<Triple<N, E>>,
}

impl<N, E> GraphBuilder<N, E> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node. Duplicates are ignored at build time.
    pub fn add_node(&mut self, value: N) -> &mut Self {
        self.nodes.push(value);
        self
    }

    /// Add several nodes.
    pub fn add_nodes<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
    {
        self.nodes.extend(values);
        self
    }

    /// Add an edge between two nodes.
    pub fn link(&mut self, from: N, to: N, weight: E) -> &mut Self {
        self.edges.push(Triple::new(from, to, weight));
        self
    }
}

impl<N: Ord + Clone, E: Ord + Clone> GraphBuilder<N, E> {
    /// Build the final graph.
    ///
    /// Fails with [`GraphError::InsertEdgeMissingNode`](crate::GraphError::InsertEdgeMissingNode)
    /// if a linked edge names a node that was never added.
    pub fn build(self) -> GraphResult<Graph<N, E>> {
        let mut graph: Graph<N, E> = self.nodes.into_iter().collect();
        for Triple { from, to, weight } in self.edges {
            graph.insert_edge(&from, &to, weight)?;
        }
        Ok(graph)
    }
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Extend<N> for Graph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for value in iter {
            self.insert_node(value);
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(values: [N; K]) -> Self {
        values.into_iter().collect()
    }
}

impl<N: Ord + Clone, E: Ord + Clone> From<Vec<N>> for Graph<N, E> {
    fn from(values: Vec<N>) -> Self {
        values.into_iter().collect()
    }
}
