//! gdwg: a generic directed weighted multigraph.
//!
//! A [`Graph<N, E>`] stores unique node values of type `N` and edges that are
//! `(from, to, weight)` triples. Several edges may join the same pair of
//! nodes as long as their weights differ. Edges are kept in ascending
//! `(from, to, weight)` order and are exposed as detached [`Triple`]s, either
//! through [`Graph::iter`] or through an [`EdgeCursor`].
//!
//! ```
//! use gdwg::Graph;
//!
//! let mut g: Graph<&str, i32> = Graph::from(["a", "b", "c"]);
//! g.insert_edge(&"a", &"b", 3).unwrap();
//! g.insert_edge(&"a", &"c", 1).unwrap();
//! g.merge_replace_node(&"c", &"b").unwrap();
//!
//! assert_eq!(g.weights(&"a", &"b").unwrap(), vec![1, 3]);
//! assert_eq!(g.to_string(), "a (\n  b | 1\n  b | 3\n)\nb (\n)\n");
//! ```

pub mod graph;
pub mod store;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{EdgeCursor, Edges, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Triple};
