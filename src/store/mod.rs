//! Node and edge storage behind a [`Graph`](crate::Graph).

pub mod edge_store;
pub mod node_store;
pub mod ordering;

pub use edge_store::{EdgeRecord, EdgeStore};
pub use node_store::{NodeHandle, NodeStore};
pub use ordering::{compare_edges, EdgeKey, Probe};
