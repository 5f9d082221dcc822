//! The graph container and the ways to build, walk and print it.

pub mod builder;
pub mod cursor;
pub mod directed_graph;
pub mod display;

pub use builder::GraphBuilder;
pub use cursor::{EdgeCursor, Edges};
pub use directed_graph::Graph;
