//! Value and error types shared across the crate.

pub mod error;
pub mod triple;

pub use error::{GraphError, GraphResult};
pub use triple::Triple;
