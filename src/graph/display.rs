//! Human-readable dump of a graph, grouped by source node.
//!
//! ```text
//! 1 (
//!   2 | 5
//! )
//! 2 (
//! )
//! ```
//!
//! Write-only; there is no parser for this format.

use std::fmt;

use crate::store::EdgeKey;

use super::Graph;

impl<N, E> fmt::Display for Graph<N, E>
where
    N: PartialEq + fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // edges are sorted by source, so one pass over both stores suffices
        let mut edges = self.edge_store().iter().peekable();
        for node in self.node_store().handles() {
            writeln!(f, "{} (", node)?;
            while let Some(record) = edges.next_if(|record| record.source() == &**node) {
                writeln!(f, "  {} | {}", record.destination(), record.weight())?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
