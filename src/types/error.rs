//! Error types for the gdwg library.

use thiserror::Error;

/// All errors that can occur in the gdwg library.
///
/// Every variant is a precondition violation: the operation named in the
/// message was called with a node that is not in the graph. The check runs
/// before any mutation, so a graph that returned one of these is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// Source or destination missing when inserting an edge.
    #[error("Cannot call Graph::insert_edge when either src or dst node does not exist")]
    InsertEdgeMissingNode,

    /// The node being replaced does not exist.
    #[error("Cannot call Graph::replace_node on a node that doesn't exist")]
    ReplaceMissingNode,

    /// Old or new node missing when merging.
    #[error(
        "Cannot call Graph::merge_replace_node on old or new data if they don't exist in the graph"
    )]
    MergeReplaceMissingNode,

    /// Source or destination missing when erasing an edge by value.
    #[error("Cannot call Graph::erase_edge on src or dst if they don't exist in the graph")]
    EraseEdgeMissingNode,

    /// Source or destination missing when testing connectivity.
    #[error("Cannot call Graph::is_connected if src or dst node don't exist in the graph")]
    IsConnectedMissingNode,

    /// Source or destination missing when listing weights.
    #[error("Cannot call Graph::weights if src or dst node don't exist in the graph")]
    WeightsMissingNode,

    /// Source missing when listing connections.
    #[error("Cannot call Graph::connections if src doesn't exist in the graph")]
    ConnectionsMissingNode,
}

impl GraphError {
    /// Name of the graph operation whose precondition failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InsertEdgeMissingNode => "insert_edge",
            Self::ReplaceMissingNode => "replace_node",
            Self::MergeReplaceMissingNode => "merge_replace_node",
            Self::EraseEdgeMissingNode => "erase_edge",
            Self::IsConnectedMissingNode => "is_connected",
            Self::WeightsMissingNode => "weights",
            Self::ConnectionsMissingNode => "connections",
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
