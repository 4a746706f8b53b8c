//! Error types for the dialogue data model.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::GraphId;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by scripts and the traversal service.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No script is registered under this graph id.
    #[error("graph not found: {0}")]
    GraphNotFound(GraphId),

    /// A script references a node that does not exist.
    #[error("node not found in graph {graph}: {node}")]
    NodeNotFound {
        /// The graph being traversed or validated.
        graph: GraphId,
        /// The missing node id.
        node: String,
    },

    /// Two nodes in one script share an id.
    #[error("duplicate node in graph {graph}: {node}")]
    DuplicateNode {
        /// The graph being validated.
        graph: GraphId,
        /// The repeated node id.
        node: String,
    },

    /// A node offers more responses than there are response slots.
    #[error("node {node} has {count} responses, at most {max} are allowed")]
    TooManyResponses {
        /// The offending node id.
        node: String,
        /// How many responses the node declares.
        count: usize,
        /// The response slot limit.
        max: usize,
    },

    /// The graph has no encounter in progress.
    #[error("no encounter in progress on graph {0}")]
    NotInEncounter(GraphId),

    /// The graph already has an encounter in progress.
    #[error("encounter already in progress on graph {0}")]
    AlreadyInEncounter(GraphId),

    /// A script file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A script could not be parsed.
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
}
