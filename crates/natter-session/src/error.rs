//! Error types for dialogue sessions.
//!
//! Every error means the operation changed nothing.

use natter_core::{CoreError, GraphId};
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Reasons a session operation was refused.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An encounter is already running.
    #[error("an encounter is already in progress on graph {0}")]
    AlreadyActive(GraphId),

    /// There is no encounter to act on.
    #[error("no encounter in progress")]
    NotActive,

    /// The player is not within talking range.
    #[error("nobody within reach to talk to")]
    OutOfReach,

    /// The traversal service could not resolve a line.
    #[error("dialogue service declined: {0}")]
    ServiceDeclined(#[from] CoreError),

    /// The traversal service refused to end the encounter.
    #[error("dialogue service refused to end graph {0}")]
    TerminationDeclined(GraphId),
}
