//! Graph identity and the traversal service trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::SessionContext;
use crate::error::CoreResult;
use crate::line::DialogueLine;

/// Names one authored conversation graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(String);

impl GraphId {
    /// Create a graph id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service that walks dialogue graphs on behalf of a session.
///
/// The session only ever holds a [`GraphId`]; node storage and the cursor
/// into each graph live behind this trait.
pub trait GraphTraversal {
    /// Begin an encounter at the graph's entry point and return its first line.
    fn start_encounter(
        &mut self,
        graph: &GraphId,
        context: &SessionContext,
    ) -> CoreResult<DialogueLine>;

    /// Resolve the line that follows the current one.
    ///
    /// `choice` is the index of the response the player picked, or 0 when the
    /// current line offers none. Returns `Ok(None)` once the graph is
    /// exhausted, after which the encounter is over on the service side too.
    fn advance(
        &mut self,
        graph: &GraphId,
        context: &SessionContext,
        choice: usize,
    ) -> CoreResult<Option<DialogueLine>>;

    /// Try to stop the encounter early. Returns whether it was stopped.
    fn end_encounter(&mut self, graph: &GraphId) -> bool;
}

impl<T: GraphTraversal + ?Sized> GraphTraversal for &mut T {
    fn start_encounter(
        &mut self,
        graph: &GraphId,
        context: &SessionContext,
    ) -> CoreResult<DialogueLine> {
        (**self).start_encounter(graph, context)
    }

    fn advance(
        &mut self,
        graph: &GraphId,
        context: &SessionContext,
        choice: usize,
    ) -> CoreResult<Option<DialogueLine>> {
        (**self).advance(graph, context, choice)
    }

    fn end_encounter(&mut self, graph: &GraphId) -> bool {
        (**self).end_encounter(graph)
    }
}
