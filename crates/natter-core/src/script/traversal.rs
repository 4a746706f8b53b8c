//! In-memory traversal service over loaded scripts.

use std::collections::HashMap;

use crate::context::SessionContext;
use crate::error::{CoreError, CoreResult};
use crate::graph::{GraphId, GraphTraversal};
use crate::line::DialogueLine;

use super::model::Script;

/// Walks [`Script`]s, keeping one cursor per graph with an encounter in progress.
#[derive(Debug, Default)]
pub struct ScriptedTraversal {
    scripts: HashMap<GraphId, Script>,
    cursors: HashMap<GraphId, String>,
}

impl ScriptedTraversal {
    /// Create a service with no scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a script, builder style.
    pub fn with_script(mut self, script: Script) -> Self {
        self.insert(script);
        self
    }

    /// Register a script, replacing any script with the same id.
    ///
    /// Replacing a script drops its cursor.
    pub fn insert(&mut self, script: Script) -> Option<Script> {
        self.cursors.remove(&script.id);
        self.scripts.insert(script.id.clone(), script)
    }

    /// Look up a registered script.
    pub fn script(&self, id: &GraphId) -> Option<&Script> {
        self.scripts.get(id)
    }

    /// Ids of all registered scripts, sorted.
    pub fn graph_ids(&self) -> Vec<&GraphId> {
        let mut ids: Vec<_> = self.scripts.keys().collect();
        ids.sort();
        ids
    }

    /// Whether an encounter is in progress on the graph.
    pub fn is_in_encounter(&self, id: &GraphId) -> bool {
        self.cursors.contains_key(id)
    }

    /// Id of the node the graph's cursor is on.
    pub fn current_node(&self, id: &GraphId) -> Option<&str> {
        self.cursors.get(id).map(String::as_str)
    }
}

impl GraphTraversal for ScriptedTraversal {
    fn start_encounter(
        &mut self,
        graph: &GraphId,
        context: &SessionContext,
    ) -> CoreResult<DialogueLine> {
        let script = self
            .scripts
            .get(graph)
            .ok_or_else(|| CoreError::GraphNotFound(graph.clone()))?;
        if self.cursors.contains_key(graph) {
            return Err(CoreError::AlreadyInEncounter(graph.clone()));
        }
        let node = script
            .node(&script.entry)
            .ok_or_else(|| CoreError::NodeNotFound {
                graph: graph.clone(),
                node: script.entry.clone(),
            })?;

        self.cursors.insert(graph.clone(), node.id.clone());
        tracing::debug!(graph = %graph, node = %node.id, "encounter entered graph");
        Ok(node.resolve(context))
    }

    fn advance(
        &mut self,
        graph: &GraphId,
        context: &SessionContext,
        choice: usize,
    ) -> CoreResult<Option<DialogueLine>> {
        let script = self
            .scripts
            .get(graph)
            .ok_or_else(|| CoreError::GraphNotFound(graph.clone()))?;
        let cursor = self
            .cursors
            .get(graph)
            .ok_or_else(|| CoreError::NotInEncounter(graph.clone()))?;
        let current = script.node(cursor).ok_or_else(|| CoreError::NodeNotFound {
            graph: graph.clone(),
            node: cursor.clone(),
        })?;

        let Some(next_id) = current.successor(choice) else {
            self.cursors.remove(graph);
            tracing::debug!(graph = %graph, "graph exhausted");
            return Ok(None);
        };
        let next = script.node(next_id).ok_or_else(|| CoreError::NodeNotFound {
            graph: graph.clone(),
            node: next_id.to_string(),
        })?;

        self.cursors.insert(graph.clone(), next.id.clone());
        Ok(Some(next.resolve(context)))
    }

    fn end_encounter(&mut self, graph: &GraphId) -> bool {
        match self.scripts.get(graph) {
            Some(script) if script.skippable => self.cursors.remove(graph).is_some(),
            Some(_) => {
                tracing::debug!(graph = %graph, "graph cannot be ended early");
                false
            }
            None => false,
        }
    }
}
