//! Script, node and response structures.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::context::SessionContext;
use crate::error::{CoreError, CoreResult};
use crate::graph::GraphId;
use crate::line::{DialogueLine, MAX_RESPONSES};

/// Placeholder in node text replaced by the held item's name.
const ITEM_PLACEHOLDER: &str = "{item}";

/// An authored conversation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Graph identity.
    pub id: GraphId,
    /// Human-readable title.
    pub name: String,
    /// Id of the node an encounter starts at.
    pub entry: String,
    /// Whether an encounter on this graph may be ended early.
    #[serde(default = "default_skippable")]
    pub skippable: bool,
    /// All nodes of the graph.
    pub nodes: Vec<Node>,
}

fn default_skippable() -> bool {
    true
}

impl Script {
    /// Create an empty script starting at `entry`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            id: GraphId::new(id),
            name: name.into(),
            entry: entry.into(),
            skippable: true,
            nodes: Vec::new(),
        }
    }

    /// Add a node.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Forbid ending an encounter on this graph early.
    pub fn unskippable(mut self) -> Self {
        self.skippable = false;
        self
    }

    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Parse and validate a script from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    /// Read, parse and validate a script file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the graph is well formed.
    ///
    /// Node ids must be unique, the entry node and every `next` target must
    /// exist, and no node may offer more than [`MAX_RESPONSES`] responses.
    pub fn validate(&self) -> CoreResult<()> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(CoreError::DuplicateNode {
                    graph: self.id.clone(),
                    node: node.id.clone(),
                });
            }
        }

        let missing = |target: &str| CoreError::NodeNotFound {
            graph: self.id.clone(),
            node: target.to_string(),
        };

        if !ids.contains(self.entry.as_str()) {
            return Err(missing(&self.entry));
        }

        for node in &self.nodes {
            if node.responses.len() > MAX_RESPONSES {
                return Err(CoreError::TooManyResponses {
                    node: node.id.clone(),
                    count: node.responses.len(),
                    max: MAX_RESPONSES,
                });
            }

            let targets = node
                .next
                .iter()
                .chain(node.responses.iter().filter_map(|r| r.next.as_ref()));
            for target in targets {
                if !ids.contains(target.as_str()) {
                    return Err(missing(target.as_str()));
                }
            }
        }

        Ok(())
    }
}

/// One authored line of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node id, unique within its script.
    pub id: String,
    /// The authored speaker.
    pub speaker: Character,
    /// Body text. `{item}` is replaced by the held item's name.
    pub text: String,
    /// Player responses. When present, `next` is ignored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<Response>,
    /// Node that follows when there are no responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl Node {
    /// Create a node with no responses and no successor.
    pub fn new(id: impl Into<String>, speaker: Character, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            speaker,
            text: text.into(),
            responses: Vec::new(),
            next: None,
        }
    }

    /// Add a response.
    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    /// Set the successor used when the node has no responses.
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// The node that follows when the player picks `choice`.
    ///
    /// An out-of-range choice falls back to the first response.
    pub fn successor(&self, choice: usize) -> Option<&str> {
        if self.responses.is_empty() {
            return self.next.as_deref();
        }
        self.responses
            .get(choice)
            .or_else(|| self.responses.first())
            .and_then(|r| r.next.as_deref())
    }

    /// Turn the node into a line for the given encounter.
    pub fn resolve(&self, context: &SessionContext) -> DialogueLine {
        DialogueLine {
            speaker: context.speaker_for(&self.speaker).clone(),
            text: self.text.replace(ITEM_PLACEHOLDER, context.held_item.name),
            responses: self.responses.iter().map(|r| r.text.clone()).collect(),
        }
    }
}

/// A player response on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Text shown in the response slot.
    pub text: String,
    /// Node this response leads to. `None` ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl Response {
    /// Create a response that ends the conversation.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: None,
        }
    }

    /// Set the node this response leads to.
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }
}
