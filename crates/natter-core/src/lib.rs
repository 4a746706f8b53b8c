//! Dialogue data model for Natter.
//!
//! Holds the reference data a conversation is made of (characters, lines,
//! the held-item catalog), the per-encounter [`SessionContext`], and the
//! [`GraphTraversal`] seam through which a session asks for the next line.
//! [`ScriptedTraversal`] is an in-memory implementation of that seam driven
//! by JSON dialogue scripts.

/// Speakers and their portraits.
pub mod character;
/// Per-encounter context handed to the traversal service.
pub mod context;
/// Error types for the dialogue data model.
pub mod error;
/// Graph identity and the traversal service trait.
pub mod graph;
/// The fixed held-item catalog.
pub mod item;
/// Resolved dialogue lines.
pub mod line;
/// JSON dialogue scripts and the in-memory traversal service.
pub mod script;

pub use character::{Character, Portrait};
pub use context::SessionContext;
pub use error::{CoreError, CoreResult};
pub use graph::{GraphId, GraphTraversal};
pub use item::{CATALOG, Item, ItemCategory};
pub use line::{DialogueLine, MAX_RESPONSES};
pub use script::{Node, Response, Script, ScriptedTraversal, demo_script};
