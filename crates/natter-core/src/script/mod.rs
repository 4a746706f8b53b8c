//! JSON dialogue scripts and the in-memory traversal service.
//!
//! A [`Script`] is an authored graph of [`Node`]s. [`ScriptedTraversal`]
//! keeps a cursor per graph and resolves nodes into
//! [`DialogueLine`](crate::DialogueLine)s for a session.

mod demo;
mod model;
mod traversal;

pub use demo::demo_script;
pub use model::{Node, Response, Script};
pub use traversal::ScriptedTraversal;
