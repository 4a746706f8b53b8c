//! Proximity-gated dialogue sessions for Natter.
//!
//! A [`ProximityGate`] tracks whether the player is close enough to talk, a
//! [`DialogueSession`] drives one encounter at a time through a
//! [`GraphTraversal`](natter_core::GraphTraversal) service, and
//! [`PresentationSync`] mirrors each step onto a display and the player's
//! movement controls. [`DialogueController`] routes per-frame [`Input`]s
//! through all three.

/// Session configuration.
pub mod config;
/// Frame-driven input routing.
pub mod controller;
/// Error types for dialogue sessions.
pub mod error;
/// Lifecycle notifications.
pub mod event;
/// Player input commands.
pub mod input;
/// Display and movement synchronization.
pub mod presentation;
/// Interaction range tracking.
pub mod proximity;
/// The encounter state machine.
pub mod session;

pub use config::SessionConfig;
pub use controller::{DialogueController, Outcome};
pub use error::{SessionError, SessionResult};
pub use event::{DialogueEvent, Notifier};
pub use input::Input;
pub use presentation::{
    ChoiceSlot, DisplaySink, Frame, MovementActuator, MovementState, PresentationSync,
};
pub use proximity::{ProximityGate, TALK_TARGET_TAG};
pub use session::{DialogueSession, Step, pick_item, resolve_choice};
