//! Resolved dialogue lines.

use crate::character::Character;

/// Number of response slots a line can fill.
pub const MAX_RESPONSES: usize = 3;

/// One step of a conversation, ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLine {
    /// Who says the line.
    pub speaker: Character,
    /// The body text.
    pub text: String,
    /// Player responses, in slot order.
    pub responses: Vec<String>,
}

impl DialogueLine {
    /// Create a line with no player responses.
    pub fn new(speaker: Character, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            responses: Vec::new(),
        }
    }

    /// Add a player response.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.responses.push(response.into());
        self
    }

    /// Whether the player has to pick a response.
    pub fn has_responses(&self) -> bool {
        !self.responses.is_empty()
    }

    /// Number of responses offered.
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}
