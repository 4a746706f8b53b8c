//! Speakers and their portraits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a portrait image, usually an asset path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portrait(String);

impl Portrait {
    /// Create a portrait handle from an asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The asset path this handle points at.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Portrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A character that can speak a dialogue line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Name shown above the text box.
    pub display_name: String,
    /// Portrait shown next to the text box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<Portrait>,
}

impl Character {
    /// Create a character without a portrait.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            portrait: None,
        }
    }

    /// Set the portrait.
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = Some(Portrait::new(portrait));
        self
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
