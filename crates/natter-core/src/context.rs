//! Per-encounter context handed to the traversal service.

use crate::character::Character;
use crate::item::Item;

/// Context built when an encounter starts and dropped when it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// The item held during this encounter.
    pub held_item: &'static Item,
    /// Speaker forced onto every line of the encounter.
    pub override_character: Option<Character>,
}

impl SessionContext {
    /// Create a context holding the given item.
    pub fn new(held_item: &'static Item) -> Self {
        Self {
            held_item,
            override_character: None,
        }
    }

    /// Force a speaker for the encounter.
    pub fn with_override(mut self, character: Character) -> Self {
        self.override_character = Some(character);
        self
    }

    /// The speaker to show for a line authored with `authored`.
    pub fn speaker_for<'a>(&'a self, authored: &'a Character) -> &'a Character {
        self.override_character.as_ref().unwrap_or(authored)
    }
}
