//! Configuration for a dialogue session.

use natter_core::Character;

/// Configuration for a dialogue session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible held-item picks.
    pub seed: u64,
    /// Speaker forced onto every line, if set.
    pub override_character: Option<Character>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            override_character: None,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Force a speaker for every encounter.
    pub fn with_override_character(mut self, character: Character) -> Self {
        self.override_character = Some(character);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert!(cfg.override_character.is_none());
    }

    #[test]
    fn later_override_replaces_earlier() {
        let cfg = SessionConfig::default()
            .with_override_character(Character::new("Narrator"))
            .with_override_character(Character::new("Ghost").with_portrait("ghost.png"));
        let speaker = cfg.override_character.unwrap();
        assert_eq!(speaker.display_name, "Ghost");
        assert!(speaker.portrait.is_some());
    }
}
