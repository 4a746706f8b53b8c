//! Interaction range tracking.

/// Tag carried by objects the player can start a conversation with.
pub const TALK_TARGET_TAG: &str = "TalkTarget";

/// Tracks whether the player is inside a talk target's trigger volume.
#[derive(Debug, Clone)]
pub struct ProximityGate {
    tag: String,
    can_react: bool,
}

impl Default for ProximityGate {
    fn default() -> Self {
        Self::with_tag(TALK_TARGET_TAG)
    }
}

impl ProximityGate {
    /// Create a closed gate reacting to [`TALK_TARGET_TAG`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a closed gate reacting to a custom tag.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            can_react: false,
        }
    }

    /// The tag this gate reacts to.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether a conversation may start.
    pub fn can_react(&self) -> bool {
        self.can_react
    }

    /// An object with `tag` entered the trigger volume.
    pub fn on_enter(&mut self, tag: &str) {
        if tag == self.tag {
            self.can_react = true;
        }
    }

    /// An object with `tag` left the trigger volume.
    pub fn on_exit(&mut self, tag: &str) {
        if tag == self.tag {
            self.can_react = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_closed() {
        assert!(!ProximityGate::new().can_react());
    }

    #[test]
    fn enter_and_exit() {
        let mut gate = ProximityGate::new();
        gate.on_enter("TalkTarget");
        assert!(gate.can_react());
        gate.on_enter("TalkTarget");
        assert!(gate.can_react());
        gate.on_exit("TalkTarget");
        assert!(!gate.can_react());
        gate.on_exit("TalkTarget");
        assert!(!gate.can_react());
    }

    #[test]
    fn other_tags_ignored() {
        let mut gate = ProximityGate::new();
        gate.on_enter("Crate");
        assert!(!gate.can_react());

        gate.on_enter("TalkTarget");
        gate.on_exit("talktarget");
        assert!(gate.can_react());
    }

    #[test]
    fn custom_tag() {
        let mut gate = ProximityGate::with_tag("Merchant");
        gate.on_enter(TALK_TARGET_TAG);
        assert!(!gate.can_react());
        gate.on_enter("Merchant");
        assert!(gate.can_react());
    }

    proptest! {
        #[test]
        fn state_follows_last_matching_event(
            events in prop::collection::vec(
                (any::<bool>(), prop::sample::select(vec![TALK_TARGET_TAG, "Wall", "Npc"])),
                0..40,
            )
        ) {
            let mut gate = ProximityGate::new();
            let mut expected = false;
            for (enter, tag) in &events {
                if *enter {
                    gate.on_enter(tag);
                } else {
                    gate.on_exit(tag);
                }
                if *tag == TALK_TARGET_TAG {
                    expected = *enter;
                }
            }
            prop_assert_eq!(gate.can_react(), expected);
        }
    }
}
