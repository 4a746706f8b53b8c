//! Display and movement synchronization.
//!
//! [`PresentationSync`] owns no dialogue state. It turns a line into a
//! [`Frame`] for a [`DisplaySink`] and locks or releases the player's
//! controls through a [`MovementActuator`].

use natter_core::{DialogueLine, MAX_RESPONSES, Portrait};

/// Body text shown while no encounter is running.
pub const IDLE_TEXT: &str = "Initialized text box, please start a dialogue";
/// Speaker name shown while no encounter is running.
pub const IDLE_SPEAKER: &str = "The mystical asset creator";
/// Label of a response slot with nothing in it.
pub const NO_OPTION: &str = "No option available";

/// One response slot on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSlot {
    /// A response the player can pick.
    Available(String),
    /// An empty, non-interactive slot.
    Unavailable,
}

impl ChoiceSlot {
    /// Text shown in the slot.
    pub fn label(&self) -> &str {
        match self {
            Self::Available(text) => text.as_str(),
            Self::Unavailable => NO_OPTION,
        }
    }

    /// Whether the slot can be picked.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Everything the dialogue UI shows at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Whether the dialogue UI is shown at all.
    pub visible: bool,
    /// Speaker name.
    pub speaker: String,
    /// Speaker portrait.
    pub portrait: Option<Portrait>,
    /// Body text.
    pub text: String,
    /// Response slots, in order.
    pub slots: [ChoiceSlot; MAX_RESPONSES],
}

impl Frame {
    /// The hidden placeholder frame shown between encounters.
    pub fn idle() -> Self {
        Self {
            visible: false,
            speaker: IDLE_SPEAKER.to_string(),
            portrait: None,
            text: IDLE_TEXT.to_string(),
            slots: std::array::from_fn(|_| ChoiceSlot::Unavailable),
        }
    }

    /// The frame showing `line`. Responses past the last slot are dropped.
    pub fn for_line(line: &DialogueLine) -> Self {
        Self {
            visible: true,
            speaker: line.speaker.display_name.clone(),
            portrait: line.speaker.portrait.clone(),
            text: line.text.clone(),
            slots: std::array::from_fn(|i| match line.responses.get(i) {
                Some(text) => ChoiceSlot::Available(text.clone()),
                None => ChoiceSlot::Unavailable,
            }),
        }
    }

    /// Number of slots the player can pick from.
    pub fn interactive_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_interactive()).count()
    }
}

/// Where frames are drawn.
pub trait DisplaySink {
    /// Replace whatever is on screen with `frame`.
    fn present(&mut self, frame: &Frame);
}

/// The player's movement and look controls.
pub trait MovementActuator {
    /// Allow or block character movement.
    fn set_enabled(&mut self, enabled: bool);
    /// Allow or block camera look input.
    fn set_look_input_enabled(&mut self, enabled: bool);
}

/// Plain record of the player's control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    /// Whether the character can move.
    pub enabled: bool,
    /// Whether the camera follows look input.
    pub look_input_enabled: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            enabled: true,
            look_input_enabled: true,
        }
    }
}

impl MovementState {
    /// Whether both movement and look input are allowed.
    pub fn is_free(&self) -> bool {
        self.enabled && self.look_input_enabled
    }
}

impl MovementActuator for MovementState {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_look_input_enabled(&mut self, enabled: bool) {
        self.look_input_enabled = enabled;
    }
}

/// Mirrors session steps onto a display and the player's controls.
#[derive(Debug)]
pub struct PresentationSync<D, M> {
    display: D,
    movement: M,
}

impl<D: DisplaySink, M: MovementActuator> PresentationSync<D, M> {
    /// Wrap a display and a movement actuator.
    pub fn new(display: D, movement: M) -> Self {
        Self { display, movement }
    }

    /// Show a line.
    ///
    /// A line with responses waits for a pick, so movement is locked. A line
    /// without responses leaves the player free to walk away.
    pub fn render(&mut self, line: &DialogueLine) {
        self.display.present(&Frame::for_line(line));
        self.set_controls(!line.has_responses());
    }

    /// Hide the dialogue UI and give the player back their controls.
    pub fn reset_to_idle(&mut self) {
        self.display.present(&Frame::idle());
        self.set_controls(true);
    }

    /// The display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The movement actuator.
    pub fn movement(&self) -> &M {
        &self.movement
    }

    fn set_controls(&mut self, enabled: bool) {
        self.movement.set_enabled(enabled);
        self.movement.set_look_input_enabled(enabled);
    }
}
