//! Frame-driven input routing.
//!
//! [`DialogueController`] wires a [`ProximityGate`], a [`DialogueSession`]
//! and a [`PresentationSync`] together and feeds them one frame of
//! [`Input`]s at a time.

use natter_core::{GraphId, GraphTraversal};

use crate::error::{SessionError, SessionResult};
use crate::input::Input;
use crate::presentation::{DisplaySink, MovementActuator, PresentationSync};
use crate::proximity::ProximityGate;
use crate::session::{DialogueSession, Step};

/// What a dialogue input led to.
#[derive(Debug)]
pub enum Outcome {
    /// An encounter started.
    Started,
    /// The encounter moved to a new line.
    Progressed,
    /// The encounter is over and the UI is idle.
    Ended,
    /// Nothing changed.
    Ignored(SessionError),
}

/// Routes per-frame input to the gate, the session and the presentation.
#[derive(Debug)]
pub struct DialogueController<T, D, M> {
    gate: ProximityGate,
    session: DialogueSession<T>,
    presentation: PresentationSync<D, M>,
    graph: GraphId,
}

impl<T, D, M> DialogueController<T, D, M>
where
    T: GraphTraversal,
    D: DisplaySink,
    M: MovementActuator,
{
    /// Create a controller that plays `graph` and reset the display to idle.
    pub fn new(
        session: DialogueSession<T>,
        mut presentation: PresentationSync<D, M>,
        graph: GraphId,
    ) -> Self {
        presentation.reset_to_idle();
        Self {
            gate: ProximityGate::new(),
            session,
            presentation,
            graph,
        }
    }

    /// The proximity gate.
    pub fn gate(&self) -> &ProximityGate {
        &self.gate
    }

    /// The dialogue session.
    pub fn session(&self) -> &DialogueSession<T> {
        &self.session
    }

    /// The presentation layer.
    pub fn presentation(&self) -> &PresentationSync<D, M> {
        &self.presentation
    }

    /// The graph an interaction starts.
    pub fn graph(&self) -> &GraphId {
        &self.graph
    }

    /// Process one frame of input.
    ///
    /// Trigger enter/exit events are applied first, in order. Then the first
    /// `Interact` or `Select` of the frame is handled and any later ones are
    /// dropped. A `Quit` is handled last. Returns the outcome of every
    /// dialogue input that was handled.
    pub fn tick(&mut self, inputs: &[Input]) -> Vec<Outcome> {
        for input in inputs {
            match input {
                Input::Enter(tag) => self.gate.on_enter(tag),
                Input::Exit(tag) => self.gate.on_exit(tag),
                _ => {}
            }
        }

        let mut outcomes = Vec::new();
        if let Some(input) = inputs.iter().find(|i| i.is_progression()) {
            let dropped = inputs.iter().filter(|i| i.is_progression()).count() - 1;
            if dropped > 0 {
                tracing::debug!(dropped, "extra dialogue inputs in one frame ignored");
            }
            outcomes.push(match input {
                Input::Select(slot) => self.advance(*slot),
                _ => self.interact(),
            });
        }
        if inputs.contains(&Input::Quit) {
            outcomes.push(self.quit());
        }
        outcomes
    }

    /// Process a single input as its own frame.
    pub fn handle(&mut self, input: Input) -> Vec<Outcome> {
        self.tick(std::slice::from_ref(&input))
    }

    fn interact(&mut self) -> Outcome {
        if self.session.is_active() {
            return self.advance(0);
        }
        if !self.gate.can_react() {
            return ignored(SessionError::OutOfReach);
        }
        match self.session.start_encounter(self.graph.clone()) {
            Ok(line) => {
                self.presentation.render(&line);
                Outcome::Started
            }
            Err(e) => ignored(e),
        }
    }

    fn advance(&mut self, choice: usize) -> Outcome {
        match self.session.advance(choice) {
            Ok(Step::Line(line)) => {
                self.presentation.render(&line);
                Outcome::Progressed
            }
            Ok(Step::Ended) => {
                self.presentation.reset_to_idle();
                Outcome::Ended
            }
            Err(e) => ignored(e),
        }
    }

    fn quit(&mut self) -> Outcome {
        match self.end() {
            Ok(()) => Outcome::Ended,
            Err(e) => ignored(e),
        }
    }

    fn end(&mut self) -> SessionResult<()> {
        self.session.end_encounter()?;
        self.presentation.reset_to_idle();
        Ok(())
    }
}

fn ignored(error: SessionError) -> Outcome {
    tracing::debug!(%error, "dialogue input ignored");
    Outcome::Ignored(error)
}
