//! The encounter state machine.
//!
//! A [`DialogueSession`] is either idle or running exactly one encounter.
//! It never touches the display or the player's controls: each operation
//! returns what happened and the caller reacts to it.

use natter_core::{
    CATALOG, Character, DialogueLine, GraphId, GraphTraversal, Item, SessionContext,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::event::{DialogueEvent, Notifier};

/// Result of advancing an encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The encounter continues with this line.
    Line(DialogueLine),
    /// The graph is exhausted and the session is idle again.
    Ended,
}

/// Pick the held item for a new encounter, uniformly from [`CATALOG`].
pub fn pick_item(rng: &mut impl Rng) -> &'static Item {
    &CATALOG[rng.random_range(0..CATALOG.len())]
}

/// Map a selected response index onto one the last line actually offered.
///
/// Indices at or beyond `shown` fall back to 0.
pub fn resolve_choice(index: usize, shown: usize) -> usize {
    if index < shown { index } else { 0 }
}

#[derive(Debug)]
struct Encounter {
    graph: GraphId,
    context: SessionContext,
    shown_responses: usize,
}

/// Drives one encounter at a time through a traversal service.
#[derive(Debug)]
pub struct DialogueSession<T> {
    service: T,
    rng: StdRng,
    override_character: Option<Character>,
    active: Option<Encounter>,
    notifier: Notifier,
}

impl<T: GraphTraversal> DialogueSession<T> {
    /// Create an idle session backed by `service`.
    pub fn new(service: T, config: SessionConfig) -> Self {
        Self {
            service,
            rng: StdRng::seed_from_u64(config.seed),
            override_character: config.override_character,
            active: None,
            notifier: Notifier::new(),
        }
    }

    /// Whether an encounter is running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The graph being played.
    pub fn graph(&self) -> Option<&GraphId> {
        self.active.as_ref().map(|e| &e.graph)
    }

    /// Context of the running encounter.
    pub fn context(&self) -> Option<&SessionContext> {
        self.active.as_ref().map(|e| &e.context)
    }

    /// Number of responses offered by the last line handed out.
    pub fn shown_responses(&self) -> usize {
        self.active.as_ref().map_or(0, |e| e.shown_responses)
    }

    /// The traversal service.
    pub fn service(&self) -> &T {
        &self.service
    }

    /// Register a lifecycle callback.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&DialogueEvent) + 'static) {
        self.notifier.subscribe(subscriber);
    }

    /// Start an encounter on `graph` and return its first line.
    ///
    /// Rejected while another encounter is running. Whether the player is in
    /// range is the caller's concern.
    pub fn start_encounter(&mut self, graph: GraphId) -> SessionResult<DialogueLine> {
        if let Some(active) = &self.active {
            return Err(SessionError::AlreadyActive(active.graph.clone()));
        }

        // The pick only counts once the service accepts the encounter
        let mut rng = self.rng.clone();
        let mut context = SessionContext::new(pick_item(&mut rng));
        if let Some(character) = &self.override_character {
            context = context.with_override(character.clone());
        }

        let line = self.service.start_encounter(&graph, &context)?;
        self.rng = rng;
        tracing::info!(
            graph = %graph,
            item = context.held_item.id,
            "encounter started"
        );

        self.notifier.publish(&DialogueEvent::Started {
            graph: graph.clone(),
            line: line.clone(),
        });
        self.active = Some(Encounter {
            graph,
            context,
            shown_responses: line.response_count(),
        });
        Ok(line)
    }

    /// Move the encounter on, picking response `choice` of the current line.
    ///
    /// A `choice` the current line does not offer is treated as 0. When the
    /// graph is exhausted the session goes idle and [`Step::Ended`] is
    /// returned.
    pub fn advance(&mut self, choice: usize) -> SessionResult<Step> {
        let active = self.active.as_mut().ok_or(SessionError::NotActive)?;
        let choice = resolve_choice(choice, active.shown_responses);

        match self
            .service
            .advance(&active.graph, &active.context, choice)?
        {
            Some(line) => {
                active.shown_responses = line.response_count();
                self.notifier.publish(&DialogueEvent::Progressed {
                    graph: active.graph.clone(),
                    line: line.clone(),
                });
                Ok(Step::Line(line))
            }
            None => {
                self.finish();
                Ok(Step::Ended)
            }
        }
    }

    /// End the running encounter early.
    ///
    /// If the service refuses, the encounter keeps running.
    pub fn end_encounter(&mut self) -> SessionResult<()> {
        let active = self.active.as_ref().ok_or(SessionError::NotActive)?;
        if !self.service.end_encounter(&active.graph) {
            return Err(SessionError::TerminationDeclined(active.graph.clone()));
        }
        self.finish();
        Ok(())
    }

    fn finish(&mut self) {
        if let Some(encounter) = self.active.take() {
            tracing::info!(graph = %encounter.graph, "encounter ended");
            self.notifier.publish(&DialogueEvent::Ended {
                graph: encounter.graph,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use natter_core::{CoreError, Node, Response, Script, ScriptedTraversal};

    use super::*;

    fn script() -> Script {
        let smith = Character::new("Smith").with_portrait("smith.png");
        Script::new("forge", "At the forge", "hello")
            .with_node(
                Node::new("hello", smith.clone(), "Need something for that {item}?")
                    .with_response(Response::new("A sheath.").with_next("sheath"))
                    .with_response(Response::new("Just looking.").with_next("look")),
            )
            .with_node(Node::new("sheath", smith.clone(), "Come back tomorrow."))
            .with_node(Node::new("look", smith, "Don't touch anything."))
    }

    fn session() -> DialogueSession<ScriptedTraversal> {
        DialogueSession::new(
            ScriptedTraversal::new().with_script(script()),
            SessionConfig::default(),
        )
    }

    fn record(
        session: &mut DialogueSession<ScriptedTraversal>,
    ) -> Rc<RefCell<Vec<DialogueEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn resolve_choice_fallback() {
        assert_eq!(resolve_choice(1, 2), 1);
        assert_eq!(resolve_choice(2, 2), 0);
        assert_eq!(resolve_choice(5, 3), 0);
        assert_eq!(resolve_choice(0, 0), 0);
        assert_eq!(resolve_choice(2, 0), 0);
    }

    #[test]
    fn seeded_item_picks_repeat() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let item = pick_item(&mut a);
            assert_eq!(item, pick_item(&mut b));
            assert!(CATALOG.contains(item));
        }
    }

    #[test]
    fn start_goes_active() {
        let mut s = session();
        assert!(!s.is_active());

        let line = s.start_encounter(GraphId::new("forge")).unwrap();
        assert!(s.is_active());
        assert_eq!(s.graph(), Some(&GraphId::new("forge")));
        assert_eq!(s.shown_responses(), 2);
        assert_eq!(line.speaker.display_name, "Smith");

        let item = s.context().unwrap().held_item;
        assert_eq!(line.text, format!("Need something for that {}?", item.name));
    }

    #[test]
    fn start_while_active_rejected() {
        let mut s = session();
        s.start_encounter(GraphId::new("forge")).unwrap();
        let held = s.context().unwrap().held_item;

        assert!(matches!(
            s.start_encounter(GraphId::new("forge")),
            Err(SessionError::AlreadyActive(_))
        ));
        assert_eq!(s.context().unwrap().held_item, held);
        assert_eq!(s.service().current_node(&GraphId::new("forge")), Some("hello"));
    }

    #[test]
    fn start_unknown_graph_stays_idle() {
        let mut s = session();
        let events = record(&mut s);
        assert!(matches!(
            s.start_encounter(GraphId::new("nowhere")),
            Err(SessionError::ServiceDeclined(CoreError::GraphNotFound(_)))
        ));
        assert!(!s.is_active());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn failed_start_keeps_item_sequence() {
        for seed in 0..30 {
            let config = SessionConfig::default().with_seed(seed);
            let mut direct =
                DialogueSession::new(ScriptedTraversal::new().with_script(script()), config.clone());
            let mut retried =
                DialogueSession::new(ScriptedTraversal::new().with_script(script()), config);

            assert!(retried.start_encounter(GraphId::new("nowhere")).is_err());
            direct.start_encounter(GraphId::new("forge")).unwrap();
            retried.start_encounter(GraphId::new("forge")).unwrap();

            assert_eq!(
                direct.context().unwrap().held_item,
                retried.context().unwrap().held_item,
                "seed {seed}"
            );
        }
    }

    /// Scripted service whose `advance` fails while `failing` is set.
    struct Flaky {
        inner: ScriptedTraversal,
        failing: Rc<Cell<bool>>,
    }

    impl GraphTraversal for Flaky {
        fn start_encounter(
            &mut self,
            graph: &GraphId,
            context: &SessionContext,
        ) -> natter_core::CoreResult<DialogueLine> {
            self.inner.start_encounter(graph, context)
        }

        fn advance(
            &mut self,
            graph: &GraphId,
            context: &SessionContext,
            choice: usize,
        ) -> natter_core::CoreResult<Option<DialogueLine>> {
            if self.failing.get() {
                return Err(CoreError::NotInEncounter(graph.clone()));
            }
            self.inner.advance(graph, context, choice)
        }

        fn end_encounter(&mut self, graph: &GraphId) -> bool {
            self.inner.end_encounter(graph)
        }
    }

    #[test]
    fn advance_service_error_keeps_current_line() {
        let failing = Rc::new(Cell::new(false));
        let service = Flaky {
            inner: ScriptedTraversal::new().with_script(script()),
            failing: Rc::clone(&failing),
        };
        let mut s = DialogueSession::new(service, SessionConfig::default());
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        s.subscribe(move |event: &DialogueEvent| sink.borrow_mut().push(event.clone()));

        s.start_encounter(GraphId::new("forge")).unwrap();
        failing.set(true);

        assert!(matches!(
            s.advance(1),
            Err(SessionError::ServiceDeclined(_))
        ));
        assert!(s.is_active());
        assert_eq!(s.shown_responses(), 2);
        assert_eq!(events.borrow().len(), 1);

        failing.set(false);
        let Step::Line(line) = s.advance(1).unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(line.text, "Don't touch anything.");
        assert!(matches!(
            events.borrow().last(),
            Some(DialogueEvent::Progressed { .. })
        ));
    }

    #[test]
    fn session_over_borrowed_service() {
        let mut service = ScriptedTraversal::new().with_script(script());
        {
            let mut s = DialogueSession::new(&mut service, SessionConfig::default());
            s.start_encounter(GraphId::new("forge")).unwrap();
            s.advance(0).unwrap();
        }
        assert_eq!(service.current_node(&GraphId::new("forge")), Some("sheath"));
        assert!(service.end_encounter(&GraphId::new("forge")));
    }

    #[test]
    fn advance_when_idle_is_rejected() {
        let mut s = session();
        assert!(matches!(s.advance(0), Err(SessionError::NotActive)));
        assert!(matches!(s.advance(2), Err(SessionError::NotActive)));
        assert!(!s.is_active());
    }

    #[test]
    fn branch_then_exhaust() {
        let mut s = session();
        s.start_encounter(GraphId::new("forge")).unwrap();

        let Step::Line(line) = s.advance(1).unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(line.text, "Don't touch anything.");
        assert_eq!(s.shown_responses(), 0);
        assert!(s.is_active());

        assert_eq!(s.advance(0).unwrap(), Step::Ended);
        assert!(!s.is_active());
        assert!(s.graph().is_none());
        assert!(s.context().is_none());
    }

    #[test]
    fn out_of_range_choice_uses_first_response() {
        let mut s = session();
        s.start_encounter(GraphId::new("forge")).unwrap();

        let Step::Line(line) = s.advance(2).unwrap() else {
            panic!("expected a line");
        };
        assert_eq!(line.text, "Come back tomorrow.");
    }

    #[test]
    fn events_fire_once_per_transition() {
        let mut s = session();
        let events = record(&mut s);

        s.start_encounter(GraphId::new("forge")).unwrap();
        s.advance(0).unwrap();
        s.advance(0).unwrap();
        let _ = s.advance(0);

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], DialogueEvent::Started { .. }));
        assert!(matches!(events[1], DialogueEvent::Progressed { .. }));
        assert!(matches!(events[2], DialogueEvent::Ended { .. }));
    }

    #[test]
    fn end_encounter_goes_idle() {
        let mut s = session();
        let events = record(&mut s);
        s.start_encounter(GraphId::new("forge")).unwrap();

        s.end_encounter().unwrap();
        assert!(!s.is_active());
        assert!(!s.service().is_in_encounter(&GraphId::new("forge")));
        assert_eq!(events.borrow().len(), 2);

        assert!(matches!(s.end_encounter(), Err(SessionError::NotActive)));
    }

    #[test]
    fn declined_end_keeps_encounter() {
        let mut s = DialogueSession::new(
            ScriptedTraversal::new().with_script(script().unskippable()),
            SessionConfig::default(),
        );
        s.start_encounter(GraphId::new("forge")).unwrap();

        assert!(matches!(
            s.end_encounter(),
            Err(SessionError::TerminationDeclined(_))
        ));
        assert!(s.is_active());
        assert_eq!(s.shown_responses(), 2);
        assert!(matches!(s.advance(0).unwrap(), Step::Line(_)));
    }

    #[test]
    fn override_character_speaks() {
        let mut s = DialogueSession::new(
            ScriptedTraversal::new().with_script(script()),
            SessionConfig::default().with_override_character(Character::new("Ghost")),
        );
        let line = s.start_encounter(GraphId::new("forge")).unwrap();
        assert_eq!(line.speaker.display_name, "Ghost");
        assert_eq!(
            s.context().unwrap().override_character,
            Some(Character::new("Ghost"))
        );
    }

    #[test]
    fn config_drives_context() {
        let config = SessionConfig::default()
            .with_seed(11)
            .with_override_character(Character::new("Ghost").with_portrait("ghost.png"));
        let mut a = DialogueSession::new(
            ScriptedTraversal::new().with_script(script()),
            config.clone(),
        );
        let mut b = DialogueSession::new(ScriptedTraversal::new().with_script(script()), config);

        let line = a.start_encounter(GraphId::new("forge")).unwrap();
        b.start_encounter(GraphId::new("forge")).unwrap();

        let ctx = a.context().unwrap();
        assert_eq!(ctx.held_item, b.context().unwrap().held_item);
        assert_eq!(
            ctx.override_character.as_ref().map(|c| c.display_name.as_str()),
            Some("Ghost")
        );
        assert_eq!(line.speaker.portrait, Some(natter_core::Portrait::new("ghost.png")));
    }

    #[test]
    fn session_can_restart_after_end() {
        let mut s = session();
        s.start_encounter(GraphId::new("forge")).unwrap();
        s.end_encounter().unwrap();
        assert!(s.start_encounter(GraphId::new("forge")).is_ok());
    }
}
