//! Lifecycle notifications.

use std::fmt;

use natter_core::{DialogueLine, GraphId};

/// Something that happened to an encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueEvent {
    /// An encounter started and showed its first line.
    Started {
        /// The graph being played.
        graph: GraphId,
        /// The first line.
        line: DialogueLine,
    },
    /// An encounter moved on to another line.
    Progressed {
        /// The graph being played.
        graph: GraphId,
        /// The new line.
        line: DialogueLine,
    },
    /// An encounter finished, naturally or by being ended early.
    Ended {
        /// The graph that was played.
        graph: GraphId,
    },
}

impl DialogueEvent {
    /// The graph this event concerns.
    pub fn graph(&self) -> &GraphId {
        match self {
            Self::Started { graph, .. } | Self::Progressed { graph, .. } | Self::Ended { graph } => {
                graph
            }
        }
    }

    /// The line carried by the event, if any.
    pub fn line(&self) -> Option<&DialogueLine> {
        match self {
            Self::Started { line, .. } | Self::Progressed { line, .. } => Some(line),
            Self::Ended { .. } => None,
        }
    }
}

type Subscriber = Box<dyn FnMut(&DialogueEvent)>;

/// Fans dialogue events out to subscribers.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Notifier {
    /// Create a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&DialogueEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver an event to every subscriber, in subscription order.
    pub fn publish(&mut self, event: &DialogueEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
