//! Built-in demo conversation.

use crate::character::Character;

use super::model::{Node, Response, Script};

/// A short tavern conversation: a greeting with two responses, each leading
/// to a closing line without responses.
pub fn demo_script() -> Script {
    let innkeeper = Character::new("Innkeeper").with_portrait("portraits/innkeeper.png");

    Script::new("tavern", "A word with the innkeeper", "greeting")
        .with_node(
            Node::new(
                "greeting",
                innkeeper.clone(),
                "Welcome, traveler! Is that a {item} you're carrying?",
            )
            .with_response(Response::new("It is. Care to have it?").with_next("thanks"))
            .with_response(Response::new("Mind your own business.").with_next("shrug")),
        )
        .with_node(Node::new(
            "thanks",
            innkeeper.clone(),
            "How generous! Your first drink is on the house.",
        ))
        .with_node(Node::new(
            "shrug",
            innkeeper,
            "Suit yourself. The fire's warm if you change your mind.",
        ))
}
