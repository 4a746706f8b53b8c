use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use natter_core::{Character, GraphId, ScriptedTraversal, demo_script};
use natter_session::{
    DialogueController, DialogueEvent, DialogueSession, Input, MovementState, Outcome,
    PresentationSync, SessionConfig, TALK_TARGET_TAG,
};

use crate::terminal::TerminalDisplay;

const QUIT_PROGRAM: &str = ":q";

pub fn run(
    scripts: &[PathBuf],
    graph: Option<&str>,
    seed: u64,
    override_speaker: Option<&str>,
) -> Result<(), String> {
    let mut service = ScriptedTraversal::new();
    let mut first = None;
    for path in scripts {
        let script = super::load_script(path)?;
        first.get_or_insert_with(|| script.id.clone());
        service.insert(script);
    }
    if scripts.is_empty() {
        let demo = demo_script();
        first = Some(demo.id.clone());
        service.insert(demo);
    }

    let graph = match graph {
        Some(id) => GraphId::new(id),
        None => first.ok_or("no script to play")?,
    };
    if service.script(&graph).is_none() {
        return Err(format!("graph not found: {graph}"));
    }

    let mut config = SessionConfig::default().with_seed(seed);
    if let Some(name) = override_speaker {
        config = config.with_override_character(Character::new(name));
    }

    let mut session = DialogueSession::new(service, config);
    session.subscribe(log_event);

    println!("  {} {graph}", "Playing".bold());
    println!(
        "  Commands: enter {TALK_TARGET_TAG}, exit {TALK_TARGET_TAG}, n, 1-3, q; {QUIT_PROGRAM} to exit."
    );
    println!("  Several commands on one line, separated by ',', happen in the same frame.\n");

    let presentation = PresentationSync::new(TerminalDisplay::new(), MovementState::default());
    let mut controller = DialogueController::new(session, presentation, graph);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == QUIT_PROGRAM {
            break;
        }

        let mut frame = Vec::new();
        for part in input.split(',') {
            match Input::parse(part) {
                Some(parsed) => frame.push(parsed),
                None => println!("{}", format!("unknown command: {}", part.trim()).yellow()),
            }
        }

        let in_range = controller.gate().can_react();
        let movement = *controller.presentation().movement();

        for outcome in controller.tick(&frame) {
            if let Outcome::Ignored(e) = outcome {
                println!("{}", e.to_string().yellow());
            }
        }

        if controller.gate().can_react() != in_range {
            let status = if controller.gate().can_react() {
                "Someone is close enough to talk to."
            } else {
                "Nobody is close enough to talk to."
            };
            println!("{}", status.italic());
        }
        let now = *controller.presentation().movement();
        if now != movement {
            let status = if now.is_free() {
                "(movement free)"
            } else {
                "(movement locked)"
            };
            println!("{}", status.dimmed());
        }
        println!();
    }

    Ok(())
}

fn log_event(event: &DialogueEvent) {
    match event {
        DialogueEvent::Started { line, .. } | DialogueEvent::Progressed { line, .. } => {
            tracing::info!("{} was said by {}", line.text, line.speaker);
        }
        DialogueEvent::Ended { graph } => tracing::info!("dialogue ended on graph {graph}"),
    }
}
