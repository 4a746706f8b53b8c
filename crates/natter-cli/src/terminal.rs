//! Terminal rendering of dialogue frames.

use colored::Colorize;

use natter_session::{ChoiceSlot, DisplaySink, Frame};

/// Prints every frame it is handed to stdout.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    last: Option<Frame>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for TerminalDisplay {
    fn present(&mut self, frame: &Frame) {
        // Skip repaints of an unchanged idle screen
        if !frame.visible && self.last.as_ref().is_some_and(|last| !last.visible) {
            return;
        }
        println!("{}", render(frame));
        self.last = Some(frame.clone());
    }
}

fn render(frame: &Frame) -> String {
    if !frame.visible {
        return format!("  {}", frame.text.dimmed());
    }

    let mut out = format!("  {}", frame.speaker.bold());
    if let Some(portrait) = &frame.portrait {
        out.push_str(&format!(" {}", format!("[{portrait}]").dimmed()));
    }
    out.push_str(&format!("\n  {}", frame.text));

    if frame.interactive_slots() > 0 {
        out.push('\n');
        for (i, slot) in frame.slots.iter().enumerate() {
            let label = match slot {
                ChoiceSlot::Available(text) => text.cyan().to_string(),
                ChoiceSlot::Unavailable => slot.label().dimmed().to_string(),
            };
            out.push_str(&format!("\n    [{}] {label}", i + 1));
        }
    }
    out
}
