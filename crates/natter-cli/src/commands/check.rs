use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let script = super::load_script(file)?;

    let responses: usize = script.nodes.iter().map(|n| n.responses.len()).sum();
    let endings = script
        .nodes
        .iter()
        .filter(|n| {
            n.next.is_none()
                && (n.responses.is_empty() || n.responses.iter().any(|r| r.next.is_none()))
        })
        .count();

    println!("  {} {} ({})", "OK".green().bold(), script.name, script.id);
    println!(
        "  {} nodes, {responses} responses, {endings} ending(s), entry '{}'",
        script.nodes.len(),
        script.entry
    );
    if !script.skippable {
        println!("  encounters cannot be ended early");
    }
    Ok(())
}
