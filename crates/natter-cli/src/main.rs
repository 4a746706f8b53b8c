//! CLI frontend for Natter dialogue encounters.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "natter",
    about = "Natter: proximity-gated branching dialogue in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log session activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play dialogue encounters interactively
    Play {
        /// Dialogue script (JSON) to load; may be given more than once
        #[arg(short, long)]
        script: Vec<PathBuf>,

        /// Graph to play (default: the first script, or the built-in demo)
        #[arg(short, long)]
        graph: Option<String>,

        /// RNG seed for the held-item pick
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Speak every line as this character instead
        #[arg(long)]
        override_speaker: Option<String>,
    },

    /// Validate a dialogue script
    Check {
        /// Script file to validate
        file: PathBuf,
    },

    /// Print the built-in demo script as JSON
    Demo,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            script,
            graph,
            seed,
            override_speaker,
        } => commands::play::run(&script, graph.as_deref(), seed, override_speaker.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Demo => commands::demo::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
