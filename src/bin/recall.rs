//! recall CLI - tic-tac-toe against an agent that remembers its losses
//!
//! This CLI provides:
//! - Interactive games at the terminal, learning from every loss
//! - Inspection of the stored avoidance set

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recall")]
#[command(version, about = "Tic-tac-toe against an agent that never repeats a loss", long_about = None)]
struct Cli {
    /// Show debug logs on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games against the agent
    Play(recall::cli::commands::play::PlayArgs),

    /// Inspect what the agent has learned
    Inspect(recall::cli::commands::inspect::InspectArgs),
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "recall=debug" } else { "recall=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => recall::cli::commands::play::execute(args),
        Commands::Inspect(args) => recall::cli::commands::inspect::execute(args),
    }
}
