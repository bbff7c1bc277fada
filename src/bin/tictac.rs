//! tictac CLI - optimal tic-tac-toe engine with blunder review
//!
//! This CLI provides:
//! - Optimal move lookup for any position
//! - Blunder review of positions and single moves
//! - Scripted human-versus-engine sessions
//! - Agent self-play

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictac::app::SessionConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictac")]
#[command(version, about = "Optimal tic-tac-toe engine with blunder review", long_about = None)]
struct Cli {
    /// Session configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a position
    BestMove(tictac::cli::commands::best_move::BestMoveArgs),

    /// Review a position or a single move for blunders
    Review(tictac::cli::commands::review::ReviewArgs),

    /// Play scripted human moves against the engine
    PlayScript(tictac::cli::commands::play_script::PlayScriptArgs),

    /// Run games between two agents
    SelfPlay(tictac::cli::commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    match cli.command {
        Commands::BestMove(args) => tictac::cli::commands::best_move::execute(args),
        Commands::Review(args) => tictac::cli::commands::review::execute(args),
        Commands::PlayScript(args) => tictac::cli::commands::play_script::execute(args, config),
        Commands::SelfPlay(args) => tictac::cli::commands::self_play::execute(args),
    }
}
