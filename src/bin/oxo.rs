//! oxo - Tic-Tac-Toe for the terminal
//!
//! Runs interactive games against an exhaustive game-tree searcher and
//! can analyze arbitrary positions from the command line. Without a
//! subcommand it drops straight into a game.

use anyhow::Result;
use clap::{Parser, Subcommand};

use oxo::cli::{analyze, play};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Terminal Tic-Tac-Toe with an exhaustive analysis engine", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: play::PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive games in the terminal
    Play(play::PlayArgs),

    /// Analyze a position without playing
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => play::execute(args),
        Some(Commands::Analyze(args)) => analyze::execute(args),
        None => play::execute(cli.play),
    }
}
