//! Offline analysis of a single position

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::AnalysisReport,
    board::{Board, Player},
    cli::output,
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position without playing")]
pub struct AnalyzeArgs {
    /// Position to analyze, given as nine cells in row order with `.`
    /// for an empty square and an optional `_X` or `_O` turn suffix
    #[arg(long)]
    pub board: Option<String>,

    /// Export the analysis to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let (board, player) = match &args.board {
        Some(text) => Board::from_string(text)?,
        None => (Board::new(), Player::X),
    };

    print!("{}", output::board_grid(&board));

    // A decided position has no moves left to classify.
    if board.outcome().is_decided() {
        println!("Nothing to analyze: {}.", board.outcome());
        return Ok(());
    }

    let report = AnalysisReport::new(&board, player);
    println!("{report}");

    if let Some(path) = &args.export {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}
