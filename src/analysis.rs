//! Position analysis for display and export

use std::fmt;

use serde::Serialize;

use crate::{
    board::{Board, Player},
    outcome::Outcome,
    search::{self, MoveEvaluation, SearchReport},
};

/// Every legal move in a position, partitioned by its perfect-play
/// consequence for the analyzed player.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The analyzed cells as a compact row-major string
    pub board: String,
    pub player: Player,
    /// Outcome the position reaches with perfect play on both sides
    pub forecast: Outcome,
    /// Moves until the forecast outcome is reached
    pub depth: usize,
    /// Total number of placements evaluated by the search
    pub examined: usize,
    pub winning: Vec<MoveEvaluation>,
    pub drawing: Vec<MoveEvaluation>,
    pub losing: Vec<MoveEvaluation>,
}

impl AnalysisReport {
    /// Search the position and partition the resulting move list.
    ///
    /// The board must have at least one empty square; calling this on a
    /// full board is a programming error.
    pub fn new(board: &Board, player: Player) -> Self {
        Self::from_report(board, search::search(board, player), player)
    }

    /// Partition an already computed search report.
    pub fn from_report(board: &Board, report: SearchReport, player: Player) -> Self {
        let mut winning = Vec::new();
        let mut drawing = Vec::new();
        let mut losing = Vec::new();

        for evaluation in report.moves {
            match evaluation.outcome {
                Outcome::Win(winner) if winner == player => winning.push(evaluation),
                Outcome::Win(_) => losing.push(evaluation),
                // The search resolves every move, so anything else drew.
                _ => drawing.push(evaluation),
            }
        }

        AnalysisReport {
            board: board.encode(),
            player,
            forecast: report.outcome,
            depth: report.depth,
            examined: report.examined,
            winning,
            drawing,
            losing,
        }
    }

    /// Number of classified moves across all three buckets
    pub fn move_count(&self) -> usize {
        self.winning.len() + self.drawing.len() + self.losing.len()
    }
}

fn write_moves(f: &mut fmt::Formatter<'_>, moves: &[MoveEvaluation]) -> fmt::Result {
    if moves.is_empty() {
        return write!(f, "None");
    }

    for (i, m) in moves.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}({})", m.square, m.depth)?;
    }

    Ok(())
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis for player {}:", self.player)?;
        writeln!(f, "Moves until game end are shown in parentheses.")?;

        write!(f, "  Winning moves: ")?;
        write_moves(f, &self.winning)?;
        writeln!(f)?;

        write!(f, "  Drawing moves: ")?;
        write_moves(f, &self.drawing)?;
        writeln!(f)?;

        write!(f, "  Losing moves: ")?;
        write_moves(f, &self.losing)?;
        writeln!(f)?;

        write!(f, "  Total analyzed moves: {}", self.examined)
    }
}
