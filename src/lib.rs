//! oxo: Tic-Tac-Toe with an exhaustive game-tree analysis engine
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board, move and outcome handling with validation
//! - A full-depth search that resolves any position to its perfect-play
//!   outcome, with game length and search effort alongside
//! - Move selection that picks randomly among the strongest moves
//! - A terminal front end for human and computer matches, in-game
//!   analysis and JSON export of position reports

pub mod analysis;
pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod outcome;
pub mod search;
pub mod selection;

pub use analysis::AnalysisReport;
pub use board::{Board, Cell, Player, Square};
pub use error::{Error, Result};
pub use game::{Contender, Contenders, Game};
pub use outcome::Outcome;
pub use search::{MoveEvaluation, SearchReport, search};
pub use selection::{MoveSelector, best_moves};
