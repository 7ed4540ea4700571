//! Winning line catalog for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Scan every line for a completed triple and return its owner.
///
/// Positions reached by legal play have at most one winner; if a board
/// somehow carries two completed lines, the first in catalog order wins.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&index| cells[index] == first) {
            return first.to_player();
        }
    }
    None
}
