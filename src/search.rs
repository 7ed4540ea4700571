//! Exhaustive game-tree evaluation
//!
//! The search descends the full game tree below a position, stopping each
//! branch as soon as the board is decided, and classifies every legal move
//! by the outcome reached when both sides keep playing perfectly. Among
//! forecasts of equal value it tracks the fastest win for the searching
//! player and otherwise the longest resistance.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player, Square},
    outcome::Outcome,
};

/// Evaluation of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvaluation {
    pub square: Square,
    /// Outcome the game reaches with perfect play after this move
    pub outcome: Outcome,
    /// Moves played until that outcome, this one included
    pub depth: usize,
}

/// Complete evaluation of a position for the player to move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Outcome under mutual perfect play
    pub outcome: Outcome,
    /// Moves until the forecast outcome is reached
    pub depth: usize,
    /// Total number of placements evaluated across the whole tree
    pub examined: usize,
    /// One evaluation per empty square, in row-major order
    pub moves: Vec<MoveEvaluation>,
}

/// Evaluate every legal move for `player` on `board`.
///
/// The board must have at least one empty square; calling this on a full
/// board is a programming error.
///
/// ```
/// use oxo::{Board, Outcome, Player, search};
///
/// let (board, player) = Board::from_string("XX.OO....").unwrap();
/// let report = search(&board, player);
///
/// assert_eq!(report.outcome, Outcome::Win(Player::X));
/// assert_eq!(report.depth, 1);
/// assert_eq!(report.moves.len(), 5);
/// ```
pub fn search(board: &Board, player: Player) -> SearchReport {
    debug_assert!(
        !board.is_full(),
        "search requires a position with at least one empty square"
    );

    let mut moves = Vec::new();
    let (outcome, depth, examined) = evaluate(board, player, Some(&mut moves));

    SearchReport {
        outcome,
        depth,
        examined,
        moves,
    }
}

/// Recursive worker behind [`search`]. Per-move evaluations are collected
/// only at the entry level; the recursion propagates just the aggregate.
fn evaluate(
    board: &Board,
    player: Player,
    mut collector: Option<&mut Vec<MoveEvaluation>>,
) -> (Outcome, usize, usize) {
    let opponent = player.opponent();
    let mut best: Option<(Outcome, usize)> = None;
    let mut examined = 0;

    for square in Square::all() {
        if !board.is_empty(square) {
            continue;
        }
        examined += 1;

        let next = board
            .place(square, player)
            .expect("placement on an empty square cannot fail");

        let (outcome, depth) = match next.outcome() {
            Outcome::Undecided => {
                let (sub_outcome, sub_depth, sub_examined) = evaluate(&next, opponent, None);
                examined += sub_examined;
                (sub_outcome, sub_depth + 1)
            }
            decided => (decided, 1),
        };

        if let Some(list) = collector.as_mut() {
            list.push(MoveEvaluation {
                square,
                outcome,
                depth,
            });
        }

        best = Some(match best {
            None => (outcome, depth),
            Some((best_outcome, best_depth)) => {
                if outcome.score(player) > best_outcome.score(player) {
                    (outcome, depth)
                } else if outcome.score(player) < best_outcome.score(player) {
                    (best_outcome, best_depth)
                } else if outcome == Outcome::Win(player) {
                    // Tied winning forecasts keep the fastest path.
                    (best_outcome, best_depth.min(depth))
                } else {
                    // Tied draws or losses keep the slowest path.
                    (best_outcome, best_depth.max(depth))
                }
            }
        });
    }

    let (outcome, depth) = best.expect("evaluated position has at least one empty square");
    (outcome, depth, examined)
}
