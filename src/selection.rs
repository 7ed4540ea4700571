//! Move choice for the computer player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    board::Player,
    error::{Error, Result},
    outcome::Outcome,
    search::{MoveEvaluation, SearchReport},
};

/// Filter a report down to the moves worth playing.
///
/// Keeps only the moves matching the report's forecast, then among those
/// the fastest ones when the forecast is a win for `player` and the
/// slowest ones otherwise. Dragging out a lost or drawn game gives the
/// opponent the most room to go wrong.
pub fn best_moves(report: &SearchReport, player: Player) -> Vec<MoveEvaluation> {
    let candidates: Vec<MoveEvaluation> = report
        .moves
        .iter()
        .filter(|m| m.outcome == report.outcome)
        .copied()
        .collect();

    let target_depth = if report.outcome == Outcome::Win(player) {
        candidates.iter().map(|m| m.depth).min()
    } else {
        candidates.iter().map(|m| m.depth).max()
    };

    match target_depth {
        Some(depth) => candidates
            .into_iter()
            .filter(|m| m.depth == depth)
            .collect(),
        None => Vec::new(),
    }
}

/// Chooses uniformly among equally good moves.
///
/// The selector owns its rng so a seeded instance replays the same game.
///
/// ```
/// use oxo::{Board, MoveSelector, search};
///
/// let (board, player) = Board::from_string("XX.OO....").unwrap();
/// let report = search(&board, player);
///
/// let mut selector = MoveSelector::with_seed(42);
/// let chosen = selector.pick(&report, player).unwrap();
/// // The only move worth playing here is the immediate win.
/// assert_eq!(chosen.square.to_string(), "A3");
/// ```
pub struct MoveSelector {
    rng: StdRng,
}

impl MoveSelector {
    /// Create a selector with an arbitrary seed
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a selector with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one move uniformly from a slice of candidates.
    ///
    /// # Errors
    ///
    /// Returns error if there are no candidates to choose from.
    pub fn choose(&mut self, moves: &[MoveEvaluation]) -> Result<MoveEvaluation> {
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    /// Pick one of the best moves in a report for `player`.
    ///
    /// # Errors
    ///
    /// Returns error if the report contains no moves.
    pub fn pick(&mut self, report: &SearchReport, player: Player) -> Result<MoveEvaluation> {
        self.choose(&best_moves(report, player))
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn evaluation(index: usize, outcome: Outcome, depth: usize) -> MoveEvaluation {
        MoveEvaluation {
            square: Square::new(index).unwrap(),
            outcome,
            depth,
        }
    }

    fn report_with(outcome: Outcome, depth: usize, moves: Vec<MoveEvaluation>) -> SearchReport {
        SearchReport {
            outcome,
            depth,
            examined: moves.len(),
            moves,
        }
    }

    #[test]
    fn test_best_moves_prefers_fastest_win() {
        let report = report_with(
            Outcome::Win(Player::X),
            1,
            vec![
                evaluation(0, Outcome::Win(Player::X), 3),
                evaluation(1, Outcome::Draw, 5),
                evaluation(2, Outcome::Win(Player::X), 1),
            ],
        );

        let best = best_moves(&report, Player::X);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].square.index(), 2);
    }

    #[test]
    fn test_best_moves_drags_out_a_loss() {
        let report = report_with(
            Outcome::Win(Player::O),
            4,
            vec![
                evaluation(3, Outcome::Win(Player::O), 2),
                evaluation(4, Outcome::Win(Player::O), 4),
                evaluation(5, Outcome::Win(Player::O), 4),
            ],
        );

        let best = best_moves(&report, Player::X);
        let squares: Vec<usize> = best.iter().map(|m| m.square.index()).collect();
        assert_eq!(squares, vec![4, 5]);
    }

    #[test]
    fn test_best_moves_keeps_longest_draw() {
        let report = report_with(
            Outcome::Draw,
            7,
            vec![
                evaluation(0, Outcome::Draw, 5),
                evaluation(1, Outcome::Draw, 7),
                evaluation(2, Outcome::Win(Player::O), 2),
            ],
        );

        let best = best_moves(&report, Player::X);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].square.index(), 1);
    }

    #[test]
    fn test_choose_rejects_empty_slice() {
        let mut selector = MoveSelector::with_seed(7);
        assert!(selector.choose(&[]).is_err());
    }

    #[test]
    fn test_choose_returns_member_of_slice() {
        let moves = vec![
            evaluation(0, Outcome::Draw, 9),
            evaluation(4, Outcome::Draw, 9),
            evaluation(8, Outcome::Draw, 9),
        ];

        let mut selector = MoveSelector::with_seed(123);
        for _ in 0..20 {
            let chosen = selector.choose(&moves).unwrap();
            assert!(moves.contains(&chosen));
        }
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let moves = vec![
            evaluation(0, Outcome::Draw, 9),
            evaluation(4, Outcome::Draw, 9),
            evaluation(8, Outcome::Draw, 9),
        ];

        let mut first = MoveSelector::with_seed(99);
        let mut second = MoveSelector::with_seed(99);

        for _ in 0..10 {
            assert_eq!(
                first.choose(&moves).unwrap(),
                second.choose(&moves).unwrap()
            );
        }
    }
}
