//! Game outcome classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Player;

/// Status of a position: still open, drawn, or won by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty squares remain and no line is complete
    Undecided,
    /// Every square is marked and no line is complete
    Draw,
    /// The player completed a line
    Win(Player),
}

impl Outcome {
    /// Check whether the game has ended
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// The winner, if there is one
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Value of this outcome from `player`'s perspective: a win for the
    /// player beats a draw, which beats a win for the opponent.
    pub fn score(self, player: Player) -> i32 {
        match self {
            Outcome::Win(winner) if winner == player => 1,
            Outcome::Win(_) => -1,
            Outcome::Draw | Outcome::Undecided => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win(player) => write!(f, "win for {player}"),
        }
    }
}
