//! Game state and seat assignment

use std::fmt;

use crate::{
    board::{Board, Player, Square},
    error::{Error, Result},
    outcome::Outcome,
};

/// A game in progress.
///
/// Tracks the board, whose turn it is and the outcome reached so far.
/// Moves are applied through [`Game::play`], which refuses to touch a
/// finished game.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    pub board: Board,
    pub to_move: Player,
    pub outcome: Outcome,
}

impl Game {
    /// Start a fresh game with X to move on an empty board.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::Undecided,
        }
    }

    /// Resume from an arbitrary position.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Game {
            board,
            to_move,
            outcome: board.outcome(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Place the mark of the player to move and pass the turn.
    ///
    /// Returns the outcome after the move. The game state is unchanged
    /// when the move is rejected.
    pub fn play(&mut self, square: Square) -> Result<Outcome> {
        if self.is_over() {
            return Err(Error::GameOver);
        }

        self.board = self.board.place(square, self.to_move)?;
        self.outcome = self.board.outcome();
        self.to_move = self.to_move.opponent();

        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Who controls a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    Human,
    Computer,
}

/// Seat assignment for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contenders {
    pub x: Contender,
    pub o: Contender,
}

impl Contenders {
    /// Map a human-player count to seats.
    ///
    /// With one human, the human opens as X and the computer answers
    /// as O. Counts above two are rejected.
    pub fn from_players(count: u8) -> Result<Self> {
        let seats = match count {
            0 => Contenders {
                x: Contender::Computer,
                o: Contender::Computer,
            },
            1 => Contenders {
                x: Contender::Human,
                o: Contender::Computer,
            },
            2 => Contenders {
                x: Contender::Human,
                o: Contender::Human,
            },
            _ => return Err(Error::InvalidPlayerCount { count }),
        };

        Ok(seats)
    }

    pub fn seat(&self, player: Player) -> Contender {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub fn any_human(&self) -> bool {
        self.x == Contender::Human || self.o == Contender::Human
    }

    pub fn is_mixed(&self) -> bool {
        self.x != self.o
    }

    /// Exchange seats, so a lone human alternates sides between games.
    #[must_use]
    pub fn swapped(self) -> Self {
        Contenders {
            x: self.o,
            o: self.x,
        }
    }
}

impl fmt::Display for Contenders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.x, self.o) {
            (Contender::Computer, Contender::Computer) => {
                write!(f, "Computer plays both X and O")
            }
            (Contender::Computer, Contender::Human) => {
                write!(f, "Computer plays as X\nYou play as O")
            }
            (Contender::Human, Contender::Computer) => {
                write!(f, "You play as X\nComputer plays as O")
            }
            (Contender::Human, Contender::Human) => {
                write!(f, "You play both X and O -- analysis mode")
            }
        }
    }
}
