//! Board representation, players, and move notation

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{lines, outcome::Outcome};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A validated board coordinate in row-major order (0-8).
///
/// Squares print and parse in the game's move notation: rows are the
/// letters A-C, columns the digits 1-3.
///
/// ```
/// use oxo::Square;
///
/// let square: Square = "b2".parse().unwrap();
/// assert_eq!(square.index(), 4);
/// assert_eq!(square.to_string(), "B2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Square(usize);

impl Square {
    /// Create a square from a row-major index.
    ///
    /// # Errors
    ///
    /// Returns error if the index is not in 0-8.
    pub fn new(index: usize) -> Result<Square, crate::Error> {
        if index < 9 {
            Ok(Square(index))
        } else {
            Err(crate::Error::SquareOutOfBounds { index })
        }
    }

    /// All squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..9).map(Square)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Row of the square (0-2)
    pub fn row(self) -> usize {
        self.0 / 3
    }

    /// Column of the square (0-2)
    pub fn col(self) -> usize {
        self.0 % 3
    }
}

impl TryFrom<usize> for Square {
    type Error = crate::Error;

    fn try_from(index: usize) -> Result<Square, crate::Error> {
        Square::new(index)
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> usize {
        square.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row() as u8) as char, self.col() + 1)
    }
}

impl FromStr for Square {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Square, crate::Error> {
        let parse_error = || crate::Error::ParseSquare {
            input: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(parse_error());
        }

        let row = match bytes[0].to_ascii_uppercase() {
            b @ b'A'..=b'C' => (b - b'A') as usize,
            _ => return Err(parse_error()),
        };
        let col = match bytes[1] {
            b @ b'1'..=b'3' => (b - b'1') as usize,
            _ => return Err(parse_error()),
        };

        Ok(Square(row * 3 + col))
    }
}

/// The 3x3 grid of cells.
///
/// This type implements `Copy` since it's only 9 bytes; placing a mark
/// returns a new board and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at a square
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Check if a square is empty
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    /// Check if every square is marked
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All empty squares in row-major order
    pub fn empty_squares(&self) -> Vec<Square> {
        Square::all()
            .filter(|&square| self.is_empty(square))
            .collect()
    }

    /// Count the number of occupied squares on the board
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Place a player's mark and return the new board
    ///
    /// # Errors
    ///
    /// Returns error if the square is already occupied.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, square: Square, player: Player) -> Result<Board, crate::Error> {
        if !self.is_empty(square) {
            return Err(crate::Error::SquareOccupied {
                square: square.to_string(),
            });
        }

        let mut next = *self;
        next.cells[square.index()] = player.to_cell();
        Ok(next)
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        lines::winner(&self.cells) == Some(player)
    }

    /// Immediate status of the position: a completed line wins, a full
    /// board with no winner is a draw, anything else is still open.
    ///
    /// A win is reported even when the board is also full; only positions
    /// reachable by legal play are meaningful here.
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = lines::winner(&self.cells) {
            return Outcome::Win(winner);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    /// The nine cells as a compact string, row by row
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&cell| cell.to_char()).collect()
    }

    /// Read nine cells from cleaned board text.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (cell, (i, &c)) in cells.iter_mut().zip(chars.iter().enumerate()) {
            *cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    /// Helper: Count marks on the board.
    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Parse the turn suffix ("X" or "O", either case).
    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    /// Helper: Decide whose turn it is, either from an explicit declaration
    /// (validated against the piece counts) or inferred from the counts
    /// under X-opens semantics.
    fn resolve_turn(
        count: PieceCount,
        declared: Option<Player>,
        context: &str,
    ) -> Result<Player, crate::Error> {
        match declared {
            Some(player) => {
                // The declared mover cannot already be ahead on marks.
                let (mover, other) = match player {
                    Player::X => (count.x, count.o),
                    Player::O => (count.o, count.x),
                };
                if other == mover || other == mover + 1 {
                    Ok(player)
                } else {
                    Err(crate::Error::TurnCountMismatch {
                        x_count: count.x,
                        o_count: count.o,
                        player: player.to_char(),
                        context: context.to_string(),
                    })
                }
            }
            None => {
                if count.x == count.o {
                    Ok(Player::X)
                } else if count.x == count.o + 1 {
                    Ok(Player::O)
                } else {
                    Err(crate::Error::InvalidPieceCounts {
                        x_count: count.x,
                        o_count: count.o,
                    })
                }
            }
        }
    }

    /// Parse a board from a string representation, returning the board
    /// together with the player to move.
    ///
    /// The string should contain 9 cell characters in row-major order
    /// (whitespace is filtered out) and may optionally end with `_X` or
    /// `_O` to declare the player to move. Without the suffix, the turn
    /// is inferred from the piece counts with X assumed to open.
    ///
    /// ```
    /// use oxo::{Board, Player};
    ///
    /// let (board, to_move) = Board::from_string("XX.OO....").unwrap();
    /// assert_eq!(to_move, Player::X);
    /// assert_eq!(board.encode(), "XX.OO....");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts do not describe a reachable position
    /// - A provided `_X`/`_O` suffix conflicts with the piece counts
    pub fn from_string(s: &str) -> Result<(Board, Player), crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let (board_part, declared) = match cleaned.split_once('_') {
            Some((board_part, suffix)) => (board_part, Some(Self::parse_player(suffix, s)?)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);
        let to_move = Self::resolve_turn(count, declared, s)?;

        Ok((Board { cells }, to_move))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(index: usize) -> Square {
        Square::new(index).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells.iter().all(|&cell| cell == Cell::Empty));
        assert_eq!(board.empty_squares().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(square(4), Player::X).unwrap();

        assert_eq!(next.get(square(4)), Cell::X);
        // The original is untouched.
        assert_eq!(board.get(square(4)), Cell::Empty);
    }

    #[test]
    fn test_place_on_occupied_square_fails() {
        let board = Board::new().place(square(4), Player::X).unwrap();
        let result = board.place(square(4), Player::O);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_empty_squares_row_major_order() {
        let board = Board::new()
            .place(square(0), Player::X)
            .unwrap()
            .place(square(4), Player::O)
            .unwrap();

        let empties: Vec<usize> = board.empty_squares().iter().map(|s| s.index()).collect();
        assert_eq!(empties, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_square_notation_round_trip() {
        for index in 0..9 {
            let s = square(index);
            let text = s.to_string();
            let parsed: Square = text.parse().unwrap();
            assert_eq!(parsed, s, "notation {text} should parse back to {index}");
        }
    }

    #[test]
    fn test_square_notation_examples() {
        assert_eq!("A1".parse::<Square>().unwrap().index(), 0);
        assert_eq!("A3".parse::<Square>().unwrap().index(), 2);
        assert_eq!("B2".parse::<Square>().unwrap().index(), 4);
        assert_eq!("C1".parse::<Square>().unwrap().index(), 6);
        assert_eq!("c3".parse::<Square>().unwrap().index(), 8);
    }

    #[test]
    fn test_square_rejects_bad_notation() {
        for input in ["", "A", "D1", "A4", "A0", "11", "AA", "A12"] {
            assert!(
                input.parse::<Square>().is_err(),
                "'{input}' should not parse as a square"
            );
        }
    }

    #[test]
    fn test_square_index_bounds() {
        assert!(Square::new(8).is_ok());
        assert!(Square::new(9).is_err());
    }

    #[test]
    fn test_from_string_infers_turn() {
        let (_, to_move) = Board::from_string("X........").unwrap();
        assert_eq!(to_move, Player::O);

        let (_, to_move) = Board::from_string("XO.......").unwrap();
        assert_eq!(to_move, Player::X);
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let (_, to_move) = Board::from_string("XX.OO...._X").unwrap();
        assert_eq!(to_move, Player::X);

        // Equal counts are consistent with either side to move.
        let (_, to_move) = Board::from_string("XX.OO...._O").unwrap();
        assert_eq!(to_move, Player::O);
    }

    #[test]
    fn test_from_string_rejects_inconsistent_suffix() {
        // X is ahead, so it cannot be X's turn again.
        assert!(Board::from_string("XXO.X.O.._X").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_counts() {
        assert!(Board::from_string("XX.......").is_err());
        assert!(Board::from_string("OO.......").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_characters() {
        let result = Board::from_string("XX.OO...Z");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains('Z'));
    }

    #[test]
    fn test_from_string_rejects_short_input() {
        assert!(Board::from_string("XO.").is_err());
    }

    #[test]
    fn test_from_string_filters_whitespace() {
        let (board, to_move) = Board::from_string("XX.\nOO.\n...").unwrap();
        assert_eq!(board.encode(), "XX.OO....");
        assert_eq!(to_move, Player::X);
    }

    #[test]
    fn test_display_matches_encode_rows() {
        let (board, _) = Board::from_string("XX.OO....").unwrap();
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
    }

    #[test]
    fn test_outcome_open_position() {
        let (board, _) = Board::from_string("XX.OO....").unwrap();
        assert_eq!(board.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_outcome_win_rows_columns_diagonals() {
        let wins = [
            ("XXXOO....", Player::X),
            ("OO.XXX...", Player::X),
            ("X..XO.XO.", Player::X),
            ("XX.OOO.X.", Player::O),
            ("XO.OX...X", Player::X),
            ("OX.XO.X.O", Player::O),
            ("XXO.O.OX.", Player::O),
        ];

        for (encoded, winner) in wins {
            let (board, _) = Board::from_string(encoded).unwrap();
            assert_eq!(
                board.outcome(),
                Outcome::Win(winner),
                "{encoded} should be a win for {winner}"
            );
            assert!(board.has_won(winner));
        }
    }

    #[test]
    fn test_outcome_draw_on_full_board() {
        let (board, _) = Board::from_string("XXOOOXXXO").unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_win_takes_precedence_on_full_board() {
        // X completes the bottom row with the final mark.
        let (board, _) = Board::from_string("XOOOXOXXX_O").unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_occupied_count() {
        let (board, _) = Board::from_string("XX.OO....").unwrap();
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.empty_squares().len(), 5);
    }
}
