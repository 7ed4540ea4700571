//! Paced terminal output and token input

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use crate::board::{Board, Cell};

const LINE_DELAY: Duration = Duration::from_millis(50);
const MOVE_PAUSE: Duration = Duration::from_secs(1);

/// Terminal writer that sleeps briefly after each printed line, so
/// game output stays easy to follow.
pub struct Console {
    line_delay: Duration,
    move_pause: Duration,
}

impl Console {
    pub fn new() -> Self {
        Console {
            line_delay: LINE_DELAY,
            move_pause: MOVE_PAUSE,
        }
    }

    /// Console without any delays, for scripted games and tests.
    pub fn instant() -> Self {
        Console {
            line_delay: Duration::ZERO,
            move_pause: Duration::ZERO,
        }
    }

    /// Print text, pausing after every completed line.
    pub fn say(&self, text: &str) {
        for piece in text.split_inclusive('\n') {
            print!("{piece}");
            io::stdout().flush().ok();
            if piece.ends_with('\n') && !self.line_delay.is_zero() {
                thread::sleep(self.line_delay);
            }
        }
    }

    /// Longer pause taken before an unprompted computer move.
    pub fn pause_before_move(&self) {
        if !self.move_pause.is_zero() {
            thread::sleep(self.move_pause);
        }
    }

    /// Ask until the reader answers y or n. End of input counts as no.
    pub fn ask_yes_no(&self, prompt: &str, input: &mut impl BufRead) -> io::Result<bool> {
        loop {
            self.say(prompt);

            let Some(token) = read_token(input)? else {
                return Ok(false);
            };

            if token.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if token.eq_ignore_ascii_case("n") {
                return Ok(false);
            }

            self.say("Invalid option.\n");
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one line and return its first word, or `None` at end of input.
pub fn read_token(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let token = line.split_whitespace().next().unwrap_or("");
    Ok(Some(token.to_string()))
}

/// Render the board as a labeled grid with empty squares left blank.
pub fn board_grid(board: &Board) -> String {
    let mut grid = String::from("\n   1   2   3\n");

    for (i, cell) in board.cells.iter().enumerate() {
        if i % 3 == 0 {
            grid.push((b'A' + (i / 3) as u8) as char);
            grid.push(' ');
        }

        let mark = match cell {
            Cell::Empty => ' ',
            marked => marked.to_char(),
        };
        grid.push(' ');
        grid.push(mark);
        grid.push(' ');

        if (i + 1).is_multiple_of(3) {
            while grid.ends_with(' ') {
                grid.pop();
            }
            grid.push('\n');
            if i != 8 {
                grid.push_str("  -----------\n");
            }
        } else {
            grid.push('|');
        }
    }

    grid.push_str("\n\n");
    grid
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_board_grid_empty_board() {
        let expected = "\n   1   2   3\n\
                        A    |   |\n  -----------\n\
                        B    |   |\n  -----------\n\
                        C    |   |\n\n\n";
        assert_eq!(board_grid(&Board::new()), expected);
    }

    #[test]
    fn test_board_grid_shows_marks() {
        let (board, _) = Board::from_string("X.O....O._X").unwrap();
        let grid = board_grid(&board);

        assert!(grid.contains("A  X |   | O\n"));
        assert!(grid.contains("C    | O |\n"));
    }

    #[test]
    fn test_read_token_takes_first_word() {
        let mut input = Cursor::new("  b2   extra\n");
        assert_eq!(read_token(&mut input).unwrap(), Some("b2".to_string()));
    }

    #[test]
    fn test_read_token_empty_line_and_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_token(&mut input).unwrap(), Some(String::new()));
        assert_eq!(read_token(&mut input).unwrap(), None);
    }

    #[test]
    fn test_ask_yes_no_retries_until_valid() {
        let console = Console::instant();

        let mut input = Cursor::new("maybe\nY\n");
        assert!(console.ask_yes_no("again? ", &mut input).unwrap());

        let mut input = Cursor::new("n\n");
        assert!(!console.ask_yes_no("again? ", &mut input).unwrap());
    }

    #[test]
    fn test_ask_yes_no_eof_means_no() {
        let console = Console::instant();
        let mut input = Cursor::new("");
        assert!(!console.ask_yes_no("again? ", &mut input).unwrap());
    }
}
