//! Interactive game sessions against the computer or another human

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::AnalysisReport,
    board::Square,
    cli::output::{self, Console},
    error::Error,
    game::{Contender, Contenders, Game},
    search,
    selection::MoveSelector,
};

const BANNER: &str = "\n                --- Tic-Tac-Toe ---\n\n";

const COMMAND_HELP: &str = "\
Move commands are A1, A2, A3, B1, B2, B3, C1, C2 or C3
The player can also enter the commands:
  A for game analysis.
  C for computer generated move.
  G to give up the game.
  Q to quit the program.

";

#[derive(Parser, Debug)]
#[command(about = "Play interactive games in the terminal")]
pub struct PlayArgs {
    /// Number of human players: 0 watches the computer play itself,
    /// 1 pits you against the computer, 2 is a two-human analysis session
    #[arg(long = "players", short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub players: u8,

    /// Random seed for the computer's move selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print output at full speed instead of pacing it line by line
    #[arg(long)]
    pub no_delay: bool,
}

/// What a human typed at the move prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Square),
    Analyze,
    ComputerMove,
    GiveUp,
    Quit,
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchEnd {
    /// Played out to a win or a draw
    Played,
    /// A human gave up the game
    GaveUp,
    /// A human asked to leave the program
    Quit,
}

fn parse_command(token: &str) -> Option<Command> {
    if token.eq_ignore_ascii_case("a") {
        return Some(Command::Analyze);
    }
    if token.eq_ignore_ascii_case("c") {
        return Some(Command::ComputerMove);
    }
    if token.eq_ignore_ascii_case("g") {
        return Some(Command::GiveUp);
    }
    if token.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }

    token.parse().ok().map(Command::Move)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let console = if args.no_delay {
        Console::instant()
    } else {
        Console::new()
    };

    let mut selector = match args.seed {
        Some(seed) => MoveSelector::with_seed(seed),
        None => MoveSelector::new(),
    };

    let contenders = Contenders::from_players(args.players)?;

    let stdin = io::stdin();
    run_session(contenders, &mut selector, &console, &mut stdin.lock())?;
    Ok(())
}

/// Play games until the user declines another one or quits.
///
/// Between games of a human-versus-computer session the seats swap, so
/// the human alternates between opening and answering. Returns the
/// seating in effect when the session ended.
fn run_session(
    mut contenders: Contenders,
    selector: &mut MoveSelector,
    console: &Console,
    input: &mut impl BufRead,
) -> Result<Contenders> {
    console.say(BANNER);

    if contenders.any_human() {
        console.say(COMMAND_HELP);
    }

    loop {
        console.say(&format!("{contenders}\n\n"));

        if run_match(contenders, selector, console, input)? == MatchEnd::Quit {
            return Ok(contenders);
        }

        if !console.ask_yes_no("Play again? (Y/N) ", input)? {
            break;
        }

        console.say("\nNew game.\n\n");

        if contenders.is_mixed() {
            contenders = contenders.swapped();
        }
    }

    console.say("Good bye.\n");
    Ok(contenders)
}

/// Play one game to its end.
fn run_match(
    contenders: Contenders,
    selector: &mut MoveSelector,
    console: &Console,
    input: &mut impl BufRead,
) -> Result<MatchEnd> {
    let mut game = Game::new();

    console.say(&output::board_grid(&game.board));

    loop {
        match contenders.seat(game.to_move) {
            Contender::Computer => {
                // Give the output a beat before the computer answers.
                console.pause_before_move();
                computer_move(&mut game, selector, console)?;
            }
            Contender::Human => {
                console.say(&format!("Move for player {}> ", game.to_move));

                let Some(token) = output::read_token(input)? else {
                    return Ok(MatchEnd::Quit);
                };

                match parse_command(&token) {
                    Some(Command::Quit) => return Ok(MatchEnd::Quit),
                    Some(Command::GiveUp) => return Ok(MatchEnd::GaveUp),
                    Some(Command::Analyze) => {
                        let report = AnalysisReport::new(&game.board, game.to_move);
                        console.say(&format!("\n{report}\n\n"));
                        continue;
                    }
                    Some(Command::ComputerMove) => {
                        computer_move(&mut game, selector, console)?;
                    }
                    Some(Command::Move(square)) => match game.play(square) {
                        Ok(_) => {}
                        Err(Error::SquareOccupied { .. }) => {
                            console.say("Invalid move, try again.\n");
                            continue;
                        }
                        Err(error) => return Err(error.into()),
                    },
                    None => {
                        console.say("Syntax error, try again.\n");
                        continue;
                    }
                }
            }
        }

        console.say(&output::board_grid(&game.board));

        if game.is_over() {
            break;
        }
    }

    match game.outcome.winner() {
        Some(winner) => console.say(&format!("{winner} wins.\n")),
        None => console.say("Draw.\n"),
    }

    Ok(MatchEnd::Played)
}

/// Search the position and play one of the best moves.
fn computer_move(game: &mut Game, selector: &mut MoveSelector, console: &Console) -> Result<()> {
    let player = game.to_move;

    console.say(&format!("Computer playing as {player}.\n"));

    let report = search::search(&game.board, player);
    let chosen = selector.pick(&report, player)?;

    console.say(&format!("Move for player {player}> {}\n", chosen.square));

    game.play(chosen.square)?;
    Ok(())
}
