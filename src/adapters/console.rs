//! Console adapters: keyboard input for the human and text output for the game.

use std::io::{self, BufRead, Write};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    Result,
    memory::LearningReport,
    ports::{HumanMove, HumanPlayer, Observer},
    tictactoe::{Board, GameStatus, Player},
    types::{BOARD_DIMENSION, CellId},
};

const LOSING_PHRASES: &[&str] = &[
    "I gotta get better at this...",
    "You must be pretty good!",
    "Did you study this in college?",
    "Are you, like, a TicTacToe Grand Wizard?",
    "Pretty slick, you are.",
    "How do you do it?",
    "I am duly impressed.",
    "Good job!",
    "Nice!",
    "Give me another chance?",
    "Again.  Sigh...",
    "Again!  Arg!",
];

const WINNING_PHRASES: &[&str] = &[
    "Nice try, though.",
    "Nevertheless, thou art a truly worthy opponent.",
    "Better luck next time!",
    "Keep up the swell effort!",
    "Keep on trying, though!",
    "And I promise, I didn't cheat!",
    "And you thought this game was easy!",
];

const DRAW_PHRASES: &[&str] = &[
    "Looks like we're even-steven.",
    "Neck and neck!",
    "Shall we give it another shot?",
];

const GAME_OVER_LEAD: &str = "************* GAME OVER: ";

/// Result of reading one line of move input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Quit,
    Cell(CellId),
    /// Not two numbers separated by a space or comma
    NotTwoNumbers,
    /// Two values, but at least one is not a number
    NotANumber,
    InvalidRow(i64),
    InvalidColumn(i64),
}

/// Interpret one line typed by the human.
///
/// Accepts `q` (any case) to quit, or a row and column from 1 to 3 separated
/// by a comma or by whitespace, e.g. `2 2` or `2,2`.
pub fn parse_move_input(line: &str) -> MoveInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return MoveInput::Quit;
    }

    let parts: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };
    if parts.len() < 2 {
        return MoveInput::NotTwoNumbers;
    }

    let (Ok(row), Ok(column)) = (parts[0].parse::<i64>(), parts[1].parse::<i64>()) else {
        return MoveInput::NotANumber;
    };
    let in_range = |n: i64| (1..=BOARD_DIMENSION as i64).contains(&n);
    if !in_range(row) {
        return MoveInput::InvalidRow(row);
    }
    if !in_range(column) {
        return MoveInput::InvalidColumn(column);
    }

    match CellId::from_row_column(row as usize, column as usize) {
        Ok(cell) => MoveInput::Cell(cell),
        Err(_) => MoveInput::NotANumber,
    }
}

/// Whether an answer to "play another game?" means yes.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Human player reading moves from a line-based input.
///
/// Bad input and occupied cells are answered with help text and a new prompt.
/// End of input is taken as quitting the game and declining another one.
#[derive(Debug)]
pub struct ConsoleHuman<R, W> {
    input: R,
    output: W,
}

impl ConsoleHuman<io::StdinLock<'static>, io::Stdout> {
    /// Human at the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleHuman<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| crate::Error::Io {
            operation: "read from input".to_string(),
            source,
        })?;
        Ok((read > 0).then_some(line))
    }

    fn print_instructions(&mut self) -> Result<()> {
        writeln!(self.output, "Please enter two numbers, each from 1 to 3, separated by a space.")?;
        writeln!(
            self.output,
            "The first number is for the row, and the second number is for the column."
        )?;
        writeln!(self.output, "For example, to specify the center spot on the board:")?;
        writeln!(self.output, "  2 2")?;
        writeln!(self.output)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> HumanPlayer for ConsoleHuman<R, W> {
    fn next_move(&mut self, board: &Board) -> Result<HumanMove> {
        writeln!(self.output)?;
        writeln!(self.output, "Your move!")?;
        loop {
            writeln!(
                self.output,
                "Please enter the row and column of your next move, or 'q' to quit: "
            )?;
            let Some(line) = self.read_line()? else {
                debug!("input closed, treating as quit");
                return Ok(HumanMove::Quit);
            };

            let needs_help = match parse_move_input(&line) {
                MoveInput::Quit => return Ok(HumanMove::Quit),
                MoveInput::Cell(cell) if board.is_empty(cell) => return Ok(HumanMove::Play(cell)),
                MoveInput::Cell(_) => {
                    writeln!(
                        self.output,
                        "Sorry, that spot's already taken - you'll have to select another one."
                    )?;
                    false
                }
                MoveInput::NotTwoNumbers => {
                    writeln!(
                        self.output,
                        "It doesn't seem that you've entered two numbers separated by a space."
                    )?;
                    true
                }
                MoveInput::NotANumber => {
                    writeln!(self.output, "Sorry, that doesn't seem to be a valid value")?;
                    true
                }
                MoveInput::InvalidRow(row) => {
                    writeln!(self.output, "Sorry, {row} is not a valid row number.")?;
                    true
                }
                MoveInput::InvalidColumn(column) => {
                    writeln!(self.output, "Sorry, {column} is not a valid column number.")?;
                    true
                }
            };
            if needs_help {
                self.print_instructions()?;
            }
        }
    }

    fn wants_another_game(&mut self) -> Result<bool> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "*".repeat(57))?;
        writeln!(self.output, "Would you like to play another game?  Enter 'y' for Yes: ")?;
        Ok(self.read_line()?.is_some_and(|answer| is_affirmative(&answer)))
    }
}

/// Observer printing the game to a text output.
#[derive(Debug)]
pub struct ConsoleObserver<W, R = StdRng> {
    output: W,
    rng: R,
}

impl ConsoleObserver<io::Stdout> {
    /// Observer writing to stdout, picking phrases with `seed` if given.
    pub fn stdout(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self::new(io::stdout(), rng)
    }
}

impl<W: Write, R: Rng> ConsoleObserver<W, R> {
    pub fn new(output: W, rng: R) -> Self {
        Self { output, rng }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn phrase(&mut self, phrases: &[&'static str]) -> &'static str {
        phrases.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Final line for a finished game
    pub fn game_over_line(&mut self, status: GameStatus) -> Option<String> {
        let text = match status {
            GameStatus::Ongoing => return None,
            GameStatus::Won(player) if player.is_agent() => {
                format!("I won this time! {}", self.phrase(WINNING_PHRASES))
            }
            GameStatus::Won(_) => format!("You won! {}", self.phrase(LOSING_PHRASES)),
            GameStatus::Tie => format!("It's a Tie!  {}", self.phrase(DRAW_PHRASES)),
            GameStatus::Quit(player) if player.is_agent() => "I quit - in the past, when I've \
                 come to this point and tried all the available options, I lost every time."
                .to_string(),
            GameStatus::Quit(_) => "Ok, we'll stop this particular game.".to_string(),
        };
        Some(format!("{GAME_OVER_LEAD}{text}"))
    }
}

impl<W: Write, R: Rng> Observer for ConsoleObserver<W, R> {
    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        if game_num > 0 {
            writeln!(self.output)?;
            writeln!(self.output, "OK, let's play again!  I'll start...")?;
        }
        Ok(())
    }

    fn on_human_turn(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{board}")?;
        Ok(())
    }

    fn on_move(&mut self, player: Player, cell: CellId, _board: &Board) -> Result<()> {
        if player.is_agent() {
            writeln!(
                self.output,
                "I'll take row {}, column {}.",
                cell.row(),
                cell.column()
            )?;
        }
        Ok(())
    }

    fn on_game_end(
        &mut self,
        status: GameStatus,
        board: &Board,
        _learning: &LearningReport,
    ) -> Result<()> {
        if let Some(line) = self.game_over_line(status) {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Here's how the game ended: ")?;
        write!(self.output, "{board}")?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn cell(n: usize) -> CellId {
        CellId::new(n).unwrap()
    }

    #[test]
    fn test_parse_space_and_comma() {
        assert_eq!(parse_move_input("2 2"), MoveInput::Cell(cell(5)));
        assert_eq!(parse_move_input("  1   3 \n"), MoveInput::Cell(cell(3)));
        assert_eq!(parse_move_input("3,1"), MoveInput::Cell(cell(7)));
        assert_eq!(parse_move_input("3 , 3"), MoveInput::Cell(cell(9)));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_move_input("q"), MoveInput::Quit);
        assert_eq!(parse_move_input(" Q \n"), MoveInput::Quit);
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(parse_move_input("22"), MoveInput::NotTwoNumbers);
        assert_eq!(parse_move_input(""), MoveInput::NotTwoNumbers);
        assert_eq!(parse_move_input("a b"), MoveInput::NotANumber);
        assert_eq!(parse_move_input("4 1"), MoveInput::InvalidRow(4));
        assert_eq!(parse_move_input("0 1"), MoveInput::InvalidRow(0));
        assert_eq!(parse_move_input("1 -2"), MoveInput::InvalidColumn(-2));
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("YES"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yeah"));
    }

    #[test]
    fn test_console_human_reprompts_until_valid() {
        let mut board = Board::new();
        board.play(cell(5)).unwrap();
        let input = Cursor::new("hello\n2 2\n1 1\n");
        let mut human = ConsoleHuman::new(input, Vec::new());

        let chosen = human.next_move(&board).unwrap();
        assert_eq!(chosen, HumanMove::Play(cell(1)));

        let printed = String::from_utf8(human.into_output()).unwrap();
        assert!(printed.contains("two numbers separated by a space"));
        assert!(printed.contains("already taken"));
    }

    #[test]
    fn test_console_human_end_of_input_quits() {
        let mut human = ConsoleHuman::new(Cursor::new(""), Vec::new());
        assert_eq!(human.next_move(&Board::new()).unwrap(), HumanMove::Quit);
        assert!(!human.wants_another_game().unwrap());
    }

    #[test]
    fn test_console_human_play_again() {
        let mut human = ConsoleHuman::new(Cursor::new("yes\nno\n"), Vec::new());
        assert!(human.wants_another_game().unwrap());
        assert!(!human.wants_another_game().unwrap());
    }

    #[test]
    fn test_game_over_lines() {
        let mut observer = ConsoleObserver::new(Vec::new(), StdRng::seed_from_u64(1));

        let agent_won = observer.game_over_line(GameStatus::Won(Player::AGENT)).unwrap();
        assert!(agent_won.starts_with("************* GAME OVER: I won this time! "));
        assert!(WINNING_PHRASES.iter().any(|p| agent_won.ends_with(p)));

        let human_won = observer.game_over_line(GameStatus::Won(Player::HUMAN)).unwrap();
        assert!(LOSING_PHRASES.iter().any(|p| human_won.ends_with(p)));

        let tie = observer.game_over_line(GameStatus::Tie).unwrap();
        assert!(DRAW_PHRASES.iter().any(|p| tie.ends_with(p)));

        let conceded = observer.game_over_line(GameStatus::Quit(Player::AGENT)).unwrap();
        assert!(conceded.contains("I quit"));

        assert_eq!(observer.game_over_line(GameStatus::Ongoing), None);
    }

    #[test]
    fn test_observer_renders_final_board() {
        let mut board = Board::new();
        board.play(cell(1)).unwrap();
        let mut observer = ConsoleObserver::new(Vec::new(), StdRng::seed_from_u64(1));

        observer
            .on_game_end(GameStatus::Quit(Player::HUMAN), &board, &LearningReport::Skipped)
            .unwrap();

        let printed = String::from_utf8(observer.into_output()).unwrap();
        assert!(printed.contains("Ok, we'll stop this particular game."));
        assert!(printed.contains("Here's how the game ended:"));
        assert!(printed.contains(" X |   |   "));
    }
}
