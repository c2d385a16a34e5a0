//! Human port - where the human's moves come from.

use crate::{Result, tictactoe::Board, types::CellId};

/// A move chosen by the human
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanMove {
    Play(CellId),
    Quit,
}

/// Source of human decisions during a session.
pub trait HumanPlayer {
    /// Choose the next move on `board`.
    ///
    /// Implementations must only return cells that are empty on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be obtained at all (for example the
    /// input stream closed).
    fn next_move(&mut self, board: &Board) -> Result<HumanMove>;

    /// Ask whether to play another game after one has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be obtained.
    fn wants_another_game(&mut self) -> Result<bool>;
}
