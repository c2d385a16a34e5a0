//! Observer port - abstraction for watching a session unfold
//!
//! This port lets the console (or a test) follow each game without the
//! session knowing how anything is displayed.

use crate::{
    Result,
    memory::LearningReport,
    tictactoe::{Board, GameStatus, Player},
    types::CellId,
};

/// Observer trait for monitoring games
///
/// The observer methods are called in the following order:
/// 1. `on_game_start(game_num)`
/// 2. `on_human_turn(board)` before each human move, and
///    `on_move(player, cell, board)` after every move
/// 3. `on_game_end(status, board, learning)` once the game is over
///
/// # Examples
///
/// ```no_run
/// use recall::{
///     ports::Observer,
///     memory::LearningReport,
///     tictactoe::{Board, GameStatus},
/// };
///
/// struct Tally {
///     finished: usize,
/// }
///
/// impl Observer for Tally {
///     fn on_game_end(
///         &mut self,
///         _status: GameStatus,
///         _board: &Board,
///         _learning: &LearningReport,
///     ) -> recall::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called when a game starts.
    ///
    /// # Parameters
    ///
    /// * `game_num` - Index of the game within the session (0-based)
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called before the human is asked for a move.
    fn on_human_turn(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied to the board.
    fn on_move(&mut self, _player: Player, _cell: CellId, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called once the game is over and any learning has happened.
    fn on_game_end(
        &mut self,
        _status: GameStatus,
        _board: &Board,
        _learning: &LearningReport,
    ) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl Observer for SilentObserver {}
