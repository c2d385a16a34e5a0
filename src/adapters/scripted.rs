//! Scripted human player for tests and replays.

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    Result,
    ports::{HumanMove, HumanPlayer},
    tictactoe::Board,
    types::CellId,
};

/// Human player that follows a fixed script.
///
/// Each game takes moves from the front of the queue. A scripted cell that is
/// already occupied is skipped, and when the script runs out the human quits.
/// After each game it agrees to play again while `games_remaining` allows.
///
/// # Examples
///
/// ```
/// use recall::adapters::ScriptedHuman;
/// use recall::ports::{HumanMove, HumanPlayer};
/// use recall::tictactoe::Board;
///
/// let mut human = ScriptedHuman::from_values(&[5, 9])?;
/// let board = Board::new();
/// assert!(matches!(human.next_move(&board)?, HumanMove::Play(cell) if cell.value() == 5));
/// # Ok::<(), recall::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedHuman {
    moves: VecDeque<CellId>,
    games_remaining: usize,
}

impl ScriptedHuman {
    pub fn new(moves: impl IntoIterator<Item = CellId>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            games_remaining: 0,
        }
    }

    /// Script from raw cell numbers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCell`] for a number outside 1..=9.
    pub fn from_values(values: &[usize]) -> Result<Self> {
        let moves = values
            .iter()
            .map(|&value| CellId::new(value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(moves))
    }

    /// Agree to this many further games after the first.
    pub fn with_extra_games(mut self, games: usize) -> Self {
        self.games_remaining = games;
        self
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl HumanPlayer for ScriptedHuman {
    fn next_move(&mut self, board: &Board) -> Result<HumanMove> {
        while let Some(cell) = self.moves.pop_front() {
            if board.is_empty(cell) {
                return Ok(HumanMove::Play(cell));
            }
            debug!(%cell, "scripted cell already taken, skipping");
        }
        Ok(HumanMove::Quit)
    }

    fn wants_another_game(&mut self) -> Result<bool> {
        if self.games_remaining == 0 {
            return Ok(false);
        }
        self.games_remaining -= 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_occupied_and_quits_when_exhausted() {
        let mut board = Board::new();
        board.play(CellId::new(5).unwrap()).unwrap();
        let mut human = ScriptedHuman::from_values(&[5, 1]).unwrap();

        assert_eq!(
            human.next_move(&board).unwrap(),
            HumanMove::Play(CellId::new(1).unwrap())
        );
        assert_eq!(human.next_move(&board).unwrap(), HumanMove::Quit);
    }

    #[test]
    fn test_extra_games() {
        let mut human = ScriptedHuman::default().with_extra_games(2);
        assert!(human.wants_another_game().unwrap());
        assert!(human.wants_another_game().unwrap());
        assert!(!human.wants_another_game().unwrap());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(ScriptedHuman::from_values(&[0]).is_err());
    }
}
