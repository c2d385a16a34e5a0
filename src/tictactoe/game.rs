//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};
use crate::{Result, types::CellId};

/// Status of a game in progress or finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Tie,
    /// The player chose to stop. For the agent this is a concession.
    Quit(Player),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    /// Outcome from the agent's point of view, once the game has ended
    pub fn outcome_kind(self) -> Option<OutcomeKind> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Won(player) if player.is_agent() => Some(OutcomeKind::HumanLost),
            GameStatus::Won(_) => Some(OutcomeKind::HumanWon),
            GameStatus::Tie => Some(OutcomeKind::Tie),
            GameStatus::Quit(player) if player.is_agent() => Some(OutcomeKind::AgentConceded),
            GameStatus::Quit(_) => Some(OutcomeKind::HumanQuit),
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The agent found no safe continuation and gave up
    AgentConceded,
    HumanWon,
    /// The agent completed a line
    HumanLost,
    Tie,
    HumanQuit,
}

impl OutcomeKind {
    /// Whether this outcome teaches the agent a line to avoid
    pub fn is_agent_loss(self) -> bool {
        matches!(self, OutcomeKind::AgentConceded | OutcomeKind::HumanWon)
    }
}

/// A single game: the board plus its status
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    /// Create a new game with the agent to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            status: GameStatus::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    /// Play a move for the player to move and return the new status
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has ended, or
    /// [`crate::Error::CellOccupied`] if the cell is taken.
    pub fn play(&mut self, cell: CellId) -> Result<GameStatus> {
        if self.status.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.play(cell)?;

        self.status = if self.board.has_won(player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::Ongoing
        };

        Ok(self.status)
    }

    /// End the game with the given player stopping
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already ended.
    pub fn quit(&mut self, player: Player) -> Result<GameStatus> {
        if self.status.is_over() {
            return Err(crate::Error::GameOver);
        }
        self.status = GameStatus::Quit(player);
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
