//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, Player};
pub use game::{Game, GameStatus, OutcomeKind};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::{Symmetry, expand};
