//! Tic-Tac-Toe agent that never repeats a loss
//!
//! This crate provides:
//! - A Tic-Tac-Toe board and game with the agent always playing X, first
//! - Move keys: one digit per ply, the agent's only memory format
//! - Symmetry expansion of losing lines over the eight board symmetries
//! - A persistent avoidance set and the move selector driven by it
//! - A console session and CLI for playing and inspecting what was learned

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod memory;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use memory::{AvoidanceSet, AvoidanceStore, MoveSelector, Selection};
pub use tictactoe::{Board, Game, GameStatus, OutcomeKind, Player};
pub use types::{CellId, MoveKey};
