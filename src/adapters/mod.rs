//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod console;
pub mod in_memory_repository;
pub mod scripted;
pub mod text_repository;

pub use console::{ConsoleHuman, ConsoleObserver, MoveInput, parse_move_input};
pub use in_memory_repository::InMemoryRepository;
pub use scripted::ScriptedHuman;
pub use text_repository::{DEFAULT_CONCISE_FILE, DEFAULT_VERBOSE_FILE, TextFileRepository};
