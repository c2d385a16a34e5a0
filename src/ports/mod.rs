//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the domain layer and infrastructure.
//! Following hexagonal architecture, these traits are owned by the domain and
//! implemented by adapters in the infrastructure layer.

pub mod board;
pub mod human;
pub mod observer;
pub mod repository;

pub use board::BoardAdapter;
pub use human::{HumanMove, HumanPlayer};
pub use observer::{Observer, SilentObserver};
pub use repository::AvoidanceRepository;
