//! Loss memory: the agent's only strategy.
//!
//! Every ply sequence is encoded as a [`MoveKey`](crate::types::MoveKey). When
//! the agent loses, the prefix ending at its last move is expanded under all
//! board symmetries and stored; on later turns the agent refuses any move
//! whose resulting key is stored.

pub mod codec;
pub mod learning;
pub mod selector;
pub mod store;

pub use codec::{encode, encode_values};
pub use learning::{LearningReport, losing_prefix, record_outcome_if_loss};
pub use selector::{MoveSelector, Selection};
pub use store::{AvoidanceSet, AvoidanceStore};
