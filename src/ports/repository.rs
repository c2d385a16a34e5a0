//! Repository port for avoidance-set persistence.
//!
//! This module defines the trait boundary between the domain and infrastructure
//! layers for storing and retrieving the keys the agent has learned to avoid.

use crate::{Result, memory::AvoidanceSet};

/// Port for persisting and loading the avoidance set.
///
/// This trait abstracts the storage mechanism, allowing different implementations
/// (plain text files, in-memory for tests) without coupling the domain logic to
/// a specific format.
///
/// # Examples
///
/// ```no_run
/// use recall::ports::AvoidanceRepository;
/// use recall::memory::AvoidanceSet;
///
/// fn backup<R: AvoidanceRepository>(from: &R, to: &R) -> recall::Result<()> {
///     let keys: AvoidanceSet = from.load()?;
///     to.save(&keys)
/// }
/// ```
pub trait AvoidanceRepository {
    /// Load every stored key.
    ///
    /// Storage that has never been written is not an error: it yields an
    /// empty set. Lines that are not valid keys are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if existing storage cannot be read.
    fn load(&self) -> Result<AvoidanceSet>;

    /// Replace the stored keys with `keys`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be created or written to.
    fn save(&self, keys: &AvoidanceSet) -> Result<()>;
}
