//! In-memory avoidance repository for testing.
//!
//! This adapter provides a pure in-memory implementation of
//! AvoidanceRepository, enabling fast session tests without any file system
//! I/O. Loads and saves can be made to fail on demand.

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::{Result, error::Error, memory::AvoidanceSet, ports::AvoidanceRepository};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use recall::adapters::InMemoryRepository;
/// use recall::memory::AvoidanceSet;
/// use recall::ports::AvoidanceRepository;
/// use recall::types::MoveKey;
///
/// let repo = InMemoryRepository::new();
/// let keys: AvoidanceSet = [MoveKey::parse("153")?].into_iter().collect();
///
/// repo.save(&keys)?;
/// assert_eq!(repo.load()?, keys);
/// # Ok::<(), recall::Error>(())
/// ```
///
/// # Thread Safety
///
/// Clones share the same underlying storage and counters, so a test can keep
/// one clone to inspect what a session saved through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Option<AvoidanceSet>>>,
    saves: Arc<AtomicUsize>,
    fail_loads: Arc<AtomicBool>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryRepository {
    /// Create a repository that has never been written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `keys`.
    pub fn with_keys(keys: AvoidanceSet) -> Self {
        let repo = Self::new();
        *repo.storage() = Some(keys);
        repo
    }

    /// Make every subsequent `load` fail (or succeed again).
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The last saved set, or `None` if nothing was ever stored.
    pub fn stored(&self) -> Option<AvoidanceSet> {
        self.storage().clone()
    }

    fn storage(&self) -> MutexGuard<'_, Option<AvoidanceSet>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn injected_failure(operation: &str) -> Error {
        Error::Io {
            operation: operation.to_string(),
            source: std::io::Error::other("injected failure"),
        }
    }
}

impl AvoidanceRepository for InMemoryRepository {
    fn load(&self) -> Result<AvoidanceSet> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("load avoidance set from memory"));
        }
        Ok(self.storage().clone().unwrap_or_default())
    }

    fn save(&self, keys: &AvoidanceSet) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("save avoidance set to memory"));
        }
        *self.storage() = Some(keys.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
