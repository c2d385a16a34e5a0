//! Avoidance set and its persistent store

use std::{collections::BTreeSet, fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Result, ports::AvoidanceRepository, types::MoveKey};

/// Keys the agent must not play into.
///
/// The set only grows. It is kept sorted so that persisted output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvoidanceSet {
    keys: BTreeSet<MoveKey>,
}

impl AvoidanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one key per line, skipping lines that are not valid keys.
    ///
    /// Surrounding whitespace is ignored and blank lines are dropped silently;
    /// any other malformed line is logged and skipped.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for (line_no, line) in lines.into_iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match MoveKey::parse(trimmed) {
                Ok(key) => {
                    set.insert(key);
                }
                Err(e) => warn!(line = line_no + 1, error = %e, "skipping malformed stored key"),
            }
        }
        set
    }

    /// Membership test
    pub fn contains(&self, key: &MoveKey) -> bool {
        self.keys.contains(key)
    }

    /// Insert one key, returning whether it was new
    pub fn insert(&mut self, key: MoveKey) -> bool {
        self.keys.insert(key)
    }

    /// Insert every key, returning how many were new
    pub fn merge(&mut self, keys: impl IntoIterator<Item = MoveKey>) -> usize {
        let mut added = 0;
        for key in keys {
            if self.keys.insert(key) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &MoveKey> {
        self.keys.iter()
    }
}

impl FromIterator<MoveKey> for AvoidanceSet {
    fn from_iter<I: IntoIterator<Item = MoveKey>>(iter: I) -> Self {
        AvoidanceSet {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AvoidanceSet {
    type Item = &'a MoveKey;
    type IntoIter = std::collections::btree_set::Iter<'a, MoveKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// The avoidance set together with the repository it is persisted to.
///
/// Built once at startup and handed to whoever plays and learns; there is no
/// hidden global copy.
pub struct AvoidanceStore {
    repository: Arc<dyn AvoidanceRepository + Send + Sync>,
    keys: AvoidanceSet,
}

impl fmt::Debug for AvoidanceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvoidanceStore")
            .field("keys", &self.keys.len())
            .finish()
    }
}

impl AvoidanceStore {
    /// Load the store from its repository.
    ///
    /// A repository that cannot be read is treated as holding no history:
    /// the failure is logged and the store starts empty, so play is never
    /// blocked by storage problems.
    pub fn open(repository: Arc<dyn AvoidanceRepository + Send + Sync>) -> Self {
        let keys = match repository.load() {
            Ok(keys) => {
                debug!(keys = keys.len(), "loaded avoidance set");
                keys
            }
            Err(e) => {
                warn!(error = %e, "could not load avoidance set; starting with no history");
                AvoidanceSet::new()
            }
        };
        Self { repository, keys }
    }

    /// Build a store around keys already in memory, without loading.
    pub fn with_keys(
        repository: Arc<dyn AvoidanceRepository + Send + Sync>,
        keys: AvoidanceSet,
    ) -> Self {
        Self { repository, keys }
    }

    /// The current in-memory set
    pub fn keys(&self) -> &AvoidanceSet {
        &self.keys
    }

    pub fn contains(&self, key: &MoveKey) -> bool {
        self.keys.contains(key)
    }

    /// Add keys in memory only, returning how many were new
    pub fn merge(&mut self, keys: impl IntoIterator<Item = MoveKey>) -> usize {
        self.keys.merge(keys)
    }

    /// Write the full set to the repository, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns the repository's error. The in-memory set is unaffected.
    pub fn persist(&self) -> Result<()> {
        self.repository.save(&self.keys)
    }
}
