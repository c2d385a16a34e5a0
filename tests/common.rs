//! Common test utilities for the recall test suite.
//!
//! This module provides fixtures shared across integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};
use recall::{
    adapters::TextFileRepository,
    memory::{AvoidanceSet, AvoidanceStore, MoveSelector},
    types::{CellId, MoveKey},
};
use tempfile::TempDir;

/// Cells from raw numbers.
pub fn cells(values: &[usize]) -> Vec<CellId> {
    values
        .iter()
        .map(|&v| CellId::new(v).expect("test cell in range"))
        .collect()
}

/// Avoidance set from key strings.
pub fn avoidance_set(keys: &[&str]) -> AvoidanceSet {
    keys.iter()
        .map(|k| MoveKey::parse(k).expect("test key is valid"))
        .collect()
}

/// Every empty cell after `plies`, ascending.
pub fn empty_after(plies: &[CellId]) -> Vec<CellId> {
    CellId::all().filter(|c| !plies.contains(c)).collect()
}

/// Text-file repository inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the repository is used.
pub fn temp_repository() -> (TempDir, TextFileRepository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = TextFileRepository::new(
        dir.path().join("tttConcise.log"),
        dir.path().join("tttVerbose.log"),
    );
    (dir, repo)
}

/// Store opened on a fresh text-file repository.
pub fn temp_store() -> (TempDir, TextFileRepository, AvoidanceStore) {
    let (dir, repo) = temp_repository();
    let store = AvoidanceStore::open(Arc::new(repo.clone()));
    (dir, repo, store)
}

/// Seeded selector.
pub fn selector(seed: u64) -> MoveSelector<StdRng> {
    MoveSelector::new(StdRng::seed_from_u64(seed))
}

/// A seed whose first opening move is `cell`.
pub fn seed_opening_with(cell: usize) -> u64 {
    (0..10_000)
        .find(|&seed| {
            selector(seed)
                .select_agent_move(&[], &empty_after(&[]), &AvoidanceSet::new())
                .ok()
                .and_then(|s| s.cell())
                .is_some_and(|c| c.value() == cell)
        })
        .expect("some seed opens in every cell")
}
