//! End-of-game learning

use serde::Serialize;
use tracing::{error, info};

use super::{codec::encode, store::AvoidanceStore};
use crate::{
    Error, Result,
    tictactoe::{OutcomeKind, expand},
    types::{CellId, MoveKey},
};

/// What the learning step did after a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LearningReport {
    /// The outcome was not an agent loss
    Skipped,
    Recorded {
        /// Sequence ending at the agent's losing move
        base_key: MoveKey,
        /// Symmetric variants of `base_key`, including itself
        variants: Vec<MoveKey>,
        /// How many variants were not already known
        added: usize,
        /// Whether the updated set reached the repository
        persisted: bool,
    },
}

impl LearningReport {
    pub fn is_recorded(&self) -> bool {
        matches!(self, LearningReport::Recorded { .. })
    }
}

/// Key of the sequence up to the agent's final move.
///
/// The last ply of a lost game belongs to the human (their winning move) or
/// is the human reply the agent could not survive, so dropping it leaves the
/// agent decision that should not be repeated.
///
/// # Errors
///
/// Returns [`Error::PrefixTooShort`] for fewer than two plies and
/// [`Error::DuplicateCell`] if a cell is played twice.
pub fn losing_prefix(plies: &[CellId]) -> Result<MoveKey> {
    if plies.is_empty() {
        return Err(Error::PrefixTooShort {
            sequence: String::new(),
        });
    }
    let full = encode(plies, None)?;
    full.without_last().ok_or_else(|| Error::PrefixTooShort {
        sequence: full.to_string(),
    })
}

/// Learn from a finished game.
///
/// Only [`OutcomeKind::AgentConceded`] and [`OutcomeKind::HumanWon`] are
/// recorded. The losing prefix and all its symmetric variants are merged into
/// the store and the store is persisted. A failed persist is logged and
/// reported but is not an error: the in-memory set already holds the keys.
///
/// # Errors
///
/// Returns [`Error::PrefixTooShort`] if a loss is reported with fewer than two
/// plies, or an encoding error if `plies` repeats a cell.
pub fn record_outcome_if_loss(
    store: &mut AvoidanceStore,
    plies: &[CellId],
    outcome: OutcomeKind,
) -> Result<LearningReport> {
    if !outcome.is_agent_loss() {
        return Ok(LearningReport::Skipped);
    }

    let base_key = losing_prefix(plies)?;
    let variants: Vec<MoveKey> = expand(&base_key).into_iter().collect();
    let added = store.merge(variants.iter().cloned());
    info!(
        %base_key,
        variants = variants.len(),
        added,
        ?outcome,
        "learned losing sequence"
    );

    let persisted = match store.persist() {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "failed to persist avoidance set; keeping it in memory");
            false
        }
    };

    Ok(LearningReport::Recorded {
        base_key,
        variants,
        added,
        persisted,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::InMemoryRepository;

    fn cells(values: &[usize]) -> Vec<CellId> {
        values.iter().map(|&v| CellId::new(v).unwrap()).collect()
    }

    fn key(s: &str) -> MoveKey {
        MoveKey::parse(s).unwrap()
    }

    fn fresh_store() -> (InMemoryRepository, AvoidanceStore) {
        let repo = InMemoryRepository::new();
        let store = AvoidanceStore::open(Arc::new(repo.clone()));
        (repo, store)
    }

    #[test]
    fn test_losing_prefix_drops_last_ply() {
        assert_eq!(losing_prefix(&cells(&[1, 5, 9, 2, 7, 8])).unwrap(), "15927");
        assert_eq!(losing_prefix(&cells(&[3, 5])).unwrap(), "3");
    }

    #[test]
    fn test_losing_prefix_too_short() {
        assert!(matches!(
            losing_prefix(&cells(&[5])),
            Err(Error::PrefixTooShort { .. })
        ));
        assert!(matches!(
            losing_prefix(&[]),
            Err(Error::PrefixTooShort { .. })
        ));
    }

    #[test]
    fn test_losing_prefix_rejects_repeated_cell() {
        assert!(matches!(
            losing_prefix(&cells(&[1, 1, 2])),
            Err(Error::DuplicateCell { cell: 1, .. })
        ));
    }

    #[test]
    fn test_repeated_cell_is_not_learned() {
        let (repo, mut store) = fresh_store();
        let result = record_outcome_if_loss(&mut store, &cells(&[1, 1, 2]), OutcomeKind::HumanWon);

        assert!(matches!(result, Err(Error::DuplicateCell { .. })));
        assert!(store.keys().is_empty());
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn test_human_win_records_all_variants() {
        let (repo, mut store) = fresh_store();
        let plies = cells(&[1, 5, 9, 2, 7, 8]);

        let report = record_outcome_if_loss(&mut store, &plies, OutcomeKind::HumanWon).unwrap();

        let LearningReport::Recorded {
            base_key,
            variants,
            added,
            persisted,
        } = report
        else {
            panic!("expected a recorded loss");
        };
        assert_eq!(base_key, "15927");
        assert!(variants.contains(&base_key));
        assert_eq!(added, variants.len());
        assert!(persisted);
        for variant in &variants {
            assert!(store.contains(variant));
        }
        assert_eq!(repo.save_count(), 1);
        assert_eq!(repo.stored().unwrap(), *store.keys());
    }

    #[test]
    fn test_concession_is_recorded() {
        let (_repo, mut store) = fresh_store();
        let plies = cells(&[1, 5]);

        let report =
            record_outcome_if_loss(&mut store, &plies, OutcomeKind::AgentConceded).unwrap();

        assert!(report.is_recorded());
        for corner in ["1", "3", "7", "9"] {
            assert!(store.contains(&key(corner)));
        }
        assert_eq!(store.keys().len(), 4);
    }

    #[test]
    fn test_non_losses_leave_store_unchanged() {
        let plies = cells(&[1, 5, 9, 2, 7, 8]);
        for outcome in [OutcomeKind::Tie, OutcomeKind::HumanQuit, OutcomeKind::HumanLost] {
            let (repo, mut store) = fresh_store();
            let report = record_outcome_if_loss(&mut store, &plies, outcome).unwrap();
            assert_eq!(report, LearningReport::Skipped);
            assert!(store.keys().is_empty());
            assert_eq!(repo.save_count(), 0);
        }
    }

    #[test]
    fn test_repeat_loss_adds_nothing_but_still_persists() {
        let (repo, mut store) = fresh_store();
        let plies = cells(&[1, 5, 9, 2, 7, 8]);
        record_outcome_if_loss(&mut store, &plies, OutcomeKind::HumanWon).unwrap();
        let before = store.keys().clone();

        let report = record_outcome_if_loss(&mut store, &plies, OutcomeKind::HumanWon).unwrap();

        assert!(matches!(report, LearningReport::Recorded { added: 0, .. }));
        assert_eq!(store.keys(), &before);
        assert_eq!(repo.save_count(), 2);
    }

    #[test]
    fn test_persist_failure_is_reported_not_raised() {
        let (repo, mut store) = fresh_store();
        repo.fail_saves(true);
        let plies = cells(&[1, 5, 9, 2, 7, 8]);

        let report = record_outcome_if_loss(&mut store, &plies, OutcomeKind::HumanWon).unwrap();

        assert!(matches!(
            report,
            LearningReport::Recorded {
                persisted: false,
                ..
            }
        ));
        assert!(store.contains(&key("15927")));
    }
}
