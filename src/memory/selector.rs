//! Agent move selection

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{codec::encode, store::AvoidanceSet};
use crate::{
    Error, Result,
    ports::BoardAdapter,
    types::{CELL_COUNT, CellId},
};

/// What the agent decided to do on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Play(CellId),
    /// Every continuation is known to lose; the agent stops and takes the loss
    Concede,
}

impl Selection {
    pub fn cell(self) -> Option<CellId> {
        match self {
            Selection::Play(cell) => Some(cell),
            Selection::Concede => None,
        }
    }
}

/// Chooses the agent's moves from the avoidance set.
///
/// The opening move is uniformly random over all nine cells: symmetry
/// expansion already folds every opening into a handful of classes, so any
/// cell is as good as any other. After that the selector takes the lowest
/// numbered empty cell whose key is not in the avoidance set. It never
/// writes to the set.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Selector backed by a seeded `StdRng`, or an entropy seed when `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self::new(rng)
    }
}

impl<R: Rng> MoveSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Select the agent's next move.
    ///
    /// `empty_cells` may be in any order; candidates are tried in ascending
    /// cell order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if there is no empty cell after the
    /// opening, and propagates encoding errors if a candidate repeats a ply.
    pub fn select_agent_move(
        &mut self,
        plies: &[CellId],
        empty_cells: &[CellId],
        avoid: &AvoidanceSet,
    ) -> Result<Selection> {
        if plies.is_empty() {
            return Ok(Selection::Play(self.opening_cell()?));
        }
        Self::first_safe(plies, empty_cells, avoid)
    }

    /// Select the agent's next move on a board.
    ///
    /// # Errors
    ///
    /// See [`MoveSelector::select_agent_move`].
    pub fn select_for<B: BoardAdapter + ?Sized>(
        &mut self,
        board: &B,
        avoid: &AvoidanceSet,
    ) -> Result<Selection> {
        self.select_agent_move(board.plies(), &board.empty_cells(), avoid)
    }

    fn opening_cell(&mut self) -> Result<CellId> {
        CellId::new(self.rng.random_range(1..=CELL_COUNT))
    }

    fn first_safe(
        plies: &[CellId],
        empty_cells: &[CellId],
        avoid: &AvoidanceSet,
    ) -> Result<Selection> {
        if empty_cells.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let mut candidates = empty_cells.to_vec();
        candidates.sort_unstable();
        candidates.dedup();

        for candidate in candidates {
            let key = encode(plies, Some(candidate))?;
            if !avoid.contains(&key) {
                return Ok(Selection::Play(candidate));
            }
            debug!(%key, "skipping known losing continuation");
        }

        debug!(plies = plies.len(), "no safe continuation left, conceding");
        Ok(Selection::Concede)
    }
}
