//! Board port - the view of a game the move selector needs.

use crate::types::CellId;

/// Read access to the game in progress.
///
/// The selector only needs the chronological plies and whether a cell is
/// still free; anything that can answer those two questions can drive it.
pub trait BoardAdapter {
    /// Cells played so far, oldest first.
    fn plies(&self) -> &[CellId];

    /// Whether `cell` has not been played yet.
    fn is_cell_empty(&self, cell: CellId) -> bool;

    /// Free cells in ascending order.
    fn empty_cells(&self) -> Vec<CellId> {
        CellId::all().filter(|&c| self.is_cell_empty(c)).collect()
    }
}
