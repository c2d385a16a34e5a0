//! D4 symmetry group operations for move keys
//!
//! Each symmetry is stored as a fixed permutation table: entry `d - 1` holds
//! the cell that a piece on cell `d` lands on.
//!
//! ```text
//!  1 2 3
//!  4 5 6
//!  7 8 9
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{CELL_COUNT, CellId, MoveKey};

/// One of the eight symmetries of the square (dihedral group D4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise
    Rotate90,
    Rotate180,
    /// Quarter turn counter-clockwise
    Rotate270,
    /// Mirror across the horizontal axis (top row swaps with bottom row)
    FlipHorizontal,
    /// Mirror across the vertical axis (left column swaps with right column)
    FlipVertical,
    /// Mirror across the 1-5-9 diagonal
    FlipMainDiagonal,
    /// Mirror across the 3-5-7 diagonal
    FlipAntiDiagonal,
}

const IDENTITY: [u8; CELL_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
const ROTATE_90: [u8; CELL_COUNT] = [3, 6, 9, 2, 5, 8, 1, 4, 7];
const ROTATE_180: [u8; CELL_COUNT] = [9, 8, 7, 6, 5, 4, 3, 2, 1];
const ROTATE_270: [u8; CELL_COUNT] = [7, 4, 1, 8, 5, 2, 9, 6, 3];
const FLIP_HORIZONTAL: [u8; CELL_COUNT] = [7, 8, 9, 4, 5, 6, 1, 2, 3];
const FLIP_VERTICAL: [u8; CELL_COUNT] = [3, 2, 1, 6, 5, 4, 9, 8, 7];
const FLIP_MAIN_DIAGONAL: [u8; CELL_COUNT] = [1, 4, 7, 2, 5, 8, 3, 6, 9];
const FLIP_ANTI_DIAGONAL: [u8; CELL_COUNT] = [9, 6, 3, 8, 5, 2, 7, 4, 1];

impl Symmetry {
    /// All 8 symmetries, identity first
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::FlipMainDiagonal,
        Symmetry::FlipAntiDiagonal,
    ];

    /// Permutation table for this symmetry
    pub const fn table(self) -> &'static [u8; CELL_COUNT] {
        match self {
            Symmetry::Identity => &IDENTITY,
            Symmetry::Rotate90 => &ROTATE_90,
            Symmetry::Rotate180 => &ROTATE_180,
            Symmetry::Rotate270 => &ROTATE_270,
            Symmetry::FlipHorizontal => &FLIP_HORIZONTAL,
            Symmetry::FlipVertical => &FLIP_VERTICAL,
            Symmetry::FlipMainDiagonal => &FLIP_MAIN_DIAGONAL,
            Symmetry::FlipAntiDiagonal => &FLIP_ANTI_DIAGONAL,
        }
    }

    /// Where a piece on `cell` lands under this symmetry
    pub fn apply_to_cell(self, cell: CellId) -> CellId {
        let target = self.table()[cell.index()] as usize;
        CellId::new(target).unwrap_or(cell)
    }

    /// Apply this symmetry to every ply of a key. Length and ply order are
    /// preserved; only the cells change.
    pub fn apply(self, key: &MoveKey) -> MoveKey {
        key.map_cells(|cell| self.apply_to_cell(cell))
    }
}

/// All keys equivalent to `key` under board symmetry, including `key` itself.
///
/// Keys that lie on an axis of symmetry map onto themselves under some
/// transforms, so the result holds between 1 and 8 keys.
///
/// # Examples
///
/// ```
/// use recall::tictactoe::symmetry::expand;
/// use recall::types::MoveKey;
///
/// let center = MoveKey::parse("5").unwrap();
/// assert_eq!(expand(&center).len(), 1);
///
/// let corner = MoveKey::parse("1").unwrap();
/// assert_eq!(expand(&corner).len(), 4);
/// ```
pub fn expand(key: &MoveKey) -> BTreeSet<MoveKey> {
    Symmetry::ALL
        .iter()
        .map(|symmetry| symmetry.apply(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn key(s: &str) -> MoveKey {
        MoveKey::parse(s).unwrap()
    }

    /// Rotate clockwise in quarter turns after an optional left-right
    /// reflection, on 0-based positions.
    fn geometric_position(pos: usize, rotation: u16, reflection: bool) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);
        if reflection {
            col = 2 - col;
        }
        for _ in 0..(rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }
        row * 3 + col
    }

    fn geometric_table(rotation: u16, reflection: bool) -> [u8; 9] {
        let mut table = [0u8; 9];
        for (pos, slot) in table.iter_mut().enumerate() {
            *slot = geometric_position(pos, rotation, reflection) as u8 + 1;
        }
        table
    }

    #[test]
    fn test_tables_match_geometry() {
        assert_eq!(*Symmetry::Identity.table(), geometric_table(0, false));
        assert_eq!(*Symmetry::Rotate90.table(), geometric_table(90, false));
        assert_eq!(*Symmetry::Rotate180.table(), geometric_table(180, false));
        assert_eq!(*Symmetry::Rotate270.table(), geometric_table(270, false));
        assert_eq!(*Symmetry::FlipVertical.table(), geometric_table(0, true));
        assert_eq!(*Symmetry::FlipAntiDiagonal.table(), geometric_table(90, true));
        assert_eq!(*Symmetry::FlipHorizontal.table(), geometric_table(180, true));
        assert_eq!(*Symmetry::FlipMainDiagonal.table(), geometric_table(270, true));
    }

    #[test]
    fn test_tables_are_distinct_permutations() {
        let mut seen = HashSet::new();
        for symmetry in Symmetry::ALL {
            let table = symmetry.table();
            let mut sorted = *table;
            sorted.sort_unstable();
            assert_eq!(sorted, IDENTITY, "{symmetry:?} is not a permutation");
            assert!(seen.insert(*table), "{symmetry:?} duplicates another table");
        }
    }

    #[test]
    fn test_center_is_fixed() {
        let center = CellId::new(5).unwrap();
        for symmetry in Symmetry::ALL {
            assert_eq!(symmetry.apply_to_cell(center), center);
        }
    }

    #[test]
    fn test_apply_preserves_length_and_order() {
        let original = key("1378");
        for symmetry in Symmetry::ALL {
            let transformed = symmetry.apply(&original);
            assert_eq!(transformed.len(), original.len());
        }
        assert_eq!(Symmetry::Rotate90.apply(&original), "3914");
        assert_eq!(Symmetry::FlipVertical.apply(&original), "3198");
    }

    #[test]
    fn test_expand_contains_original() {
        for s in ["1", "2", "5", "15", "1378", "15927", "12345678"] {
            let k = key(s);
            let variants = expand(&k);
            assert!(variants.contains(&k));
            assert!((1..=8).contains(&variants.len()));
            assert!(variants.iter().all(|v| v.len() == k.len()));
        }
    }

    #[test]
    fn test_expand_sizes() {
        // Center opening has no distinct images
        assert_eq!(expand(&key("5")).len(), 1);
        // Edge and corner openings each have four
        assert_eq!(expand(&key("2")).len(), 4);
        assert_eq!(expand(&key("9")).len(), 4);
        // Corner then center lies on a diagonal: four images
        assert_eq!(expand(&key("15")).len(), 4);
        // Asymmetric sequence: all eight
        assert_eq!(expand(&key("1378")).len(), 8);
    }

    #[test]
    fn test_expand_is_closed() {
        let variants = expand(&key("15927"));
        for variant in &variants {
            assert_eq!(&expand(variant), &variants);
        }
    }
}
