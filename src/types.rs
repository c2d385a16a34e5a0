//! Newtype wrappers for board cells and move keys.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const BOARD_DIMENSION: usize = 3;

/// A cell on the board, numbered 1-9 in row-major order.
///
/// Cell 1 is the top-left corner and cell 9 the bottom-right corner:
///
/// ```text
///  1 | 2 | 3
/// ---+---+---
///  4 | 5 | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellId(u8);

impl CellId {
    /// Create a new cell identifier, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCell`] if the value is not in 1..=9.
    ///
    /// # Examples
    ///
    /// ```
    /// use recall::types::CellId;
    ///
    /// assert_eq!(CellId::new(5).unwrap().value(), 5);
    /// assert!(CellId::new(0).is_err());
    /// assert!(CellId::new(10).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if (1..=CELL_COUNT).contains(&value) {
            Ok(CellId(value as u8))
        } else {
            Err(Error::InvalidCell { cell: value })
        }
    }

    /// Create a cell from a 1-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinates`] if either coordinate is outside 1..=3.
    pub fn from_row_column(row: usize, column: usize) -> Result<Self> {
        let in_range = |v: usize| (1..=BOARD_DIMENSION).contains(&v);
        if !in_range(row) || !in_range(column) {
            return Err(Error::InvalidCoordinates { row, column });
        }
        Self::new((row - 1) * BOARD_DIMENSION + column)
    }

    /// All nine cells in ascending order.
    pub fn all() -> impl Iterator<Item = CellId> {
        (1..=CELL_COUNT as u8).map(CellId)
    }

    /// Get the 1-based cell number.
    pub fn value(self) -> usize {
        self.0 as usize
    }

    /// Get the 0-based array index for this cell.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Row of this cell, 1-based.
    pub fn row(self) -> usize {
        (self.index() / BOARD_DIMENSION) + 1
    }

    /// Column of this cell, 1-based.
    pub fn column(self) -> usize {
        (self.index() % BOARD_DIMENSION) + 1
    }

    /// The single digit used for this cell in a [`MoveKey`].
    pub fn digit(self) -> char {
        char::from(b'0' + self.0)
    }

    fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as usize).ok())
    }
}

impl TryFrom<usize> for CellId {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CellId> for usize {
    fn from(cell: CellId) -> Self {
        cell.value()
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical encoding of a ply sequence: one digit per ply, in play order.
///
/// A key always holds between one and nine digits from `1`-`9`, and no digit
/// appears twice. Keys are ordered as plain strings so that a sorted set of
/// keys is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoveKey(String);

impl MoveKey {
    /// Parse a key from its digit string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] for an empty string or a non-digit
    /// character, and [`Error::DuplicateCell`] if a digit repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use recall::types::MoveKey;
    ///
    /// let key = MoveKey::parse("159").unwrap();
    /// assert_eq!(key.len(), 3);
    /// assert!(MoveKey::parse("150").is_err());
    /// assert!(MoveKey::parse("151").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let cells = s
            .chars()
            .map(|c| {
                CellId::from_digit(c).ok_or_else(|| Error::MalformedKey {
                    key: s.to_string(),
                    reason: format!("'{c}' is not a cell digit 1-9"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(cells)
    }

    /// Build a key from an ordered sequence of cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedKey`] if the sequence is empty and
    /// [`Error::DuplicateCell`] if a cell repeats.
    pub fn from_cells(cells: impl IntoIterator<Item = CellId>) -> Result<Self> {
        let mut seen = [false; CELL_COUNT];
        let mut encoded = String::with_capacity(CELL_COUNT);
        for cell in cells {
            encoded.push(cell.digit());
            if std::mem::replace(&mut seen[cell.index()], true) {
                return Err(Error::DuplicateCell {
                    cell: cell.value(),
                    sequence: encoded,
                });
            }
        }

        if encoded.is_empty() {
            return Err(Error::MalformedKey {
                key: encoded,
                reason: "key is empty".to_string(),
            });
        }

        Ok(MoveKey(encoded))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of plies encoded by this key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keys are never empty; provided for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the cells in play order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.0.bytes().map(|b| CellId(b - b'0'))
    }

    /// Relabel every cell through `f`, keeping ply order.
    ///
    /// `f` must be a bijection on cells, otherwise the result could repeat a cell.
    pub(crate) fn map_cells(&self, f: impl Fn(CellId) -> CellId) -> MoveKey {
        let mapped: String = self.cells().map(|cell| f(cell).digit()).collect();
        debug_assert!(Self::parse(&mapped).is_ok(), "cell mapping is not a bijection");
        MoveKey(mapped)
    }

    /// The key with its final ply removed, or `None` for a single-ply key.
    pub fn without_last(&self) -> Option<MoveKey> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(MoveKey(self.0[..self.0.len() - 1].to_string()))
    }

    /// Human-readable `(row,column)` rendering, e.g. `159` becomes
    /// `(1,1)-(2,2)-(3,3)`.
    pub fn verbose(&self) -> String {
        self.cells()
            .map(|cell| format!("({},{})", cell.row(), cell.column()))
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl TryFrom<String> for MoveKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MoveKey> for String {
    fn from(key: MoveKey) -> Self {
        key.0
    }
}

impl Borrow<str> for MoveKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for MoveKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for MoveKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
