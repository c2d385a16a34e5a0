//! Move key encoding

use crate::{
    Result,
    types::{CellId, MoveKey},
};

/// Encode a ply sequence, optionally followed by one candidate cell.
///
/// The result holds one digit per ply in play order, so the same sequence
/// always yields the same key and `encode(s, Some(c))` is `encode(s, None)`
/// followed by the digit of `c`.
///
/// # Errors
///
/// Returns [`crate::Error::DuplicateCell`] if `pending` (or any ply) repeats
/// a cell, and [`crate::Error::MalformedKey`] if there is nothing to encode.
///
/// # Examples
///
/// ```
/// use recall::memory::encode;
/// use recall::types::CellId;
///
/// let plies = [CellId::new(1)?, CellId::new(5)?];
/// let key = encode(&plies, Some(CellId::new(9)?))?;
/// assert_eq!(key.as_str(), "159");
/// # Ok::<(), recall::Error>(())
/// ```
pub fn encode(plies: &[CellId], pending: Option<CellId>) -> Result<MoveKey> {
    MoveKey::from_cells(plies.iter().copied().chain(pending))
}

/// Encode raw cell numbers, validating each is in 1..=9.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidCell`] for a number outside 1..=9, plus the
/// errors of [`encode`].
pub fn encode_values(plies: &[usize], pending: Option<usize>) -> Result<MoveKey> {
    let plies = plies
        .iter()
        .map(|&value| CellId::new(value))
        .collect::<Result<Vec<_>>>()?;
    let pending = pending.map(CellId::new).transpose()?;
    encode(&plies, pending)
}
