//! Error types for the recall crate

use thiserror::Error;

/// Main error type for the recall crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {cell} is out of bounds (must be 1-9)")]
    InvalidCell { cell: usize },

    #[error("row {row}, column {column} is not on the board (both must be 1-3)")]
    InvalidCoordinates { row: usize, column: usize },

    #[error("cell {cell} appears more than once in move sequence '{sequence}'")]
    DuplicateCell { cell: usize, sequence: String },

    #[error("malformed move key '{key}': {reason}")]
    MalformedKey { key: String, reason: String },

    #[error("invalid move: cell {cell} is already occupied")]
    CellOccupied { cell: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("move sequence '{sequence}' is too short to derive a losing prefix")]
    PrefixTooShort { sequence: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
