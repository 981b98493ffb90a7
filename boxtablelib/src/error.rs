//! Error types for boxtablelib

use std::path::PathBuf;
use thiserror::Error;

/// Ways a table's header and rows can disagree on their column count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMismatch {
    /// The header (or width list) has zero columns
    #[error("table has no columns")]
    EmptyHeader,

    /// A data row has a different length than the header
    #[error("row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row passed to the row drawer does not match the width list
    #[error("got {found} values for {expected} columns")]
    Cells { expected: usize, found: usize },
}

/// Errors that can occur while loading or rendering a table
#[derive(Error, Debug)]
pub enum BoxTableError {
    /// Header and rows disagree on shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),

    /// A cell holds something with no scalar text form (array, object)
    #[error("unrepresentable value at row {row}, column {column}")]
    UnrepresentableValue { row: usize, column: usize },

    /// A result set inside a batch failed to load (index is zero-based)
    #[error("result set {index}: {source}")]
    InBatch {
        index: usize,
        source: Box<BoxTableError>,
    },

    /// Malformed JSON input
    #[error("invalid result set JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read input from a stream such as stdin
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
