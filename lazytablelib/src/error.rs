//! Error types for lazytablelib

use thiserror::Error;

/// Errors that can occur while formatting or streaming a table
#[derive(Error, Debug)]
pub enum LazyTableError {
    /// Writing to or flushing the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row does not have as many cells as the table has columns
    #[error("row {row} has {found} cells, expected {expected}")]
    RowArity {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Unknown table format name
    #[error("unknown table format '{0}' (expected one of: plain, simple, grid, pipe, github)")]
    UnknownFormat(String),

    /// The row source failed to produce a row
    #[error("row source failed: {0}")]
    RowSource(#[source] Box<dyn std::error::Error + Send + Sync>),
}
