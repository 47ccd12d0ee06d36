//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::data::ParseInputError;

/// Malformed input rejected at construction time.
///
/// Rendering never fails once a [`Table`](crate::Table) or
/// [`Graph`](crate::Graph) has been built, so this is the only error the
/// library proper produces.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("headers must not be empty")]
    EmptyHeaders,

    /// `row` is 1-based and counts data rows only.
    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("the series must have at least one value")]
    EmptySeries,
}

/// Top-level error type bubbled up by the command line.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] ParseInputError),

    #[error("{0}")]
    Input(#[from] InvalidInputError),
}
