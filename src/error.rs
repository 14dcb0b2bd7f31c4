//! Error types for grid construction and validation

use thiserror::Error;

/// Errors produced when building a grid from caller-supplied rows
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The input rows do not all share the width established by the first row
    #[error("row {row} has {actual} columns, expected {expected}")]
    JaggedRow {
        /// Index of the first offending row
        row: usize,
        /// Width established by the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },
}
