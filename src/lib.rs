//! # gapscan: minimum-gap scans and zero-propagation
//!
//! gapscan is a small library of deterministic scans over in-memory numeric
//! data: closest-value analysis of one-dimensional sequences, and
//! zero-propagation over dense two-dimensional grids.
//!
//! ## Overview
//!
//! Every operation is a finite, single-threaded pass (or two) over data the
//! caller owns, with a focus on:
//!
//! - Generic numeric element types through `num-traits` bounds
//! - Explicit absence signaling for degenerate inputs instead of sentinels
//! - Validated construction at the boundary, never silent truncation
//!
//! ## Components
//!
//! 1. **Sequence scans**:
//!    - **Separation-constrained**: the minimum absolute difference between
//!      elements at least a given index distance apart, as a brute-force
//!      reference plus an equivalent sorted-window variant.
//!    - **Adjacent pairs**: the minimum adjacent difference of the sorted
//!      sequence, with every tied pair collected in order.
//!
//! 2. **Grid zeroing**: every cell sharing a row or column with a zero is
//!    itself zeroed, using two passes and an O(rows + cols) contamination
//!    mask.
//!
//! ## Usage
//!
//! Closest pairs of a sequence:
//!
//! ```
//! use gapscan::min_adjacent_pairs;
//!
//! let result = min_adjacent_pairs(&[6, 2, 4, 10]).unwrap();
//! assert_eq!(result.min_diff, 2);
//! assert_eq!(result.pairs, vec![(2, 4), (4, 6)]);
//! ```
//!
//! Zeroing contaminated rows and columns of a grid:
//!
//! ```
//! use gapscan::{zero_contaminated, DenseGrid};
//!
//! let mut grid =
//!     DenseGrid::from_rows(vec![vec![3, 4, 0], vec![5, 0, 9], vec![12, 13, 14]]).unwrap();
//! zero_contaminated(&mut grid);
//! assert_eq!(grid.row(2), &[12, 0, 0]);
//! ```

pub mod error;
pub mod grid;
pub mod sequence;
pub mod utils;

// Re-export primary components
pub use error::GridError;
pub use grid::{zero_contaminated, zeroed, DenseGrid};
pub use sequence::{
    min_adjacent_pairs, min_separated_difference, min_separated_difference_windowed,
    min_separated_difference_with, ClosestPairs, ScanStrategy,
};
pub use utils::{from_ndarray, to_ndarray};

/// Version information for the gapscan library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
