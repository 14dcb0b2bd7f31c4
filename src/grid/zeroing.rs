//! Zero-propagation over contaminated rows and columns
//!
//! A row or column is contaminated when it holds at least one zero-valued
//! cell. Zeroing replaces every cell of every contaminated row and column with
//! zero, in two passes: one read-only pass building the contamination mask,
//! one write pass applying it. The mask costs O(rows + cols) space instead of
//! replaying the grid.

use num_traits::Num;

use crate::grid::DenseGrid;

/// Row and column flags marking where zeros were observed
///
/// Built once per zeroing call and discarded afterwards.
struct ZeroMask {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl ZeroMask {
    /// Scans every cell once and flags the row and column of each zero
    fn scan<T>(grid: &DenseGrid<T>) -> Self
    where
        T: Copy + Num,
    {
        let mut rows = vec![false; grid.n_rows];
        let mut cols = vec![false; grid.n_cols];

        for (i, row) in grid.row_iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_zero() {
                    rows[i] = true;
                    cols[j] = true;
                }
            }
        }

        Self { rows, cols }
    }
}

/// Zeroes every cell whose row or column contained a zero, in place.
///
/// Cells sharing no row or column with an original zero are untouched; every
/// cell of a contaminated row or column becomes zero, including the cells that
/// held zero already. Pass 1 only reads, so an interrupted call cannot leave
/// the grid partially mutated. The operation is idempotent.
///
/// A grid with zero rows or zero columns is returned unchanged.
///
/// Not safe for concurrent mutation of a grid shared across threads without
/// external synchronization.
///
/// # Examples
///
/// ```
/// use gapscan::{zero_contaminated, DenseGrid};
///
/// let mut grid =
///     DenseGrid::from_rows(vec![vec![3, 4, 0], vec![5, 0, 9], vec![12, 13, 14]]).unwrap();
/// zero_contaminated(&mut grid);
/// assert_eq!(grid.to_rows(), vec![vec![0, 0, 0], vec![0, 0, 0], vec![12, 0, 0]]);
/// ```
pub fn zero_contaminated<T>(grid: &mut DenseGrid<T>)
where
    T: Copy + Num,
{
    if grid.is_empty() {
        return;
    }

    let mask = ZeroMask::scan(grid);

    for i in 0..grid.n_rows {
        for j in 0..grid.n_cols {
            if mask.rows[i] || mask.cols[j] {
                grid.values[i * grid.n_cols + j] = T::zero();
            }
        }
    }
}

/// Non-mutating companion of [`zero_contaminated`]: returns a zeroed copy and
/// leaves the input untouched.
pub fn zeroed<T>(grid: &DenseGrid<T>) -> DenseGrid<T>
where
    T: Copy + Num,
{
    let mut result = grid.clone();
    zero_contaminated(&mut result);
    result
}
