//! Dense rectangular grid in row-major storage
//!
//! The grid stores its cells in one flat array:
//! - values: Array of size n_rows * n_cols, row i occupying
//!   values[i * n_cols .. (i + 1) * n_cols]
//!
//! Rectangularity is guaranteed by construction; the fallible boundary for
//! caller-supplied nested rows is [`DenseGrid::from_rows`].

use num_traits::Num;
use std::fmt;

use crate::error::GridError;

/// A dense rectangular grid of numeric values
#[derive(Clone, PartialEq)]
pub struct DenseGrid<T> {
    /// Number of rows in the grid
    pub n_rows: usize,

    /// Number of columns in the grid
    pub n_cols: usize,

    /// Cell values in row-major order (size: n_rows * n_cols)
    pub values: Vec<T>,
}

impl<T> DenseGrid<T>
where
    T: Copy + Num,
{
    /// Creates a new grid from row-major storage
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `values` - Cell values in row-major order
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` does not equal `n_rows * n_cols`.
    pub fn new(n_rows: usize, n_cols: usize, values: Vec<T>) -> Self {
        assert_eq!(
            values.len(),
            n_rows * n_cols,
            "values.len() must be n_rows * n_cols"
        );

        Self {
            n_rows,
            n_cols,
            values,
        }
    }

    /// Builds a grid from nested rows, validating that every row shares the
    /// width established by the first.
    ///
    /// Zero rows yields an empty grid. A row of deviating width is rejected
    /// with [`GridError::JaggedRow`] naming the offending row index; the input
    /// is never truncated to fit.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n_cols {
                return Err(GridError::JaggedRow {
                    row,
                    expected: n_cols,
                    actual: cells.len(),
                });
            }
            values.extend_from_slice(cells);
        }

        Ok(Self {
            n_rows,
            n_cols,
            values,
        })
    }

    /// Creates a grid of the given dimensions filled with zeros
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            values: vec![T::zero(); n_rows * n_cols],
        }
    }

    /// Returns the value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.n_rows, "Row index out of bounds");
        assert!(col < self.n_cols, "Column index out of bounds");
        self.values[row * self.n_cols + col]
    }

    /// Sets the value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.n_rows, "Row index out of bounds");
        assert!(col < self.n_cols, "Column index out of bounds");
        self.values[row * self.n_cols + col] = value;
    }

    /// Returns row i as a slice
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.n_rows, "Row index out of bounds");
        &self.values[i * self.n_cols..(i + 1) * self.n_cols]
    }

    /// Returns an iterator over the rows, each as a slice
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        (0..self.n_rows).map(move |i| self.row(i))
    }

    /// Copies the grid back out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(<[T]>::to_vec).collect()
    }

    /// Whether the grid holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0 || self.n_cols == 0
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for DenseGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseGrid {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;

        // Print a sample of the grid content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let row = self.row(i);
                let max_elements = 8.min(row.len());

                for cell in &row[..max_elements] {
                    write!(f, "{:?} ", cell)?;
                }

                if row.len() > max_elements {
                    write!(f, "... ({} more)", row.len() - max_elements)?;
                }

                writeln!(f)?;
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = DenseGrid::new(2, 3, vec![1, 2, 3, 4, 5, 6]);

        assert_eq!(grid.n_rows, 2);
        assert_eq!(grid.n_cols, 3);
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(1, 2), 6);
    }

    #[test]
    fn test_from_rows() {
        let grid = DenseGrid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();

        assert_eq!(grid.n_rows, 3);
        assert_eq!(grid.n_cols, 2);
        assert_eq!(grid.row(1), &[3, 4]);
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn test_from_rows_rejects_jagged_input() {
        let err = DenseGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]).unwrap_err();

        assert_eq!(
            err,
            GridError::JaggedRow {
                row: 1,
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let grid = DenseGrid::<i32>::from_rows(Vec::new()).unwrap();

        assert_eq!(grid.n_rows, 0);
        assert_eq!(grid.n_cols, 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_row_iter() {
        let grid = DenseGrid::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);

        let rows: Vec<&[f64]> = grid.row_iter().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
    }

    #[test]
    #[should_panic(expected = "values.len() must be n_rows * n_cols")]
    fn test_inconsistent_storage_length() {
        DenseGrid::new(2, 3, vec![1, 2, 3, 4, 5]); // Missing last element
    }
}
