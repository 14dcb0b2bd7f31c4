//! Conversions between our grid format and external libraries

use ndarray::Array2;
use num_traits::Num;

use crate::grid::DenseGrid;

/// Converts our dense grid format to an ndarray Array2
pub fn to_ndarray<T>(grid: &DenseGrid<T>) -> Array2<T>
where
    T: Copy + Num,
{
    Array2::from_shape_vec((grid.n_rows, grid.n_cols), grid.values.clone())
        .expect("grid storage length matches its dimensions")
}

/// Converts an ndarray Array2 to our dense grid format
///
/// Cells are read in row-major order regardless of the array's memory layout.
pub fn from_ndarray<T>(array: &Array2<T>) -> DenseGrid<T>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = array.dim();
    DenseGrid::new(n_rows, n_cols, array.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_round_trip() {
        let grid = DenseGrid::new(2, 3, vec![1, 0, 3, 4, 5, 0]);

        let array = to_ndarray(&grid);
        assert_eq!(array, arr2(&[[1, 0, 3], [4, 5, 0]]));

        assert_eq!(from_ndarray(&array), grid);
    }

    #[test]
    fn test_empty_grid() {
        let grid = DenseGrid::<f32>::zeros(0, 0);
        let array = to_ndarray(&grid);

        assert_eq!(array.dim(), (0, 0));
        assert!(from_ndarray(&array).is_empty());
    }
}
