//! Minimum adjacent difference over a sorted copy of the input
//!
//! Sorts a private copy of the sequence ascending, finds the smallest gap
//! between consecutive values, and collects every consecutive pair achieving
//! that gap.

use num_traits::Num;
use std::cmp::Ordering;

/// The minimum adjacent difference of a sorted sequence, together with every
/// adjacent pair that achieves it
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestPairs<T> {
    /// Smallest difference between consecutive values in ascending order
    pub min_diff: T,
    /// Every adjacent sorted pair `(low, high)` with `high - low == min_diff`,
    /// in ascending order of `low`; ties at distinct positions are all kept
    pub pairs: Vec<(T, T)>,
}

/// Finds the minimum adjacent difference of `values` and all pairs achieving it.
///
/// The input is copied and the copy sorted ascending, so the caller's slice is
/// never reordered and the result is invariant under permutation of the input.
/// The first scan over the sorted copy establishes the minimum gap; the second
/// collects every consecutive pair whose gap equals it, emitted in scan order
/// with the smaller value first.
///
/// Floats are compared with `partial_cmp`; sequences containing NaN sort in an
/// unspecified order and produce unspecified results.
///
/// # Returns
///
/// `None` when `values.len() < 2`, otherwise the minimum gap and the tied
/// pairs. The gap is non-negative, and zero whenever the input holds
/// duplicates.
///
/// # Examples
///
/// ```
/// use gapscan::min_adjacent_pairs;
///
/// let result = min_adjacent_pairs(&[6, 2, 4, 10]).unwrap();
/// assert_eq!(result.min_diff, 2);
/// assert_eq!(result.pairs, vec![(2, 4), (4, 6)]);
/// ```
pub fn min_adjacent_pairs<T>(values: &[T]) -> Option<ClosestPairs<T>>
where
    T: Copy + Num + PartialOrd,
{
    if values.len() < 2 {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut min_diff = sorted[1] - sorted[0];
    for pair in sorted.windows(2).skip(1) {
        let diff = pair[1] - pair[0];
        if diff < min_diff {
            min_diff = diff;
        }
    }

    let pairs = sorted
        .windows(2)
        .filter(|pair| pair[1] - pair[0] == min_diff)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    Some(ClosestPairs { min_diff, pairs })
}
