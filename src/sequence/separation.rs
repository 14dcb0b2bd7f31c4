//! Separation-constrained minimum difference scan
//!
//! Finds the smallest absolute difference between two sequence elements whose
//! index positions are at least a caller-chosen distance apart. The reference
//! implementation examines every qualifying index pair directly; a sorted-window
//! variant produces the same result in O(n log n) for totally ordered types.

use num_traits::Num;
use std::collections::BTreeSet;

/// Method for scanning qualifying index pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Examine every qualifying index pair directly, O(n²)
    BruteForce,
    /// Maintain a sorted window of eligible values and probe its neighbors,
    /// O(n log n)
    SortedWindow,
}

/// Order-aware absolute difference, usable without a `Signed` bound
fn abs_difference<T>(a: T, b: T) -> T
where
    T: Copy + Num + PartialOrd,
{
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Finds the minimum absolute difference between elements at least
/// `min_separation` index positions apart.
///
/// Every ordered index pair `(i, j)` with `|i - j| >= min_separation` is a
/// candidate, so `min_separation == 0` admits the pair `(i, i)` and any
/// sequence of length ≥ 2 yields zero. Differences are computed as
/// `max - min` and are assumed to be representable in `T`.
///
/// This is the reference scan: O(n²) over every qualifying pair, with the
/// input left untouched. For large totally ordered inputs see
/// [`min_separated_difference_windowed`], which returns the identical result.
///
/// # Arguments
///
/// * `values` - The sequence to scan
/// * `min_separation` - Minimum required index distance between the two elements
///
/// # Returns
///
/// The minimum qualifying difference, or `None` when `values.len() < 2` or no
/// index pair satisfies the separation constraint (e.g. `min_separation >=
/// values.len()`).
///
/// # Examples
///
/// ```
/// use gapscan::min_separated_difference;
///
/// assert_eq!(min_separated_difference(&[1, 3, 6, 10, 15], 1), Some(2));
/// assert_eq!(min_separated_difference(&[5], 1), None);
/// assert_eq!(min_separated_difference(&[1, 2, 3], 3), None);
/// ```
pub fn min_separated_difference<T>(values: &[T], min_separation: usize) -> Option<T>
where
    T: Copy + Num + PartialOrd,
{
    if values.len() < 2 {
        return None;
    }

    let mut best: Option<T> = None;
    for i in 0..values.len() {
        // Pairs with j < i mirror pairs already seen, so start at i
        for j in i..values.len() {
            if j - i >= min_separation {
                let diff = abs_difference(values[i], values[j]);
                if best.map_or(true, |b| diff < b) {
                    best = Some(diff);
                }
            }
        }
    }
    best
}

/// Sorted-window variant of [`min_separated_difference`].
///
/// Walks the sequence once, keeping every element eligible to pair with the
/// current position (index at most `current - min_separation`) in an ordered
/// set, and probes the nearest value below and above the current element.
/// Entries carry their index so duplicate values stay distinct.
///
/// Returns the identical result to the reference scan for every input;
/// requires `T: Ord`, so it is unavailable for floats.
///
/// # Examples
///
/// ```
/// use gapscan::min_separated_difference_windowed;
///
/// assert_eq!(min_separated_difference_windowed(&[4, 3, 2, 4], 2), Some(0));
/// ```
pub fn min_separated_difference_windowed<T>(values: &[T], min_separation: usize) -> Option<T>
where
    T: Copy + Num + Ord,
{
    if values.len() < 2 {
        return None;
    }

    let mut window: BTreeSet<(T, usize)> = BTreeSet::new();
    let mut best: Option<T> = None;

    for j in min_separation..values.len() {
        let i = j - min_separation;
        window.insert((values[i], i));

        let probe = values[j];
        if let Some(&(below, _)) = window.range(..=(probe, usize::MAX)).next_back() {
            let diff = probe - below;
            if best.map_or(true, |b| diff < b) {
                best = Some(diff);
            }
        }
        if let Some(&(above, _)) = window.range((probe, 0)..).next() {
            let diff = above - probe;
            if best.map_or(true, |b| diff < b) {
                best = Some(diff);
            }
        }
    }
    best
}

/// Runs the separation-constrained scan with an explicit [`ScanStrategy`].
///
/// Both strategies implement the same contract; the choice only affects
/// running time.
pub fn min_separated_difference_with<T>(
    values: &[T],
    min_separation: usize,
    strategy: ScanStrategy,
) -> Option<T>
where
    T: Copy + Num + Ord,
{
    match strategy {
        ScanStrategy::BruteForce => min_separated_difference(values, min_separation),
        ScanStrategy::SortedWindow => min_separated_difference_windowed(values, min_separation),
    }
}
