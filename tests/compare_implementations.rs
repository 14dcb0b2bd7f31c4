//! Compare the sorted-window scan against the brute-force reference
//!
//! Both implement the same contract; the window variant only changes the
//! running time. Inputs come from a small deterministic generator so failures
//! reproduce exactly.

use gapscan::{
    min_separated_difference, min_separated_difference_windowed, min_separated_difference_with,
    ScanStrategy,
};

/// Deterministic xorshift generator for reproducible fixtures
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_in(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo) as u64) as i64
    }
}

#[test]
fn compare_windowed_vs_brute_force_random_sequences() {
    let mut rng = XorShift::new(0x5eed);

    for round in 0..200 {
        let len = (rng.next_u64() % 24) as usize;
        let values: Vec<i64> = (0..len).map(|_| rng.next_in(-1000, 1000)).collect();

        for min_separation in 0..=len + 1 {
            let brute = min_separated_difference(&values, min_separation);
            let windowed = min_separated_difference_windowed(&values, min_separation);

            assert_eq!(
                brute, windowed,
                "round {} values {:?} separation {}",
                round, values, min_separation
            );
        }
    }
}

#[test]
fn compare_narrow_value_range_forces_duplicates() {
    let mut rng = XorShift::new(42);

    for _ in 0..100 {
        let len = 2 + (rng.next_u64() % 12) as usize;
        let values: Vec<i64> = (0..len).map(|_| rng.next_in(0, 5)).collect();

        for min_separation in 0..=len {
            assert_eq!(
                min_separated_difference(&values, min_separation),
                min_separated_difference_windowed(&values, min_separation),
                "values {:?} separation {}",
                values,
                min_separation
            );
        }
    }
}

#[test]
fn compare_strategy_selector_dispatch() {
    let values = [14, 3, 3, 60, -2];

    for min_separation in 0..=values.len() {
        let brute =
            min_separated_difference_with(&values, min_separation, ScanStrategy::BruteForce);
        let windowed =
            min_separated_difference_with(&values, min_separation, ScanStrategy::SortedWindow);

        assert_eq!(brute, windowed, "separation {}", min_separation);
    }
}
