// Sequence scanning operations

pub mod adjacent;
pub mod separation;

pub use adjacent::{min_adjacent_pairs, ClosestPairs};
pub use separation::{
    min_separated_difference, min_separated_difference_windowed, min_separated_difference_with,
    ScanStrategy,
};
