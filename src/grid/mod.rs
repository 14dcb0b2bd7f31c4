// Grid data structures and operations

pub mod dense;
pub mod zeroing;

pub use dense::DenseGrid;
pub use zeroing::{zero_contaminated, zeroed};
