//! Utility functions and helpers

pub mod convert;

pub use convert::{from_ndarray, to_ndarray};
