//! Terminal output formatting
//!
//! Display utilities for pattern groups.

pub mod display;
pub mod formatters;

pub use display::{print_groups, write_groups};
