//! Word lists for analysis
//!
//! Candidate words come from a file or standard input.

pub mod loader;

pub use loader::{load_from_file, load_words, read_words};
