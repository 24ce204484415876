//! Core domain types for Wordle feedback
//!
//! This module contains the fundamental domain types: clues, words and
//! feedback patterns. All types here are pure and have no I/O.

mod clue;
mod pattern;
mod word;

pub use clue::Clue;
pub use pattern::{PATTERN_LEN, PatternError, WordPattern, by_clue_counts, by_clues, compare};
pub use word::{Word, WordError};
