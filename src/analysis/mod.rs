//! Pattern grouping and guess ranking
//!
//! Groups candidate words by the feedback they produce against a guess and
//! ranks guesses by how well they split the candidates.

mod analyzer;
mod grouping;
pub mod rankings;

pub use analyzer::Analyzer;
pub use grouping::WordPatternGroups;
