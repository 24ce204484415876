//! Wordle Groups
//!
//! Ranks Wordle guess words by how they partition a candidate list into
//! feedback pattern groups.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_groups::analysis::{WordPatternGroups, rankings};
//! use wordle_groups::core::{Word, WordPattern};
//!
//! // Calculate a pattern: the first word is the target, the second the guess
//! let target = Word::new("taser").unwrap();
//! let guess = Word::new("stare").unwrap();
//! assert_eq!(WordPattern::calculate(&target, &guess).to_string(), "yyyyy");
//!
//! // Group and rank a word list
//! let words: Vec<Word> = ["guppy", "bumpy", "bunny", "unzip"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let groups: Vec<WordPatternGroups> = words
//!     .iter()
//!     .map(|guess| WordPatternGroups::build(guess.clone(), &words))
//!     .collect();
//! let ranked = rankings::ranked(groups, rankings::by_combined);
//! println!("Best guess: {}", ranked[0].guess());
//! ```

// Core domain types
pub mod core;

// Pattern grouping and ranking
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
