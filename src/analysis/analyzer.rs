//! Builds and ranks pattern groups for a whole word list

use super::WordPatternGroups;
use super::rankings::{by_combined, ranked};
use crate::core::Word;
use log::{debug, trace};
use rayon::prelude::*;

/// Analyzes a list of candidate words, each one in turn as the guess
pub struct Analyzer {
    words: Vec<Word>,
}

impl Analyzer {
    /// Create an analyzer for the given candidate words
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The candidate words, in input order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Group all candidate words against the given guess
    ///
    /// The guess does not need to be one of the candidates.
    #[must_use]
    pub fn groups_for(&self, guess: &Word) -> WordPatternGroups {
        let groups = WordPatternGroups::build(guess.clone(), &self.words);
        trace!(
            "{guess}: {} groups, max {}, variance {:.3}",
            groups.group_count(),
            groups.max_group_size(),
            groups.variance()
        );
        groups
    }

    /// Groups for every candidate word as the guess, in input order
    #[must_use]
    pub fn all_groups(&self) -> Vec<WordPatternGroups> {
        self.all_groups_with(|| {})
    }

    /// Like [`Analyzer::all_groups`], calling `on_built` once per finished guess
    ///
    /// Groups are built in parallel; `on_built` may be called from any thread.
    pub fn all_groups_with<F>(&self, on_built: F) -> Vec<WordPatternGroups>
    where
        F: Fn() + Sync,
    {
        let groups: Vec<WordPatternGroups> = self
            .words
            .par_iter()
            .map(|guess| {
                let groups = self.groups_for(guess);
                on_built();
                groups
            })
            .collect();

        debug!("Built pattern groups for {} guesses", groups.len());
        groups
    }

    /// Groups for every candidate word, best guess first
    ///
    /// # Examples
    /// ```
    /// use wordle_groups::analysis::Analyzer;
    /// use wordle_groups::core::Word;
    ///
    /// let words = ["guppy", "bumpy", "puppy", "unzip"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let ranked = Analyzer::new(words).ranked_groups();
    /// assert_eq!(ranked.len(), 4);
    /// ```
    #[must_use]
    pub fn ranked_groups(&self) -> Vec<WordPatternGroups> {
        self.ranked_groups_with(|| {})
    }

    /// Like [`Analyzer::ranked_groups`], reporting progress through `on_built`
    pub fn ranked_groups_with<F>(&self, on_built: F) -> Vec<WordPatternGroups>
    where
        F: Fn() + Sync,
    {
        let groups = ranked(self.all_groups_with(on_built), by_combined);
        if let Some(best) = groups.first() {
            debug!(
                "Best guess {} with {} groups",
                best.guess(),
                best.group_count()
            );
        }
        groups
    }
}
