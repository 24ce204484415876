//! Pattern groups for a single guess word
//!
//! Partitions a candidate list by the feedback pattern each candidate would
//! produce if it were the target.

use crate::core::{Word, WordPattern};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// The candidate words grouped by pattern for one guess
#[derive(Debug, Clone)]
pub struct WordPatternGroups {
    guess: Word,
    groups: FxHashMap<WordPattern, BTreeSet<String>>,
}

impl WordPatternGroups {
    /// Create empty groups for the given guess
    #[must_use]
    pub fn new(guess: Word) -> Self {
        Self {
            guess,
            groups: FxHashMap::default(),
        }
    }

    /// Group every candidate against the given guess
    ///
    /// # Examples
    /// ```
    /// use wordle_groups::analysis::WordPatternGroups;
    /// use wordle_groups::core::Word;
    ///
    /// let words: Vec<Word> = ["guppy", "puppy", "bumpy", "jumpy"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let groups = WordPatternGroups::build(words[0].clone(), &words);
    /// assert_eq!(groups.group_count(), 3);
    /// assert_eq!(groups.max_group_size(), 2);
    /// ```
    #[must_use]
    pub fn build(guess: Word, candidates: &[Word]) -> Self {
        let mut groups = Self::new(guess);
        for candidate in candidates {
            groups.add_candidate(candidate);
        }
        groups
    }

    /// The guess word these groups belong to
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Add a candidate to the group for the pattern it produces as the target
    ///
    /// Adding the same word twice leaves the groups unchanged.
    pub fn add_candidate(&mut self, word: &Word) {
        let pattern = WordPattern::calculate(word, &self.guess);
        self.groups
            .entry(pattern)
            .or_default()
            .insert(word.text().to_string());
    }

    /// All groups keyed by pattern
    #[inline]
    #[must_use]
    pub const fn groups(&self) -> &FxHashMap<WordPattern, BTreeSet<String>> {
        &self.groups
    }

    /// The words producing the given pattern, if any
    #[must_use]
    pub fn group(&self, pattern: &WordPattern) -> Option<&BTreeSet<String>> {
        self.groups.get(pattern)
    }

    /// Groups ordered largest first, ties broken by pattern order
    #[must_use]
    pub fn sorted_groups(&self) -> Vec<(&WordPattern, &BTreeSet<String>)> {
        let mut sorted: Vec<_> = self.groups.iter().collect();
        sorted.sort_by(|(pa, wa), (pb, wb)| wb.len().cmp(&wa.len()).then_with(|| pa.cmp(pb)));
        sorted
    }

    /// Number of distinct patterns observed
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Size of the largest group, 0 when there are no groups
    #[must_use]
    pub fn max_group_size(&self) -> usize {
        self.groups.values().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Population variance of the group sizes as an exact fraction
    ///
    /// Returns `(n·Σs² − (Σs)², n²)` for `n` groups of sizes `s`, or `(0, 1)`
    /// when there are no groups. Compare by cross-multiplying.
    #[must_use]
    pub fn variance_parts(&self) -> (u128, u128) {
        if self.groups.is_empty() {
            return (0, 1);
        }

        let n = self.groups.len() as u128;
        let (sum, sum_sq) = self
            .groups
            .values()
            .map(|words| words.len() as u128)
            .fold((0u128, 0u128), |(sum, sum_sq), size| {
                (sum + size, sum_sq + size * size)
            });

        (n * sum_sq - sum * sum, n * n)
    }

    /// Population variance of the group sizes, 0.0 when there are no groups
    ///
    /// For display; ranking compares [`WordPatternGroups::variance_parts`].
    #[must_use]
    pub fn variance(&self) -> f64 {
        let (numerator, denominator) = self.variance_parts();
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn guess(word: &str) -> Word {
        Word::new(word).unwrap()
    }

    #[test]
    fn empty_groups_have_zero_statistics() {
        let groups = WordPatternGroups::new(guess("crane"));

        assert_eq!(groups.group_count(), 0);
        assert_eq!(groups.max_group_size(), 0);
        assert!(groups.variance().abs() < f64::EPSILON);
        assert!(groups.sorted_groups().is_empty());
    }

    #[test]
    fn candidate_is_treated_as_target() {
        // MEALY against guess EVERY is y...G, the reverse is .y..G
        let mut groups = WordPatternGroups::new(guess("every"));
        groups.add_candidate(&guess("mealy"));

        let expected: WordPattern = "y...G".parse().unwrap();
        let group = groups.group(&expected).unwrap();
        assert!(group.contains("MEALY"));
    }

    #[test]
    fn all_same_pattern() {
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let groups = WordPatternGroups::build(guess("zzzzz"), &candidates);

        assert_eq!(groups.group_count(), 1);
        assert_eq!(groups.max_group_size(), 3);
        assert!(groups.variance().abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_split() {
        let candidates = words(&["slate", "zzzzz"]);
        let groups = WordPatternGroups::build(guess("slate"), &candidates);

        assert_eq!(groups.group_count(), 2);
        assert_eq!(groups.max_group_size(), 1);
        assert!(groups.variance().abs() < f64::EPSILON);
        assert!(groups.group(&WordPattern::PERFECT).is_some());
    }

    #[test]
    fn variance_is_population_variance() {
        // Sizes 3 and 1: mean 2, squared deviations 1 and 1, variance 1
        let candidates = words(&["aaaaa", "bbbbb", "ccccc", "zzzzz"]);
        let groups = WordPatternGroups::build(guess("zzzzz"), &candidates);

        assert_eq!(groups.group_count(), 2);
        assert_eq!(groups.max_group_size(), 3);
        assert!((groups.variance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn re_adding_a_word_is_a_no_op() {
        let candidates = words(&["guppy", "puppy", "bumpy"]);
        let mut groups = WordPatternGroups::build(guess("guppy"), &candidates);
        let count = groups.group_count();
        let variance = groups.variance();

        groups.add_candidate(&guess("PUPPY"));
        groups.add_candidate(&guess("puppy"));

        assert_eq!(groups.group_count(), count);
        assert_eq!(groups.max_group_size(), 1);
        assert_eq!(groups.variance().to_bits(), variance.to_bits());
        assert_eq!(groups.groups().values().map(BTreeSet::len).sum::<usize>(), 3);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward = words(&["bunny", "funny", "mummy", "bumpy", "jumpy", "unify"]);
        let mut backward = forward.clone();
        backward.reverse();

        let a = WordPatternGroups::build(guess("guppy"), &forward);
        let b = WordPatternGroups::build(guess("guppy"), &backward);

        assert_eq!(a.groups(), b.groups());
        assert_eq!(a.variance().to_bits(), b.variance().to_bits());
    }

    #[test]
    fn group_words_iterate_alphabetically() {
        let candidates = words(&["mummy", "funny", "bunny"]);
        let groups = WordPatternGroups::build(guess("guppy"), &candidates);

        let pattern: WordPattern = ".G..G".parse().unwrap();
        let members: Vec<&str> = groups
            .group(&pattern)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(members, vec!["BUNNY", "FUNNY", "MUMMY"]);
    }

    #[test]
    fn sorted_groups_largest_first() {
        let candidates = words(&["guppy", "bunny", "funny", "mummy", "bumpy", "jumpy", "unify"]);
        let groups = WordPatternGroups::build(guess("guppy"), &candidates);

        let order: Vec<(String, usize)> = groups
            .sorted_groups()
            .iter()
            .map(|(p, w)| (p.to_string(), w.len()))
            .collect();
        assert_eq!(
            order,
            vec![
                (".G..G".to_string(), 3),
                (".G.GG".to_string(), 2),
                ("GGGGG".to_string(), 1),
                (".y..G".to_string(), 1),
            ]
        );
    }

    #[test]
    fn variance_parts_are_exact() {
        // Sizes 3 and 1: n=2, sum=4, sum of squares=10, so (2·10 − 16, 4)
        let candidates = words(&["aaaaa", "bbbbb", "ccccc", "zzzzz"]);
        let groups = WordPatternGroups::build(guess("zzzzz"), &candidates);
        assert_eq!(groups.variance_parts(), (4, 4));

        let empty = WordPatternGroups::new(guess("zzzzz"));
        assert_eq!(empty.variance_parts(), (0, 1));
    }
}
