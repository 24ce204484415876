//! Ways of ranking [`WordPatternGroups`]
//!
//! Each criterion is a plain comparator so callers can sort by any one of
//! them; [`by_combined`] chains them into the strict best-first order.

use super::WordPatternGroups;
use std::cmp::Ordering;

/// Rank by decreasing number of groups
#[must_use]
pub fn by_size(a: &WordPatternGroups, b: &WordPatternGroups) -> Ordering {
    b.group_count().cmp(&a.group_count())
}

/// Rank by increasing variance of group size
///
/// Compares the exact fractions, so equal variances always tie.
#[must_use]
pub fn by_variance(a: &WordPatternGroups, b: &WordPatternGroups) -> Ordering {
    let (a_num, a_den) = a.variance_parts();
    let (b_num, b_den) = b.variance_parts();
    (a_num * b_den).cmp(&(b_num * a_den))
}

/// Rank by increasing maximum group size
#[must_use]
pub fn by_max_group(a: &WordPatternGroups, b: &WordPatternGroups) -> Ordering {
    a.max_group_size().cmp(&b.max_group_size())
}

/// Rank alphabetically by guess word
#[must_use]
pub fn by_guess(a: &WordPatternGroups, b: &WordPatternGroups) -> Ordering {
    a.guess().cmp(b.guess())
}

/// Rank by group count, then variance, then max group size, then guess word
#[must_use]
pub fn by_combined(a: &WordPatternGroups, b: &WordPatternGroups) -> Ordering {
    by_size(a, b)
        .then_with(|| by_variance(a, b))
        .then_with(|| by_max_group(a, b))
        .then_with(|| by_guess(a, b))
}

/// Returns the given elements ranked by the given comparator
///
/// # Examples
/// ```
/// use wordle_groups::analysis::{WordPatternGroups, rankings};
/// use wordle_groups::core::Word;
///
/// let words: Vec<Word> = ["bunny", "funny", "guppy"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let groups: Vec<WordPatternGroups> = words
///     .iter()
///     .map(|guess| WordPatternGroups::build(guess.clone(), &words))
///     .collect();
///
/// let ranked = rankings::ranked(groups, rankings::by_combined);
/// assert_eq!(ranked[0].guess().text(), "BUNNY");
/// ```
#[must_use]
pub fn ranked<T, F>(mut elements: Vec<T>, comparator: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    elements.sort_by(comparator);
    elements
}
