//! Wordle feedback pattern calculation and representation
//!
//! A pattern is five [`Clue`]s, rendered one symbol per position:
//! - `G` = Green (letter in correct position)
//! - `y` = Yellow (letter in word, wrong position)
//! - `.` = White (letter not in word)

use super::{Clue, Word};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of clues in every pattern
pub const PATTERN_LEN: usize = 5;

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordPattern([Clue; PATTERN_LEN]);

/// Error type for invalid patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern did not have exactly five clues
    InvalidLength(usize),
    /// Character does not name a clue
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "A pattern must contain exactly {PATTERN_LEN} clues, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "'{ch}' is not a clue symbol"),
        }
    }
}

impl std::error::Error for PatternError {}

impl WordPattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Clue::Green; PATTERN_LEN]);

    /// Create a pattern from exactly five clues
    ///
    /// # Examples
    /// ```
    /// use wordle_groups::core::{Clue, WordPattern};
    /// use Clue::{Green as G, White as W, Yellow as Y};
    ///
    /// let pattern = WordPattern::new([G, Y, W, W, G]);
    /// assert_eq!(pattern.to_string(), "Gy..G");
    /// assert_eq!(WordPattern::new([G; 5]), WordPattern::PERFECT);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(clues: [Clue; PATTERN_LEN]) -> Self {
        Self(clues)
    }

    /// Create a pattern from a clue slice
    ///
    /// # Errors
    /// Returns `PatternError::InvalidLength` unless the slice holds exactly five clues.
    pub fn from_clues(clues: &[Clue]) -> Result<Self, PatternError> {
        <[Clue; PATTERN_LEN]>::try_from(clues)
            .map(Self)
            .map_err(|_| PatternError::InvalidLength(clues.len()))
    }

    /// The clues of this pattern, position 0 first
    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &[Clue; PATTERN_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the positions carrying the given clue
    #[must_use]
    pub fn count(&self, clue: Clue) -> usize {
        self.0.iter().filter(|&&c| c == clue).count()
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// Implements Wordle's duplicate-letter rules. For each distinct guess
    /// letter, the target's count of that letter is a budget: exact matches
    /// are credited green first, then the remaining guess occurrences are
    /// credited yellow left to right until the budget runs out.
    ///
    /// # Examples
    /// ```
    /// use wordle_groups::core::{Word, WordPattern};
    ///
    /// let target = Word::new("every").unwrap();
    /// let guess = Word::new("mealy").unwrap();
    ///
    /// let pattern = WordPattern::calculate(&target, &guess);
    /// assert_eq!(pattern.to_string(), ".y..G");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        let mut clues = [Clue::White; PATTERN_LEN];

        for (letter, guess_positions) in guess.letter_positions() {
            let target_positions = target.positions_of(letter);
            let mut budget = target_positions.len();
            if budget == 0 {
                continue;
            }

            // Exact matches never exceed the target count, so greens always fit
            for &pos in guess_positions
                .iter()
                .filter(|&pos| target_positions.contains(pos))
            {
                clues[pos] = Clue::Green;
                budget -= 1;
            }

            for &pos in guess_positions
                .iter()
                .filter(|&pos| !target_positions.contains(pos))
            {
                if budget == 0 {
                    break;
                }
                clues[pos] = Clue::Yellow;
                budget -= 1;
            }
        }

        Self(clues)
    }
}

/// Compare patterns by clue counts: more greens, then more yellows, then fewer whites
#[must_use]
pub fn by_clue_counts(a: &WordPattern, b: &WordPattern) -> Ordering {
    b.count(Clue::Green)
        .cmp(&a.count(Clue::Green))
        .then_with(|| b.count(Clue::Yellow).cmp(&a.count(Clue::Yellow)))
        .then_with(|| a.count(Clue::White).cmp(&b.count(Clue::White)))
}

/// Compare patterns position by position by clue rank, position 0 first
#[must_use]
pub fn by_clues(a: &WordPattern, b: &WordPattern) -> Ordering {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(x, y)| x.rank().cmp(&y.rank()))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl PartialOrd for WordPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare patterns most favorable first: [`by_clue_counts`], then [`by_clues`]
#[must_use]
pub fn compare(a: &WordPattern, b: &WordPattern) -> Ordering {
    by_clue_counts(a, b).then_with(|| by_clues(a, b))
}

impl Ord for WordPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl TryFrom<&[Clue]> for WordPattern {
    type Error = PatternError;

    fn try_from(clues: &[Clue]) -> Result<Self, Self::Error> {
        Self::from_clues(clues)
    }
}

impl TryFrom<Vec<Clue>> for WordPattern {
    type Error = PatternError;

    fn try_from(clues: Vec<Clue>) -> Result<Self, Self::Error> {
        Self::from_clues(&clues)
    }
}

impl fmt::Display for WordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in self.0 {
            write!(f, "{clue}")?;
        }
        Ok(())
    }
}

/// Parse a pattern from a string like `".y..G"`
///
/// # Examples
/// ```
/// use wordle_groups::core::{Clue, WordPattern};
///
/// let pattern: WordPattern = "GG..y".parse().unwrap();
/// assert_eq!(pattern.count(Clue::Green), 2);
/// assert!("GG..x".parse::<WordPattern>().is_err());
/// ```
impl FromStr for WordPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clues = s
            .chars()
            .map(|ch| Clue::from_symbol(ch).ok_or(PatternError::InvalidSymbol(ch)))
            .collect::<Result<Vec<Clue>, _>>()?;

        Self::from_clues(&clues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_for(target: &str, guess: &str) -> String {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        WordPattern::calculate(&target, &guess).to_string()
    }

    #[test]
    fn pattern_none() {
        assert_eq!(pattern_for("EVERY", "COULD"), ".....");
    }

    #[test]
    fn pattern_some() {
        assert_eq!(pattern_for("EVERY", "MEALY"), ".y..G");
    }

    #[test]
    fn pattern_guess_multiple_some() {
        assert_eq!(pattern_for("MEALY", "EVERY"), "y...G");
    }

    #[test]
    fn pattern_target_multiple_missed() {
        assert_eq!(pattern_for("EVERY", "LEVEL"), ".yyy.");
    }

    #[test]
    fn pattern_all() {
        assert_eq!(pattern_for("EVERY", "EVERY"), "GGGGG");
        assert!(
            WordPattern::calculate(&Word::new("EVERY").unwrap(), &Word::new("EVERY").unwrap())
                .is_perfect()
        );
    }

    #[test]
    fn pattern_anagram() {
        assert_eq!(pattern_for("TASER", "STARE"), "yyyyy");
    }

    #[test]
    fn pattern_guess_multiple_mixed() {
        assert_eq!(pattern_for("BUMPY", "GUPPY"), ".G.GG");
    }

    #[test]
    fn pattern_green_wins_over_earlier_yellow() {
        // The only E in SLATE is at position 4, so the exact match takes it
        // and the earlier E's get nothing.
        assert_eq!(pattern_for("SLATE", "EERIE"), "....G");
        assert_eq!(pattern_for("PLANT", "LLAMA"), ".GG..");
        assert_eq!(pattern_for("MEALL", "LLAMA"), "yyGy.");
    }

    #[test]
    fn pattern_extra_guess_copies_stay_white() {
        assert_eq!(pattern_for("ABBEY", "EERIE"), "y....");
        assert_eq!(pattern_for("SPEED", "ERASE"), "y.yy.");
    }

    #[test]
    fn greens_are_exact_matches_and_credit_stays_within_budget() {
        let words = [
            "EVERY", "MEALY", "LEVEL", "TASER", "STARE", "GUPPY", "PUPPY", "BUMPY", "MUMMY",
            "ERASE", "SPEED", "LLAMA", "EERIE", "ABBEY",
        ];
        for target in words {
            for guess in words {
                let t = Word::new(target).unwrap();
                let g = Word::new(guess).unwrap();
                let pattern = WordPattern::calculate(&t, &g);

                for i in 0..PATTERN_LEN {
                    let exact = t.chars()[i] == g.chars()[i];
                    assert_eq!(
                        pattern.clues()[i] == Clue::Green,
                        exact,
                        "{guess} vs {target} at {i}"
                    );
                }

                for (letter, positions) in g.letter_positions() {
                    let credited = positions
                        .iter()
                        .filter(|&&p| pattern.clues()[p] != Clue::White)
                        .count();
                    assert!(
                        credited <= t.positions_of(letter).len(),
                        "{guess} vs {target} over-credits {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn pattern_parse_and_format() {
        for s in ["GGGGG", ".....", "yyyyy", ".y..G", "yG..G", ".G.GG"] {
            let pattern: WordPattern = s.parse().unwrap();
            assert_eq!(pattern.to_string(), s);
            assert_eq!(pattern.to_string().parse::<WordPattern>(), Ok(pattern));
        }
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(
            "GGGG".parse::<WordPattern>(),
            Err(PatternError::InvalidLength(4))
        );
        assert_eq!(
            "GGGGGG".parse::<WordPattern>(),
            Err(PatternError::InvalidLength(6))
        );
        assert_eq!("".parse::<WordPattern>(), Err(PatternError::InvalidLength(0)));
        assert_eq!(
            "GG-GG".parse::<WordPattern>(),
            Err(PatternError::InvalidSymbol('-'))
        );
        assert_eq!(
            "gGGGG".parse::<WordPattern>(),
            Err(PatternError::InvalidSymbol('g'))
        );
    }

    #[test]
    fn pattern_from_clues_length_checked() {
        let clues = vec![Clue::Green, Clue::Yellow, Clue::White];
        assert_eq!(
            WordPattern::try_from(clues),
            Err(PatternError::InvalidLength(3))
        );

        let clues = [Clue::Green; 5];
        assert_eq!(WordPattern::from_clues(&clues), Ok(WordPattern::PERFECT));
        assert_eq!(WordPattern::from_clues(&clues), Ok(WordPattern::new(clues)));
    }

    #[test]
    fn pattern_compare_chains_counts_then_clues() {
        use Clue::{Green as G, White as W, Yellow as Y};

        let green_first = WordPattern::new([G, W, Y, W, W]);
        let green_second = WordPattern::new([W, G, Y, W, W]);
        let more_yellows = WordPattern::new([W, Y, Y, Y, W]);

        // Equal counts, so position decides
        assert_eq!(by_clue_counts(&green_first, &green_second), Ordering::Equal);
        assert_eq!(compare(&green_first, &green_second), Ordering::Less);
        assert_eq!(compare(&green_second, &green_first), Ordering::Greater);

        // Counts decide before position
        assert_eq!(by_clues(&more_yellows, &green_second), Ordering::Greater);
        assert_eq!(compare(&green_second, &more_yellows), Ordering::Less);

        assert_eq!(compare(&more_yellows, &more_yellows), Ordering::Equal);
        assert_eq!(compare(&green_first, &green_second), green_first.cmp(&green_second));
    }

    #[test]
    fn pattern_order_by_counts_first() {
        let parse = |s: &str| s.parse::<WordPattern>().unwrap();

        // More greens wins
        assert!(parse("G....") < parse("yyyyy"));
        // Same greens, more yellows wins
        assert!(parse("Gy...") < parse("G...."));
        // Same counts, earlier stronger clue wins
        assert!(parse("G.y..") < parse(".Gy.."));
        assert!(parse("y.G..") < parse(".yG.."));
        assert_eq!(parse(".y..G").cmp(&parse(".y..G")), Ordering::Equal);
    }

    #[test]
    fn pattern_order_sorts_best_first() {
        let mut patterns: Vec<WordPattern> = [".....", ".y..G", "GGGGG", ".G.GG", "yG..G", ".yyy."]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        patterns.sort();

        let sorted: Vec<String> = patterns.iter().map(ToString::to_string).collect();
        assert_eq!(
            sorted,
            vec!["GGGGG", ".G.GG", "yG..G", ".y..G", ".yyy.", "....."]
        );
    }
}
