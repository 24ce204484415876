//! Single-position feedback symbol

use std::fmt;

/// Feedback for one letter of a guess
///
/// Ordering uses [`Clue::rank`]: a lower rank is a stronger match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Letter is in the target at this position
    Green,
    /// Letter is in the target at another position
    Yellow,
    /// Letter is not in the target (or all its copies are already credited)
    White,
}

impl Clue {
    /// All clues, strongest first
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::White];

    /// Ordering rank: Green=0, Yellow=1, White=2
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Green => 0,
            Self::Yellow => 1,
            Self::White => 2,
        }
    }

    /// Display symbol for this clue
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'y',
            Self::White => '.',
        }
    }

    /// Parse a display symbol
    ///
    /// Symbols are case-sensitive: `G` is green, `y` is yellow, `.` is white.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' => Some(Self::Green),
            'y' => Some(Self::Yellow),
            '.' => Some(Self::White),
            _ => None,
        }
    }
}

impl PartialOrd for Clue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Clue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
