//! Formatting utilities for terminal output

use crate::analysis::WordPatternGroups;
use crate::core::{Clue, WordPattern};
use colored::Colorize;

/// Format a pattern with one colored symbol per clue
#[must_use]
pub fn colored_pattern(pattern: &WordPattern) -> String {
    pattern
        .clues()
        .iter()
        .map(|&clue| {
            let symbol = clue.symbol().to_string();
            match clue {
                Clue::Green => symbol.green().bold().to_string(),
                Clue::Yellow => symbol.yellow().bold().to_string(),
                Clue::White => symbol.bright_black().to_string(),
            }
        })
        .collect()
}

/// Format the summary line for a grouping
#[must_use]
pub fn summary_line(groups: &WordPatternGroups) -> String {
    format!(
        "{}  {} {}, max {}, variance {:.3}",
        groups.guess(),
        groups.group_count(),
        if groups.group_count() == 1 {
            "group"
        } else {
            "groups"
        },
        groups.max_group_size(),
        groups.variance()
    )
}
