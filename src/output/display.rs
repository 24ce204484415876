//! Display functions for pattern groups

use super::formatters::{colored_pattern, summary_line};
use crate::analysis::WordPatternGroups;
use colored::Colorize;
use std::io::{self, Write};

/// Write a grouping: summary line, then each group largest first with its words
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_groups<W: Write>(
    out: &mut W,
    groups: &WordPatternGroups,
    color: bool,
) -> io::Result<()> {
    let summary = summary_line(groups);
    let rule = "─".repeat(summary.chars().count());

    writeln!(out)?;
    if color {
        writeln!(out, "{}", summary.bright_cyan().bold())?;
        writeln!(out, "{}", rule.cyan())?;
    } else {
        writeln!(out, "{summary}")?;
        writeln!(out, "{rule}")?;
    }

    for (pattern, words) in groups.sorted_groups() {
        let symbols = if color {
            colored_pattern(pattern)
        } else {
            pattern.to_string()
        };

        writeln!(out)?;
        writeln!(out, "  {symbols}  ({})", words.len())?;
        for word in words {
            writeln!(out, "    {word}")?;
        }
    }

    out.flush()
}

/// Print a grouping to standard output
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn print_groups(groups: &WordPatternGroups, color: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_groups(&mut out, groups, color)
}
