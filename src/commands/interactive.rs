//! Interactive guess exploration
//!
//! Prompts for guess words and prints their pattern groups.

use crate::analysis::{Analyzer, WordPatternGroups};
use crate::core::Word;
use crate::output::write_groups;
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// What the user asked for at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Request {
    Quit,
    NextBest,
    Guess(String),
}

fn parse_request(line: &str) -> Request {
    let input = line.trim();
    if input.eq_ignore_ascii_case("q") {
        Request::Quit
    } else if input.is_empty() {
        Request::NextBest
    } else {
        Request::Guess(input.to_string())
    }
}

/// Run the prompt loop
///
/// - An empty line prints the groups of the next-best ranked guess, starting
///   at index `next`; once they are exhausted the loop ends.
/// - `q` (or end of input) ends the loop.
/// - Anything else is read as a guess word and its groups against the
///   analyzer's candidates are printed. Invalid words are reported and the
///   prompt repeats.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    analyzer: &Analyzer,
    ranked: &[WordPatternGroups],
    mut next: usize,
    color: bool,
) -> Result<()> {
    loop {
        write!(out, "\nNext guess? ")?;
        out.flush()?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .context("Can't read next guess")?;
        if read == 0 {
            debug!("End of input");
            break;
        }

        match parse_request(&line) {
            Request::Quit => break,
            Request::NextBest => match ranked.get(next) {
                Some(groups) => {
                    write_groups(out, groups, color)?;
                    next += 1;
                }
                None => break,
            },
            Request::Guess(input) => match Word::new(&input) {
                Ok(guess) => write_groups(out, &analyzer.groups_for(&guess), color)?,
                Err(e) => writeln!(out, "{e}")?,
            },
        }
    }

    Ok(())
}
