//! Word list analysis command
//!
//! Ranks every candidate word as a guess and prints the best (or all) pattern groups.

use super::interactive::run_interactive;
use crate::analysis::Analyzer;
use crate::output::print_groups;
use crate::wordlists::load_words;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::io;
use std::path::PathBuf;

/// Word lists at least this long show a progress bar while grouping
const PROGRESS_THRESHOLD: usize = 1000;

/// Options for an analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// File holding the candidate words; standard input when `None`
    pub word_file: Option<PathBuf>,
    /// Prompt for further guesses after printing the best one
    pub interactive: bool,
    /// Print every guess best-first instead of only the best
    pub print_all: bool,
    /// Color pattern symbols
    pub color: bool,
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    if len < PROGRESS_THRESHOLD {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("grouping");
    Ok(pb)
}

/// Analyze a word list according to the given options
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded, holds an invalid word,
/// or output cannot be written.
pub fn run_analysis(options: &AnalysisOptions) -> Result<()> {
    let words = load_words(options.word_file.as_deref())?;
    info!("Analyzing {} words", words.len());

    let analyzer = Analyzer::new(words);
    let pb = progress_bar(analyzer.words().len())?;
    let ranked = analyzer.ranked_groups_with(|| pb.inc(1));
    pb.finish_and_clear();

    let Some(best) = ranked.first() else {
        warn!("No words to analyze");
        return Ok(());
    };

    if options.print_all {
        for groups in &ranked {
            print_groups(groups, options.color)?;
        }
        return Ok(());
    }

    print_groups(best, options.color)?;

    if options.interactive {
        if options.word_file.is_none() {
            warn!("Can't use interactive mode when reading words from standard input");
        } else {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(
                stdin.lock(),
                &mut stdout.lock(),
                &analyzer,
                &ranked,
                1,
                options.color,
            )?;
        }
    }

    Ok(())
}
