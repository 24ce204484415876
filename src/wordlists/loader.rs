//! Word list loading utilities
//!
//! Reads whitespace-separated candidate words from a file or standard input.

use crate::core::Word;
use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read words from a reader
///
/// Each line may hold any number of whitespace-separated words. Words are
/// normalized to uppercase and kept in input order.
///
/// # Errors
///
/// Returns an error naming the token and line for the first token that is not
/// a 5-letter alphabetic word, or if reading fails.
///
/// # Examples
/// ```
/// use wordle_groups::wordlists::loader::read_words;
///
/// let words = read_words(" shiny words \n\n could\n".as_bytes()).unwrap();
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["SHINY", "WORDS", "COULD"]);
/// ```
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;

        for token in line.split_whitespace() {
            let word =
                Word::new(token).with_context(|| format!("Invalid word on line {line_no}"))?;
            words.push(word);
        }
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or holds an invalid word.
///
/// # Examples
/// ```no_run
/// use wordle_groups::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Can't open word file {}", path.display()))?;

    let words = read_words(BufReader::new(file))
        .with_context(|| format!("Can't read words from {}", path.display()))?;
    debug!("Loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Load words from the given file, or from standard input when no file is given
///
/// # Errors
///
/// Returns an error if the input cannot be read or holds an invalid word.
pub fn load_words(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path),
        None => {
            let words = read_words(io::stdin().lock())
                .context("Can't read words from standard input")?;
            debug!("Loaded {} words from standard input", words.len());
            Ok(words)
        }
    }
}
