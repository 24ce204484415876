//! Wordle Groups - CLI
//!
//! Analyzes a set of Wordle guess words by grouping every word by the feedback
//! each guess would give, and ranking guesses by how well they split the set.

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use wordle_groups::{
    commands::{AnalysisOptions, run_analysis},
    logging,
};

#[derive(Parser)]
#[command(
    name = "wordle_groups",
    about = "Ranks Wordle guess words by how they split the candidate words into feedback groups",
    long_about = "Analyzes a set of Wordle guess words. Each guess word is compared to all of \
the input words, assuming the other word is the actual target. The resulting clues organize \
the input words into groups. Guesses are ranked by number of groups, then by variance in \
group size, then by largest group.\n\n\
Prints the groups for the best guess to standard output.",
    version,
    author
)]
struct Cli {
    /// File of whitespace-separated 5-letter words (standard input if omitted)
    word_file: Option<PathBuf>,

    /// Interactive mode: prompt for guess words, an empty line shows the next best guess, 'q' quits
    #[arg(short, long)]
    interactive: bool,

    /// Print the groups for all input words, best first
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(self) -> AnalysisOptions {
        AnalysisOptions {
            word_file: self.word_file,
            interactive: self.interactive,
            print_all: self.all,
            color: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    run_analysis(&cli.options())
}
