//! Logging setup
//!
//! Logs go to standard error so they never mix with results on standard output.

use log::LevelFilter;

/// Log level for the given number of `-v` flags
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger
///
/// `RUST_LOG` takes precedence over the verbosity-derived level.
pub fn init(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
