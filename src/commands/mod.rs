//! Command implementations

pub mod analyze;
pub mod interactive;

pub use analyze::{AnalysisOptions, run_analysis};
pub use interactive::run_interactive;
