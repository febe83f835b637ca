//! Main application modules.
//!
//! Input reading, JSON-lines output, progress logging and statistics used by
//! the batch runner.

pub mod input;
pub mod logging;
pub mod output;
pub mod statistics;

// Re-export public API
pub use input::read_domains;
pub use logging::log_progress;
pub use output::ReportWriter;
pub use statistics::{print_outcome_statistics, print_simple_summary};
