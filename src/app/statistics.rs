//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::models::Status;

/// Prints a one-line summary of the run.
pub fn print_simple_summary(domains: usize, stats: &ProcessingStats, elapsed_seconds: f64) {
    info!(
        "✅ Checked {} domain{} ({} checks: {} pass, {} fail, {} warning, {} error) in {:.1}s",
        domains,
        if domains == 1 { "" } else { "s" },
        stats.total_checks(),
        stats.get_status_count(Status::Pass),
        stats.get_status_count(Status::Fail),
        stats.get_status_count(Status::Warning),
        stats.get_status_count(Status::Error),
        elapsed_seconds
    );
}

/// Prints the per-outcome counters that are non-zero.
pub fn print_outcome_statistics(stats: &ProcessingStats) {
    let total = stats.total_errors();
    if total == 0 {
        return;
    }

    info!("Outcome Counts ({} total):", total);
    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}
