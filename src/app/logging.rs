//! Progress logging.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Logs how many domains have been checked so far and the rate.
///
/// # Arguments
///
/// * `start_time` - The start time of the run
/// * `completed` - Counter of finished domains
/// * `total` - Number of domains in the run
pub fn log_progress(start_time: std::time::Instant, completed: &AtomicUsize, total: usize) {
    let done = completed.load(Ordering::SeqCst);
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        done, total, elapsed_secs, rate
    );
}
