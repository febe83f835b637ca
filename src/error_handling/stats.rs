//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for check outcomes
//! during a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;
use crate::models::Status;

/// Thread-safe processing statistics tracker.
///
/// Counts results per `Status` and per `ErrorType` using atomic counters,
/// allowing concurrent access from multiple tasks. All keys are initialized
/// to zero on creation.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    statuses: HashMap<Status, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut statuses = HashMap::new();
        for status in Status::iter() {
            statuses.insert(status, AtomicUsize::new(0));
        }

        ProcessingStats { errors, statuses }
    }

    /// Increment an outcome counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Increment the counter for a result status.
    pub fn record_status(&self, status: Status) {
        if let Some(counter) = self.statuses.get(&status) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment status counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                status
            );
        }
    }

    /// Get the count for an outcome category.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a status.
    pub fn get_status_count(&self, status: Status) -> usize {
        self.statuses
            .get(&status)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total count across all outcome categories.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get the number of results recorded, whatever their status.
    pub fn total_checks(&self) -> usize {
        Status::iter().map(|s| self.get_status_count(s)).sum()
    }
}
