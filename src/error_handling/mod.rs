//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for initialization, lookups, requests and the insight collaborator
//! - The outcome taxonomy (`ErrorType`) used to classify non-passing checks
//! - Processing statistics tracking (outcomes and statuses)
//!
//! No error in this crate aborts a check: lookup and enrichment failures are
//! folded into a well-formed `CheckResult`.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, InsightError, LookupError, RequestError};
