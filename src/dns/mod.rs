//! DNS resolution and record selection.
//!
//! This module provides the TXT side of the checker:
//! - `TxtResolver`: the lookup seam, with a `hickory-resolver` backend and an
//!   in-memory `StaticResolver`
//! - `resolve_txt`: a single lookup bounded by a hard timeout
//! - `select_records`: narrowing a TXT set to the records a protocol reads
//!
//! Lookups never panic and never return `Err` to the pipeline: failures are
//! carried inside `RawLookup`.

mod extract;
mod memory;
mod records;
mod resolution;
mod types;

// Re-export public API
pub use extract::{select_records, SelectionOutcome};
pub use memory::StaticResolver;
pub use records::{HickoryTxtResolver, TxtResolver};
pub use resolution::resolve_txt;
pub use types::RawLookup;

#[cfg(test)]
mod tests;
