//! Record selection.
//!
//! This module narrows the TXT set returned for a query name down to the
//! records a protocol actually reads.

use super::types::RawLookup;
use crate::config::{DMARC_PREFIX, SPF_PREFIX};
use crate::models::Protocol;

/// How many records qualified for a protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing qualified
    None,
    /// Exactly one candidate record
    Single(String),
    /// Two or more qualifying records, in retrieval order
    Multiple(Vec<String>),
}

impl SelectionOutcome {
    fn from_candidates(mut candidates: Vec<String>) -> Self {
        match candidates.len() {
            0 => SelectionOutcome::None,
            1 => SelectionOutcome::Single(candidates.remove(0)),
            _ => SelectionOutcome::Multiple(candidates),
        }
    }
}

/// Selects the protocol-relevant records from a lookup.
///
/// SPF and DMARC keep the records starting with `v=spf1` and `v=DMARC1`
/// respectively. The match is exact and case-sensitive, so a record with
/// leading whitespace does not qualify. DKIM keeps everything: all records
/// at the selector name are concatenated in order into one candidate, and an
/// empty concatenation counts as no record.
///
/// A failed lookup selects nothing; callers check `RawLookup::error` first.
pub fn select_records(protocol: Protocol, lookup: &RawLookup) -> SelectionOutcome {
    match protocol {
        Protocol::Spf => SelectionOutcome::from_candidates(with_prefix(&lookup.records, SPF_PREFIX)),
        Protocol::Dmarc => {
            SelectionOutcome::from_candidates(with_prefix(&lookup.records, DMARC_PREFIX))
        }
        Protocol::Dkim => {
            let joined = lookup.records.concat();
            if joined.is_empty() {
                SelectionOutcome::None
            } else {
                SelectionOutcome::Single(joined)
            }
        }
    }
}

fn with_prefix(records: &[String], prefix: &str) -> Vec<String> {
    records
        .iter()
        .filter(|txt| txt.starts_with(prefix))
        .cloned()
        .collect()
}
