//! SPF record projection.

use serde::Serialize;

/// Prefixes that make a term a qualified mechanism.
const QUALIFIERS: [char; 4] = ['~', '-', '+', '?'];

/// Version and terms of an SPF record.
///
/// Terms keep their record order within each list. No mechanism syntax is
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpfRecord {
    /// First term, normally `v=spf1`
    pub version: String,
    /// Terms without a leading qualifier (`include:...`, `mx`, `a`)
    pub mechanisms: Vec<String>,
    /// Terms with a leading qualifier (`-all`, `~all`, `+ip4:...`, `?all`)
    pub qualifiers: Vec<String>,
}

/// Splits an SPF record on spaces. Empty terms from doubled spaces are skipped.
pub fn parse_spf(record: &str) -> SpfRecord {
    let mut terms = record.split(' ').filter(|t| !t.is_empty());
    let version = terms.next().unwrap_or_default().to_string();

    let (qualifiers, mechanisms): (Vec<String>, Vec<String>) = terms
        .map(str::to_string)
        .partition(|t| t.starts_with(QUALIFIERS));

    SpfRecord {
        version,
        mechanisms,
        qualifiers,
    }
}
