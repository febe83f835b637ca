//! Raw lookup outcome.

use crate::error_handling::LookupError;

/// Records returned for one query name, or the reason there are none.
///
/// Empty `records` with no `error` means the name has no TXT records
/// (NXDOMAIN or an empty answer), which is a valid outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLookup {
    /// Name that was queried
    pub query_name: String,
    /// TXT records in retrieval order, each with its character-strings joined
    pub records: Vec<String>,
    /// Set when the lookup itself failed
    pub error: Option<LookupError>,
}

impl RawLookup {
    /// Successful lookup (possibly with no records).
    pub fn found(query_name: impl Into<String>, records: Vec<String>) -> Self {
        Self {
            query_name: query_name.into(),
            records,
            error: None,
        }
    }

    /// Failed lookup.
    pub fn failed(query_name: impl Into<String>, error: LookupError) -> Self {
        Self {
            query_name: query_name.into(),
            records: Vec::new(),
            error: Some(error),
        }
    }
}
