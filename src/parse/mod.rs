//! Record parsing.
//!
//! Every record is first decomposed with the protocol-agnostic
//! [`parse_tags`]; the protocol projections (`SpfRecord`, `DkimKeyRecord`,
//! `DmarcPolicyRecord`) are layered on top. All parsing here is pure and
//! total: malformed input yields fewer fields, never an error.

mod dkim;
mod dmarc;
mod spf;
mod tags;

use crate::models::{ParsedRecord, Protocol};

// Re-export public API
pub use dkim::DkimKeyRecord;
pub use dmarc::{leading_integer, Alignment, DmarcPolicyRecord, ReportingAddresses};
pub use spf::{parse_spf, SpfRecord};
pub use tags::{parse_tags, ParsedFields};

/// Parses a selected record for `protocol`.
///
/// SPF records are not tag lists, so their fields come from the version term
/// alone (`v=spf1` gives `{v: spf1}`); DKIM and DMARC records are parsed as
/// a whole.
pub fn parse_record(protocol: Protocol, record: &str) -> (ParsedFields, ParsedRecord) {
    match protocol {
        Protocol::Spf => {
            let spf = parse_spf(record);
            (parse_tags(&spf.version), ParsedRecord::Spf(spf))
        }
        Protocol::Dkim => {
            let fields = parse_tags(record);
            let dkim = DkimKeyRecord::from(&fields);
            (fields, ParsedRecord::Dkim(dkim))
        }
        Protocol::Dmarc => {
            let fields = parse_tags(record);
            let dmarc = DmarcPolicyRecord::from(&fields);
            (fields, ParsedRecord::Dmarc(dmarc))
        }
    }
}
