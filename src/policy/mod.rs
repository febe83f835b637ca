//! Policy validation.
//!
//! Turns a record selection (and, for a single record, its parsed fields)
//! into a `ValidationVerdict`. Each protocol has its own rule set; the
//! dispatch here is the only place that branches on `Protocol`.
//!
//! Lookup failures never reach this module: the assembler short-circuits
//! them into `status=error` results.

mod dkim;
mod dmarc;
mod spf;

use crate::dns::SelectionOutcome;
use crate::models::{CheckRequest, Protocol, ValidationVerdict};
use crate::parse::ParsedFields;

pub use dmarc::policy_recommendations;

/// Validates the records selected for `request`.
///
/// # Arguments
///
/// * `request` - The check being validated (protocol, domain, selector)
/// * `selection` - Outcome of record selection
/// * `fields` - Parsed fields of the single selected record, if any
///
/// # Returns
///
/// The verdict: status, message and recommendations in rule order.
pub fn validate(
    request: &CheckRequest,
    selection: &SelectionOutcome,
    fields: Option<&ParsedFields>,
) -> ValidationVerdict {
    match request.protocol() {
        Protocol::Spf => spf::validate(selection),
        Protocol::Dkim => dkim::validate(selection, request.selector().unwrap_or_default()),
        Protocol::Dmarc => dmarc::validate(selection, fields, request.domain()),
    }
}

/// Fixed messages and recommendations.
pub mod messages {
    /// SPF: no `v=spf1` record.
    pub const SPF_NOT_FOUND: &str = "No SPF record found";
    /// SPF: more than one `v=spf1` record.
    pub const SPF_MULTIPLE: &str = "Multiple SPF records found (only one allowed)";
    /// SPF: exactly one record.
    pub const SPF_VALID: &str = "Valid SPF record found";

    /// DKIM: a record exists at the selector name.
    pub const DKIM_VALID: &str = "Valid DKIM record found";

    /// DMARC: no `v=DMARC1` record.
    pub const DMARC_NOT_FOUND: &str = "No DMARC record found";
    /// DMARC: more than one `v=DMARC1` record.
    pub const DMARC_MULTIPLE: &str = "Multiple DMARC records found";
    /// DMARC: record without `p`.
    pub const DMARC_NO_POLICY: &str = "No policy specified";
    /// Advice for a record without `p`.
    pub const ADD_POLICY: &str = "Add a policy (p=none, p=quarantine, or p=reject)";
    /// Advice for `p=none`.
    pub const UPGRADE_POLICY: &str =
        "Consider upgrading policy to quarantine or reject for better protection";
    /// Advice for a missing `rua`.
    pub const ADD_AGGREGATE_REPORTING: &str =
        "Add aggregate reporting (rua) to monitor DMARC activity";
    /// Advice for `pct` below 100.
    pub const FULL_PERCENTAGE: &str =
        "Consider setting percentage (pct) to 100 for full protection";

    /// DKIM: nothing at `<selector>._domainkey.<domain>`.
    pub fn dkim_not_found(selector: &str) -> String {
        format!("No DKIM record found for selector: {selector}")
    }

    /// DMARC: policy in force.
    pub fn dmarc_policy(policy: &str) -> String {
        format!("DMARC policy is set to: {policy}")
    }

    /// Advice when several DMARC records are published.
    pub fn single_dmarc_record(domain: &str) -> String {
        format!(
            "Publish a single DMARC record at _dmarc.{domain}; receivers may ignore all records when several are present"
        )
    }
}

#[cfg(test)]
mod tests;
