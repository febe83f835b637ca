//! Data model shared by every stage of the checker.
//!
//! - `Protocol`: which authentication mechanism a check targets
//! - `CheckRequest`: validated input to one check
//! - `ValidationVerdict` / `Status`: the policy validator's judgment
//! - `CheckResult`: the immutable, serializable output handed to callers

mod request;
mod result;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::{DKIM_LABEL, DMARC_LABEL};

pub use request::{normalize_domain, CheckRequest};
pub use result::{CheckResult, ParsedRecord, Status, ValidationVerdict};

/// Email-authentication mechanism checked against DNS.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Protocol {
    /// Sender Policy Framework, published at the domain itself
    Spf,
    /// DomainKeys Identified Mail, published at `<selector>._domainkey.<domain>`
    Dkim,
    /// DMARC policy, published at `_dmarc.<domain>`
    Dmarc,
}

impl Protocol {
    /// Upper-case name used in messages ("SPF", "DKIM", "DMARC").
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Spf => "SPF",
            Protocol::Dkim => "DKIM",
            Protocol::Dmarc => "DMARC",
        }
    }

    /// DNS name queried for this protocol.
    ///
    /// `selector` is only consulted for DKIM.
    pub fn query_name(&self, domain: &str, selector: Option<&str>) -> String {
        match self {
            Protocol::Spf => domain.to_string(),
            Protocol::Dmarc => format!("{DMARC_LABEL}.{domain}"),
            Protocol::Dkim => format!(
                "{}.{DKIM_LABEL}.{domain}",
                selector.unwrap_or(crate::config::DEFAULT_DKIM_SELECTOR)
            ),
        }
    }
}
