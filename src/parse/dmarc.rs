//! DMARC policy record projection.

use serde::Serialize;

use super::tags::ParsedFields;

/// Tags of a DMARC policy record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DmarcPolicyRecord {
    /// `v`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// `p`: none, quarantine or reject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    /// `sp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain_policy: Option<String>,
    /// `pct`, as published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    /// `rua` and `ruf`
    pub reporting_emails: ReportingAddresses,
    /// `adkim` and `aspf`
    pub alignment: Alignment,
}

/// Report destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportingAddresses {
    /// `rua`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    /// `ruf`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forensic: Option<String>,
}

/// Identifier alignment modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// `adkim`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim: Option<String>,
    /// `aspf`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spf: Option<String>,
}

impl From<&ParsedFields> for DmarcPolicyRecord {
    fn from(fields: &ParsedFields) -> Self {
        let tag = |name: &str| fields.get(name).map(str::to_string);
        Self {
            version: tag("v"),
            policy: tag("p"),
            subdomain_policy: tag("sp"),
            percentage: tag("pct"),
            reporting_emails: ReportingAddresses {
                aggregate: tag("rua"),
                forensic: tag("ruf"),
            },
            alignment: Alignment {
                dkim: tag("adkim"),
                spf: tag("aspf"),
            },
        }
    }
}

/// Leading integer of `text`, the way lenient number parsers read it.
///
/// An optional sign followed by at least one ASCII digit; anything after the
/// digits is ignored. `"50"` and `"50abc"` give 50, `"abc"` and `""` give
/// `None`.
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<i64>().ok().map(|n| sign * n)
}
