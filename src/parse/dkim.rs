//! DKIM key record projection.

use serde::Serialize;

use super::tags::ParsedFields;

/// Tags of a DKIM key record (`v`, `k`, `p`, `t`, `n`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DkimKeyRecord {
    /// `v`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// `k`, e.g. `rsa` or `ed25519`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    /// `p`, base64 public key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// `t`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// `n`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&ParsedFields> for DkimKeyRecord {
    fn from(fields: &ParsedFields) -> Self {
        let tag = |name: &str| fields.get(name).map(str::to_string);
        Self {
            version: tag("v"),
            key_type: tag("k"),
            public_key: tag("p"),
            flags: tag("t"),
            notes: tag("n"),
        }
    }
}
