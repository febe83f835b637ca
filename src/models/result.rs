//! Verdicts and check results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::{CheckRequest, Protocol};
use crate::error_handling::LookupError;
use crate::insight::Insight;
use crate::parse::{DkimKeyRecord, DmarcPolicyRecord, ParsedFields, SpfRecord};

/// Overall judgment of a check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// Record published and acceptable
    Pass,
    /// Record missing or structurally invalid
    Fail,
    /// Record usable but ambiguous
    Warning,
    /// The lookup itself failed; no policy judgment was made
    Error,
}

/// Output of the policy validator: status, message and ordered advice.
///
/// Recommendations are advisory only and never influence `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    /// Status of the check
    pub status: Status,
    /// One-line explanation
    pub message: String,
    /// Improvement suggestions, in rule order
    pub recommendations: Vec<String>,
}

impl ValidationVerdict {
    /// Verdict with no recommendations.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            recommendations: Vec::new(),
        }
    }

    /// `pass` verdict.
    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Status::Pass, message)
    }

    /// `fail` verdict.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Status::Fail, message)
    }

    /// `warning` verdict.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Status::Warning, message)
    }

    /// `error` verdict for a failed lookup; the message is the failure description.
    pub fn from_lookup_error(err: &LookupError) -> Self {
        Self::new(Status::Error, err.to_string())
    }

    /// Appends a recommendation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Appends several recommendations, keeping their order.
    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations
            .extend(recommendations.into_iter().map(Into::into));
        self
    }
}

/// Protocol-specific projection of the selected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedRecord {
    /// SPF version and mechanisms
    Spf(SpfRecord),
    /// DKIM key record tags
    Dkim(DkimKeyRecord),
    /// DMARC policy tags
    Dmarc(DmarcPolicyRecord),
}

/// Result of one protocol check.
///
/// This is the record handed to persistence and reporting layers; it
/// serializes to camelCase JSON with absent optionals omitted. Once built it
/// is only ever replaced, never mutated: attaching an insight consumes the
/// result and returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    protocol: Protocol,
    domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    selector: Option<String>,
    status: Status,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed_fields: Option<ParsedFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<ParsedRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    records: Vec<String>,
    recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insight: Option<Insight>,
    checked_at: DateTime<Utc>,
}

impl CheckResult {
    /// Starts a result from the request and the validator's verdict.
    pub(crate) fn new(request: &CheckRequest, verdict: ValidationVerdict) -> Self {
        Self {
            protocol: request.protocol(),
            domain: request.domain().to_string(),
            selector: request.selector().map(str::to_string),
            status: verdict.status,
            message: verdict.message,
            raw_record: None,
            parsed_fields: None,
            parsed: None,
            records: Vec::new(),
            recommendations: verdict.recommendations,
            insight: None,
            checked_at: Utc::now(),
        }
    }

    pub(crate) fn with_raw_record(mut self, record: String) -> Self {
        self.raw_record = Some(record);
        self
    }

    pub(crate) fn with_parsed(mut self, fields: ParsedFields, parsed: ParsedRecord) -> Self {
        self.parsed_fields = Some(fields);
        self.parsed = Some(parsed);
        self
    }

    pub(crate) fn with_records(mut self, records: Vec<String>) -> Self {
        self.records = records;
        self
    }

    /// Returns this result with `insight` attached. Status and every other
    /// field are carried over unchanged.
    pub fn with_insight(mut self, insight: Insight) -> Self {
        self.insight = Some(insight);
        self
    }

    /// Copy of this result without any insight, as sent to the collaborator.
    pub(crate) fn without_insight(&self) -> Self {
        Self {
            insight: None,
            ..self.clone()
        }
    }

    /// Protocol checked.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Domain checked.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// DKIM selector (DKIM results only).
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Status of the check.
    pub fn status(&self) -> Status {
        self.status
    }

    /// One-line explanation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The selected record, when exactly one qualified.
    pub fn raw_record(&self) -> Option<&str> {
        self.raw_record.as_deref()
    }

    /// Tag map of the selected record (pass/warning results only).
    pub fn parsed_fields(&self) -> Option<&ParsedFields> {
        self.parsed_fields.as_ref()
    }

    /// Protocol projection of the selected record (pass/warning results only).
    pub fn parsed(&self) -> Option<&ParsedRecord> {
        self.parsed.as_ref()
    }

    /// Every qualifying record, when more than one was published.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Improvement suggestions.
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Annotation from the insight collaborator, if enrichment succeeded.
    pub fn insight(&self) -> Option<&Insight> {
        self.insight.as_ref()
    }

    /// When the result was assembled.
    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_builders() {
        let verdict = ValidationVerdict::pass("ok")
            .with_recommendation("first")
            .with_recommendations(["second", "third"]);
        assert_eq!(verdict.status, Status::Pass);
        assert_eq!(verdict.recommendations, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_verdict_from_lookup_error() {
        let verdict = ValidationVerdict::from_lookup_error(&LookupError::Timeout);
        assert_eq!(verdict.status, Status::Error);
        assert_eq!(verdict.message, "DNS lookup timeout");
        assert!(verdict.recommendations.is_empty());
    }

    #[test]
    fn test_result_serializes_camel_case_and_omits_absent_fields() {
        let request = CheckRequest::spf("example.com").unwrap();
        let result = CheckResult::new(&request, ValidationVerdict::fail("No SPF record found"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["protocol"], "spf");
        assert_eq!(json["status"], "fail");
        assert_eq!(json["message"], "No SPF record found");
        assert!(json.get("checkedAt").is_some());
        assert!(json.get("rawRecord").is_none());
        assert!(json.get("parsedFields").is_none());
        assert!(json.get("selector").is_none());
        assert!(json.get("records").is_none());
        assert!(json.get("insight").is_none());
        assert_eq!(json["recommendations"], serde_json::json!([]));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Warning.to_string(), "warning");
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"error\"");
    }
}
