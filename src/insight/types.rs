//! Insight annotations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error_handling::InsightError;

/// Annotation attached to a single check result.
///
/// The well-known keys are typed; anything else the service returns is kept
/// in `extra` and serialized back inline. Recommendation entries are kept as
/// returned (plain strings or objects).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Plain-language explanation of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Impact on deliverability (high/medium/low)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// Prioritized recommendations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Value>,
    /// Overall priority (critical/high/medium/low)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Security strength, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_score: Option<i64>,
    /// DKIM only: analysis of the public key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_strength: Option<Value>,
    /// DMARC only: analysis of the policy setting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_analysis: Option<Value>,
    /// Any other keys in the reply
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Insight {
    /// Rejects a score outside 0-100.
    ///
    /// # Errors
    ///
    /// Returns `InsightError::ScoreOutOfRange` with the offending score.
    pub fn validated(self) -> Result<Self, InsightError> {
        check_score(self.security_score)?;
        Ok(self)
    }
}

/// Cross-protocol analysis of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallInsight {
    /// Score for the whole setup, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<i64>,
    /// Short summary of the security posture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Issues needing immediate attention
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_issues: Vec<Value>,
    /// What is configured well
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<Value>,
    /// Prioritized next steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<Value>,
    /// Overall risk (critical/high/medium/low)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    /// Any other keys in the reply
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OverallInsight {
    /// Rejects a score outside 0-100.
    ///
    /// # Errors
    ///
    /// Returns `InsightError::ScoreOutOfRange` with the offending score.
    pub fn validated(self) -> Result<Self, InsightError> {
        check_score(self.overall_score)?;
        Ok(self)
    }
}

fn check_score(score: Option<i64>) -> Result<(), InsightError> {
    match score {
        Some(score) if !(0..=100).contains(&score) => Err(InsightError::ScoreOutOfRange(score)),
        _ => Ok(()),
    }
}
