//! Prompts for the insight service.

use crate::check::DomainReport;
use crate::models::{CheckResult, Protocol};

const JSON_ONLY: &str = "Return ONLY valid JSON, no markdown formatting.";

/// Prompt asking for an annotation of one result.
///
/// The result is embedded as pretty-printed JSON, without any earlier insight.
pub fn protocol_prompt(result: &CheckResult) -> Result<String, serde_json::Error> {
    let result_json = serde_json::to_string_pretty(&result.without_insight())?;
    let domain = result.domain();

    let prompt = match result.protocol() {
        Protocol::Spf => format!(
            "You are an email deliverability expert analyzing SPF (Sender Policy Framework) records.

Domain: {domain}
SPF Test Result:
{result_json}

Provide a comprehensive analysis in JSON format with:
1. \"explanation\": A clear, non-technical explanation of what this SPF record means
2. \"impact\": The impact on email deliverability (high/medium/low)
3. \"recommendations\": An array of specific, actionable recommendations to improve the configuration
4. \"priority\": Overall priority level (critical/high/medium/low)
5. \"securityScore\": A score from 0-100 indicating the security strength

{JSON_ONLY}"
        ),
        Protocol::Dkim => format!(
            "You are an email deliverability expert analyzing DKIM (DomainKeys Identified Mail) records.

Domain: {domain}
Selector: {selector}
DKIM Test Result:
{result_json}

Provide a comprehensive analysis in JSON format with:
1. \"explanation\": A clear, non-technical explanation of what this DKIM record means
2. \"impact\": The impact on email deliverability (high/medium/low)
3. \"recommendations\": An array of specific, actionable recommendations
4. \"priority\": Overall priority level (critical/high/medium/low)
5. \"securityScore\": A score from 0-100 indicating the security strength
6. \"keyStrength\": Analysis of the public key strength

{JSON_ONLY}",
            selector = result.selector().unwrap_or_default()
        ),
        Protocol::Dmarc => format!(
            "You are an email deliverability expert analyzing DMARC (Domain-based Message Authentication) records.

Domain: {domain}
DMARC Test Result:
{result_json}

Provide a comprehensive analysis in JSON format with:
1. \"explanation\": A clear, non-technical explanation of what this DMARC policy means
2. \"impact\": The impact on email deliverability and brand protection (high/medium/low)
3. \"recommendations\": An array of specific, actionable recommendations to improve the policy
4. \"priority\": Overall priority level (critical/high/medium/low)
5. \"securityScore\": A score from 0-100 indicating the security strength
6. \"policyAnalysis\": Detailed analysis of the current policy setting

{JSON_ONLY}"
        ),
    };
    Ok(prompt)
}

/// Prompt asking for the cross-protocol analysis of a report.
pub fn overall_prompt(report: &DomainReport) -> Result<String, serde_json::Error> {
    let mut sections = Vec::with_capacity(report.results.len());
    for result in &report.results {
        sections.push(format!(
            "{} Result: {}",
            result.protocol().label(),
            serde_json::to_string_pretty(&result.without_insight())?
        ));
    }

    Ok(format!(
        "You are an email deliverability expert analyzing the complete email authentication setup for a domain.

Domain: {domain}

{sections}

Provide a comprehensive overall analysis in JSON format with:
1. \"overallScore\": A score from 0-100 for the complete email authentication setup
2. \"summary\": A brief summary of the overall security posture
3. \"criticalIssues\": Array of critical issues that need immediate attention
4. \"strengths\": Array of what's configured well
5. \"nextSteps\": Prioritized array of next steps to improve deliverability
6. \"riskLevel\": Overall risk level (critical/high/medium/low)

{JSON_ONLY}",
        domain = report.domain,
        sections = sections.join("\n")
    ))
}
