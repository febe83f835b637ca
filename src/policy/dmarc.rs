//! DMARC rules.

use super::messages::{
    dmarc_policy, single_dmarc_record, ADD_AGGREGATE_REPORTING, ADD_POLICY, DMARC_MULTIPLE,
    DMARC_NOT_FOUND, DMARC_NO_POLICY, FULL_PERCENTAGE, UPGRADE_POLICY,
};
use crate::dns::SelectionOutcome;
use crate::models::ValidationVerdict;
use crate::parse::{leading_integer, ParsedFields};

pub(super) fn validate(
    selection: &SelectionOutcome,
    fields: Option<&ParsedFields>,
    domain: &str,
) -> ValidationVerdict {
    match selection {
        SelectionOutcome::None => ValidationVerdict::fail(DMARC_NOT_FOUND),
        SelectionOutcome::Multiple(_) => ValidationVerdict::warning(DMARC_MULTIPLE)
            .with_recommendation(single_dmarc_record(domain)),
        SelectionOutcome::Single(_) => match fields.and_then(|f| f.get("p")) {
            None => ValidationVerdict::fail(DMARC_NO_POLICY).with_recommendation(ADD_POLICY),
            Some(policy) => ValidationVerdict::pass(dmarc_policy(policy))
                .with_recommendations(fields.map(policy_recommendations).unwrap_or_default()),
        },
    }
}

/// Advice for a DMARC record that has a policy, in fixed order:
/// `p=none`, then missing `rua`, then `pct` below 100.
///
/// `pct` is read by its leading integer; a value with no leading digits
/// never triggers the advice.
pub fn policy_recommendations(fields: &ParsedFields) -> Vec<String> {
    let mut recommendations = Vec::new();

    if fields.get("p") == Some("none") {
        recommendations.push(UPGRADE_POLICY.to_string());
    }
    if !fields.contains("rua") {
        recommendations.push(ADD_AGGREGATE_REPORTING.to_string());
    }
    if fields
        .get("pct")
        .and_then(leading_integer)
        .is_some_and(|pct| pct < 100)
    {
        recommendations.push(FULL_PERCENTAGE.to_string());
    }

    recommendations
}
