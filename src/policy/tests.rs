//! Policy validation tests.

use super::messages::*;
use super::*;
use crate::models::Status;
use crate::parse::parse_tags;

fn dmarc_verdict(record: &str) -> ValidationVerdict {
    let request = CheckRequest::dmarc("example.com").unwrap();
    let fields = parse_tags(record);
    validate(
        &request,
        &SelectionOutcome::Single(record.to_string()),
        Some(&fields),
    )
}

#[test]
fn test_spf_outcomes() {
    let request = CheckRequest::spf("example.com").unwrap();

    let none = validate(&request, &SelectionOutcome::None, None);
    assert_eq!(none.status, Status::Fail);
    assert_eq!(none.message, SPF_NOT_FOUND);

    let multiple = validate(
        &request,
        &SelectionOutcome::Multiple(vec!["v=spf1 -all".into(), "v=spf1 ~all".into()]),
        None,
    );
    assert_eq!(multiple.status, Status::Fail);
    assert!(multiple.message.contains("Multiple SPF records"));

    let single = validate(
        &request,
        &SelectionOutcome::Single("v=spf1 +all".into()),
        Some(&parse_tags("v=spf1")),
    );
    assert_eq!(single.status, Status::Pass);
    assert_eq!(single.message, SPF_VALID);
    assert!(single.recommendations.is_empty());
}

#[test]
fn test_dkim_outcomes() {
    let request = CheckRequest::dkim("example.com", "default").unwrap();

    let none = validate(&request, &SelectionOutcome::None, None);
    assert_eq!(none.status, Status::Fail);
    assert_eq!(none.message, "No DKIM record found for selector: default");

    let single = validate(
        &request,
        &SelectionOutcome::Single("v=DKIM1; p=MIGf".into()),
        None,
    );
    assert_eq!(single.status, Status::Pass);
    assert_eq!(single.message, DKIM_VALID);
}

#[test]
fn test_dmarc_missing_and_multiple() {
    let request = CheckRequest::dmarc("example.com").unwrap();

    let none = validate(&request, &SelectionOutcome::None, None);
    assert_eq!(none.status, Status::Fail);
    assert_eq!(none.message, DMARC_NOT_FOUND);

    let multiple = validate(
        &request,
        &SelectionOutcome::Multiple(vec!["v=DMARC1; p=none".into(), "v=DMARC1; p=reject".into()]),
        None,
    );
    assert_eq!(multiple.status, Status::Warning);
    assert_eq!(multiple.message, DMARC_MULTIPLE);
    assert_eq!(
        multiple.recommendations,
        vec![single_dmarc_record("example.com")]
    );
}

#[test]
fn test_dmarc_without_policy_fails() {
    let verdict = dmarc_verdict("v=DMARC1; rua=mailto:d@example.com");
    assert_eq!(verdict.status, Status::Fail);
    assert_eq!(verdict.message, DMARC_NO_POLICY);
    assert_eq!(verdict.recommendations, vec![ADD_POLICY]);
}

#[test]
fn test_dmarc_strict_policy_has_no_recommendations() {
    let verdict = dmarc_verdict("v=DMARC1; p=reject; rua=mailto:d@example.com; pct=100");
    assert_eq!(verdict.status, Status::Pass);
    assert_eq!(verdict.message, "DMARC policy is set to: reject");
    assert!(verdict.recommendations.is_empty());
}

#[test]
fn test_dmarc_removing_rua_adds_exactly_reporting_advice() {
    let verdict = dmarc_verdict("v=DMARC1; p=reject; pct=100");
    assert_eq!(verdict.status, Status::Pass);
    assert_eq!(verdict.recommendations, vec![ADD_AGGREGATE_REPORTING]);
}

#[test]
fn test_dmarc_recommendation_order() {
    let verdict = dmarc_verdict("v=DMARC1; p=none; pct=50");
    assert_eq!(verdict.status, Status::Pass);
    assert_eq!(
        verdict.recommendations,
        vec![UPGRADE_POLICY, ADD_AGGREGATE_REPORTING, FULL_PERCENTAGE]
    );
}

#[test]
fn test_dmarc_pct_uses_leading_integer() {
    let fields = parse_tags("v=DMARC1; p=reject; rua=mailto:x@example.com; pct=50abc");
    assert_eq!(policy_recommendations(&fields), vec![FULL_PERCENTAGE]);

    let fields = parse_tags("v=DMARC1; p=reject; rua=mailto:x@example.com; pct=abc");
    assert!(policy_recommendations(&fields).is_empty());

    let fields = parse_tags("v=DMARC1; p=reject; rua=mailto:x@example.com; pct=0");
    assert_eq!(policy_recommendations(&fields), vec![FULL_PERCENTAGE]);
}

#[test]
fn test_dmarc_policy_value_is_case_sensitive() {
    // Only the exact value "none" triggers the upgrade advice
    let verdict = dmarc_verdict("v=DMARC1; p=None; rua=mailto:d@example.com");
    assert_eq!(verdict.status, Status::Pass);
    assert!(verdict.recommendations.is_empty());
}
