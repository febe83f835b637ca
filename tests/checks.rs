//! End-to-end check scenarios against an in-memory resolver.

use std::time::Duration;

use mailauth_check::dns::StaticResolver;
use mailauth_check::error_handling::{ErrorType, LookupError};
use mailauth_check::models::ParsedRecord;
use mailauth_check::policy::messages;
use mailauth_check::{check_domain, AuthCheck, CheckRequest, Checker, Protocol, Status};
use tokio::time::Instant;

fn well_configured() -> StaticResolver {
    StaticResolver::new()
        .with_txt(
            "example.com",
            [
                "google-site-verification=abc",
                "v=spf1 include:_spf.google.com -all",
            ],
        )
        .with_txt(
            "google._domainkey.example.com",
            ["v=DKIM1; k=rsa; p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC"],
        )
        .with_txt(
            "_dmarc.example.com",
            ["v=DMARC1; p=reject; rua=mailto:dmarc@example.com; pct=100; adkim=s"],
        )
}

#[tokio::test]
async fn test_well_configured_domain_passes_everything() {
    let checker = Checker::new(well_configured());
    let report = check_domain(
        &checker,
        "example.com",
        &[Protocol::Spf, Protocol::Dkim, Protocol::Dmarc],
        "google",
        Instant::now() + Duration::from_secs(30),
    )
    .await
    .expect("valid domain");

    assert_eq!(report.count(Status::Pass), 3);
    for result in &report.results {
        assert!(
            result.recommendations().is_empty(),
            "{} should have no recommendations",
            result.protocol()
        );
    }

    let Some(ParsedRecord::Dmarc(dmarc)) = report.dmarc().unwrap().parsed() else {
        panic!("expected DMARC projection");
    };
    assert_eq!(dmarc.policy.as_deref(), Some("reject"));
    assert_eq!(
        dmarc.reporting_emails.aggregate.as_deref(),
        Some("mailto:dmarc@example.com")
    );
    assert_eq!(dmarc.alignment.dkim.as_deref(), Some("s"));
    assert_eq!(dmarc.alignment.spf, None);

    let Some(ParsedRecord::Dkim(dkim)) = report.dkim().unwrap().parsed() else {
        panic!("expected DKIM projection");
    };
    assert_eq!(dkim.key_type.as_deref(), Some("rsa"));
}

#[tokio::test]
async fn test_unconfigured_domain_fails_everything() {
    let checker = Checker::new(StaticResolver::new());
    let report = check_domain(
        &checker,
        "example.net",
        &[Protocol::Spf, Protocol::Dkim, Protocol::Dmarc],
        "default",
        Instant::now() + Duration::from_secs(30),
    )
    .await
    .expect("valid domain");

    assert_eq!(report.count(Status::Fail), 3);
    assert_eq!(report.spf().unwrap().message(), messages::SPF_NOT_FOUND);
    assert_eq!(
        report.dkim().unwrap().message(),
        messages::dkim_not_found("default")
    );
    assert_eq!(report.dmarc().unwrap().message(), messages::DMARC_NOT_FOUND);
    assert_eq!(
        checker.stats().get_error_count(ErrorType::NoQualifyingRecord),
        3
    );
}

#[tokio::test]
async fn test_dmarc_monitoring_policy_recommendations() {
    let resolver =
        StaticResolver::new().with_txt("_dmarc.example.com", ["v=DMARC1; p=none; pct=25"]);
    let result = Checker::new(resolver)
        .check(&CheckRequest::dmarc("example.com").unwrap())
        .await;

    assert_eq!(result.status(), Status::Pass);
    assert_eq!(result.message(), "DMARC policy is set to: none");
    assert_eq!(
        result.recommendations(),
        [
            messages::UPGRADE_POLICY,
            messages::ADD_AGGREGATE_REPORTING,
            messages::FULL_PERCENTAGE,
        ]
    );
}

#[tokio::test]
async fn test_dmarc_prefix_is_case_sensitive() {
    let resolver = StaticResolver::new().with_txt("_dmarc.example.com", ["v=dmarc1; p=reject"]);
    let result = Checker::new(resolver)
        .check(&CheckRequest::dmarc("example.com").unwrap())
        .await;
    assert_eq!(result.status(), Status::Fail);
    assert_eq!(result.message(), messages::DMARC_NOT_FOUND);
}

#[tokio::test]
async fn test_result_json_shape() {
    let resolver = StaticResolver::new().with_txt("example.com", ["v=spf1 mx ?all"]);
    let result = Checker::new(resolver)
        .check(&CheckRequest::spf("example.com").unwrap())
        .await;
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["protocol"], "spf");
    assert_eq!(json["domain"], "example.com");
    assert_eq!(json["status"], "pass");
    assert_eq!(json["rawRecord"], "v=spf1 mx ?all");
    assert_eq!(json["parsedFields"]["v"], "spf1");
    assert_eq!(json["parsed"]["mechanisms"][0], "mx");
    assert_eq!(json["parsed"]["qualifiers"][0], "?all");
    assert!(json["recommendations"].as_array().unwrap().is_empty());
    assert!(json.get("selector").is_none());
    assert!(json.get("insight").is_none());
    assert!(json.get("records").is_none());
    assert!(json["checkedAt"].is_string());
}

#[tokio::test]
async fn test_failed_lookup_on_one_protocol_leaves_others_intact() {
    let resolver = well_configured();
    resolver.fail(
        "_dmarc.example.com",
        LookupError::ResolutionFailed("REFUSED".to_string()),
    );
    let checker = Checker::new(resolver);
    let report = check_domain(
        &checker,
        "example.com",
        &[Protocol::Spf, Protocol::Dmarc],
        "default",
        Instant::now() + Duration::from_secs(30),
    )
    .await
    .unwrap();

    assert_eq!(report.spf().unwrap().status(), Status::Pass);
    let dmarc = report.dmarc().unwrap();
    assert_eq!(dmarc.status(), Status::Error);
    assert_eq!(dmarc.message(), "DNS resolution failed: REFUSED");
    assert!(dmarc.recommendations().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stalled_resolver_times_out() {
    let resolver = StaticResolver::new();
    resolver.stall("example.com");
    let checker = Checker::new(resolver).with_dns_timeout(Duration::from_secs(5));
    let result = checker
        .check_until(
            &CheckRequest::spf("example.com").unwrap(),
            Instant::now() + Duration::from_secs(30),
        )
        .await;

    assert_eq!(result.status(), Status::Error);
    assert_eq!(result.message(), "DNS lookup timeout");
    assert_eq!(checker.stats().get_error_count(ErrorType::LookupTimeout), 1);
}

#[tokio::test]
async fn test_checks_are_independent() {
    // Same checker, same request: results agree apart from the timestamp
    let checker = Checker::new(well_configured());
    let request = CheckRequest::dkim("example.com", "google").unwrap();
    let first = checker.check(&request).await;
    let second = checker.check(&request).await;

    assert_eq!(first.status(), second.status());
    assert_eq!(first.message(), second.message());
    assert_eq!(first.parsed_fields(), second.parsed_fields());
    assert_eq!(checker.stats().total_checks(), 2);
}

#[test]
fn test_invalid_requests_rejected() {
    assert!(CheckRequest::spf("").is_err());
    assert!(CheckRequest::spf("exa mple.com").is_err());
    assert!(CheckRequest::dkim("example.com", "").is_err());
    assert!(CheckRequest::dmarc(&"a".repeat(300)).is_err());
}
