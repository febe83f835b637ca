//! DNS module tests.

use super::*;
use crate::error_handling::LookupError;
use crate::models::Protocol;
use std::time::Duration;

fn lookup(records: &[&str]) -> RawLookup {
    RawLookup::found(
        "example.com",
        records.iter().map(|r| r.to_string()).collect(),
    )
}

#[tokio::test]
async fn test_static_resolver_answers_from_table() {
    let resolver = StaticResolver::new().with_txt("Example.com", ["v=spf1 -all"]);
    assert_eq!(
        resolver.query_txt("example.COM").await.unwrap(),
        vec!["v=spf1 -all"]
    );
    assert!(resolver.query_txt("other.com").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_static_resolver_failure() {
    let resolver = StaticResolver::new();
    resolver.fail("example.com", LookupError::ResolutionFailed("SERVFAIL".into()));
    assert_eq!(
        resolver.query_txt("example.com").await,
        Err(LookupError::ResolutionFailed("SERVFAIL".into()))
    );
}

#[tokio::test]
async fn test_resolve_txt_success_and_empty() {
    let resolver = StaticResolver::new().with_txt("example.com", ["a", "b"]);

    let found = resolve_txt(&resolver, "example.com", Duration::from_secs(5)).await;
    assert_eq!(found.query_name, "example.com");
    assert_eq!(found.records, vec!["a", "b"]);
    assert_eq!(found.error, None);

    let empty = resolve_txt(&resolver, "nothing.example.com", Duration::from_secs(5)).await;
    assert!(empty.records.is_empty());
    assert_eq!(empty.error, None);
}

#[tokio::test]
async fn test_resolve_txt_carries_resolution_failure() {
    let resolver = StaticResolver::new();
    resolver.fail("example.com", LookupError::ResolutionFailed("refused".into()));
    let result = resolve_txt(&resolver, "example.com", Duration::from_secs(5)).await;
    assert_eq!(
        result.error,
        Some(LookupError::ResolutionFailed("refused".into()))
    );
    assert!(result.records.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_resolve_txt_times_out() {
    let resolver = StaticResolver::new();
    resolver.stall("slow.example.com");
    let result = resolve_txt(&resolver, "slow.example.com", Duration::from_secs(5)).await;
    assert_eq!(result.error, Some(LookupError::Timeout));
    assert!(result.records.is_empty());
}

#[test]
fn test_select_spf() {
    assert_eq!(
        select_records(Protocol::Spf, &lookup(&[])),
        SelectionOutcome::None
    );
    assert_eq!(
        select_records(
            Protocol::Spf,
            &lookup(&["google-site-verification=abc", "v=spf1 mx -all"])
        ),
        SelectionOutcome::Single("v=spf1 mx -all".into())
    );
    assert_eq!(
        select_records(Protocol::Spf, &lookup(&["v=spf1 -all", "v=spf1 ~all"])),
        SelectionOutcome::Multiple(vec!["v=spf1 -all".into(), "v=spf1 ~all".into()])
    );
}

#[test]
fn test_select_prefix_is_exact() {
    assert_eq!(
        select_records(Protocol::Spf, &lookup(&[" v=spf1 -all", "V=SPF1 -all"])),
        SelectionOutcome::None
    );
    assert_eq!(
        select_records(Protocol::Dmarc, &lookup(&["v=dmarc1; p=none"])),
        SelectionOutcome::None
    );
}

#[test]
fn test_select_dmarc() {
    let outcome = select_records(Protocol::Dmarc, &lookup(&["v=DMARC1; p=reject"]));
    assert_eq!(outcome, SelectionOutcome::Single("v=DMARC1; p=reject".to_string()));
    assert!(matches!(
        select_records(
            Protocol::Dmarc,
            &lookup(&["v=DMARC1; p=reject", "v=DMARC1; p=none"])
        ),
        SelectionOutcome::Multiple(records) if records.len() == 2
    ));
}

#[test]
fn test_select_dkim_concatenates_in_order() {
    assert_eq!(
        select_records(Protocol::Dkim, &lookup(&["v=DKIM1; k=rsa; ", "p=MIGf"])),
        SelectionOutcome::Single("v=DKIM1; k=rsa; p=MIGf".into())
    );
    assert_eq!(
        select_records(Protocol::Dkim, &lookup(&["", ""])),
        SelectionOutcome::None
    );
    assert_eq!(
        select_records(Protocol::Dkim, &lookup(&[])),
        SelectionOutcome::None
    );
}

#[test]
fn test_select_on_failed_lookup_selects_nothing() {
    let failed = RawLookup::failed("example.com", LookupError::Timeout);
    assert_eq!(
        select_records(Protocol::Spf, &failed),
        SelectionOutcome::None
    );
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_hickory_resolver_live_spf() {
    let resolver = crate::initialization::init_resolver(
        &crate::config::Config::default().resolvers,
        Duration::from_secs(5),
    )
    .expect("resolver should initialize");
    let result = resolve_txt(&resolver, "google.com", Duration::from_secs(10)).await;
    assert!(result.error.is_none(), "lookup failed: {:?}", result.error);
    assert!(matches!(
        select_records(Protocol::Spf, &result),
        SelectionOutcome::Single(_)
    ));
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_hickory_resolver_live_nxdomain_is_empty() {
    let resolver = crate::initialization::init_resolver(
        &crate::config::Config::default().resolvers,
        Duration::from_secs(5),
    )
    .expect("resolver should initialize");
    let result = resolve_txt(
        &resolver,
        "definitely-does-not-exist-12345.invalid",
        Duration::from_secs(10),
    )
    .await;
    assert_eq!(result.error, None);
    assert!(result.records.is_empty());
}
