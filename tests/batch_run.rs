//! Batch runs over a domain list, written as JSON lines.

use std::io::Write;
use std::sync::Arc;

use mailauth_check::dns::StaticResolver;
use mailauth_check::error_handling::{ErrorType, ProcessingStats};
use mailauth_check::insight::{AnthropicInsights, EnrichedChecker};
use mailauth_check::policy::messages;
use mailauth_check::{run_checks, run_checks_with, Checker, Config, Protocol};

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

fn resolver() -> StaticResolver {
    StaticResolver::new()
        .with_txt("good.example", ["v=spf1 -all"])
        .with_txt(
            "_dmarc.good.example",
            ["v=DMARC1; p=reject; rua=mailto:agg@good.example"],
        )
        .with_txt("_dmarc.weak.example", ["v=DMARC1; p=none"])
}

fn read_lines(path: &std::path::Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(path)
        .expect("output file")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[tokio::test]
async fn test_batch_run_writes_one_line_per_domain() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("domains.txt");
    let output = dir.path().join("results.jsonl");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "# mail domains").unwrap();
    writeln!(file, "good.example").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "https://weak.example/path").unwrap();
    writeln!(file, "GOOD.example").unwrap();
    writeln!(file, "bad domain.example").unwrap();
    drop(file);

    let config = Config {
        file: Some(input),
        output: Some(output.clone()),
        checks: vec![Protocol::Spf, Protocol::Dmarc],
        max_concurrency: 2,
        ..Config::default()
    };
    let stats = Arc::new(ProcessingStats::new());
    let checker = Checker::new(resolver()).with_stats(Arc::clone(&stats));

    let report = run_checks_with(&config, Arc::new(checker), Arc::clone(&stats))
        .await
        .expect("run succeeds");

    assert_eq!(report.total_domains, 3);
    assert_eq!(report.skipped_domains, 1);
    assert_eq!(report.total_checks, 4);
    // good: spf pass, dmarc pass; weak: spf fail, dmarc pass
    assert_eq!(report.passed, 3);
    assert_eq!(report.failed, 1);
    assert_eq!(report.warnings, 0);
    assert_eq!(report.errors, 0);
    assert_eq!(stats.total_checks(), 4);

    let mut lines = read_lines(&output);
    lines.sort_by(|a, b| a["domain"].as_str().cmp(&b["domain"].as_str()));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["domain"], "good.example");
    assert_eq!(lines[0]["results"].as_array().unwrap().len(), 2);
    assert_eq!(lines[1]["domain"], "weak.example");
    assert_eq!(lines[1]["results"][0]["protocol"], "spf");
    assert_eq!(lines[1]["results"][0]["status"], "fail");
    assert_eq!(lines[1]["results"][1]["protocol"], "dmarc");
    assert_eq!(
        lines[1]["results"][1]["recommendations"][0],
        messages::UPGRADE_POLICY
    );
    assert!(lines[0].get("overall").is_none());
}

#[tokio::test]
async fn test_batch_run_without_domains_fails() {
    let config = Config::default();
    let checker = Checker::new(resolver());
    let err = run_checks_with(
        &config,
        Arc::new(checker),
        Arc::new(ProcessingStats::new()),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("No domains to check"));
}

#[tokio::test]
async fn test_batch_run_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        file: Some(dir.path().join("missing.txt")),
        ..Config::default()
    };
    let err = run_checks_with(
        &config,
        Arc::new(Checker::new(resolver())),
        Arc::new(ProcessingStats::new()),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Failed to open input file"));
}

#[tokio::test]
async fn test_insights_require_api_key() {
    let config = Config {
        domains: vec!["good.example".to_string()],
        insights: true,
        anthropic_api_key: Some("   ".to_string()),
        ..Config::default()
    };
    let err = run_checks(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("ANTHROPIC_API_KEY"));
}

#[tokio::test]
async fn test_batch_run_survives_enrichment_outage() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/v1/messages"))
            .times(4)
            .respond_with(status_code(503)),
    );

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.jsonl");
    let config = Config {
        domains: vec!["good.example".to_string(), "weak.example".to_string()],
        output: Some(output.clone()),
        checks: vec![Protocol::Dmarc],
        ..Config::default()
    };
    let stats = Arc::new(ProcessingStats::new());
    let provider = AnthropicInsights::new(reqwest::Client::new(), "test-key")
        .with_base_url(server.url("/").to_string());
    let checker = EnrichedChecker::new(
        Checker::new(resolver()).with_stats(Arc::clone(&stats)),
        provider,
        Arc::clone(&stats),
    );

    let report = run_checks_with(&config, Arc::new(checker), Arc::clone(&stats))
        .await
        .expect("enrichment failures never fail the run");

    assert_eq!(report.total_checks, 2);
    assert_eq!(report.passed, 2);
    assert_eq!(
        stats.get_error_count(ErrorType::EnrichmentUnavailable),
        4
    );
    for line in read_lines(&output) {
        assert!(line["results"][0].get("insight").is_none());
        assert!(line.get("overall").is_none());
    }
}
