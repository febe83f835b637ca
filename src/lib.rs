//! mailauth_check library: SPF, DKIM and DMARC record checks
//!
//! This library looks up a domain's email-authentication records in DNS,
//! selects and parses the relevant TXT records, and classifies each protocol
//! into a structured, serializable verdict with recommendations. Results can
//! optionally be annotated by an external insight service.
//!
//! # Example
//!
//! ```no_run
//! use mailauth_check::dns::StaticResolver;
//! use mailauth_check::{CheckRequest, Checker, Status};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = StaticResolver::new()
//!     .with_txt("_dmarc.example.com", ["v=DMARC1; p=reject; rua=mailto:d@example.com"]);
//! let checker = Checker::new(resolver);
//!
//! let result = checker.check(&CheckRequest::dmarc("example.com")?).await;
//! assert_eq!(result.status(), Status::Pass);
//! println!("{}", serde_json::to_string(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! For a whole batch of domains against live DNS, see [`run_checks`].
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod check;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod insight;
pub mod models;
pub mod parse;
pub mod policy;

pub use check::{check_domain, AuthCheck, Checker, DomainReport};
pub use config::{Config, LogFormat, LogLevel};
pub use models::{CheckRequest, CheckResult, Protocol, Status};
pub use run::{run_checks, run_checks_with, RunReport};

mod run {
    use anyhow::{Context, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::time::Instant;

    use crate::app::{
        log_progress, print_outcome_statistics, print_simple_summary, read_domains, ReportWriter,
    };
    use crate::check::{check_domain, AuthCheck, Checker};
    use crate::config::{Config, PROGRESS_LOG_INTERVAL};
    use crate::error_handling::ProcessingStats;
    use crate::initialization::{init_insight_client, init_resolver, init_semaphore};
    use crate::insight::{AnthropicInsights, EnrichedChecker};
    use crate::models::{Protocol, Status};

    /// Results of a batch run.
    ///
    /// The JSON lines themselves go to the configured output; this is the
    /// tally.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RunReport {
        /// Domains read from the input
        pub total_domains: usize,
        /// Domains rejected before any lookup (invalid name or failed task)
        pub skipped_domains: usize,
        /// Protocol checks run
        pub total_checks: usize,
        /// Checks with `status=pass`
        pub passed: usize,
        /// Checks with `status=fail`
        pub failed: usize,
        /// Checks with `status=warning`
        pub warnings: usize,
        /// Checks with `status=error`
        pub errors: usize,
        /// Wall-clock duration of the run
        pub elapsed_seconds: f64,
    }

    /// Checks every configured domain against live DNS.
    ///
    /// Builds the resolver (and, with `insights` enabled, the insight client)
    /// from `config`, then hands over to [`run_checks_with`].
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails, `insights` is enabled
    /// without an API key, there are no domains, or output cannot be
    /// written. Individual check failures are never errors.
    pub async fn run_checks(config: Config) -> Result<RunReport> {
        let resolver = init_resolver(&config.resolvers, config.dns_timeout())
            .context("Failed to initialize DNS resolver")?;
        let stats = Arc::new(ProcessingStats::new());
        let checker = Checker::new(resolver)
            .with_dns_timeout(config.dns_timeout())
            .with_stats(Arc::clone(&stats));

        if config.insights {
            let api_key = config
                .anthropic_api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
                .context("--insights requires an API key (set ANTHROPIC_API_KEY)")?;
            let client = init_insight_client().context("Failed to initialize HTTP client")?;
            let provider = AnthropicInsights::new(client, api_key)
                .with_base_url(config.anthropic_base_url.as_str())
                .with_model(config.insight_model.as_str());
            info!("Insight enrichment enabled (model: {})", config.insight_model);

            let checker = EnrichedChecker::new(checker, provider, Arc::clone(&stats));
            run_checks_with(&config, Arc::new(checker), stats).await
        } else {
            run_checks_with(&config, Arc::new(checker), stats).await
        }
    }

    /// Checks every configured domain with `checker`.
    ///
    /// Domains are read from `config` (arguments, then file or stdin) and
    /// checked up to `max_concurrency` at a time, each bounded by the
    /// configured deadline. Each finished `DomainReport` is written as one
    /// JSON line to the configured output, in completion order.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration
    /// * `checker` - Runs the checks (shared by all tasks)
    /// * `stats` - Outcome counters printed at the end
    ///
    /// # Errors
    ///
    /// Returns an error if there are no domains, the input cannot be read or
    /// the output cannot be written.
    pub async fn run_checks_with<C: AuthCheck + 'static>(
        config: &Config,
        checker: Arc<C>,
        stats: Arc<ProcessingStats>,
    ) -> Result<RunReport> {
        let domains = read_domains(config).await?;
        if domains.is_empty() {
            anyhow::bail!("No domains to check: pass them as arguments or with --file");
        }
        let mut writer = ReportWriter::open(config.output.as_deref())?;

        let start_time = std::time::Instant::now();
        let total_domains = domains.len();
        let protocols: Arc<[Protocol]> = Arc::from(config.checks.as_slice());
        let selector: Arc<str> = Arc::from(config.selector.as_str());
        let deadline = config.deadline();
        let semaphore = init_semaphore(config.max_concurrency);
        let mut tasks = FuturesUnordered::new();

        info!(
            "Checking {} domain(s) for {} (max concurrency {})",
            total_domains,
            protocols
                .iter()
                .map(Protocol::label)
                .collect::<Vec<_>>()
                .join(", "),
            config.max_concurrency
        );

        for domain in domains {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping domain: {domain}");
                    continue;
                }
            };

            let checker = Arc::clone(&checker);
            let protocols = Arc::clone(&protocols);
            let selector = Arc::clone(&selector);
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let report = check_domain(
                    checker.as_ref(),
                    &domain,
                    &protocols,
                    &selector,
                    Instant::now() + deadline,
                )
                .await;
                (domain, report)
            }));
        }

        let completed = AtomicUsize::new(0);
        let mut report = RunReport {
            total_domains,
            ..RunReport::default()
        };
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok((_, Ok(domain_report))) => {
                    report.total_checks += domain_report.results.len();
                    report.passed += domain_report.count(Status::Pass);
                    report.failed += domain_report.count(Status::Fail);
                    report.warnings += domain_report.count(Status::Warning);
                    report.errors += domain_report.count(Status::Error);
                    writer.write_report(&domain_report)?;
                }
                Ok((domain, Err(e))) => {
                    warn!("Skipping {domain}: {e}");
                    report.skipped_domains += 1;
                }
                Err(e) => {
                    warn!("Check task failed: {e}");
                    report.skipped_domains += 1;
                }
            }

            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if done % PROGRESS_LOG_INTERVAL == 0 {
                log_progress(start_time, &completed, total_domains);
            }
        }

        let written = writer.finish()?;
        report.elapsed_seconds = start_time.elapsed().as_secs_f64();

        print_outcome_statistics(&stats);
        print_simple_summary(written, &stats, report.elapsed_seconds);

        Ok(report)
    }
}
