//! The check pipeline.
//!
//! `(domain, protocol, selector?)` → lookup → select → parse → validate →
//! assemble. The pipeline is generic over the protocol; per-protocol
//! behavior lives in record selection, the parser projections and the
//! policy rules.
//!
//! [`AuthCheck`] is the seam callers program against. [`Checker`] is the
//! core implementation; enrichment wraps it (see [`crate::insight`]).

mod assemble;
mod report;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::config::{CHECK_DEADLINE, DNS_TIMEOUT_SECS};
use crate::dns::{resolve_txt, RawLookup, TxtResolver};
use crate::error_handling::{LookupError, ProcessingStats};
use crate::models::{CheckRequest, CheckResult};

pub use assemble::{evaluate, Evaluation};
pub use report::{check_domain, DomainReport};

/// Something that can run a check.
pub trait AuthCheck: Send + Sync {
    /// Runs `request`, finishing by `deadline`.
    ///
    /// Always yields a well-formed result; failures become `status=error`.
    fn check_until(
        &self,
        request: &CheckRequest,
        deadline: Instant,
    ) -> impl Future<Output = CheckResult> + Send;

    /// Post-processes a finished domain report. The default returns it as is.
    fn summarize(
        &self,
        report: DomainReport,
        _deadline: Instant,
    ) -> impl Future<Output = DomainReport> + Send {
        std::future::ready(report)
    }
}

/// Core checker: DNS lookup plus pure evaluation.
///
/// Holds only the resolver handle, the lookup timeout and shared counters;
/// checks run through it are independent of each other.
pub struct Checker<R> {
    resolver: R,
    dns_timeout: Duration,
    stats: Arc<ProcessingStats>,
}

impl<R: TxtResolver> Checker<R> {
    /// Checker with the default 5 second lookup timeout and fresh counters.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Sets the hard timeout for each TXT lookup.
    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    /// Records outcomes into `stats` instead of the checker's own counters.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Outcome counters.
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Runs `request` with the default 30 second deadline.
    pub async fn check(&self, request: &CheckRequest) -> CheckResult {
        self.check_until(request, Instant::now() + CHECK_DEADLINE)
            .await
    }
}

impl<R: TxtResolver> AuthCheck for Checker<R> {
    async fn check_until(&self, request: &CheckRequest, deadline: Instant) -> CheckResult {
        let name = request.query_name();
        log::debug!("Checking {} at {name}", request.protocol().label());

        let lookup = match tokio::time::timeout_at(
            deadline,
            resolve_txt(&self.resolver, &name, self.dns_timeout),
        )
        .await
        {
            Ok(lookup) => lookup,
            Err(_) => {
                log::warn!("Deadline reached while looking up {name}");
                RawLookup::failed(name, LookupError::DeadlineExceeded)
            }
        };

        let Evaluation { result, error_type } = evaluate(request, &lookup);
        self.stats.record_status(result.status());
        if let Some(error_type) = error_type {
            self.stats.increment_error(error_type);
        }
        log::debug!(
            "{} check for {}: {} ({})",
            result.protocol().label(),
            result.domain(),
            result.status(),
            result.message()
        );
        result
    }
}
