//! Enrichment decorator.

use std::sync::Arc;

use tokio::time::Instant;

use super::InsightProvider;
use crate::check::{AuthCheck, DomainReport};
use crate::error_handling::{ErrorType, InsightError, ProcessingStats};
use crate::models::{CheckRequest, CheckResult};

/// Wraps a checker and annotates what it produces.
///
/// Annotation never changes a result's status or any other field; it only
/// sets `insight` (per result) or `overall` (per report). Each annotation
/// call is bounded by the check deadline.
pub struct EnrichedChecker<C, P> {
    inner: C,
    provider: P,
    stats: Arc<ProcessingStats>,
}

impl<C: AuthCheck, P: InsightProvider> EnrichedChecker<C, P> {
    /// Wraps `inner`; failed annotations are counted in `stats`.
    pub fn new(inner: C, provider: P, stats: Arc<ProcessingStats>) -> Self {
        Self {
            inner,
            provider,
            stats,
        }
    }

    fn unavailable(&self, subject: &str, error: &InsightError) {
        log::warn!("Insight unavailable for {subject}: {error}");
        self.stats.increment_error(ErrorType::EnrichmentUnavailable);
    }
}

impl<C: AuthCheck, P: InsightProvider> AuthCheck for EnrichedChecker<C, P> {
    async fn check_until(&self, request: &CheckRequest, deadline: Instant) -> CheckResult {
        let result = self.inner.check_until(request, deadline).await;

        let outcome = tokio::time::timeout_at(deadline, self.provider.analyze(&result))
            .await
            .unwrap_or(Err(InsightError::DeadlineExceeded));
        match outcome {
            Ok(insight) => result.with_insight(insight),
            Err(e) => {
                let subject = format!("{} check of {}", result.protocol().label(), result.domain());
                self.unavailable(&subject, &e);
                result
            }
        }
    }

    async fn summarize(&self, report: DomainReport, deadline: Instant) -> DomainReport {
        let report = self.inner.summarize(report, deadline).await;
        if report.results.is_empty() {
            return report;
        }

        let outcome = tokio::time::timeout_at(deadline, self.provider.analyze_overall(&report))
            .await
            .unwrap_or(Err(InsightError::DeadlineExceeded));
        match outcome {
            Ok(overall) => DomainReport {
                overall: Some(overall),
                ..report
            },
            Err(e) => {
                self.unavailable(&format!("overall analysis of {}", report.domain), &e);
                report
            }
        }
    }
}
