//! Per-domain reports.

use futures::future::join_all;
use serde::Serialize;
use tokio::time::Instant;

use super::AuthCheck;
use crate::error_handling::RequestError;
use crate::insight::OverallInsight;
use crate::models::{normalize_domain, CheckRequest, CheckResult, Protocol, Status};

/// Every check run for one domain, plus the optional overall analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    /// Normalized domain
    pub domain: String,
    /// One result per requested protocol, in request order
    pub results: Vec<CheckResult>,
    /// Cross-protocol analysis, when enrichment produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallInsight>,
}

impl DomainReport {
    /// Result for `protocol`, if it was checked.
    pub fn result(&self, protocol: Protocol) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.protocol() == protocol)
    }

    /// SPF result.
    pub fn spf(&self) -> Option<&CheckResult> {
        self.result(Protocol::Spf)
    }

    /// DKIM result.
    pub fn dkim(&self) -> Option<&CheckResult> {
        self.result(Protocol::Dkim)
    }

    /// DMARC result.
    pub fn dmarc(&self) -> Option<&CheckResult> {
        self.result(Protocol::Dmarc)
    }

    /// Number of results with `status`.
    pub fn count(&self, status: Status) -> usize {
        self.results.iter().filter(|r| r.status() == status).count()
    }
}

/// Runs the requested protocol checks for one domain concurrently.
///
/// Repeated protocols are checked once. After all checks finish the report
/// is handed to [`AuthCheck::summarize`], still bounded by `deadline`.
///
/// # Arguments
///
/// * `checker` - Runs each check
/// * `domain` - Domain to check (normalized here)
/// * `protocols` - Which checks to run
/// * `selector` - DKIM selector (ignored by SPF and DMARC)
/// * `deadline` - Bound on the whole report
///
/// # Errors
///
/// Returns a `RequestError` if the domain or, when DKIM is requested, the
/// selector is invalid. No lookup is made in that case.
pub async fn check_domain<C: AuthCheck>(
    checker: &C,
    domain: &str,
    protocols: &[Protocol],
    selector: &str,
    deadline: Instant,
) -> Result<DomainReport, RequestError> {
    let domain = normalize_domain(domain)?;

    let mut unique: Vec<Protocol> = Vec::with_capacity(protocols.len());
    for protocol in protocols {
        if !unique.contains(protocol) {
            unique.push(*protocol);
        }
    }

    let requests = unique
        .into_iter()
        .map(|protocol| CheckRequest::new(&domain, protocol, Some(selector)))
        .collect::<Result<Vec<_>, _>>()?;

    let results = join_all(
        requests
            .iter()
            .map(|request| checker.check_until(request, deadline)),
    )
    .await;

    let report = DomainReport {
        domain,
        results,
        overall: None,
    };
    Ok(checker.summarize(report, deadline).await)
}
