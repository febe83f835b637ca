//! Optional insight enrichment.
//!
//! An external text-generation service can annotate each `CheckResult`
//! (explanation, impact, recommendations, score) and each `DomainReport`
//! (overall analysis). Enrichment is strictly best-effort: any failure is
//! logged and counted, and the unannotated result is returned with its
//! status untouched.

mod anthropic;
mod enricher;
mod prompt;
mod types;

use std::future::Future;

use crate::check::DomainReport;
use crate::error_handling::InsightError;
use crate::models::CheckResult;

// Re-export public API
pub use anthropic::AnthropicInsights;
pub use enricher::EnrichedChecker;
pub use prompt::{overall_prompt, protocol_prompt};
pub use types::{Insight, OverallInsight};

/// Source of insight annotations.
pub trait InsightProvider: Send + Sync {
    /// Annotates one result.
    fn analyze(
        &self,
        result: &CheckResult,
    ) -> impl Future<Output = Result<Insight, InsightError>> + Send;

    /// Produces the cross-protocol analysis of a domain report.
    fn analyze_overall(
        &self,
        report: &DomainReport,
    ) -> impl Future<Output = Result<OverallInsight, InsightError>> + Send;
}
