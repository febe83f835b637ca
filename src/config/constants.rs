//! Configuration constants.
//!
//! This module defines the constants used throughout the checker, including
//! DNS timeouts, the default resolver pool, and the enrichment collaborator
//! settings.

use std::time::Duration;

// DNS resolution
/// TXT lookup timeout in seconds.
/// A lookup that has not answered after this long is reported as `status=error`
/// with the message "DNS lookup timeout".
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Default resolver pool (Google and Cloudflare public resolvers), queried in order.
pub const DEFAULT_RESOLVERS: &str = "8.8.8.8,8.8.4.4,1.1.1.1";
/// Port used for plain DNS queries against the resolver pool.
pub const DNS_PORT: u16 = 53;
/// Attempts per name server made by the underlying resolver before giving up.
pub const DNS_ATTEMPTS: usize = 2;

// Record names and prefixes
/// Version prefix identifying an SPF record among a domain's TXT records.
pub const SPF_PREFIX: &str = "v=spf1";
/// Version prefix identifying a DMARC record at `_dmarc.<domain>`.
pub const DMARC_PREFIX: &str = "v=DMARC1";
/// Label prepended to the domain for DMARC lookups.
pub const DMARC_LABEL: &str = "_dmarc";
/// Label inserted between the selector and the domain for DKIM lookups.
pub const DKIM_LABEL: &str = "_domainkey";
/// Selector used when the caller does not name one.
pub const DEFAULT_DKIM_SELECTOR: &str = "default";

// Domain name limits (RFC 1035)
/// Maximum length of a full domain name, without the trailing dot.
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a single label.
pub const MAX_LABEL_LENGTH: usize = 63;

// Pipeline limits
/// Deadline for one domain report, covering every protocol lookup, the
/// per-result enrichment and the overall analysis. When it expires during
/// enrichment the unannotated results are returned.
pub const CHECK_DEADLINE_SECS: u64 = 30;
/// Default deadline as a `Duration`.
pub const CHECK_DEADLINE: Duration = Duration::from_secs(CHECK_DEADLINE_SECS);
/// Maximum number of domains checked concurrently by the batch runner.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
/// Log progress every this many finished domains.
pub const PROGRESS_LOG_INTERVAL: usize = 100;

// Insight enrichment
/// Base URL of the text-generation collaborator.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
/// API version header value sent with every collaborator request.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
/// Model asked for protocol and overall analyses.
pub const INSIGHT_MODEL: &str = "claude-sonnet-4-20250514";
/// Token budget for a single-protocol analysis.
pub const INSIGHT_MAX_TOKENS: u32 = 1024;
/// Token budget for the overall deliverability analysis (three results in one prompt).
pub const OVERALL_INSIGHT_MAX_TOKENS: u32 = 1500;
/// Request timeout for the collaborator in seconds.
pub const INSIGHT_REQUEST_TIMEOUT_SECS: u64 = 60;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
