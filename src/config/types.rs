//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ANTHROPIC_API_URL, CHECK_DEADLINE_SECS, DEFAULT_DKIM_SELECTOR, DEFAULT_MAX_CONCURRENCY,
    DEFAULT_RESOLVERS, DNS_TIMEOUT_SECS, INSIGHT_MODEL,
};
use crate::models::Protocol;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Checker configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library callers (start from `Config::default()`).
///
/// # Examples
///
/// ```no_run
/// use mailauth_check::Config;
///
/// let config = Config {
///     domains: vec!["example.com".to_string()],
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mailauth_check",
    version,
    about = "Checks SPF, DKIM and DMARC records published for one or more domains"
)]
pub struct Config {
    /// Domains to check
    pub domains: Vec<String>,

    /// File with one domain per line (use "-" for stdin)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Protocols to check
    #[arg(long, value_enum, value_delimiter = ',', default_value = "spf,dkim,dmarc")]
    pub checks: Vec<Protocol>,

    /// DKIM selector to look up at <selector>._domainkey.<domain>
    #[arg(long, default_value = DEFAULT_DKIM_SELECTOR)]
    pub selector: String,

    /// Resolvers to query, in order
    #[arg(long = "resolver", value_delimiter = ',', default_value = DEFAULT_RESOLVERS)]
    pub resolvers: Vec<IpAddr>,

    /// TXT lookup timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Deadline for one domain report (all its lookups plus enrichment) in seconds
    #[arg(long, default_value_t = CHECK_DEADLINE_SECS)]
    pub deadline_secs: u64,

    /// Maximum number of domains checked concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Attach AI-generated insights to each result (best effort)
    #[arg(long)]
    pub insights: bool,

    /// API key for the insight collaborator
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    /// Model used for insights
    #[arg(long, default_value = INSIGHT_MODEL)]
    pub insight_model: String,

    /// Base URL of the insight collaborator
    #[arg(long, default_value = ANTHROPIC_API_URL)]
    pub anthropic_base_url: String,

    /// Write JSON lines here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// TXT lookup timeout.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    /// Deadline for one domain report.
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            file: None,
            checks: vec![Protocol::Spf, Protocol::Dkim, Protocol::Dmarc],
            selector: DEFAULT_DKIM_SELECTOR.to_string(),
            resolvers: DEFAULT_RESOLVERS
                .split(',')
                .filter_map(|ip| ip.parse().ok())
                .collect(),
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            deadline_secs: CHECK_DEADLINE_SECS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            insights: false,
            anthropic_api_key: None,
            insight_model: INSIGHT_MODEL.to_string(),
            anthropic_base_url: ANTHROPIC_API_URL.to_string(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
