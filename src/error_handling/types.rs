//! Error type definitions.
//!
//! This module defines the typed errors raised at each boundary of the checker
//! and the outcome taxonomy counted across a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failure of a single TXT lookup.
///
/// The `Display` text is the message carried by a `status=error` result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No answer arrived within the lookup timeout.
    #[error("DNS lookup timeout")]
    Timeout,

    /// The caller's deadline expired before the lookup finished.
    #[error("Check deadline exceeded")]
    DeadlineExceeded,

    /// Transport or protocol failure (SERVFAIL, refused, malformed response, ...).
    #[error("DNS resolution failed: {0}")]
    ResolutionFailed(String),
}

/// Rejection of a check request before any lookup is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Domain is empty after trimming.
    #[error("Domain must not be empty")]
    EmptyDomain,

    /// Domain exceeds the DNS name length limit.
    #[error("Domain is {0} characters long (maximum 253)")]
    DomainTooLong(usize),

    /// A label is empty or exceeds 63 characters.
    #[error("Invalid label '{label}' in {name}")]
    InvalidLabel {
        /// Name containing the label
        name: String,
        /// Offending label
        label: String,
    },

    /// A character outside letters, digits, '-' and '_'.
    #[error("Invalid character '{ch}' in {name}")]
    InvalidCharacter {
        /// Name containing the character
        name: String,
        /// Offending character
        ch: char,
    },

    /// DKIM checks need a non-empty selector.
    #[error("A DKIM check requires a non-empty selector")]
    MissingSelector,
}

/// Failure of the insight collaborator.
///
/// These never reach the caller as errors: the enrichment hook logs them,
/// counts them as `EnrichmentUnavailable` and returns the result unannotated.
#[derive(Error, Debug)]
pub enum InsightError {
    /// Transport failure or timeout talking to the collaborator.
    #[error("Insight request failed: {0}")]
    Http(#[from] ReqwestError),

    /// Non-success HTTP status.
    #[error("Insight service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        body: String,
    },

    /// The reply held no text block.
    #[error("Insight reply contained no text")]
    EmptyReply,

    /// The text block was not the JSON object we asked for.
    #[error("Insight reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Score outside 0..=100.
    #[error("Insight score {0} is outside 0-100")]
    ScoreOutOfRange(i64),

    /// The deadline expired before the collaborator answered.
    #[error("Insight request exceeded the check deadline")]
    DeadlineExceeded,
}

/// Outcome categories counted across a run.
///
/// A check that passes cleanly has no category. Every other outcome maps to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Lookup did not answer in time (status=error)
    LookupTimeout,
    /// Lookup failed at the transport or protocol level (status=error)
    ResolutionFailed,
    /// No record qualified for the protocol (status=fail)
    NoQualifyingRecord,
    /// More than one record qualified (fail for SPF, warning for DMARC)
    AmbiguousRecordSet,
    /// A single record was found but is structurally invalid (status=fail)
    MalformedPolicy,
    /// The insight collaborator could not annotate the result (never surfaced)
    EnrichmentUnavailable,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the outcome category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::LookupTimeout => "DNS lookup timeout",
            ErrorType::ResolutionFailed => "DNS resolution failed",
            ErrorType::NoQualifyingRecord => "No qualifying record",
            ErrorType::AmbiguousRecordSet => "Multiple records published",
            ErrorType::MalformedPolicy => "Malformed policy record",
            ErrorType::EnrichmentUnavailable => "Insight enrichment unavailable",
        }
    }
}

impl From<&LookupError> for ErrorType {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::Timeout | LookupError::DeadlineExceeded => ErrorType::LookupTimeout,
            LookupError::ResolutionFailed(_) => ErrorType::ResolutionFailed,
        }
    }
}
