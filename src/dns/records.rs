//! TXT record queries.
//!
//! This module defines the lookup seam used by the checker and its
//! production implementation over `hickory-resolver`.

use std::future::Future;

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::{ResolveError, TokioResolver};

use crate::error_handling::LookupError;

/// Source of TXT records.
///
/// Implementations answer one query name at a time and keep no state between
/// calls beyond their own handle. "No such name" and "no TXT records" are
/// both `Ok(vec![])`.
pub trait TxtResolver: Send + Sync {
    /// Returns the TXT records published at `name`, in retrieval order.
    fn query_txt(&self, name: &str)
        -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}

/// `TxtResolver` backed by a `hickory-resolver` Tokio resolver.
///
/// Build one with [`crate::initialization::init_resolver`].
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: TokioResolver,
}

impl HickoryTxtResolver {
    /// Wraps an already configured resolver.
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        match self.resolver.lookup(name, RecordType::TXT).await {
            Ok(lookup) => {
                let txt_records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt) = rdata {
                            // A record may be split into several character-strings
                            Some(
                                txt.iter()
                                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                    .collect::<Vec<String>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .collect();
                log::debug!("{} TXT record(s) at {name}", txt_records.len());
                Ok(txt_records)
            }
            Err(e) => {
                let outcome = classify_resolve_error(&e);
                match &outcome {
                    Ok(_) => log::debug!("No TXT records at {name}: {e}"),
                    Err(LookupError::Timeout) => {
                        log::warn!("TXT record lookup timed out for {name}: {e}")
                    }
                    Err(_) => log::warn!("Failed to lookup TXT records for {name}: {e}"),
                }
                outcome
            }
        }
    }
}

/// Maps a resolver error onto the lookup outcome.
///
/// Empty answers and NXDOMAIN become an empty record set. A negative answer
/// carrying SERVFAIL or REFUSED is a resolution failure, not an absence.
fn classify_resolve_error(e: &ResolveError) -> Result<Vec<String>, LookupError> {
    let debug_msg = format!("{e:?}");
    if debug_msg.contains("ServFail") || debug_msg.contains("Refused") {
        return Err(LookupError::ResolutionFailed(e.to_string()));
    }

    let error_msg = e.to_string().to_lowercase();
    if error_msg.contains("no record") || error_msg.contains("nxdomain") {
        Ok(Vec::new())
    } else if error_msg.contains("timed out") || error_msg.contains("timeout") {
        Err(LookupError::Timeout)
    } else {
        Err(LookupError::ResolutionFailed(e.to_string()))
    }
}
