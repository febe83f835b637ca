//! Timeout-bounded TXT resolution.

use std::time::Duration;

use super::records::TxtResolver;
use super::types::RawLookup;
use crate::error_handling::LookupError;

/// Looks up the TXT records at `name`, giving up after `timeout`.
///
/// # Arguments
///
/// * `resolver` - The TXT record source
/// * `name` - The fully qualified query name (e.g. `_dmarc.example.com`)
/// * `timeout` - Hard limit on the whole lookup, independent of any
///   per-attempt timeout inside the resolver
///
/// # Returns
///
/// A `RawLookup` holding either the records (possibly none) or the failure.
/// This function never fails and never retries.
pub async fn resolve_txt<R: TxtResolver>(resolver: &R, name: &str, timeout: Duration) -> RawLookup {
    match tokio::time::timeout(timeout, resolver.query_txt(name)).await {
        Ok(Ok(records)) => RawLookup::found(name, records),
        Ok(Err(error)) => RawLookup::failed(name, error),
        Err(_) => {
            log::warn!("TXT lookup for {name} exceeded {}ms", timeout.as_millis());
            RawLookup::failed(name, LookupError::Timeout)
        }
    }
}
