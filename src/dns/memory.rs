//! In-memory TXT records.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use super::records::TxtResolver;
use crate::error_handling::LookupError;

/// `TxtResolver` answering from a fixed table.
///
/// Names are matched case-insensitively. A name can also be set to fail with
/// a given `LookupError`, or to never answer so that callers' timeouts are
/// exercised. Clones share the same table.
#[derive(Clone, Default)]
pub struct StaticResolver {
    records: Arc<Mutex<HashMap<String, Vec<String>>>>,
    failures: Arc<Mutex<HashMap<String, LookupError>>>,
    stalled: Arc<Mutex<HashSet<String>>>,
}

impl StaticResolver {
    /// Empty table: every name has no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `records` at `name`, replacing anything already there.
    pub fn add_txt<I, S>(&self, name: &str, records: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lock(&self.records).insert(
            name.to_ascii_lowercase(),
            records.into_iter().map(Into::into).collect(),
        );
    }

    /// Makes lookups of `name` fail with `error`.
    pub fn fail(&self, name: &str, error: LookupError) {
        lock(&self.failures).insert(name.to_ascii_lowercase(), error);
    }

    /// Makes lookups of `name` never complete.
    pub fn stall(&self, name: &str) {
        lock(&self.stalled).insert(name.to_ascii_lowercase());
    }

    /// Builder form of [`StaticResolver::add_txt`].
    pub fn with_txt<I, S>(self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_txt(name, records);
        self
    }
}

impl TxtResolver for StaticResolver {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let key = name.to_ascii_lowercase();
        let stalled = lock(&self.stalled).contains(&key);
        if stalled {
            log::debug!("Lookup of {name} stalled");
            std::future::pending::<()>().await;
        }
        if let Some(error) = lock(&self.failures).get(&key) {
            return Err(error.clone());
        }
        Ok(lock(&self.records).get(&key).cloned().unwrap_or_default())
    }
}

// A panic while holding the lock cannot leave the table half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
