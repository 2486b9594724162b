//! Caching decorator for `BreedFetcher` implementations.
//!
//! Memoizes successful lookups per normalized breed key and records how
//! many calls actually reached the wrapped fetcher. Failed lookups are
//! not cached: the same key hits the wrapped fetcher again on every call
//! until one succeeds.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::errors::{BreedError, DomainResult};
use crate::domain::ports::BreedFetcher;

/// Mutable cache state.
///
/// Guarded by a single lock held across the whole check-then-populate
/// sequence, so a key is delegated at most once even under concurrent
/// callers and the counter never loses updates.
#[derive(Debug, Default)]
struct CacheState {
    /// Normalized breed key -> sub-breed names. Populated only on
    /// success; a key is never overwritten once filled.
    entries: HashMap<String, Vec<String>>,
    /// Calls that reached the wrapped fetcher. Cache hits do not count.
    delegations: u64,
}

/// Caching breed fetcher decorator.
///
/// Wraps any [`BreedFetcher`] implementation with an in-memory map from
/// normalized breed name (trimmed, lower-cased) to its sub-breed list.
/// `"Bulldog"`, `" bulldog "`, and `"BULLDOG"` all share one entry.
pub struct CachingBreedFetcher<F: BreedFetcher> {
    inner: Arc<F>,
    state: Mutex<CacheState>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: Arc<F>) -> Self {
        Self {
            inner,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Number of calls that were delegated to the wrapped fetcher.
    ///
    /// Read-only; cache hits and rejected inputs leave it untouched,
    /// while every delegation (successful or not) increments it.
    pub async fn delegation_count(&self) -> u64 {
        self.state.lock().await.delegations
    }
}

#[async_trait]
impl<F: BreedFetcher + 'static> BreedFetcher for CachingBreedFetcher<F> {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<Vec<String>> {
        if breed.trim().is_empty() {
            return Err(BreedError::InvalidBreed);
        }
        let key = breed.trim().to_lowercase();

        let mut state = self.state.lock().await;
        if let Some(cached) = state.entries.get(&key) {
            debug!(breed = %key, "cache hit");
            return Ok(cached.clone());
        }

        // Cache miss - delegate with the normalized key, not the raw input
        state.delegations += 1;
        debug!(breed = %key, delegations = state.delegations, "cache miss, delegating");
        let sub_breeds = self.inner.get_sub_breeds(&key).await?;
        state.entries.insert(key, sub_breeds.clone());
        Ok(sub_breeds)
    }
}
