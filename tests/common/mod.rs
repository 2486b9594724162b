//! Shared test fixtures.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dogtaxa::domain::errors::{BreedError, DomainResult};
use dogtaxa::domain::ports::BreedFetcher;

/// Fetcher that replays a scripted sequence of responses and records
/// every breed it was asked for, in order.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<DomainResult<Vec<String>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<DomainResult<Vec<String>>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Breeds this fetcher actually received.
    #[allow(dead_code)]
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl BreedFetcher for ScriptedFetcher {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<Vec<String>> {
        self.calls.lock().await.push(breed.to_string());
        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(BreedError::NotFound("script exhausted".to_string())))
    }
}

/// Convenience constructor for owned string lists in scripts.
#[allow(dead_code)]
pub fn subs(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}
