//! HTTP client for the dog.ceo taxonomy API.
//!
//! One reusable `reqwest::Client` is built at construction and shared for
//! the adapter's lifetime (connection pooling included). All wire
//! failures are collapsed into the domain's not-found kind before they
//! cross the `BreedFetcher` boundary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::errors::{BreedError, DomainResult};
use crate::domain::models::ApiConfig;
use crate::domain::ports::BreedFetcher;

use super::error::DogApiError;
use super::models::{BreedListResponse, MessagePayload};

/// `BreedFetcher` implementation backed by the dog.ceo API.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    /// Reusable HTTP client.
    http: Client,
    /// Base URL without a trailing slash, e.g. `https://dog.ceo/api`.
    base_url: String,
}

impl DogApiClient {
    /// Create a client against the public dog.ceo endpoint with default
    /// settings.
    pub fn new() -> Result<Self, DogApiError> {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a client from API configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self, DogApiError> {
        Self::with_base_url(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Create a client against a custom endpoint. Used by tests to point
    /// at a local mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DogApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Fetch and decode the sub-breed list for an already-normalized key.
    async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>, DogApiError> {
        let url = format!("{}/breed/{}/list", self.base_url, breed);
        debug!(%url, "fetching sub breeds");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DogApiError::HttpStatus(status));
        }

        let body = response.text().await?;
        let envelope: BreedListResponse = serde_json::from_str(&body)?;

        if !envelope.status.eq_ignore_ascii_case("success") {
            let message = match envelope.message {
                Some(MessagePayload::Error(msg)) => msg,
                _ => "Breed not found".to_string(),
            };
            return Err(DogApiError::Api(message));
        }

        Ok(match envelope.message {
            Some(MessagePayload::SubBreeds(sub_breeds)) => sub_breeds,
            _ => Vec::new(),
        })
    }
}

#[async_trait]
impl BreedFetcher for DogApiClient {
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<Vec<String>> {
        if breed.trim().is_empty() {
            return Err(BreedError::InvalidBreed);
        }
        let key = breed.trim().to_lowercase();

        self.fetch_sub_breeds(&key).await.map_err(|err| {
            warn!(breed = %key, error = %err, "sub breed lookup failed");
            BreedError::from(err)
        })
    }
}
