//! Wire-level errors for the dog.ceo client.

use thiserror::Error;

use crate::domain::errors::BreedError;

/// Failures local to the dog.ceo adapter.
///
/// These never cross the `BreedFetcher` boundary: every variant collapses
/// into [`BreedError::NotFound`], so callers of the capability observe a
/// single failure kind regardless of what went wrong on the wire.
#[derive(Debug, Error)]
pub enum DogApiError {
    /// The API answered with a non-success HTTP status.
    #[error("HTTP error from dog.ceo API: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The request could not be sent or the response body not read.
    #[error("Network error while contacting dog.ceo API: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON envelope.
    #[error("Error parsing dog.ceo API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API reported a non-success status field, e.g. an unknown breed.
    #[error("{0}")]
    Api(String),
}

impl From<DogApiError> for BreedError {
    fn from(err: DogApiError) -> Self {
        BreedError::NotFound(err.to_string())
    }
}
