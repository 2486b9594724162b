//! Port trait for sub-breed lookups.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Capability of resolving a dog breed to its list of sub-breed names.
///
/// Implemented by the remote dog.ceo adapter and by
/// [`CachingBreedFetcher`](crate::adapters::cache::CachingBreedFetcher),
/// which wraps any other implementation of this trait.
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Resolve `breed` to its sub-breed names, in source order.
    ///
    /// An empty list is a valid result: plenty of breeds have no
    /// sub-breeds.
    ///
    /// # Errors
    ///
    /// Returns [`BreedError::InvalidBreed`](crate::domain::errors::BreedError::InvalidBreed)
    /// if `breed` is blank after trimming, and
    /// [`BreedError::NotFound`](crate::domain::errors::BreedError::NotFound)
    /// when the underlying source reports the breed unknown or cannot
    /// complete the request for any reason.
    async fn get_sub_breeds(&self, breed: &str) -> DomainResult<Vec<String>>;
}
