//! Domain errors for the dogtaxa lookup system.

use thiserror::Error;

/// Errors surfaced by the [`BreedFetcher`](crate::domain::ports::BreedFetcher) capability.
#[derive(Debug, Error)]
pub enum BreedError {
    /// The breed argument was blank after trimming. Rejected before any
    /// cache lookup or delegation takes place, and never cached.
    #[error("Breed cannot be blank")]
    InvalidBreed,

    /// The breed could not be resolved: unknown to the source, or the
    /// source could not complete the request (network, parse, protocol).
    /// Lower-level failure detail is collapsed into this kind before it
    /// crosses the capability boundary.
    #[error("Breed not found: {0}")]
    NotFound(String),
}

/// Result alias used throughout the domain layer.
pub type DomainResult<T> = Result<T, BreedError>;
