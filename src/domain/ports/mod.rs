//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interface that adapters implement:
//! - `BreedFetcher`: sub-breed lookups for a dog breed
//!
//! The trait defines the contract that allows the domain to be independent
//! of specific infrastructure implementations.

pub mod breed_fetcher;

pub use breed_fetcher::BreedFetcher;
