//! Dogtaxa - dog breed taxonomy lookups with a memoizing cache.
//!
//! Dogtaxa resolves a dog breed name to its list of sub-breed names using
//! the dog.ceo taxonomy API, and avoids redundant remote calls by wrapping
//! the remote client in an in-memory caching decorator.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): The `BreedFetcher` port, errors, and config models
//! - **Adapters Layer** (`adapters`): The dog.ceo HTTP client and the caching decorator
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dogtaxa::{BreedFetcher, CachingBreedFetcher, DogApiClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DogApiClient::new()?;
//!     let fetcher = CachingBreedFetcher::new(Arc::new(client));
//!
//!     let subs = fetcher.get_sub_breeds("bulldog").await?;
//!     let again = fetcher.get_sub_breeds("Bulldog").await?; // served from cache
//!     assert_eq!(subs, again);
//!     assert_eq!(fetcher.delegation_count().await, 1);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::CachingBreedFetcher;
pub use adapters::dog_api::DogApiClient;
pub use domain::errors::{BreedError, DomainResult};
pub use domain::models::{ApiConfig, Config, LoggingConfig};
pub use domain::ports::BreedFetcher;
pub use infrastructure::config::{ConfigError, ConfigLoader};
