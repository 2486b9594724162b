use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::adapters::cache::CachingBreedFetcher;
use crate::adapters::dog_api::DogApiClient;
use crate::domain::models::Config;
use crate::domain::ports::BreedFetcher;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Breed names to resolve; repeated breeds are served from the cache
    #[arg(required = true, value_name = "BREED")]
    pub breeds: Vec<String>,
}

/// Handle the lookup command
///
/// Resolves each requested breed through one shared caching fetcher, so
/// duplicate arguments (in any casing) reach the remote API only once.
pub async fn execute(args: LookupArgs, config: &Config, json: bool) -> Result<()> {
    let client =
        DogApiClient::from_config(&config.api).context("Failed to build dog.ceo client")?;
    let fetcher = CachingBreedFetcher::new(Arc::new(client));

    let mut resolved: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut failures = 0usize;

    for breed in &args.breeds {
        let key = breed.trim().to_lowercase();
        match fetcher.get_sub_breeds(breed).await {
            Ok(sub_breeds) => {
                if json {
                    resolved.insert(key, sub_breeds);
                } else {
                    println!("{key}:");
                    if sub_breeds.is_empty() {
                        println!("  (none)");
                    } else {
                        for sub_breed in &sub_breeds {
                            println!("  {sub_breed}");
                        }
                    }
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("{breed}: {err}");
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    }

    debug!(
        delegations = fetcher.delegation_count().await,
        "lookup complete"
    );

    if failures > 0 {
        anyhow::bail!("{failures} breed lookup(s) failed");
    }
    Ok(())
}
