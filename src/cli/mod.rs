//! Command-line interface for dogtaxa.

pub mod commands;

use clap::{Parser, Subcommand};

/// Dog breed taxonomy lookups from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "dogtaxa",
    version,
    about = "Look up dog sub-breeds from the dog.ceo taxonomy"
)]
pub struct Cli {
    /// Emit machine-readable JSON instead of text output
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to dogtaxa.yaml discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one or more breeds to their sub-breed names
    Lookup(commands::lookup::LookupArgs),
}

/// Print an error and exit non-zero, honoring the JSON output flag.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
