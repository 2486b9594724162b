//! Dogtaxa CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dogtaxa::cli::{Cli, Commands};
use dogtaxa::domain::models::LoggingConfig;
use dogtaxa::infrastructure::config::ConfigLoader;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => dogtaxa::cli::handle_error(err, cli.json),
    };

    init_tracing(&config.logging);

    let result = match cli.command {
        Commands::Lookup(args) => {
            dogtaxa::cli::commands::lookup::execute(args, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        dogtaxa::cli::handle_error(err, cli.json);
    }
}
