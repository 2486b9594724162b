use clap::Parser;
use dogtaxa::cli::{Cli, Commands};

#[test]
fn test_parse_lookup_with_breeds() {
    let cli = Cli::try_parse_from(vec!["dogtaxa", "lookup", "bulldog", "hound"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Lookup(args) => {
            assert_eq!(args.breeds, vec!["bulldog", "hound"]);
        }
    }
}

#[test]
fn test_lookup_requires_at_least_one_breed() {
    let result = Cli::try_parse_from(vec!["dogtaxa", "lookup"]);
    assert!(result.is_err());
}

#[test]
fn test_json_flag_is_global() {
    let cli = Cli::try_parse_from(vec!["dogtaxa", "lookup", "bulldog", "--json"]).unwrap();
    assert!(cli.json);
}

#[test]
fn test_config_path_flag() {
    let cli = Cli::try_parse_from(vec![
        "dogtaxa",
        "--config",
        "custom.yaml",
        "lookup",
        "bulldog",
    ])
    .unwrap();

    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("custom.yaml"))
    );
}
