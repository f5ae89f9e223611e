//! Emoji Kitchen crawler CLI
//!
//! Local execution entry point. With no subcommand it runs a crawl.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use kitchen_crawler::{
    error::{AppError, Result},
    models::{Config, EmojiCodepoint},
    pipeline,
    services::Prober,
    storage::{LocalStorage, StoreStorage},
    utils::http,
};

/// Emoji Kitchen discovery crawler
#[derive(Parser, Debug)]
#[command(
    name = "kitchen-crawler",
    version,
    about = "Discovers which Emoji Kitchen combinations exist"
)]

struct Cli {
    /// Path to storage directory containing config.toml and results
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Crawl options used when no subcommand is given
    #[command(flatten)]
    crawl: CrawlArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
struct CrawlArgs {
    /// Revalidate stored entries before probing
    #[arg(long, env = "KITCHEN_PRUNE")]
    prune: bool,

    /// Only probe pairs involving these codepoints (comma separated)
    #[arg(long, env = "KITCHEN_ONLY", value_delimiter = ',')]
    only: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe every candidate and record what exists (default)
    Crawl(CrawlArgs),

    /// Revalidate stored entries without probing new candidates
    Prune,

    /// Canonicalize the stored results
    Sort,

    /// Print the image used for a pair
    Resolve { left: String, right: String },

    /// Validate configuration
    Validate,

    /// Show stored result summary
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_prober(config: &Config) -> Result<Prober> {
    let client = http::create_client(&config.crawler)?;
    Ok(Prober::from_config(Arc::new(client), &config.crawler))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.storage_dir.join("config.toml");
    let mut config = Config::load_or_default(&config_path);
    log::info!("Loaded configuration from {}", cli.storage_dir.display());

    let storage = LocalStorage::with_paths(&cli.storage_dir, config.paths.clone());

    let command = cli.command.unwrap_or(Command::Crawl(cli.crawl));

    match command {
        Command::Crawl(CrawlArgs { prune, only }) => {
            if prune {
                config.run.prune_before_crawl = true;
            }
            if !only.is_empty() {
                config.run.emoji_of_interest = only;
            }
            config.validate()?;

            let prober = build_prober(&config)?;
            let stats = pipeline::run_crawler(&config, &storage, &prober).await?;

            if stats.failed > 0 {
                log::warn!(
                    "{} candidate(s) failed; they will be probed again on the next run",
                    stats.failed
                );
            }
        }

        Command::Prune => {
            config.validate()?;
            let prober = build_prober(&config)?;
            let report = pipeline::run_prune(&config, &storage, &prober).await?;
            log::info!("Pruned {} of {} entries", report.dropped(), report.checked);
        }

        Command::Sort => {
            config.validate()?;
            pipeline::run_sort(&config, &storage).await?;
        }

        Command::Resolve { left, right } => {
            let left = EmojiCodepoint::parse(&left)?;
            let right = EmojiCodepoint::parse(&right)?;
            let store = storage.load_store().await?;

            let combination = store.resolve(&left, &right).ok_or_else(|| {
                AppError::validation(format!(
                    "No combination recorded for {} x {}",
                    left.printable(),
                    right.printable()
                ))
            })?;

            println!("{}", combination.date);
            println!("{}", combination.url(&config.crawler.root_url));
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} dates, {} emoji)",
                config.catalog.dates.len(),
                config.catalog.emoji.len()
            );
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            let store = storage.load_store().await?;
            if store.is_empty() {
                log::info!("No results stored yet.");
            } else {
                log::info!("Emoji with combinations: {}", store.key_count());
                log::info!("Distinct combinations: {}", store.pair_count());
                log::info!("Result store: {}", storage.store_path().display());
            }
        }
    }

    log::info!("Done!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_crawls_with_top_level_flags() {
        let cli = Cli::try_parse_from(["kitchen-crawler", "--prune", "--only", "1f422,1f600"])
            .unwrap();

        assert!(cli.command.is_none());
        assert!(cli.crawl.prune);
        assert_eq!(cli.crawl.only, vec!["1f422", "1f600"]);
    }

    #[test]
    fn test_crawl_subcommand_flags() {
        let cli = Cli::try_parse_from([
            "kitchen-crawler",
            "--storage-dir",
            "data",
            "crawl",
            "--prune",
            "--only",
            "1f600",
        ])
        .unwrap();

        assert_eq!(cli.storage_dir, PathBuf::from("data"));
        match cli.command {
            Some(Command::Crawl(args)) => {
                assert!(args.prune);
                assert_eq!(args.only, vec!["1f600"]);
            }
            other => panic!("expected crawl, got {other:?}"),
        }
    }

    #[test]
    fn test_env_toggles_apply_without_subcommand() {
        // Only this test touches these variables.
        unsafe {
            std::env::set_var("KITCHEN_PRUNE", "true");
            std::env::set_var("KITCHEN_ONLY", "1f422");
        }

        let bare = Cli::try_parse_from(["kitchen-crawler"]).unwrap();
        let explicit = Cli::try_parse_from(["kitchen-crawler", "crawl"]).unwrap();

        unsafe {
            std::env::remove_var("KITCHEN_PRUNE");
            std::env::remove_var("KITCHEN_ONLY");
        }

        let expected = CrawlArgs {
            prune: true,
            only: vec!["1f422".to_string()],
        };
        assert!(bare.command.is_none());
        assert_eq!(bare.crawl, expected);
        assert!(matches!(explicit.command, Some(Command::Crawl(args)) if args == expected));
    }

    #[test]
    fn test_resolve_takes_two_codepoints() {
        let cli = Cli::try_parse_from(["kitchen-crawler", "resolve", "1f422", "1f44d"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(Command::Resolve { ref left, ref right }) if left == "1f422" && right == "1f44d"
        ));
    }
}
