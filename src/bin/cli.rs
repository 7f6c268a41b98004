//! cardata CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use cardata::{
    error::Result,
    models::Config,
    pipeline,
    services::HttpFetcher,
};
use clap::{Parser, Subcommand};

/// cardata - Vehicle Catalog Scraper
#[derive(Parser, Debug)]
#[command(name = "cardata", version, about = "Vehicle catalog scraper for cars-data.com")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape all listings and export them as CSV
    Scrape {
        /// Output CSV path (default: output.csv_path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Landing page URL (default: site.landing_url from config)
        #[arg(long)]
        url: Option<String>,
    },

    /// List the categories found on the landing page
    Categories {
        /// Landing page URL (default: site.landing_url from config)
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Scrape { output, url } => {
            if let Some(url) = url {
                config.site.landing_url = url;
            }
            let output = output.unwrap_or_else(|| config.output.csv_path.clone());
            config.validate()?;

            log::info!("Scraping catalog from {}", config.site.landing_url);
            let fetcher = HttpFetcher::new(&config.crawler)?;
            let summary = pipeline::run_export(&config, &fetcher, &output)?;

            log::info!(
                "Export complete: {} rows in {}",
                summary.rows,
                summary.path.display()
            );
        }

        Command::Categories { url } => {
            if let Some(url) = url {
                config.site.landing_url = url;
            }
            config.validate()?;

            let fetcher = HttpFetcher::new(&config.crawler)?;
            let categories = pipeline::run_categories(&config, &fetcher)?;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = Config::load_validated(&cli.config) {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
