//! Testimonials CLI
//!
//! Pages through the testimonials API and prints every testimonial with its
//! star rating.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use testimonials::{
    error::Result,
    models::Config,
    pipeline,
    services::TestimonialParser,
    transport::{DirectTransport, PageTransport},
};

/// Testimonials - paginated testimonial extractor
#[derive(Parser, Debug)]
#[command(name = "testimonials", version, about = "Paginated testimonial extractor")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every page and print the testimonials
    Crawl {
        /// How pages are fetched
        #[arg(long, value_enum, default_value_t = Via::Direct)]
        via: Via,

        /// Override the API endpoint from the configuration
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Via {
    /// Request the API directly
    Direct,
    /// Go through the Scrapfly proxy (key from the configured env var)
    #[cfg(feature = "scrapfly")]
    Scrapfly,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_transport(via: Via, config: &Config) -> Result<Box<dyn PageTransport>> {
    let transport: Box<dyn PageTransport> = match via {
        Via::Direct => Box::new(DirectTransport::new(config)?),
        #[cfg(feature = "scrapfly")]
        Via::Scrapfly => Box::new(testimonials::transport::ScrapflyTransport::from_env(config)?),
    };
    Ok(transport)
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let (mut config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(cli.verbose, &config.logging.level);

    if let Some(e) = load_error {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
    }

    match cli.command {
        Command::Crawl { via, url } => {
            if let Some(url) = url {
                config.api.base_url = url;
            }
            config.validate()?;

            let transport = build_transport(via, &config)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = pipeline::run_extractor(&config, transport, &mut out)?;

            log::info!(
                "Crawl complete: {} testimonials, {} pages",
                summary.records,
                summary.pages
            );
        }

        Command::Validate => {
            log::info!("Validating {}...", cli.config.display());

            if let Err(e) = config.validate().and_then(|_| config.validate_proxy()) {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            TestimonialParser::new(&config.selectors)?;

            log::info!("✓ Config OK");
            log::info!("  API: {}", config.api.base_url);
            for (key, selector) in config.selectors.entries() {
                log::info!("  {}: {}", key, selector);
            }
        }
    }

    Ok(())
}
