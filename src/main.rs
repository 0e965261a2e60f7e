//! Sitemapper main entry point
//!
//! Command-line interface for the sitemapper crawler: crawl one site to a
//! bounded depth and print the resulting sitemap as JSON on stdout.

use clap::Parser;
use sitemapper::crawler::run_crawl;
use tracing_subscriber::EnvFilter;

/// Sitemapper: a single-site concurrent sitemap crawler
///
/// Crawls the given URL, following same-host links up to the configured
/// depth, and prints a JSON sitemap of every visited page with its
/// same-host link counts.
#[derive(Parser, Debug)]
#[command(name = "sitemapper")]
#[command(version)]
#[command(about = "Crawl a single site and emit its sitemap as JSON", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// How many link-hops deep to crawl before stopping
    #[arg(short, long, default_value_t = 2)]
    depth: usize,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let sitemap = run_crawl(cli.url.as_deref(), cli.depth).await?;

    println!("{}", serde_json::to_string(&sitemap)?);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemapper=info,warn"),
            1 => EnvFilter::new("sitemapper=debug,info"),
            2 => EnvFilter::new("sitemapper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
