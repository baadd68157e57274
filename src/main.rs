//! amz-extract - Structured field extraction from a single Amazon product page
//!
//! A Rust implementation with TLS fingerprint emulation for reliable scraping.

use amz_extract::commands::ExtractCommand;
use amz_extract::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-extract",
    version,
    about = "Structured field extraction from a single Amazon product page",
    long_about = "Fetches one Amazon product detail page and extracts title, description, \
                  price, ASIN, specifications, and gallery images as JSON."
)]
struct Cli {
    /// Product page URL
    url: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Delay before the request in milliseconds
    #[arg(long, default_value = "2000", env = "AMZ_DELAY")]
    delay: u64,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", env = "AMZ_TIMEOUT")]
    timeout: u64,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    config.delay_ms = cli.delay;
    config.timeout_secs = cli.timeout;

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let cmd = ExtractCommand::new(config);
    let output = cmd.execute(&cli.url).await?;
    println!("{}", output);

    Ok(())
}
