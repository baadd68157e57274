//! Product extraction command implementation.

use crate::amazon::{DocumentSource, Extractor, PageClient};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Fetches one product page and extracts its fields.
pub struct ExtractCommand {
    config: Config,
}

impl ExtractCommand {
    /// Creates a new extract command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the page at `url` and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let client = PageClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_source(&client, url).await
    }

    /// Fetches with a provided document source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl DocumentSource,
        url: &str,
    ) -> Result<String> {
        let url = url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("Invalid URL: '{}'. Expected an http:// or https:// URL.", url);
        }

        info!("Extracting product from: {}", url);

        let html = source.fetch(url).await?;
        let product = Extractor::new()
            .extract(&html)
            .with_context(|| format!("Failed to extract product from {}", url))?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_product(&product))
    }
}
