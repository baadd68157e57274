//! Output formatting for the extracted product (JSON, pretty JSON, table).

use crate::amazon::Product;
use crate::config::OutputFormat;

/// Formats a product for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product.
    pub fn format_product(&self, product: &Product) -> String {
        match self.format {
            OutputFormat::Json => self.json(product),
            OutputFormat::Pretty => self.json_pretty(product),
            OutputFormat::Table => self.table(product),
        }
    }

    // JSON formatting

    fn json(&self, product: &Product) -> String {
        product.to_json().unwrap_or_else(|_| "{}".to_string())
    }

    fn json_pretty(&self, product: &Product) -> String {
        product.to_json_pretty().unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting, for manual inspection

    fn table(&self, product: &Product) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Title:       {}", product.title));
        lines.push(format!("ASIN:        {}", product.asin));
        lines.push(format!("Price:       {}", product.price.trim()));
        lines.push(format!("Description: {}", product.description));

        if product.specifications.is_empty() {
            lines.push("Specifications: none".to_string());
        } else {
            lines.push("Specifications:".to_string());
            for (key, value) in &product.specifications {
                lines.push(format!("  {:<20} {}", key, value.as_str().unwrap_or_default()));
            }
        }

        if product.images.is_empty() {
            lines.push("Images: none".to_string());
        } else {
            lines.push("Images:".to_string());
            for url in &product.images {
                lines.push(format!("  {}", url));
            }
        }

        lines.join("\n")
    }
}
