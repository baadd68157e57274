//! Field extraction from a parsed Amazon product detail page.

use crate::amazon::error::ExtractError;
use crate::amazon::models::Product;
use crate::amazon::selectors::{errors, product};
use scraper::{ElementRef, Html};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Extractor for Amazon product detail pages.
///
/// Applies a fixed set of selector rules to one document and returns a
/// fresh [`Product`]. Holds no state and performs no I/O; fetching and
/// HTML parsing happen upstream.
#[derive(Debug, Default)]
pub struct Extractor;

impl Extractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Parses the HTML and extracts the product.
    pub fn extract(&self, html: &str) -> Result<Product, ExtractError> {
        let document = Html::parse_document(html);
        self.extract_document(&document)
    }

    /// Extracts the product from an already-parsed document.
    pub fn extract_document(&self, document: &Html) -> Result<Product, ExtractError> {
        // Check for error pages first
        self.check_for_errors(document)?;

        let title = self.trimmed_text(document, &product::TITLE, product::TITLE_STR)?;
        let description =
            self.trimmed_text(document, &product::DESCRIPTION, product::DESCRIPTION_STR)?;

        // Price is kept byte-for-byte as it appears on the page
        let price = document
            .select(&product::PRICE)
            .next()
            .map(|e| e.text().collect::<String>())
            .ok_or(ExtractError::missing(product::PRICE_STR))?;

        let (specifications, asin) = self.walk_spec_table(document)?;
        let images = self.extract_images(document)?;

        debug!(
            "Extracted product {} ({} specifications, {} images)",
            asin,
            specifications.len(),
            images.len()
        );

        Ok(Product { title, description, asin, price, specifications, images })
    }

    /// Checks for CAPTCHA or Amazon's 503 error page.
    fn check_for_errors(&self, document: &Html) -> Result<(), ExtractError> {
        if document.select(&errors::CAPTCHA).next().is_some() {
            return Err(ExtractError::Captcha);
        }

        if document.select(&errors::DOG_PAGE).next().is_some() {
            return Err(ExtractError::ErrorPage);
        }

        Ok(())
    }

    /// Selects the first match and returns its trimmed text content.
    fn trimmed_text(
        &self,
        document: &Html,
        selector: &scraper::Selector,
        selector_str: &'static str,
    ) -> Result<String, ExtractError> {
        document
            .select(selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .ok_or(ExtractError::missing(selector_str))
    }

    /// Walks the specifications table in document order.
    ///
    /// Rows before the `ASIN` row land in the map keyed by first-cell text.
    /// When the `ASIN` row is hit, the scan stops, the last cell becomes the
    /// ASIN, and the most recently inserted map entry is dropped: the row
    /// adjacent to ASIN is a layout artifact on the detail page, not a real
    /// specification.
    fn walk_spec_table(
        &self,
        document: &Html,
    ) -> Result<(Map<String, Value>, String), ExtractError> {
        let mut specifications = Map::new();
        let mut asin = None;
        let mut saw_row = false;

        for row in document.select(&product::SPEC_ROWS) {
            saw_row = true;

            let cells: Vec<ElementRef> = row.child_elements().collect();
            let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
                trace!("Skipping specification row with no cells");
                continue;
            };

            // Cell text is compared and stored raw, matching the page markup
            let key = first.text().collect::<String>();
            let value = last.text().collect::<String>();

            if key == "ASIN" {
                asin = Some(value);
                // next_back is the last-inserted entry; removing it here is
                // a plain pop, so the remaining order is untouched
                if let Some(prev) = specifications.keys().next_back().cloned() {
                    specifications.remove(&prev);
                }
                break;
            }

            trace!("Specification: {} = {}", key, value);
            specifications.insert(key, Value::String(value));
        }

        if !saw_row {
            return Err(ExtractError::missing(product::SPEC_ROWS_STR));
        }

        match asin {
            Some(asin) => Ok((specifications, asin)),
            None => Err(ExtractError::MissingAsin),
        }
    }

    /// Collects gallery image URLs in document order.
    ///
    /// Strict by choice: a gallery item without an `img` child (or without a
    /// `src` attribute) fails the extraction rather than being skipped. A
    /// page with no gallery at all yields an empty list.
    fn extract_images(&self, document: &Html) -> Result<Vec<String>, ExtractError> {
        let mut images = Vec::new();

        for item in document.select(&product::GALLERY_ITEMS) {
            let src = item
                .select(&product::GALLERY_IMAGE)
                .next()
                .and_then(|img| img.value().attr("src"))
                .ok_or(ExtractError::missing(product::GALLERY_IMAGE_STR))?;
            images.push(src.to_string());
        }

        Ok(images)
    }
}
