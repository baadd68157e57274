//! Typed errors for the extraction stage.

use thiserror::Error;

/// Extraction failure for a single product page.
///
/// Every variant is terminal for the attempt: the extractor never returns
/// a partially populated [`Product`](crate::amazon::models::Product).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// A selector that must match at least one node matched zero.
    #[error("no element matched selector `{selector}`")]
    MissingElement {
        /// The CSS selector that failed to match.
        selector: &'static str,
    },

    /// The specifications table was scanned to the end without finding
    /// a row whose first cell is `ASIN`.
    #[error("specifications table contains no ASIN row")]
    MissingAsin,

    /// The response is a CAPTCHA challenge, not a product page.
    #[error("CAPTCHA detected; Amazon is blocking requests")]
    Captcha,

    /// The response is Amazon's 503 error page.
    #[error("Amazon error page detected (503)")]
    ErrorPage,
}

impl ExtractError {
    /// Shorthand for a missing-element failure.
    pub fn missing(selector: &'static str) -> Self {
        Self::MissingElement { selector }
    }
}
