//! amz-extract - Structured field extraction from a single Amazon product page
//!
//! Fetches one product detail page with TLS fingerprint emulation, applies
//! fixed CSS-selector rules, and serializes the result to JSON.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod format;

pub use amazon::{DocumentSource, ExtractError, Extractor, PageClient, Product};
pub use config::Config;
