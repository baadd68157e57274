//! Amazon-specific modules for HTTP fetching, extraction, and data models.

pub mod client;
pub mod error;
pub mod extractor;
pub mod models;
pub mod selectors;

pub use client::{DocumentSource, PageClient};
pub use error::ExtractError;
pub use extractor::Extractor;
pub use models::Product;
