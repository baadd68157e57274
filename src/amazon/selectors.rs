//! CSS selectors for Amazon product detail pages.
//!
//! This file contains all CSS selectors used for extraction.
//! Update this file when Amazon changes their HTML structure.
//!
//! **Update process**: When extraction fails, capture HTML sample,
//! update selectors, and add test fixture.
//!
//! Each selector string is exposed as a `const` alongside the compiled
//! `Selector` so extraction errors can name the selector that failed.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the product detail page fields.
pub mod product {
    use super::*;

    /// Product title text.
    pub const TITLE_STR: &str = "#productTitle";
    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(TITLE_STR).unwrap());

    /// First paragraph of the product description block.
    pub const DESCRIPTION_STR: &str = "#productDescription p";
    pub static DESCRIPTION: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(DESCRIPTION_STR).unwrap());

    /// Price element inside the offer-listing container.
    pub const PRICE_STR: &str = ".olp-padding-right .a-color-price";
    pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(PRICE_STR).unwrap());

    /// Rows of the technical-details specifications table.
    pub const SPEC_ROWS_STR: &str = ".techD .content .attrG .pdTab table tbody tr";
    pub static SPEC_ROWS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(SPEC_ROWS_STR).unwrap());

    /// Alternate-image gallery items, in document order.
    pub const GALLERY_ITEMS_STR: &str = "#altImages ul .item";
    pub static GALLERY_ITEMS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(GALLERY_ITEMS_STR).unwrap());

    /// Image element inside a single gallery item.
    pub const GALLERY_IMAGE_STR: &str = "#altImages ul .item img";
    pub static GALLERY_IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("img").unwrap());
}

/// Selectors for detecting error/captcha pages.
pub mod errors {
    use super::*;

    /// CAPTCHA form.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='validateCaptcha'], \
             img[src*='captcha']",
        )
        .unwrap()
    });

    /// Dog page (Amazon's 503 error page).
    pub static DOG_PAGE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "img[alt*='dog'], \
             .a-box-inner a[href='/ref=cs_503_link']",
        )
        .unwrap()
    });
}
