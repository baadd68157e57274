//! Integration tests for the product extractor using fixture files.

use amz_extract::amazon::extractor::Extractor;
use amz_extract::amazon::ExtractError;

const PRODUCT_FIXTURE: &str = include_str!("fixtures/product_page.html");

#[test]
fn test_extract_fixture_page() {
    let product = Extractor::new().extract(PRODUCT_FIXTURE).unwrap();

    assert_eq!(product.title, "Widget");
    assert_eq!(product.description, "A fine widget.");
    assert_eq!(product.price, "£9.99");
    assert_eq!(product.asin, "B000TEST");

    // The Colour row sits right before the ASIN row and is dropped
    assert!(product.specifications.is_empty());

    assert_eq!(product.images, ["u1", "u2"]);
}

#[test]
fn test_fixture_json_output() {
    let product = Extractor::new().extract(PRODUCT_FIXTURE).unwrap();
    let json = product.to_json().unwrap();

    assert!(json.contains("\"title\":\"Widget\""));
    assert!(json.contains("\"description\":\"A fine widget.\""));
    assert!(json.contains("\"ASIN\":\"B000TEST\""));
    assert!(json.contains("\"price\":\"£9.99\""));
    assert!(json.contains("\"specifications\":{}"));
    assert!(json.contains("\"images\":[\"u1\",\"u2\"]"));

    // Fixed key order
    let title = json.find("\"title\"").unwrap();
    let description = json.find("\"description\"").unwrap();
    let asin = json.find("\"ASIN\"").unwrap();
    let price = json.find("\"price\"").unwrap();
    let specifications = json.find("\"specifications\"").unwrap();
    let images = json.find("\"images\"").unwrap();
    assert!(title < description && description < asin);
    assert!(asin < price && price < specifications && specifications < images);
}

#[test]
fn test_fixture_json_roundtrip() {
    let product = Extractor::new().extract(PRODUCT_FIXTURE).unwrap();
    let json = product.to_json().unwrap();

    let parsed: amz_extract::Product = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, product);
}

#[test]
fn test_extract_blank_page_fails() {
    let err = Extractor::new().extract("<html><body></body></html>").unwrap_err();

    assert!(matches!(err, ExtractError::MissingElement { selector: "#productTitle" }));
}

#[test]
fn test_extract_fixture_without_spec_table() {
    // Cut the technical-details block out of the fixture
    let html = PRODUCT_FIXTURE.replace("class=\"techD\"", "class=\"removed\"");

    let err = Extractor::new().extract(&html).unwrap_err();
    assert!(matches!(err, ExtractError::MissingElement { .. }));
}
