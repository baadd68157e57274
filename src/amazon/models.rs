//! Data model for an extracted Amazon product.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product extracted from a single detail page.
///
/// Built once per extraction pass and immutable afterwards. Struct field
/// order fixes the JSON key order: `title`, `description`, `ASIN`, `price`,
/// `specifications`, `images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product title, whitespace-trimmed
    pub title: String,
    /// First description paragraph, whitespace-trimmed
    pub description: String,
    /// Amazon Standard Identification Number, from the specifications table
    #[serde(rename = "ASIN")]
    pub asin: String,
    /// Raw price text, byte-for-byte as it appears on the page
    pub price: String,
    /// Specification rows in document order, keyed by first-cell text.
    /// Never contains an `ASIN` key.
    pub specifications: Map<String, Value>,
    /// Gallery image URLs in document order
    pub images: Vec<String>,
}

impl Product {
    /// Serializes the product to compact JSON with the fixed key order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the product to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Looks up a specification value by key.
    pub fn specification(&self, key: &str) -> Option<&str> {
        self.specifications.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_product() -> Product {
        let mut specifications = Map::new();
        specifications.insert("Colour".to_string(), Value::String("Red".to_string()));
        specifications.insert("Weight".to_string(), Value::String("1.2 kg".to_string()));

        Product {
            title: "Widget".to_string(),
            description: "A fine widget.".to_string(),
            asin: "B000TEST".to_string(),
            price: "£9.99".to_string(),
            specifications,
            images: vec!["u1".to_string(), "u2".to_string()],
        }
    }

    #[test]
    fn test_json_key_order() {
        let product = make_test_product();
        let json = product.to_json().unwrap();

        let positions: Vec<usize> =
            ["\"title\"", "\"description\"", "\"ASIN\"", "\"price\"", "\"specifications\"", "\"images\""]
                .iter()
                .map(|key| json.find(key).unwrap())
                .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "key order wrong in: {}", json);
    }

    #[test]
    fn test_asin_serialized_uppercase() {
        let json = make_test_product().to_json().unwrap();
        assert!(json.contains("\"ASIN\":\"B000TEST\""));
        assert!(!json.contains("\"asin\""));
    }

    #[test]
    fn test_json_roundtrip() {
        let product = make_test_product();
        let json = product.to_json().unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, product);
        // Insertion order of specifications survives the round trip
        let keys: Vec<_> = parsed.specifications.keys().collect();
        assert_eq!(keys, ["Colour", "Weight"]);
    }

    #[test]
    fn test_json_escaping() {
        let mut product = make_test_product();
        product.title = "Widget \"Deluxe\"\n2nd edition".to_string();

        let json = product.to_json().unwrap();
        assert!(json.contains(r#"Widget \"Deluxe\"\n2nd edition"#));

        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, product.title);
    }

    #[test]
    fn test_specification_lookup() {
        let product = make_test_product();
        assert_eq!(product.specification("Colour"), Some("Red"));
        assert_eq!(product.specification("Weight"), Some("1.2 kg"));
        assert_eq!(product.specification("ASIN"), None);
        assert_eq!(product.specification("Voltage"), None);
    }

    #[test]
    fn test_pretty_json() {
        let product = make_test_product();
        let pretty = product.to_json_pretty().unwrap();
        assert!(pretty.contains('\n'));
        assert!(pretty.contains("\"ASIN\": \"B000TEST\""));
    }
}
