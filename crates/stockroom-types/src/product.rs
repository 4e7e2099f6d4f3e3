//! Product types

use serde::{Deserialize, Serialize};

/// Fields exposed when a product is serialized, in wire order.
pub const PRODUCT_FIELDS: [&str; 5] = ["id", "name", "description", "price", "qty"];

/// Declared width of the `name` column.
pub const NAME_MAX_LEN: usize = 100;

/// Declared width of the `description` column.
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Persisted product record.
///
/// The struct carries exactly the fields listed in [`PRODUCT_FIELDS`], so
/// serializing it is the allowlist projection. A `Vec<Product>` serializes
/// to a JSON array in the same order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

impl Product {
    /// Build the stored record for `draft` once the store has assigned `id`.
    pub fn from_draft(id: i64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            qty: draft.qty,
        }
    }
}

/// Request body for creating or replacing a product.
///
/// All four fields are required; update overwrites every one of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_only_allowlisted_fields() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            qty: 10,
        };

        let value = serde_json::to_value(&product).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = PRODUCT_FIELDS.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "description": "A widget",
                "price": 9.99,
                "qty": 10
            })
        );
    }

    #[test]
    fn test_product_list_preserves_order() {
        let products = vec![
            Product::from_draft(2, draft("b")),
            Product::from_draft(1, draft("a")),
        ];

        let value = serde_json::to_value(&products).unwrap();
        let ids: Vec<i64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_draft_requires_every_field() {
        let missing_qty = r#"{"name":"Widget","description":"A widget","price":9.99}"#;
        let err = serde_json::from_str::<ProductDraft>(missing_qty).unwrap_err();
        assert!(err.to_string().contains("qty"));
    }

    #[test]
    fn test_draft_ignores_unknown_fields() {
        let body = r#"{"name":"Widget","description":"A widget","price":9.99,"qty":10,"id":77}"#;
        let parsed: ProductDraft = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, draft("Widget"));
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            qty: 10,
        }
    }
}
