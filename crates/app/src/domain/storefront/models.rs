//! Storefront Models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shopper context forwarded to upstream sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontSession {
    /// Raw `Cookie` header from the incoming request, if any.
    pub cookie: Option<String>,
}

/// Catalog listings shown on storefront pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogListings {
    pub discounted_products: Value,
    pub best_selling_products: Value,
    pub brands: Value,
    pub categories: Value,
    pub subcategories: Value,
}

/// Everything a storefront page needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedData {
    pub user_status: Value,
    pub cart: Value,
    pub discounted_products: Value,
    pub best_selling_products: Value,
    pub brands: Value,
    pub categories: Value,
    pub subcategories: Value,
}

impl ConsolidatedData {
    #[must_use]
    pub fn compose(user_status: Value, cart: Value, catalog: CatalogListings) -> Self {
        let CatalogListings {
            discounted_products,
            best_selling_products,
            brands,
            categories,
            subcategories,
        } = catalog;

        Self {
            user_status,
            cart,
            discounted_products,
            best_selling_products,
            brands,
            categories,
            subcategories,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn consolidated_data_serializes_exactly_seven_keys() -> TestResult {
        let data = ConsolidatedData::compose(
            json!({ "is_logged_in": true }),
            json!({ "cart_items": [] }),
            CatalogListings {
                discounted_products: json!([]),
                best_selling_products: json!([]),
                brands: json!([]),
                categories: json!([]),
                subcategories: json!([]),
            },
        );

        let value = serde_json::to_value(&data)?;
        let mut keys: Vec<&str> = value
            .as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default();

        keys.sort_unstable();

        assert_eq!(
            keys,
            [
                "best_selling_products",
                "brands",
                "cart",
                "categories",
                "discounted_products",
                "subcategories",
                "user_status",
            ]
        );

        Ok(())
    }

    #[test]
    fn catalog_listings_require_every_key() {
        let result = serde_json::from_value::<CatalogListings>(json!({
            "discounted_products": [],
            "best_selling_products": [],
            "brands": [],
            "categories": [],
        }));

        assert!(result.is_err(), "missing subcategories should fail to decode");
    }

    #[test]
    fn catalog_listings_ignore_extra_keys() -> TestResult {
        let listings: CatalogListings = serde_json::from_value(json!({
            "discounted_products": [{ "id": 1 }],
            "best_selling_products": [],
            "brands": ["acme"],
            "categories": [],
            "subcategories": [],
            "generated_at": "2026-10-17T00:00:00Z",
        }))?;

        assert_eq!(listings.discounted_products, json!([{ "id": 1 }]));
        assert_eq!(listings.brands, json!(["acme"]));

        Ok(())
    }
}
