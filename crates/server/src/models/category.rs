//! Product category model.

use dhaka_market_core::CategoryId;
use serde::{Deserialize, Serialize};

use crate::store::{Document, DocumentKey};

/// A product category.
///
/// `product_count` is still persisted for file compatibility, but it is
/// a derived value that drifts from truth; readers should use the
/// catalog service, which recomputes the count from the product
/// collection on every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe unique identifier, referenced by `Product::category`.
    pub slug: String,
    #[serde(default)]
    pub product_count: u32,
}

impl Document for Vec<Category> {
    const KEY: DocumentKey = DocumentKey::Categories;

    fn seed() -> Self {
        vec![
            Category {
                id: CategoryId::new(1),
                name: "Electronics".to_string(),
                slug: "electronics".to_string(),
                product_count: 0,
            },
            Category {
                id: CategoryId::new(2),
                name: "Home Appliances".to_string(),
                slug: "home-appliances".to_string(),
                product_count: 0,
            },
            Category {
                id: CategoryId::new(3),
                name: "Fashion".to_string(),
                slug: "fashion".to_string(),
                product_count: 0,
            },
            Category {
                id: CategoryId::new(4),
                name: "Beauty & Personal Care".to_string(),
                slug: "beauty".to_string(),
                product_count: 1,
            },
        ]
    }
}
