//! Catalog product model.

use chrono::{DateTime, Utc};
use dhaka_market_core::{ProductId, ProductStatus, Taka};
use serde::{Deserialize, Serialize};

use crate::store::{Document, DocumentKey};

/// A catalog product.
///
/// `created_at` is set once at creation and never edited afterwards.
/// `original_price` and `discount` are display-only; the discount is
/// whatever the admin typed, never recomputed from the prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Taka,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Taka>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Image URLs; the first is the cover image.
    pub images: Vec<String>,
    /// Slug of the category this product belongs to.
    pub category: String,
    pub brand: String,
    pub stock: u32,
    /// Display rating, kept as the string the admin entered ("4.5").
    pub rating: String,
    pub reviews: u32,
    pub description: String,
    pub features: Vec<String>,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The cover image URL, if the product has any images.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Display rating parsed for star rendering; malformed ratings
    /// render as zero stars rather than failing the page.
    #[must_use]
    pub fn rating_value(&self) -> f32 {
        self.rating.parse().unwrap_or(0.0)
    }
}

impl Document for Vec<Product> {
    const KEY: DocumentKey = DocumentKey::Products;

    fn seed() -> Self {
        vec![Product {
            id: ProductId::new(1),
            name: "3 IN 1 Hair Trimmer Machine for Men & Women".to_string(),
            price: Taka::new(580),
            original_price: Some(Taka::new(880)),
            discount: Some(34),
            images: vec![
                "https://i.imgur.com/nun51uF.jpeg".to_string(),
                "https://i.imgur.com/B6yvpAz.jpeg".to_string(),
                "https://i.imgur.com/mULwWC3.jpeg".to_string(),
            ],
            category: "beauty".to_string(),
            brand: "Premium Quality".to_string(),
            stock: 45,
            rating: "4.5".to_string(),
            reviews: 128,
            description: "Professional 3 IN 1 Hair Trimmer Machine for Men & Women. \
                Perfect for hair cutting, trimming, and styling. Waterproof design \
                with stainless steel blades for long-lasting performance."
                .to_string(),
            features: vec![
                "3 IN 1 Multifunctional Use".to_string(),
                "Waterproof Design".to_string(),
                "Stainless Steel Blades".to_string(),
                "2 Hours Continuous Use".to_string(),
                "USB Rechargeable".to_string(),
                "1 Year Warranty".to_string(),
            ],
            status: ProductStatus::Active,
            created_at: Utc::now(),
        }]
    }
}
