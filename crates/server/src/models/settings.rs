//! Store settings model.

use dhaka_market_core::{StoreStatus, Taka};
use serde::{Deserialize, Serialize};

use crate::store::{Document, DocumentKey};

/// The single mutable store settings record.
///
/// Loaded fresh from disk on every read so admins see their edits
/// immediately; there is deliberately no caching layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub store_name: String,
    /// Currency symbol used for display.
    pub currency: String,
    pub phone: String,
    pub email: String,
    pub store_status: StoreStatus,
    /// Flat shipping fee applied below the free-shipping threshold.
    pub shipping_fee: Taka,
    /// Subtotal at or above which shipping is free.
    pub free_shipping_min: Taka,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_name: "Dhaka Market".to_string(),
            currency: "\u{9f3}".to_string(),
            phone: "+8801330513726".to_string(),
            email: "mailraihanpremium@gmail.com".to_string(),
            store_status: StoreStatus::Open,
            shipping_fee: Taka::new(60),
            free_shipping_min: Taka::new(1000),
        }
    }
}

impl Document for Settings {
    const KEY: DocumentKey = DocumentKey::Settings;
}
