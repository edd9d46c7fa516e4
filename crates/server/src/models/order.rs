//! Customer order model.

use chrono::{DateTime, Utc};
use dhaka_market_core::{OrderStatus, PaymentMethod, ProductId, Taka};
use serde::{Deserialize, Serialize};

use crate::store::{Document, DocumentKey};

/// Placeholder stored when the customer leaves the email blank.
pub const NO_EMAIL: &str = "Not provided";

/// Placeholder stored when the customer leaves the notes blank.
pub const NO_NOTES: &str = "No additional notes";

/// A customer order.
///
/// The product fields are a snapshot captured at order time, not a live
/// reference into the catalog; later price edits never change a past
/// order. Orders are append-only: admin actions may set `status` but
/// nothing else is ever rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential position in the order book, starting at 1.
    pub id: i64,
    /// Customer-facing identifier ("DM..." string).
    pub order_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub area: String,
    pub city: String,
    /// Product name at order time.
    pub product: String,
    pub product_id: ProductId,
    /// Unit price at order time.
    pub price: Taka,
    pub quantity: u32,
    /// Line total plus shipping, as computed at submission.
    pub total_amount: Taka,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Document for Vec<Order> {
    const KEY: DocumentKey = DocumentKey::Orders;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let order = Order {
            id: 1,
            order_id: "DM17000000000001A2B".to_string(),
            name: "Karim".to_string(),
            phone: "01711111111".to_string(),
            email: NO_EMAIL.to_string(),
            address: "Road 1".to_string(),
            area: "Gulshan".to_string(),
            city: "Dhaka".to_string(),
            product: "Trimmer".to_string(),
            product_id: ProductId::new(1),
            price: Taka::new(580),
            quantity: 2,
            total_amount: Taka::new(1160),
            payment_method: PaymentMethod::CashOnDelivery,
            notes: NO_NOTES.to_string(),
            timestamp: Utc::now(),
            status: OrderStatus::Pending,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], "DM17000000000001A2B");
        assert_eq!(json["totalAmount"], 1160);
        assert_eq!(json["paymentMethod"], "Cash on Delivery");
        assert_eq!(json["status"], "pending");
    }
}
