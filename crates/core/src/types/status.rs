//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Product visibility status.
///
/// Customers only ever see products with status [`ProductStatus::Active`];
/// everything else about a product's lifecycle is admin-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    /// Whether the product is visible to customers.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Order lifecycle status.
///
/// Orders are created as [`OrderStatus::Pending`] and moved by admin
/// action to confirmed, then completed, or cancelled at any point.
/// Transitions are idempotent status sets, not a strict state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Accepted payment methods.
///
/// Serialized with the historical display strings so existing order
/// documents keep parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "bKash")]
    Bkash,
    #[serde(rename = "Nagad")]
    Nagad,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CashOnDelivery => write!(f, "Cash on Delivery"),
            Self::Bkash => write!(f, "bKash"),
            Self::Nagad => write!(f, "Nagad"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash on Delivery" => Ok(Self::CashOnDelivery),
            "bKash" => Ok(Self::Bkash),
            "Nagad" => Ok(Self::Nagad),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Whether the store is taking orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    #[default]
    Open,
    Closed,
}

impl StoreStatus {
    /// Whether the store is currently accepting orders.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_serde() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Active).unwrap(),
            "\"active\""
        );
        let status: ProductStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(status, ProductStatus::Inactive);
        assert!(!status.is_active());
    }

    #[test]
    fn test_order_status_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_payment_method_historical_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Bkash).unwrap(),
            "\"bKash\""
        );
        let method: PaymentMethod = serde_json::from_str("\"Cash on Delivery\"").unwrap();
        assert_eq!(method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(
            "bKash".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Bkash
        );
        assert!("Visa".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentMethod::default(), PaymentMethod::CashOnDelivery);
        assert_eq!(StoreStatus::default(), StoreStatus::Open);
    }
}
