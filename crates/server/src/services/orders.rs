//! Order submission workflow and status transitions.
//!
//! Orders move through pending, then confirmed, then completed, or get
//! cancelled along the way. Only the initial pending state is assigned
//! here at submission; the later transitions are idempotent status sets
//! driven by the admin API.

use dhaka_market_core::{OrderStatus, PaymentMethod, ProductId, Taka};
use thiserror::Error;

use crate::models::order::{NO_EMAIL, NO_NOTES};
use crate::models::{Order, Settings};
use crate::store::{DocumentStore, StoreError};

/// Customer-facing prefix on every order identifier.
const ORDER_ID_PREFIX: &str = "DM";

/// Errors from the order workflow.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A required submission field was blank or absent.
    #[error("Missing required fields. Please fill all * fields.")]
    MissingFields,
    /// No order carries the given identifier.
    #[error("order {0} not found")]
    NotFound(String),
    /// The order book could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A validated order submission.
///
/// Field coercion (string-or-number quantities and prices from the
/// checkout form) happens at the route boundary; by the time input
/// reaches the workflow it is typed.
#[derive(Debug, Clone)]
pub struct OrderInput {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub city: String,
    pub area: String,
    /// Product name snapshot from the checkout form.
    pub product: String,
    pub product_id: ProductId,
    /// Unit price snapshot from the checkout form.
    pub price: Taka,
    pub quantity: u32,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

/// Confirmation returned to the customer after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: String,
    pub message: String,
}

/// Total charged for an order: line total plus shipping, with shipping
/// waived once the line total reaches the free-shipping threshold.
#[must_use]
pub fn compute_total(unit_price: Taka, quantity: u32, settings: &Settings) -> Taka {
    let line_total = unit_price.times(quantity);
    let shipping = if line_total >= settings.free_shipping_min {
        Taka::ZERO
    } else {
        settings.shipping_fee
    };
    line_total.plus(shipping)
}

/// Validate and persist an order submission.
///
/// The append happens inside the orders document's critical section, so
/// two concurrent submissions cannot overwrite each other's record, and
/// the generated order id is checked against every existing order while
/// the lock is held.
///
/// # Errors
///
/// [`OrderError::MissingFields`] if any required field is blank (no
/// partial order is persisted); [`OrderError::Store`] if the order book
/// cannot be written.
pub async fn submit_order(
    store: &DocumentStore,
    input: OrderInput,
) -> Result<OrderReceipt, OrderError> {
    for required in [
        &input.name,
        &input.phone,
        &input.address,
        &input.city,
        &input.area,
    ] {
        if required.trim().is_empty() {
            return Err(OrderError::MissingFields);
        }
    }

    // Settings are read fresh so a fee edit applies to the next order.
    let settings: Settings = store.load().await;
    let quantity = input.quantity.max(1);
    let total_amount = compute_total(input.price, quantity, &settings);

    let order_id = store
        .update(move |orders: &mut Vec<Order>| {
            let order_id = new_order_id(orders);
            let order = Order {
                id: i64::try_from(orders.len()).unwrap_or(i64::MAX).saturating_add(1),
                order_id: order_id.clone(),
                name: input.name,
                phone: input.phone,
                email: input.email.unwrap_or_else(|| NO_EMAIL.to_string()),
                address: input.address,
                area: input.area,
                city: input.city,
                product: input.product,
                product_id: input.product_id,
                price: input.price,
                quantity,
                total_amount,
                payment_method: input.payment_method,
                notes: input.notes.unwrap_or_else(|| NO_NOTES.to_string()),
                timestamp: chrono::Utc::now(),
                status: OrderStatus::Pending,
            };
            tracing::info!(order_id = %order.order_id, total = %order.total_amount, "new order");
            orders.push(order);
            order_id
        })
        .await?;

    Ok(OrderReceipt {
        order_id,
        message: "Order received successfully! Our team will call you within 30 minutes \
                  to confirm your order."
            .to_string(),
    })
}

/// Idempotently set an order's status by its customer-facing id.
///
/// # Errors
///
/// [`OrderError::NotFound`] if no order carries the id;
/// [`OrderError::Store`] if the order book cannot be written.
pub async fn set_status(
    store: &DocumentStore,
    order_id: &str,
    new_status: OrderStatus,
) -> Result<Order, OrderError> {
    let order_id = order_id.to_string();
    store
        .update(move |orders: &mut Vec<Order>| {
            let Some(order) = orders.iter_mut().find(|o| o.order_id == order_id) else {
                return Err(OrderError::NotFound(order_id));
            };
            order.status = new_status;
            Ok(order.clone())
        })
        .await?
}

/// Generate an order id distinct from every existing order.
///
/// Timestamp plus a random suffix keeps ids recognizable and sortable;
/// the uniqueness loop runs under the orders lock, so two concurrent
/// submissions in the same millisecond still get distinct ids.
fn new_order_id(existing: &[Order]) -> String {
    loop {
        let candidate = format!(
            "{ORDER_ID_PREFIX}{}{:04X}",
            chrono::Utc::now().timestamp_millis(),
            rand::random::<u16>()
        );
        if !existing.iter().any(|o| o.order_id == candidate) {
            return candidate;
        }
    }
}
