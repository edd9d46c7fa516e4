//! Checkout form and order submission route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use dhaka_market_core::{PaymentMethod, ProductId, Taka};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::filters;
use crate::models::{Product, Settings};
use crate::services::catalog;
use crate::services::orders::{self, OrderInput};
use crate::state::AppState;

/// Checkout form query parameters.
///
/// The quantity arrives from a URL the customer can edit, so garbage
/// never fails the page; anything unparseable falls back to one.
#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    #[serde(default, deserialize_with = "lenient_query_u32")]
    pub quantity: u32,
}

fn lenient_query_u32<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<u32, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0))
}

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/new.html")]
pub struct CheckoutTemplate {
    pub settings: Settings,
    pub product: Product,
    pub quantity: u32,
    pub line_total: Taka,
    /// Whether the line total already clears the free-shipping threshold.
    pub free_shipping: bool,
}

/// Display the checkout form for a product.
pub async fn new(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Query(query): Query<CheckoutQuery>,
) -> Response {
    let Some(product) =
        catalog::get_active_product(state.store(), ProductId::new(product_id)).await
    else {
        return Redirect::to("/products").into_response();
    };
    let settings: Settings = state.store().load().await;

    let quantity = query.quantity.max(1);
    let line_total = product.price.times(quantity);
    let free_shipping = line_total >= settings.free_shipping_min;

    CheckoutTemplate {
        settings,
        product,
        quantity,
        line_total,
        free_shipping,
    }
    .into_response()
}

/// Order submission body.
///
/// The checkout form serializes its fields from `FormData`, so numbers
/// arrive as strings; the lenient deserializers accept either form.
/// Required-field validation happens in the workflow, not here, so a
/// blank form gets the proper 400 message instead of a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub product: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub product_id: i64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub quantity: u32,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Order submission response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderResponse {
    pub success: bool,
    pub message: String,
    pub order_id: String,
}

/// Accept and persist an order submission.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitOrderRequest>,
) -> Result<Json<SubmitOrderResponse>> {
    let payment_method = request
        .payment_method
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(PaymentMethod::CashOnDelivery);

    let input = OrderInput {
        name: request.name,
        phone: request.phone,
        email: none_if_blank(request.email),
        address: request.address,
        city: request.city,
        area: request.area,
        product: request.product,
        product_id: ProductId::new(request.product_id),
        price: Taka::new(request.price.max(0)),
        quantity: request.quantity,
        payment_method,
        notes: none_if_blank(request.notes),
    };

    let receipt = orders::submit_order(state.store(), input).await?;

    Ok(Json(SubmitOrderResponse {
        success: true,
        message: receipt.message,
        order_id: receipt.order_id,
    }))
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// JSON value that is either a number or its decimal-string form.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

impl NumberOrString {
    fn to_i64(&self) -> i64 {
        match self {
            Self::Number(n) => *n,
            Self::String(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .map_or(0, |value| value.to_i64()))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .map_or(0, |value| value.to_i64())
        .try_into()
        .unwrap_or(0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_fields_accept_strings_and_numbers() {
        let request: SubmitOrderRequest = serde_json::from_str(
            r#"{"name":"Karim","phone":"0171","address":"Road 1","city":"Dhaka",
                "area":"Gulshan","product":"Trimmer","price":"580","productId":1,
                "quantity":"2"}"#,
        )
        .unwrap();
        assert_eq!(request.price, 580);
        assert_eq!(request.product_id, 1);
        assert_eq!(request.quantity, 2);
    }

    #[test]
    fn test_invalid_quantity_becomes_zero_for_coercion() {
        let request: SubmitOrderRequest =
            serde_json::from_str(r#"{"quantity":"lots","price":"-5"}"#).unwrap();
        // The workflow clamps quantity to at least 1; the handler clamps
        // price to at least 0.
        assert_eq!(request.quantity, 0);
        assert_eq!(request.price, -5);
        assert_eq!(request.name, "");
    }

    #[test]
    fn test_checkout_quantity_tolerates_garbage() {
        let query: CheckoutQuery = serde_json::from_str(r#"{"quantity":"abc"}"#).unwrap();
        assert_eq!(query.quantity, 0);
        let query: CheckoutQuery = serde_json::from_str(r#"{"quantity":"3"}"#).unwrap();
        assert_eq!(query.quantity, 3);
        let query: CheckoutQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.quantity, 0);
    }

    #[test]
    fn test_none_if_blank() {
        assert_eq!(none_if_blank(Some("  ".to_string())), None);
        assert_eq!(none_if_blank(None), None);
        assert_eq!(
            none_if_blank(Some("a@b.c".to_string())),
            Some("a@b.c".to_string())
        );
    }
}
