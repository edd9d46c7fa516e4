//! Product listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use dhaka_market_core::ProductId;

use crate::filters;
use crate::models::{Product, Settings};
use crate::services::catalog;
use crate::state::AppState;

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub settings: Settings,
    pub products: Vec<Product>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub settings: Settings,
    pub product: Product,
}

/// Display the full active-product listing.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = catalog::list_active_products(state.store()).await;
    let settings: Settings = state.store().load().await;

    ProductsIndexTemplate { settings, products }
}

/// Display a product detail page.
///
/// Unknown ids and inactive products redirect to the listing rather
/// than rendering an error page.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let Some(product) = catalog::get_active_product(state.store(), ProductId::new(id)).await
    else {
        return Redirect::to("/products").into_response();
    };
    let settings: Settings = state.store().load().await;

    ProductShowTemplate { settings, product }.into_response()
}
