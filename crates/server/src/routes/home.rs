//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::filters;
use crate::models::{Product, Settings};
use crate::services::catalog;
use crate::state::AppState;

/// How many products the home page features.
const FEATURED_COUNT: usize = 6;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub settings: Settings,
    pub products: Vec<Product>,
    /// Whether more products exist beyond the featured slice.
    pub has_more: bool,
}

/// Display the storefront home page.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let products = catalog::list_active_products(state.store()).await;
    let settings: Settings = state.store().load().await;

    let has_more = products.len() > FEATURED_COUNT;
    let products = products.into_iter().take(FEATURED_COUNT).collect();

    HomeTemplate {
        settings,
        products,
        has_more,
    }
}
