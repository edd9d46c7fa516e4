//! Admin dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use dhaka_market_core::{OrderStatus, Taka};

use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::{Category, Order, Product, Settings};
use crate::services::catalog;
use crate::state::AppState;

/// How many orders the dashboard shows, newest first.
const RECENT_ORDERS: usize = 10;

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub settings: Settings,
    pub admin_username: String,
    pub total_sales: Taka,
    pub pending_orders: usize,
    pub total_orders: usize,
    pub total_products: usize,
    pub active_products: usize,
    pub visitor_count: u64,
    pub recent_orders: Vec<Order>,
    pub categories: Vec<Category>,
}

/// Display the admin dashboard with aggregate figures.
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let orders: Vec<Order> = state.store().load().await;
    let products: Vec<Product> = state.store().load().await;
    let categories = catalog::list_categories(state.store()).await;
    let settings: Settings = state.store().load().await;

    let total_sales = orders
        .iter()
        .map(|o| o.total_amount)
        .fold(Taka::ZERO, Taka::plus);
    let pending_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();
    let active_products = products.iter().filter(|p| p.status.is_active()).count();

    let total_orders = orders.len();
    let recent_orders = orders.into_iter().rev().take(RECENT_ORDERS).collect();

    DashboardTemplate {
        settings,
        admin_username: admin.username,
        total_sales,
        pending_orders,
        total_orders,
        total_products: products.len(),
        active_products,
        visitor_count: state.visitor_count(),
        recent_orders,
        categories,
    }
}
