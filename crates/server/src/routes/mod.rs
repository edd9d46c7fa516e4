//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Storefront
//! GET  /                        - Home page (up to 6 active products)
//! GET  /products                - Active product listing
//! GET  /product/{id}            - Product detail (unknown/inactive -> /products)
//! GET  /order/{product_id}      - Checkout form (?quantity=N)
//! POST /submit-order            - Order submission (JSON)
//!
//! # Admin
//! GET  /admin/login             - Login page
//! POST /admin/login             - Login action (JSON)
//! GET  /admin/logout            - Destroy session, redirect to login
//! GET  /admin                   - Dashboard (requires auth)
//! POST /admin/upload            - Image upload, multipart (requires auth)
//!
//! # Admin API (all require auth)
//! POST   /admin/api/products                  - Create product
//! PUT    /admin/api/products/{id}             - Update product
//! DELETE /admin/api/products/{id}             - Delete product
//! POST   /admin/api/categories                - Create category
//! PUT    /admin/api/categories/{id}           - Update category
//! DELETE /admin/api/categories/{id}           - Delete category
//! POST   /admin/api/orders/{order_id}/status  - Set order status
//! PUT    /admin/api/settings                  - Replace store settings
//! ```

pub mod admin;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the storefront routes router.
pub fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::index))
        .route("/product/{id}", get(products::show))
        .route("/order/{product_id}", get(orders::new))
        .route("/submit-order", post(orders::submit))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(storefront_routes())
        .nest("/admin", admin::routes())
}
