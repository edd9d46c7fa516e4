//! Admin back-office route handlers.
//!
//! Everything except the login page is gated by [`RequireAdminAuth`];
//! unauthenticated access redirects to `/admin/login`.
//!
//! [`RequireAdminAuth`]: crate::middleware::RequireAdminAuth

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod uploads;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Request body limit for the image upload endpoint: five 5 MiB files
/// plus multipart framing overhead.
const UPLOAD_BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Create the admin mutation API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(api::create_product))
        .route(
            "/products/{id}",
            put(api::update_product).delete(api::delete_product),
        )
        .route("/categories", post(api::create_category))
        .route(
            "/categories/{id}",
            put(api::update_category).delete(api::delete_category),
        )
        .route("/orders/{order_id}/status", post(api::set_order_status))
        .route("/settings", put(api::update_settings))
}

/// Create the admin routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/", get(dashboard::index))
        .route(
            "/upload",
            post(uploads::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .nest("/api", api_routes())
}
