//! Dhaka Market server library.
//!
//! This crate provides the storefront and admin back office as a
//! library, allowing the router to be built in tests without binding
//! a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the complete application router.
///
/// Layer order matters: the session layer must wrap the routes so the
/// auth extractors can see it, and tracing sits outermost to cover the
/// whole request.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());
    let uploads = ServeDir::new(&state.config().upload_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/uploads", uploads)
        .layer(from_fn_with_state(state.clone(), middleware::visitors::count_visitor))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
