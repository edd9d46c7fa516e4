//! Visitor counting middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Count every inbound request toward the dashboard's visitor total.
pub async fn count_visitor(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.record_visit();
    next.run(request).await
}
