//! Admin login and logout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::auth::{current_admin, set_current_admin};
use crate::models::{CurrentAdmin, Settings};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub settings: Settings,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Display the admin login page.
///
/// An already-authenticated admin is bounced straight to the dashboard.
pub async fn login_page(State(state): State<AppState>, session: Session) -> Response {
    if current_admin(&session).await.is_some() {
        return Redirect::to("/admin").into_response();
    }
    let settings: Settings = state.store().load().await;
    LoginTemplate { settings }.into_response()
}

/// Check the submitted credentials and mark the session authenticated.
///
/// Failure is a uniform message that never reveals which field was
/// wrong.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if !state
        .config()
        .admin
        .verify(&request.username, &request.password)
    {
        tracing::warn!(username = %request.username, "failed admin login");
        return Err(AppError::Auth);
    }

    set_current_admin(
        &session,
        &CurrentAdmin {
            username: request.username,
        },
    )
    .await?;

    tracing::info!("admin logged in");
    Ok(Json(LoginResponse { success: true }))
}

/// Destroy the session unconditionally and return to the login page.
pub async fn logout(session: Session) -> Result<Redirect> {
    session.flush().await?;
    Ok(Redirect::to("/admin/login"))
}
