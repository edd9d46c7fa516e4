//! Shared harness for the HTTP integration tests.

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use dhaka_market_core::AdminCredentials;
use dhaka_market_server::config::ServerConfig;
use dhaka_market_server::state::AppState;
use dhaka_market_server::store::DocumentStore;
use dhaka_market_server::{app, models};
use secrecy::SecretString;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "hiraihan";
pub const ADMIN_PASSWORD: &str = "raihan55555";

/// A fully wired application over temporary data and upload
/// directories, seeded with the first-run documents.
pub struct TestServer {
    pub app: Router,
    pub store: DocumentStore,
    _data_dir: tempfile::TempDir,
    _upload_dir: tempfile::TempDir,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let upload_dir = tempfile::tempdir().unwrap();

        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            data_dir: data_dir.path().to_path_buf(),
            upload_dir: upload_dir.path().to_path_buf(),
            admin: AdminCredentials::new(
                ADMIN_USERNAME.to_string(),
                SecretString::from(ADMIN_PASSWORD),
            ),
        };

        let store = DocumentStore::new(config.data_dir.clone());
        models::bootstrap(&store).await.unwrap();

        Self {
            app: app(AppState::new(config, store.clone())),
            store,
            _data_dir: data_dir,
            _upload_dir: upload_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response<Body> {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Log in as the test admin and return the session cookie value.
    pub async fn login(&self) -> String {
        let response = self
            .post_json(
                "/admin/login",
                &serde_json::json!({
                    "username": ADMIN_USERNAME,
                    "password": ADMIN_PASSWORD,
                }),
            )
            .await;
        assert!(response.status().is_success(), "login failed in harness");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login response carries a session cookie")
            .to_str()
            .unwrap();
        cookie.split(';').next().unwrap().to_string()
    }
}

/// Read the whole response body as a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the whole response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
