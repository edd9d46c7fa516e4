//! Application state shared across handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ServerConfig;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; carries the configuration, the document
/// store handle, and the process-lifetime visitor counter.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: DocumentStore,
    visitors: AtomicU64,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                visitors: AtomicU64::new(0),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// Count one request toward the visitor total.
    pub fn record_visit(&self) {
        self.inner.visitors.fetch_add(1, Ordering::Relaxed);
    }

    /// Requests served since the process started.
    #[must_use]
    pub fn visitor_count(&self) -> u64 {
        self.inner.visitors.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dhaka_market_core::AdminCredentials;
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_visitor_counter() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost".to_string(),
            data_dir: "data".into(),
            upload_dir: "public/uploads".into(),
            admin: AdminCredentials::new("admin".to_string(), SecretString::from("pw")),
        };
        let state = AppState::new(config, DocumentStore::new("data"));
        assert_eq!(state.visitor_count(), 0);
        state.record_visit();
        state.clone().record_visit();
        assert_eq!(state.visitor_count(), 2);
    }
}
