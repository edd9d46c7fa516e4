//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_USERNAME` - Administrator login name
//! - `ADMIN_PASSWORD` - Administrator password
//!
//! ## Optional
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `BASE_URL` - Public URL for the store (default: `http://localhost:3000`)
//! - `DATA_DIR` - Directory for the JSON documents (default: data)
//! - `UPLOAD_DIR` - Directory for uploaded images (default: public/uploads)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use dhaka_market_core::AdminCredentials;
use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the store
    pub base_url: String,
    /// Directory holding the four JSON documents
    pub data_dir: PathBuf,
    /// Directory holding uploaded product images
    pub upload_dir: PathBuf,
    /// The single administrator credential pair
    pub admin: AdminCredentials,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default("DATA_DIR", "data"));
        let upload_dir = PathBuf::from(get_env_or_default("UPLOAD_DIR", "public/uploads"));

        let admin_username = get_required_env("ADMIN_USERNAME")?;
        let admin_password = SecretString::from(get_required_env("ADMIN_PASSWORD")?);
        let admin = AdminCredentials::new(admin_username, admin_password);

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            upload_dir,
            admin,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
