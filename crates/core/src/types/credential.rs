//! Administrator credential pair.
//!
//! The store has exactly one administrative identity, configured at
//! startup. There is no user registry and no role model; authentication
//! is an exact match against this single pair.

use secrecy::{ExposeSecret, SecretString};

/// The configured administrator username and password.
///
/// The password is held in a [`SecretString`] so it is zeroized on drop
/// and redacted from `Debug` output.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    /// Create a credential pair.
    #[must_use]
    pub const fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    /// The configured username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a submitted username/password pair.
    ///
    /// Both fields must match exactly. Callers must not report which
    /// field was wrong.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
