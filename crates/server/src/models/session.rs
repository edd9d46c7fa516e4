//! Session-scoped models.

use serde::{Deserialize, Serialize};

/// Session keys used to store values in the session.
pub mod session_keys {
    /// Key for the currently authenticated admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The authenticated administrator stored in the session.
///
/// Present in the session if and only if the admin has logged in; its
/// absence is what makes a session unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub username: String,
}
