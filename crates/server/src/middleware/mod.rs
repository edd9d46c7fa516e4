//! Request middleware: sessions, the admin auth gate, and the visitor
//! counter.

pub mod auth;
pub mod session;
pub mod visitors;

pub use auth::RequireAdminAuth;
pub use session::create_session_layer;
