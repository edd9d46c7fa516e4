//! Core types for Dhaka Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod price;
pub mod status;

pub use credential::AdminCredentials;
pub use id::*;
pub use price::Taka;
pub use status::*;
