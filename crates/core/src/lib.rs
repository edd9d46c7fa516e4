//! Dhaka Market Core - Shared types library.
//!
//! This crate provides common types used by the Dhaka Market server:
//! type-safe IDs, currency amounts, status enums, and the admin
//! credential pair.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no filesystem access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, credentials, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
