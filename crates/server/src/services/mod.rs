//! Business logic services.
//!
//! Services sit between the route handlers and the document store:
//! catalog derivation, the order workflow, and image uploads.

pub mod catalog;
pub mod orders;
pub mod uploads;
