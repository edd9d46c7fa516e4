//! Persisted data models.
//!
//! Each model serializes with camelCase field names so the document
//! files keep the layout the store has always used on disk.

pub mod category;
pub mod order;
pub mod product;
pub mod session;
pub mod settings;

pub use category::Category;
pub use order::Order;
pub use product::Product;
pub use session::CurrentAdmin;
pub use settings::Settings;

use crate::store::{DocumentStore, StoreError};

/// Write first-run defaults for every document that is absent on disk.
///
/// # Errors
///
/// Returns `StoreError` if a seed file cannot be written.
pub async fn bootstrap(store: &DocumentStore) -> Result<(), StoreError> {
    store.ensure_seeded::<Vec<Product>>().await?;
    store.ensure_seeded::<Vec<Order>>().await?;
    store.ensure_seeded::<Vec<Category>>().await?;
    store.ensure_seeded::<Settings>().await?;
    Ok(())
}
