//! Read-only catalog derivation over the product and category documents.
//!
//! Every call re-reads the document store; the catalog is small and
//! written rarely, so there is no caching layer to invalidate.

use dhaka_market_core::ProductId;

use crate::models::{Category, Product};
use crate::store::DocumentStore;

/// Products visible to customers, in document insertion order.
pub async fn list_active_products(store: &DocumentStore) -> Vec<Product> {
    let products: Vec<Product> = store.load().await;
    products.into_iter().filter(|p| p.status.is_active()).collect()
}

/// Look up a product by id, regardless of status.
pub async fn get_product(store: &DocumentStore, id: ProductId) -> Option<Product> {
    let products: Vec<Product> = store.load().await;
    products.into_iter().find(|p| p.id == id)
}

/// Look up a product customers are allowed to see.
///
/// Unknown ids and inactive products both come back `None`; page
/// handlers map that to a redirect to the listing.
pub async fn get_active_product(store: &DocumentStore, id: ProductId) -> Option<Product> {
    get_product(store, id).await.filter(|p| p.status.is_active())
}

/// All categories with `product_count` recomputed from the product
/// collection. The persisted count is stale by design and ignored.
pub async fn list_categories(store: &DocumentStore) -> Vec<Category> {
    let products: Vec<Product> = store.load().await;
    let categories: Vec<Category> = store.load().await;
    categories
        .into_iter()
        .map(|mut category| {
            category.product_count = products
                .iter()
                .filter(|p| p.category == category.slug)
                .count()
                .try_into()
                .unwrap_or(u32::MAX);
            category
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dhaka_market_core::{ProductStatus, Taka};

    use super::*;
    use crate::store::Document;

    fn product(id: i64, name: &str, category: &str, status: ProductStatus) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Taka::new(100),
            original_price: None,
            discount: None,
            images: Vec::new(),
            category: category.to_string(),
            brand: "Generic".to_string(),
            stock: 10,
            rating: "4.0".to_string(),
            reviews: 0,
            description: String::new(),
            features: Vec::new(),
            status,
            created_at: chrono::Utc::now(),
        }
    }

    async fn seeded_store(products: Vec<Product>) -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        store.replace(products).await.unwrap();
        store.replace(Vec::<Category>::seed()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_active_filter_preserves_insertion_order() {
        let (_dir, store) = seeded_store(vec![
            product(1, "First", "beauty", ProductStatus::Active),
            product(2, "Hidden", "beauty", ProductStatus::Inactive),
            product(3, "Third", "fashion", ProductStatus::Active),
        ])
        .await;

        let active = list_active_products(&store).await;
        let names: Vec<_> = active.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
    }

    #[tokio::test]
    async fn test_get_active_product_hides_inactive() {
        let (_dir, store) = seeded_store(vec![
            product(1, "Visible", "beauty", ProductStatus::Active),
            product(2, "Hidden", "beauty", ProductStatus::Inactive),
        ])
        .await;

        assert!(get_active_product(&store, ProductId::new(1)).await.is_some());
        assert!(get_active_product(&store, ProductId::new(2)).await.is_none());
        assert!(get_active_product(&store, ProductId::new(99)).await.is_none());
        // The raw lookup still sees inactive products (admin side).
        assert!(get_product(&store, ProductId::new(2)).await.is_some());
    }

    #[tokio::test]
    async fn test_category_counts_recomputed_not_trusted() {
        // The seeded "beauty" category claims productCount = 1; give it
        // three products (one inactive) and an unrelated category none.
        let (_dir, store) = seeded_store(vec![
            product(1, "A", "beauty", ProductStatus::Active),
            product(2, "B", "beauty", ProductStatus::Inactive),
            product(3, "C", "beauty", ProductStatus::Active),
        ])
        .await;

        let categories = list_categories(&store).await;
        let beauty = categories.iter().find(|c| c.slug == "beauty").unwrap();
        assert_eq!(beauty.product_count, 3);
        let fashion = categories.iter().find(|c| c.slug == "fashion").unwrap();
        assert_eq!(fashion.product_count, 0);
    }
}
