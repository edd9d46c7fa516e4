//! Admin mutation API route handlers.
//!
//! JSON endpoints behind the auth gate for the product, category,
//! order-status, and settings mutations the dashboard drives. Every
//! write goes through the document store's per-document critical
//! section, so concurrent admin edits cannot lose each other.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use dhaka_market_core::{CategoryId, ProductId, ProductStatus, Taka};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{Category, Order, Product, Settings};
use crate::services::orders;
use crate::state::AppState;

/// Generic success/message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Products
// =============================================================================

/// Mutable product fields accepted from the admin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub discount: Option<u32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: ProductStatus,
}

impl ProductPayload {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Product name is required".to_string()));
        }
        if self.price < 0 {
            return Err(AppError::Validation(
                "Product price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the payload onto a product, leaving `id` and `created_at`
    /// untouched.
    fn apply(self, product: &mut Product) {
        product.name = self.name;
        product.price = Taka::new(self.price);
        product.original_price = self.original_price.map(Taka::new);
        product.discount = self.discount;
        product.images = self.images;
        product.category = self.category;
        product.brand = self.brand;
        product.stock = self.stock;
        product.rating = self.rating;
        product.reviews = self.reviews;
        product.description = self.description;
        product.features = self.features;
        product.status = self.status;
    }
}

/// Product mutation response.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

/// Create a product. The id is assigned under the products lock.
pub async fn create_product(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>> {
    payload.validate()?;

    let product = state
        .store()
        .update(move |products: &mut Vec<Product>| {
            let next_id = products.iter().map(|p| p.id.as_i64()).max().unwrap_or(0) + 1;
            let mut product = Product {
                id: ProductId::new(next_id),
                name: String::new(),
                price: Taka::ZERO,
                original_price: None,
                discount: None,
                images: Vec::new(),
                category: String::new(),
                brand: String::new(),
                stock: 0,
                rating: String::new(),
                reviews: 0,
                description: String::new(),
                features: Vec::new(),
                status: ProductStatus::Active,
                created_at: Utc::now(),
            };
            payload.apply(&mut product);
            products.push(product.clone());
            product
        })
        .await?;

    tracing::info!(product_id = %product.id, "product created");
    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Update a product in place. `createdAt` is immutable.
pub async fn update_product(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>> {
    payload.validate()?;

    let id = ProductId::new(id);
    let product = state
        .store()
        .update(move |products: &mut Vec<Product>| {
            let Some(product) = products.iter_mut().find(|p| p.id == id) else {
                return Err(AppError::NotFound(format!("product {id}")));
            };
            payload.apply(product);
            Ok(product.clone())
        })
        .await??;

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Delete a product.
pub async fn delete_product(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let id = ProductId::new(id);
    state
        .store()
        .update(move |products: &mut Vec<Product>| {
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() == before {
                return Err(AppError::NotFound(format!("product {id}")));
            }
            Ok(())
        })
        .await??;

    tracing::info!(product_id = %id, "product deleted");
    Ok(Json(MessageResponse {
        success: true,
        message: "Product deleted".to_string(),
    }))
}

// =============================================================================
// Categories
// =============================================================================

/// Mutable category fields accepted from the admin.
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub slug: String,
}

impl CategoryPayload {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.slug.trim().is_empty() {
            return Err(AppError::Validation(
                "Category name and slug are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Category mutation response.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub category: Category,
}

/// Create a category. Slugs are unique: they are the foreign key
/// products reference.
pub async fn create_category(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<CategoryResponse>> {
    payload.validate()?;

    let category = state
        .store()
        .update(move |categories: &mut Vec<Category>| {
            if categories.iter().any(|c| c.slug == payload.slug) {
                return Err(AppError::Validation(format!(
                    "Category slug '{}' already exists",
                    payload.slug
                )));
            }
            let next_id = categories.iter().map(|c| c.id.as_i64()).max().unwrap_or(0) + 1;
            let category = Category {
                id: CategoryId::new(next_id),
                name: payload.name,
                slug: payload.slug,
                product_count: 0,
            };
            categories.push(category.clone());
            Ok(category)
        })
        .await??;

    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

/// Rename a category or change its slug.
pub async fn update_category(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<CategoryResponse>> {
    payload.validate()?;

    let id = CategoryId::new(id);
    let category = state
        .store()
        .update(move |categories: &mut Vec<Category>| {
            if categories.iter().any(|c| c.id != id && c.slug == payload.slug) {
                return Err(AppError::Validation(format!(
                    "Category slug '{}' already exists",
                    payload.slug
                )));
            }
            let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
                return Err(AppError::NotFound(format!("category {id}")));
            };
            category.name = payload.name;
            category.slug = payload.slug;
            Ok(category.clone())
        })
        .await??;

    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

/// Delete a category. Products referencing the slug keep it; there is
/// no foreign-key enforcement in the document model.
pub async fn delete_category(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let id = CategoryId::new(id);
    state
        .store()
        .update(move |categories: &mut Vec<Category>| {
            let before = categories.len();
            categories.retain(|c| c.id != id);
            if categories.len() == before {
                return Err(AppError::NotFound(format!("category {id}")));
            }
            Ok(())
        })
        .await??;

    Ok(Json(MessageResponse {
        success: true,
        message: "Category deleted".to_string(),
    }))
}

// =============================================================================
// Orders & settings
// =============================================================================

/// Order status change request.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// Order status change response.
#[derive(Debug, Serialize)]
pub struct OrderStatusResponse {
    pub success: bool,
    pub order: Order,
}

/// Idempotently set an order's status by its customer-facing id.
pub async fn set_order_status(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<OrderStatusResponse>> {
    let status = request.status.parse().map_err(AppError::Validation)?;

    let order = orders::set_status(state.store(), &order_id, status).await?;

    tracing::info!(order_id = %order.order_id, status = %order.status, "order status set");
    Ok(Json(OrderStatusResponse {
        success: true,
        order,
    }))
}

/// Replace the store settings record.
pub async fn update_settings(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Result<Json<MessageResponse>> {
    state.store().replace(settings).await?;

    tracing::info!("settings updated");
    Ok(Json(MessageResponse {
        success: true,
        message: "Settings saved".to_string(),
    }))
}
