//! # Product Commands
//!
//! Catalog management. Gated to the admin role, like the Products view
//! itself; stock still only moves through committed sales or an
//! explicit admin edit here.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use isoko_core::{Money, NewProduct, Product, ProductUpdate, StockStatus};

use crate::error::ApiError;
use crate::state::{AppState, View};

/// Product DTO for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub barcode: String,
    pub price: Money,
    pub stock: i64,
    pub category: String,
    pub low_stock_threshold: i64,
    pub status: StockStatus,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            barcode: p.barcode.clone(),
            price: p.price,
            stock: p.stock,
            category: p.category.clone(),
            low_stock_threshold: p.low_stock_threshold,
            status: p.stock_status(),
        }
    }
}

/// Lists the catalog in insertion order.
pub fn list_products(state: &AppState) -> Result<Vec<ProductDto>, ApiError> {
    debug!("list_products command");
    super::require_view(state, View::Products)?;

    Ok(state.store.catalog().all().iter().map(ProductDto::from).collect())
}

/// Adds a product to the catalog.
pub fn add_product(state: &mut AppState, new: NewProduct) -> Result<ProductDto, ApiError> {
    debug!(name = %new.name, barcode = %new.barcode, "add_product command");
    super::require_view(state, View::Products)?;

    let product = state.store.catalog_mut().add(new, Utc::now())?;
    Ok(ProductDto::from(&product))
}

/// Merges a partial update into a product.
pub fn update_product(
    state: &mut AppState,
    id: &str,
    update: ProductUpdate,
) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "update_product command");
    super::require_view(state, View::Products)?;

    if update.is_empty() {
        return Err(ApiError::validation("No fields to update"));
    }

    let product = state.store.catalog_mut().update(id, update, Utc::now())?;
    Ok(ProductDto::from(&product))
}

/// Removes a product from the catalog.
pub fn delete_product(state: &mut AppState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_product command");
    super::require_view(state, View::Products)?;

    state.store.catalog_mut().remove(id)?;
    Ok(())
}
