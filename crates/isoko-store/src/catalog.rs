//! # Catalog
//!
//! The current set of sellable products. Mutation happens only through
//! [`Catalog::add`], [`Catalog::update`] and [`Catalog::remove`]; stock
//! decrements additionally flow through the sale commit on the `Store`
//! facade.
//!
//! ## Invariants
//! - `id` and `barcode` are unique within the catalog
//! - `price`, `stock` and `low_stock_threshold` are never negative
//! - Insertion order is preserved (views re-sort as needed)

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use isoko_core::validation::{
    validate_barcode, validate_category, validate_price, validate_product_name, validate_stock,
    validate_threshold,
};
use isoko_core::{NewProduct, Product, ProductUpdate};

use crate::error::{StoreError, StoreResult};

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds a product, assigning a fresh id and timestamps.
    ///
    /// ## Rejections
    /// - Any field failing validation
    /// - A barcode already present in the catalog
    pub fn add(&mut self, new: NewProduct, now: DateTime<Utc>) -> StoreResult<Product> {
        validate_product_name(&new.name)?;
        validate_barcode(&new.barcode)?;
        validate_category(&new.category)?;
        validate_price(new.price.francs())?;
        validate_stock(new.stock)?;
        validate_threshold(new.low_stock_threshold)?;

        let barcode = new.barcode.trim().to_string();
        if self.get_by_barcode(&barcode).is_some() {
            return Err(StoreError::DuplicateBarcode(barcode));
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            barcode,
            price: new.price,
            stock: new.stock,
            category: new.category.trim().to_string(),
            low_stock_threshold: new.low_stock_threshold,
            created_at: now,
            updated_at: now,
        };

        info!(id = %product.id, name = %product.name, "Product added");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Merges the set fields of `update` into the matching product.
    ///
    /// Changed fields are re-validated; changing the barcode to one
    /// carried by a different product is rejected. `updated_at` is
    /// bumped on success.
    pub fn update(
        &mut self,
        id: &str,
        update: ProductUpdate,
        now: DateTime<Utc>,
    ) -> StoreResult<Product> {
        // Validate before mutating so a failed update is a clean no-op
        if let Some(name) = &update.name {
            validate_product_name(name)?;
        }
        if let Some(barcode) = &update.barcode {
            validate_barcode(barcode)?;
            let barcode = barcode.trim();
            if self.products.iter().any(|p| p.id != id && p.barcode == barcode) {
                return Err(StoreError::DuplicateBarcode(barcode.to_string()));
            }
        }
        if let Some(category) = &update.category {
            validate_category(category)?;
        }
        if let Some(price) = update.price {
            validate_price(price.francs())?;
        }
        if let Some(stock) = update.stock {
            validate_stock(stock)?;
        }
        if let Some(threshold) = update.low_stock_threshold {
            validate_threshold(threshold)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        if let Some(name) = update.name {
            product.name = name.trim().to_string();
        }
        if let Some(barcode) = update.barcode {
            product.barcode = barcode.trim().to_string();
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(stock) = update.stock {
            product.stock = stock;
        }
        if let Some(category) = update.category {
            product.category = category.trim().to_string();
        }
        if let Some(threshold) = update.low_stock_threshold {
            product.low_stock_threshold = threshold;
        }
        product.updated_at = now;

        info!(id = %product.id, name = %product.name, "Product updated");
        Ok(product.clone())
    }

    /// Removes a product by id.
    pub fn remove(&mut self, id: &str) -> StoreResult<()> {
        let initial_len = self.products.len();
        self.products.retain(|p| p.id != id);

        if self.products.len() == initial_len {
            return Err(StoreError::ProductNotFound(id.to_string()));
        }

        info!(id = %id, "Product removed");
        Ok(())
    }

    /// Decrements stock for a product. Internal to the sale commit,
    /// which has already validated availability for every line.
    pub(crate) fn decrement_stock(&mut self, id: &str, quantity: i64) -> StoreResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        debug_assert!(product.stock >= quantity);
        product.stock -= quantity;
        Ok(())
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Gets a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Gets a product by exact barcode.
    pub fn get_by_barcode(&self, barcode: &str) -> Option<&Product> {
        debug!(barcode = %barcode, "Barcode lookup");
        self.products.iter().find(|p| p.barcode == barcode)
    }

    /// Case-insensitive substring search over name and barcode.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.products.iter().collect();
        }

        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query) || p.barcode.contains(&query))
            .collect()
    }

    /// All products, in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories, in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for p in &self.products {
            if !categories.contains(&p.category) {
                categories.push(p.category.clone());
            }
        }
        categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
