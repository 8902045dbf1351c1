//! # Domain Types
//!
//! Core domain types used throughout Isoko POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │      Sale      │   │      User      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  id (UUID)     │   │  id            │      │
//! │  │  barcode       │   │  lines         │   │  name          │      │
//! │  │  name          │   │  subtotal/vat/ │   │  role          │      │
//! │  │  price         │   │    total       │   │  email         │      │
//! │  │  stock         │   │  cashier       │   └────────────────┘      │
//! │  │  category      │   │  recorded_at   │                           │
//! │  └────────────────┘   └────────────────┘                           │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    TaxRate     │   │  StockStatus   │   │      Role      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  bps (u32)     │   │  InStock       │   │  Admin         │      │
//! │  │  1800 = 18%    │   │  LowStock      │   │  Cashier       │      │
//! │  └────────────────┘   │  OutOfStock    │   └────────────────┘      │
//! │                       └────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 1800 bps = 18% (the fixed VAT rate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::VAT_RATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned by the catalog.
    pub id: String,

    /// Display name shown to the cashier and in every view.
    pub name: String,

    /// Scannable barcode (8-13 digits), unique within the catalog.
    pub barcode: String,

    /// Unit price. Never negative.
    pub price: Money,

    /// Current stock count. Never negative; decremented only by a
    /// committed sale.
    pub stock: i64,

    /// Category label (e.g. "Dairy", "Bakery").
    pub category: String,

    /// Stock level at or below which the product is flagged for
    /// restocking.
    pub low_stock_threshold: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Classifies the current stock level.
    ///
    /// Zero stock is `OutOfStock`, never `LowStock` - the threshold test
    /// only applies to products that still have units on the shelf.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Checks whether `quantity` units can currently be sold.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity > 0 && self.stock >= quantity
    }

    /// Value of the units on the shelf (price × stock).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.stock)
    }
}

/// Input for creating a product. The catalog assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub barcode: String,
    pub price: Money,
    pub stock: i64,
    pub category: String,
    pub low_stock_threshold: i64,
}

/// Partial update for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub low_stock_threshold: Option<i64>,
}

impl ProductUpdate {
    /// True when no field is set (the update would be a no-op).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.barcode.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
            && self.low_stock_threshold.is_none()
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Shelf status of a product, derived from stock and threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Stock above the low-stock threshold.
    InStock,
    /// Stock at or below the threshold, but not zero.
    LowStock,
    /// No units left.
    OutOfStock,
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a committed sale.
///
/// Uses the snapshot pattern: name and unit price are frozen at commit
/// time, so later catalog edits never rewrite sales history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    /// Product this line was sold against.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Unit price at time of sale (frozen).
    pub unit_price: Money,

    /// Quantity sold.
    pub quantity: i64,

    /// Line total before VAT (unit_price × quantity).
    pub line_total: Money,
}

/// A committed sale transaction. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Line items, in the order they entered the cart.
    pub lines: Vec<SaleLine>,

    /// Sum of line totals, before VAT.
    pub subtotal: Money,

    /// VAT collected (subtotal × fixed rate).
    pub vat: Money,

    /// subtotal + vat.
    pub total: Money,

    /// Display name of the cashier who rang the sale up.
    pub cashier: String,

    /// When the sale was committed.
    pub recorded_at: DateTime<Utc>,
}

impl Sale {
    /// Number of distinct line items.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// User
// =============================================================================

/// Access role. Used only for view gating, not real security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sees every view, manages the catalog.
    Admin,
    /// Sees dashboard, point of sale, and inventory only.
    Cashier,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Cashier => f.write_str("cashier"),
        }
    }
}

/// A demo account holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
