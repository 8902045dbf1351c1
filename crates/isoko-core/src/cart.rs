//! # Cart Module
//!
//! The in-progress, uncommitted set of line items for one sale.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Cart Lifecycle                               │
//! │                                                                     │
//! │  ┌──────────┐      ┌──────────────┐      ┌──────────────┐          │
//! │  │  Empty   │─────►│ Accumulating │─────►│  Committed   │          │
//! │  └──────────┘      └──────────────┘      └──────────────┘          │
//! │                         │                      │                    │
//! │                    add_item                commit_sale              │
//! │                    set_quantity            (isoko-store)            │
//! │                    remove_item                 │                    │
//! │                         │                      ▼                    │
//! │                    clear ◄──────────── cart cleared, next sale      │
//! │                                        starts empty                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id; order is encounter order
//! - A line's quantity never exceeds the product's current catalog stock
//! - At most `MAX_CART_ITEMS` lines, at most `MAX_ITEM_QUANTITY` per line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, TaxRate};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// A line item in the cart.
///
/// Name and price are frozen copies taken when the product first enters
/// the cart, so the display stays consistent even if the catalog record
/// is edited underneath it. Stock checks always go back to the live
/// catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id (for catalog lookup).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total before VAT (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cart {
    /// Line items, in the order products first entered the cart.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product, or increments its existing line.
    ///
    /// ## Behavior
    /// - Product stock is 0: rejected with `OutOfStock`
    /// - Line already at the product's stock level: rejected with
    ///   `InsufficientStock`
    /// - Otherwise: quantity goes up by exactly 1 (a new line starts
    ///   at 1), freezing name and price on first add
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        if product.stock <= 0 {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.find_line_mut(&product.id) {
            let requested = line.quantity + 1;
            if requested > product.stock {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested,
                });
            }
            if requested > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = requested;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.lines.push(CartLine::from_product(product, 1));
        Ok(())
    }

    /// Sets the quantity of a product's line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - `quantity` above the product's current stock: rejected with
    ///   `InsufficientStock`, line unchanged
    /// - Product has no line: rejected with `NotInCart`
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return self.remove_item(&product.id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        match self.find_line_mut(&product.id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::NotInCart(product.id.clone())),
        }
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == initial_len {
            Err(CoreError::NotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines (sale committed or abandoned).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Quantity currently carted for a product (0 if absent).
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// Subtotal before VAT.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Computes the totals summary at the given VAT rate.
    pub fn totals(&self, rate: TaxRate) -> CartTotals {
        let subtotal = self.subtotal();
        let vat = subtotal.calculate_vat(rate);
        CartTotals {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            vat,
            total: subtotal + vat,
        }
    }

    fn find_line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals summary for display and for the sale record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub vat: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
