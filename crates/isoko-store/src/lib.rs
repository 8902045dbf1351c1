//! # isoko-store: In-Memory State Store
//!
//! Holds the product catalog and the sale log for the duration of a
//! session, and owns the one compound state transition in the system:
//! committing a sale.
//!
//! ## Commit Atomicity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Store::commit_sale                               │
//! │                                                                     │
//! │  Phase 1: VALIDATE (read-only)                                      │
//! │    • cart non-empty?                                                │
//! │    • every line's product still in the catalog?                     │
//! │    • every line's quantity ≤ current stock?                         │
//! │        │                                                            │
//! │        ├── any check fails ──► reject, NOTHING has changed          │
//! │        ▼                                                            │
//! │  Phase 2: APPLY (cannot fail)                                       │
//! │    • decrement stock for every line                                 │
//! │    • append the immutable sale record                               │
//! │                                                                     │
//! │  Both updates happen or neither does; no partial state is ever      │
//! │  observable.                                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod sales;

pub use catalog::Catalog;
pub use error::{StoreError, StoreResult};
pub use sales::SaleLog;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use isoko_core::{Cart, Sale, SaleLine, TaxRate};

// =============================================================================
// Store Facade
// =============================================================================

/// The session state store: catalog + sale log.
///
/// Views borrow slices via [`Store::catalog`] and [`Store::sales`];
/// mutation goes through the catalog operations and
/// [`Store::commit_sale`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    catalog: Catalog,
    sales: SaleLog,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            catalog: Catalog::new(),
            sales: SaleLog::new(),
        }
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Write access to the catalog (add/update/remove).
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Read access to the sale log.
    pub fn sales(&self) -> &SaleLog {
        &self.sales
    }

    /// Commits the cart as a sale.
    ///
    /// Validates every line against current stock first; only when the
    /// whole cart fits does it decrement stock and append the sale.
    /// On any rejection the catalog and log are untouched. The caller
    /// clears the cart after a successful commit.
    pub fn commit_sale(
        &mut self,
        cart: &Cart,
        cashier: &str,
        rate: TaxRate,
        now: DateTime<Utc>,
    ) -> StoreResult<Sale> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        // Phase 1: validate everything before touching anything
        for line in &cart.lines {
            let product = self
                .catalog
                .get(&line.product_id)
                .ok_or_else(|| StoreError::ProductNotFound(line.product_id.clone()))?;

            if line.quantity > product.stock {
                return Err(StoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested: line.quantity,
                });
            }
        }

        // Phase 2: apply; none of these calls can fail after phase 1
        let totals = cart.totals(rate);
        let lines: Vec<SaleLine> = cart
            .lines
            .iter()
            .map(|l| SaleLine {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                unit_price: l.unit_price,
                quantity: l.quantity,
                line_total: l.line_total(),
            })
            .collect();

        for line in &lines {
            self.catalog.decrement_stock(&line.product_id, line.quantity)?;
        }

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            lines,
            subtotal: totals.subtotal,
            vat: totals.vat,
            total: totals.total,
            cashier: cashier.to_string(),
            recorded_at: now,
        };

        info!(
            id = %sale.id,
            cashier = %sale.cashier,
            total = %sale.total,
            lines = sale.line_count(),
            "Sale committed"
        );

        self.sales.append(sale.clone());
        Ok(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use isoko_core::{Money, NewProduct};

    fn seeded_store() -> Store {
        let mut store = Store::new();
        let now = Utc::now();
        store
            .catalog_mut()
            .add(
                NewProduct {
                    name: "Inyama y'inka (Beef)".to_string(),
                    barcode: "1234567890123".to_string(),
                    price: Money::from_francs(3_500),
                    stock: 25,
                    category: "Meat".to_string(),
                    low_stock_threshold: 5,
                },
                now,
            )
            .unwrap();
        store
            .catalog_mut()
            .add(
                NewProduct {
                    name: "Ubwoba (Bread)".to_string(),
                    barcode: "3456789012345".to_string(),
                    price: Money::from_francs(500),
                    stock: 3,
                    category: "Bakery".to_string(),
                    low_stock_threshold: 5,
                },
                now,
            )
            .unwrap();
        store
    }

    fn product_id(store: &Store, barcode: &str) -> String {
        store.catalog().get_by_barcode(barcode).unwrap().id.clone()
    }

    #[test]
    fn test_commit_decrements_stock_and_appends_sale() {
        let mut store = seeded_store();
        let beef = store.catalog().get_by_barcode("1234567890123").unwrap().clone();

        let mut cart = Cart::new();
        cart.add_item(&beef).unwrap();
        cart.set_quantity(&beef, 2).unwrap();

        let sale = store
            .commit_sale(&cart, "Cashier User", TaxRate::default(), Utc::now())
            .unwrap();

        // subtotal 7,000 → VAT 1,260 → total 8,260
        assert_eq!(sale.subtotal.francs(), 7_000);
        assert_eq!(sale.vat.francs(), 1_260);
        assert_eq!(sale.total.francs(), 8_260);
        assert_eq!(sale.cashier, "Cashier User");

        assert_eq!(store.sales().len(), 1);
        let beef_id = product_id(&store, "1234567890123");
        assert_eq!(store.catalog().get(&beef_id).unwrap().stock, 23);
    }

    #[test]
    fn test_commit_empty_cart_rejected() {
        let mut store = seeded_store();
        let err = store
            .commit_sale(&Cart::new(), "Cashier User", TaxRate::default(), Utc::now())
            .unwrap_err();

        assert!(matches!(err, StoreError::EmptyCart));
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_commit_rejects_whole_cart_on_any_shortfall() {
        let mut store = seeded_store();
        let beef = store.catalog().get_by_barcode("1234567890123").unwrap().clone();
        let bread = store.catalog().get_by_barcode("3456789012345").unwrap().clone();

        let mut cart = Cart::new();
        cart.add_item(&beef).unwrap();
        cart.add_item(&bread).unwrap();
        cart.set_quantity(&bread, 3).unwrap();

        // Shrink bread stock behind the cart's back
        let bread_id = bread.id.clone();
        store
            .catalog_mut()
            .update(
                &bread_id,
                isoko_core::ProductUpdate {
                    stock: Some(1),
                    ..isoko_core::ProductUpdate::default()
                },
                Utc::now(),
            )
            .unwrap();

        let err = store
            .commit_sale(&cart, "Cashier User", TaxRate::default(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, StoreError::InsufficientStock { .. }));

        // Nothing moved: no sale, beef stock untouched
        assert!(store.sales().is_empty());
        let beef_id = product_id(&store, "1234567890123");
        assert_eq!(store.catalog().get(&beef_id).unwrap().stock, 25);
        assert_eq!(store.catalog().get(&bread_id).unwrap().stock, 1);
    }

    #[test]
    fn test_stock_never_negative_across_commits() {
        let mut store = seeded_store();
        let bread_id = product_id(&store, "3456789012345");

        // Sell the bread out one unit at a time
        for _ in 0..3 {
            let bread = store.catalog().get(&bread_id).unwrap().clone();
            let mut cart = Cart::new();
            cart.add_item(&bread).unwrap();
            store
                .commit_sale(&cart, "Cashier User", TaxRate::default(), Utc::now())
                .unwrap();
        }

        let bread = store.catalog().get(&bread_id).unwrap().clone();
        assert_eq!(bread.stock, 0);

        // The shelf is empty; the cart refuses the add
        let mut cart = Cart::new();
        assert!(cart.add_item(&bread).is_err());
        assert_eq!(store.sales().len(), 3);
    }

    #[test]
    fn test_sale_snapshot_survives_catalog_edit() {
        let mut store = seeded_store();
        let beef = store.catalog().get_by_barcode("1234567890123").unwrap().clone();
        let beef_id = beef.id.clone();

        let mut cart = Cart::new();
        cart.add_item(&beef).unwrap();
        let sale = store
            .commit_sale(&cart, "Cashier User", TaxRate::default(), Utc::now())
            .unwrap();

        store
            .catalog_mut()
            .update(
                &beef_id,
                isoko_core::ProductUpdate {
                    name: Some("Renamed".to_string()),
                    price: Some(Money::from_francs(1)),
                    ..isoko_core::ProductUpdate::default()
                },
                Utc::now(),
            )
            .unwrap();

        // The recorded sale still shows the frozen snapshot
        let recorded = &store.sales().all()[0];
        assert_eq!(recorded.id, sale.id);
        assert_eq!(recorded.lines[0].name, "Inyama y'inka (Beef)");
        assert_eq!(recorded.lines[0].unit_price.francs(), 3_500);
    }

    #[test]
    fn test_commit_rejects_vanished_product() {
        let mut store = seeded_store();
        let beef = store.catalog().get_by_barcode("1234567890123").unwrap().clone();

        let mut cart = Cart::new();
        cart.add_item(&beef).unwrap();
        store.catalog_mut().remove(&beef.id).unwrap();

        let err = store
            .commit_sale(&cart, "Cashier User", TaxRate::default(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert!(store.sales().is_empty());
    }
}
