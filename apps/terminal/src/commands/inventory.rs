//! # Inventory Command
//!
//! The stock-monitoring view: summary cards, restocking alerts, and the
//! filterable, sortable product table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use isoko_core::inventory::{self, InventoryFilter, InventorySummary};
use isoko_core::{Money, Product, StockStatus};

use crate::error::ApiError;
use crate::state::{AppState, View};

/// One inventory table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRowDto {
    pub name: String,
    pub category: String,
    pub barcode: String,
    pub price: Money,
    pub stock: i64,
    /// price × stock for this row.
    pub value: Money,
    pub status: StockStatus,
}

impl From<&Product> for InventoryRowDto {
    fn from(p: &Product) -> Self {
        InventoryRowDto {
            name: p.name.clone(),
            category: p.category.clone(),
            barcode: p.barcode.clone(),
            price: p.price,
            stock: p.stock,
            value: p.stock_value(),
            status: p.stock_status(),
        }
    }
}

/// The assembled inventory view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub summary: InventorySummary,
    /// Names of products needing restocking.
    pub low_stock: Vec<String>,
    /// Categories available for filtering.
    pub categories: Vec<String>,
    /// Rows after filter + sort.
    pub rows: Vec<InventoryRowDto>,
}

/// Builds the inventory view.
///
/// The summary and alerts always cover the whole catalog; only the
/// table honors the filter.
pub fn get_inventory(state: &AppState, filter: &InventoryFilter) -> Result<InventoryView, ApiError> {
    debug!(query = %filter.query, "get_inventory command");
    super::require_view(state, View::Inventory)?;

    let products = state.store.catalog().all();

    Ok(InventoryView {
        summary: inventory::summary(products),
        low_stock: inventory::low_stock(products)
            .into_iter()
            .map(|p| p.name.clone())
            .collect(),
        categories: state.store.catalog().categories(),
        rows: inventory::filter_products(products, filter)
            .into_iter()
            .map(InventoryRowDto::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth;
    use crate::config::Config;
    use crate::seed;
    use chrono::Utc;
    use isoko_core::inventory::InventorySort;
    use isoko_store::Store;

    fn state_with_session() -> AppState {
        let mut store = Store::new();
        seed::seed_store(&mut store, Utc::now());
        let mut state = AppState::new(Config::default(), store);
        auth::login(&mut state, "cashier@supermarket.rw", "password").unwrap();
        state
    }

    #[test]
    fn test_full_view() {
        let state = state_with_session();
        let view = get_inventory(&state, &InventoryFilter::default()).unwrap();

        assert_eq!(view.summary.total_products, 3);
        assert_eq!(
            view.summary.total_value.francs(),
            3_500 * 25 + 800 * 50 + 500 * 3
        );
        assert_eq!(view.low_stock, vec!["Ubwoba (Bread)"]);
        assert_eq!(view.categories, vec!["Meat", "Dairy", "Bakery"]);
        assert_eq!(view.rows.len(), 3);
        // Default sort is by name
        assert_eq!(view.rows[0].name, "Amata (Milk)");
    }

    #[test]
    fn test_filter_and_sort_only_affect_rows() {
        let state = state_with_session();
        let view = get_inventory(
            &state,
            &InventoryFilter {
                query: "bread".to_string(),
                sort: InventorySort::Stock,
                ..InventoryFilter::default()
            },
        )
        .unwrap();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].status, StockStatus::LowStock);
        // Summary still covers the whole catalog
        assert_eq!(view.summary.total_products, 3);
    }
}
