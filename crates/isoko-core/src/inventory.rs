//! # Inventory Module
//!
//! Pure filter + sort projections over the catalog. Nothing here
//! mutates a product; callers pass the catalog slice and get borrowed
//! views back.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, StockStatus};

// =============================================================================
// Filter & Sort
// =============================================================================

/// Sort order for the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventorySort {
    /// Alphabetical by name (case-insensitive).
    #[default]
    Name,
    /// Stock count, lowest first.
    Stock,
    /// Unit price, lowest first.
    Price,
    /// Alphabetical by category (case-insensitive).
    Category,
}

/// Inventory view parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFilter {
    /// Substring match on name (case-insensitive) or barcode.
    pub query: String,
    /// Exact category filter; `None` means all categories.
    pub category: Option<String>,
    /// Sort order.
    pub sort: InventorySort,
}

/// Applies the filter and sort, returning borrowed rows.
pub fn filter_products<'a>(products: &'a [Product], filter: &InventoryFilter) -> Vec<&'a Product> {
    let query = filter.query.trim().to_lowercase();

    let mut rows: Vec<&Product> = products
        .iter()
        .filter(|p| {
            let matches_query = query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.barcode.contains(query.as_str());
            let matches_category = filter
                .category
                .as_deref()
                .map_or(true, |c| p.category == c);
            matches_query && matches_category
        })
        .collect();

    match filter.sort {
        InventorySort::Name => {
            rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        InventorySort::Stock => rows.sort_by_key(|p| p.stock),
        InventorySort::Price => rows.sort_by_key(|p| p.price),
        InventorySort::Category => {
            rows.sort_by(|a, b| a.category.to_lowercase().cmp(&b.category.to_lowercase()))
        }
    }

    rows
}

// =============================================================================
// Summary & Stock Lists
// =============================================================================

/// Headline inventory figures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Products in the catalog.
    pub total_products: usize,
    /// Σ price × stock across the catalog.
    pub total_value: Money,
    /// Products low on stock (0 < stock ≤ threshold).
    pub low_stock: usize,
    /// Products with zero stock.
    pub out_of_stock: usize,
}

/// Computes the headline figures for the whole catalog.
pub fn summary(products: &[Product]) -> InventorySummary {
    InventorySummary {
        total_products: products.len(),
        total_value: products.iter().map(|p| p.stock_value()).sum(),
        low_stock: low_stock(products).len(),
        out_of_stock: out_of_stock(products).len(),
    }
}

/// Products flagged for restocking: stock at or below the threshold but
/// not zero. Zero-stock products belong to [`out_of_stock`] instead.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.stock_status() == StockStatus::LowStock)
        .collect()
}

/// Products with no units left.
pub fn out_of_stock(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.stock_status() == StockStatus::OutOfStock)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, barcode: &str, price: i64, stock: i64, category: &str) -> Product {
        Product {
            id: format!("id-{}", barcode),
            name: name.to_string(),
            barcode: barcode.to_string(),
            price: Money::from_francs(price),
            stock,
            category: category.to_string(),
            low_stock_threshold: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn demo_catalog() -> Vec<Product> {
        vec![
            product("Inyama y'inka (Beef)", "1234567890123", 3_500, 25, "Meat"),
            product("Amata (Milk)", "2345678901234", 800, 50, "Dairy"),
            product("Ubwoba (Bread)", "3456789012345", 500, 3, "Bakery"),
        ]
    }

    #[test]
    fn test_filter_by_name_substring() {
        let catalog = demo_catalog();
        let filter = InventoryFilter {
            query: "milk".to_string(),
            ..InventoryFilter::default()
        };

        let rows = filter_products(&catalog, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Amata (Milk)");
    }

    #[test]
    fn test_filter_by_barcode_fragment() {
        let catalog = demo_catalog();
        let filter = InventoryFilter {
            query: "345678901234".to_string(),
            ..InventoryFilter::default()
        };

        // Fragment occurs in both the Milk and Bread barcodes
        let rows = filter_products(&catalog, &filter);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = demo_catalog();
        let filter = InventoryFilter {
            category: Some("Bakery".to_string()),
            ..InventoryFilter::default()
        };

        let rows = filter_products(&catalog, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ubwoba (Bread)");
    }

    #[test]
    fn test_sort_orders() {
        let catalog = demo_catalog();

        let by_name = filter_products(&catalog, &InventoryFilter::default());
        assert_eq!(by_name[0].name, "Amata (Milk)");

        let by_stock = filter_products(
            &catalog,
            &InventoryFilter {
                sort: InventorySort::Stock,
                ..InventoryFilter::default()
            },
        );
        assert_eq!(by_stock[0].name, "Ubwoba (Bread)"); // stock 3

        let by_price = filter_products(
            &catalog,
            &InventoryFilter {
                sort: InventorySort::Price,
                ..InventoryFilter::default()
            },
        );
        assert_eq!(by_price[0].price.francs(), 500);

        let by_category = filter_products(
            &catalog,
            &InventoryFilter {
                sort: InventorySort::Category,
                ..InventoryFilter::default()
            },
        );
        assert_eq!(by_category[0].category, "Bakery");
    }

    #[test]
    fn test_summary_and_stock_lists() {
        let mut catalog = demo_catalog();
        catalog.push(product("Isukari (Sugar)", "4567890123456", 1_200, 0, "Pantry"));

        let s = summary(&catalog);
        assert_eq!(s.total_products, 4);
        assert_eq!(
            s.total_value.francs(),
            3_500 * 25 + 800 * 50 + 500 * 3 + 1_200 * 0
        );
        assert_eq!(s.low_stock, 1);
        assert_eq!(s.out_of_stock, 1);

        // stock=3, threshold=5 → low-stock list
        let low: Vec<&str> = low_stock(&catalog).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(low, vec!["Ubwoba (Bread)"]);

        // stock=0 → out-of-stock list, not low-stock
        let out: Vec<&str> = out_of_stock(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(out, vec!["Isukari (Sugar)"]);
    }
}
