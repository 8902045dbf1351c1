//! # Demo Seed Data
//!
//! The three demo products the store opens with, embedded as a JSON
//! fixture and loaded into the catalog at startup.

use chrono::{DateTime, Utc};
use tracing::info;

use isoko_core::NewProduct;
use isoko_store::Store;

/// Demo catalog fixture. Prices are whole francs.
const DEMO_PRODUCTS_JSON: &str = r#"[
  {
    "name": "Inyama y'inka (Beef)",
    "barcode": "1234567890123",
    "price": 3500,
    "stock": 25,
    "category": "Meat",
    "low_stock_threshold": 5
  },
  {
    "name": "Amata (Milk)",
    "barcode": "2345678901234",
    "price": 800,
    "stock": 50,
    "category": "Dairy",
    "low_stock_threshold": 10
  },
  {
    "name": "Ubwoba (Bread)",
    "barcode": "3456789012345",
    "price": 500,
    "stock": 3,
    "category": "Bakery",
    "low_stock_threshold": 5
  }
]"#;

/// Parses the embedded fixture.
///
/// The fixture is compile-time constant, so a parse failure is a
/// programming error; tests cover it.
pub fn demo_products() -> Vec<NewProduct> {
    serde_json::from_str(DEMO_PRODUCTS_JSON).unwrap_or_default()
}

/// Seeds a store with the demo catalog.
pub fn seed_store(store: &mut Store, now: DateTime<Utc>) {
    let mut seeded = 0;
    for product in demo_products() {
        // Duplicate barcodes cannot occur within the fixture; any other
        // rejection would equally be a fixture bug, so just skip it.
        if store.catalog_mut().add(product, now).is_ok() {
            seeded += 1;
        }
    }
    info!(count = seeded, "Demo catalog seeded");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parses() {
        let products = demo_products();
        assert_eq!(products.len(), 3);

        let bread = &products[2];
        assert_eq!(bread.name, "Ubwoba (Bread)");
        assert_eq!(bread.barcode, "3456789012345");
        assert_eq!(bread.price.francs(), 500);
        assert_eq!(bread.stock, 3);
        assert_eq!(bread.category, "Bakery");
        assert_eq!(bread.low_stock_threshold, 5);
    }

    #[test]
    fn test_seed_store() {
        let mut store = Store::new();
        seed_store(&mut store, Utc::now());

        assert_eq!(store.catalog().len(), 3);
        assert!(store.catalog().get_by_barcode("1234567890123").is_some());
        // Seeding twice cannot duplicate barcodes
        seed_store(&mut store, Utc::now());
        assert_eq!(store.catalog().len(), 3);
    }
}
