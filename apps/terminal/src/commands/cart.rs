//! # Cart Commands
//!
//! Cart manipulation for the point-of-sale view. Items enter by
//! barcode (the scanner path) or from a product search; quantity edits
//! and removals are keyed by barcode too.
//!
//! Every command returns the refreshed [`CartView`] so the renderer can
//! redraw the cart panel after each action.

use serde::{Deserialize, Serialize};
use tracing::debug;

use isoko_core::{CartTotals, Money, Product};

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::AppState;

/// One rendered cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// Cart contents plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineDto>,
    pub totals: CartTotals,
}

fn cart_view(state: &AppState) -> CartView {
    CartView {
        lines: state
            .cart
            .lines
            .iter()
            .map(|l| CartLineDto {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                unit_price: l.unit_price,
                quantity: l.quantity,
                line_total: l.line_total(),
            })
            .collect(),
        totals: state.cart.totals(state.config.vat_rate()),
    }
}

fn find_by_barcode<'a>(state: &'a AppState, barcode: &str) -> Result<&'a Product, ApiError> {
    state
        .store
        .catalog()
        .get_by_barcode(barcode.trim())
        .ok_or_else(|| ApiError::not_found("Product", barcode.trim()))
}

/// Returns the current cart contents.
pub fn get_cart(state: &AppState) -> CartView {
    debug!("get_cart command");
    cart_view(state)
}

/// Adds one unit of the product with this barcode.
///
/// The scanner path: a barcode miss is "Product not found", a zero
/// stock shelf is "out of stock", an exhausted shelf is "insufficient
/// stock". In every rejection the cart is unchanged.
pub fn add_to_cart(state: &mut AppState, barcode: &str) -> Result<CartView, ApiError> {
    debug!(barcode = %barcode, "add_to_cart command");

    let product = find_by_barcode(state, barcode)?.clone();
    state.cart.add_item(&product)?;
    Ok(cart_view(state))
}

/// Sets the line quantity for the product with this barcode.
/// Zero (or less) removes the line.
pub fn set_quantity(state: &mut AppState, barcode: &str, quantity: i64) -> Result<CartView, ApiError> {
    debug!(barcode = %barcode, quantity = %quantity, "set_quantity command");

    let product = find_by_barcode(state, barcode)?.clone();
    state.cart.set_quantity(&product, quantity)?;
    Ok(cart_view(state))
}

/// Removes the line for the product with this barcode.
pub fn remove_from_cart(state: &mut AppState, barcode: &str) -> Result<CartView, ApiError> {
    debug!(barcode = %barcode, "remove_from_cart command");

    let product_id = find_by_barcode(state, barcode)?.id.clone();
    state.cart.remove_item(&product_id)?;
    Ok(cart_view(state))
}

/// Empties the cart (sale abandoned).
pub fn clear_cart(state: &mut AppState) -> CartView {
    debug!("clear_cart command");
    state.cart.clear();
    cart_view(state)
}

/// Case-insensitive product search over name and barcode, for picking
/// items without a scanner.
pub fn search_products(state: &AppState, query: &str) -> Result<Vec<ProductDto>, ApiError> {
    debug!(query = %query, "search_products command");

    let query = isoko_core::validation::validate_search_query(query)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    Ok(state
        .store
        .catalog()
        .search(&query)
        .into_iter()
        .map(ProductDto::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth;
    use crate::config::Config;
    use crate::error::ErrorCode;
    use crate::seed;
    use chrono::Utc;
    use isoko_store::Store;

    const BREAD: &str = "3456789012345"; // stock 3
    const MILK: &str = "2345678901234"; // stock 50

    fn state_with_session() -> AppState {
        let mut store = Store::new();
        seed::seed_store(&mut store, Utc::now());
        let mut state = AppState::new(Config::default(), store);
        auth::login(&mut state, "cashier@supermarket.rw", "password").unwrap();
        state
    }

    #[test]
    fn test_add_and_totals() {
        let mut state = state_with_session();

        add_to_cart(&mut state, MILK).unwrap();
        let view = add_to_cart(&mut state, MILK).unwrap();

        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);
        // 1,600 + 18% VAT = 1,888
        assert_eq!(view.totals.subtotal.francs(), 1_600);
        assert_eq!(view.totals.vat.francs(), 288);
        assert_eq!(view.totals.total.francs(), 1_888);
    }

    #[test]
    fn test_unknown_barcode() {
        let mut state = state_with_session();
        let err = add_to_cart(&mut state, "0000000000000").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_stock_limits_via_barcode_path() {
        let mut state = state_with_session();

        for _ in 0..3 {
            add_to_cart(&mut state, BREAD).unwrap();
        }
        let err = add_to_cart(&mut state, BREAD).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = set_quantity(&mut state, BREAD, 4).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(state.cart.quantity_of(
            &state.store.catalog().get_by_barcode(BREAD).unwrap().id
        ), 3);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut state = state_with_session();
        add_to_cart(&mut state, MILK).unwrap();

        let view = set_quantity(&mut state, MILK, 0).unwrap();
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut state = state_with_session();
        add_to_cart(&mut state, MILK).unwrap();
        add_to_cart(&mut state, BREAD).unwrap();

        let view = remove_from_cart(&mut state, MILK).unwrap();
        assert_eq!(view.lines.len(), 1);

        let view = clear_cart(&mut state);
        assert!(view.lines.is_empty());
        assert!(view.totals.total.is_zero());
    }

    #[test]
    fn test_search() {
        let state = state_with_session();

        assert_eq!(search_products(&state, "milk").unwrap().len(), 1);
        assert_eq!(search_products(&state, "").unwrap().len(), 3);
        assert!(search_products(&state, &"x".repeat(200)).is_err());
    }
}
