//! # Sale Commands
//!
//! The commit step: turn the cart into an immutable sale, move stock,
//! clear the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use isoko_core::{Money, Sale};

use crate::error::ApiError;
use crate::state::AppState;

/// Receipt data for rendering after a committed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    pub sale_id: String,
    pub store_name: String,
    pub cashier: String,
    pub recorded_at: DateTime<Utc>,
    pub items: Vec<ReceiptItem>,
    pub subtotal: Money,
    pub vat: Money,
    pub total: Money,
}

/// One receipt line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

fn receipt(sale: &Sale, store_name: &str) -> ReceiptDto {
    ReceiptDto {
        sale_id: sale.id.clone(),
        store_name: store_name.to_string(),
        cashier: sale.cashier.clone(),
        recorded_at: sale.recorded_at,
        items: sale
            .lines
            .iter()
            .map(|l| ReceiptItem {
                name: l.name.clone(),
                quantity: l.quantity,
                unit_price: l.unit_price,
                line_total: l.line_total,
            })
            .collect(),
        subtotal: sale.subtotal,
        vat: sale.vat,
        total: sale.total,
    }
}

/// Commits the cart as a sale.
///
/// Stock decrement and sale append happen as one unit inside the store;
/// the cart is cleared only after the commit succeeds, so a rejection
/// leaves both the catalog and the cart exactly as they were.
pub fn process_sale(state: &mut AppState) -> Result<ReceiptDto, ApiError> {
    debug!("process_sale command");

    let cashier = super::current_user(state)?.name.clone();
    let sale = state.store.commit_sale(
        &state.cart,
        &cashier,
        state.config.vat_rate(),
        Utc::now(),
    )?;
    state.cart.clear();

    info!(sale_id = %sale.id, total = %sale.total, "Sale processed");
    Ok(receipt(&sale, &state.config.store_name))
}
