//! # Dashboard Command
//!
//! Assembles the landing view: stat cards, restocking alerts, recent
//! sales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use isoko_core::dashboard::{self, DashboardStats};
use isoko_core::{Money, Sale};

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::{AppState, View};

/// Condensed sale row for the recent-sales card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummaryDto {
    pub id: String,
    pub cashier: String,
    pub line_count: usize,
    pub vat: Money,
    pub total: Money,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Sale> for SaleSummaryDto {
    fn from(s: &Sale) -> Self {
        SaleSummaryDto {
            id: s.id.clone(),
            cashier: s.cashier.clone(),
            line_count: s.line_count(),
            vat: s.vat,
            total: s.total,
            recorded_at: s.recorded_at,
        }
    }
}

/// The assembled dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub low_stock: Vec<ProductDto>,
    pub recent_sales: Vec<SaleSummaryDto>,
}

/// Builds the dashboard view for the current moment.
pub fn get_dashboard(state: &AppState) -> Result<DashboardView, ApiError> {
    debug!("get_dashboard command");
    super::require_view(state, View::Dashboard)?;

    let products = state.store.catalog().all();
    let sales = state.store.sales().all();
    let now = Utc::now();

    Ok(DashboardView {
        stats: dashboard::stats(products, sales, now),
        low_stock: isoko_core::inventory::low_stock(products)
            .into_iter()
            .map(ProductDto::from)
            .collect(),
        recent_sales: dashboard::recent_sales(sales)
            .into_iter()
            .map(SaleSummaryDto::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{auth, cart, sale};
    use crate::config::Config;
    use crate::seed;
    use isoko_store::Store;

    #[test]
    fn test_dashboard_after_a_sale() {
        let mut store = Store::new();
        seed::seed_store(&mut store, Utc::now());
        let mut state = AppState::new(Config::default(), store);
        auth::login(&mut state, "cashier@supermarket.rw", "password").unwrap();

        cart::add_to_cart(&mut state, "2345678901234").unwrap();
        sale::process_sale(&mut state).unwrap();

        let view = get_dashboard(&state).unwrap();
        assert_eq!(view.stats.total_products, 3);
        assert_eq!(view.stats.todays_transactions, 1);
        assert_eq!(view.stats.todays_revenue.francs(), 944); // 800 + 18%
        assert_eq!(view.stats.low_stock_count, 1); // seeded bread at 3/5
        assert_eq!(view.low_stock.len(), 1);
        assert_eq!(view.recent_sales.len(), 1);
        assert_eq!(view.recent_sales[0].cashier, "Cashier User");
    }
}
