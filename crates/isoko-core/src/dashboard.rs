//! # Dashboard Module
//!
//! The landing-view projection: catalog size, today's trade, and
//! restocking alerts. Pure functions over catalog + sale log + `now`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::reports::{self, ReportWindow};
use crate::types::{Product, Sale};
use crate::{inventory, RECENT_SALES_LIMIT};

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Products in the catalog.
    pub total_products: usize,
    /// Transactions completed today.
    pub todays_transactions: usize,
    /// Revenue generated today (VAT-inclusive).
    pub todays_revenue: Money,
    /// Products low on stock.
    pub low_stock_count: usize,
}

/// Computes the dashboard card figures.
pub fn stats(products: &[Product], sales: &[Sale], now: DateTime<Utc>) -> DashboardStats {
    let today = reports::summary(sales, ReportWindow::Today, now);

    DashboardStats {
        total_products: products.len(),
        todays_transactions: today.transactions,
        todays_revenue: today.revenue,
        low_stock_count: inventory::low_stock(products).len(),
    }
}

/// The latest sales for the "Recent Sales" card, newest first.
pub fn recent_sales(sales: &[Sale]) -> Vec<&Sale> {
    reports::recent_sales(sales, RECENT_SALES_LIMIT)
}
