//! # Report Command
//!
//! Assembles the sales report for a window: headline figures, top
//! products, cashier performance, the daily trend, and the latest
//! transactions in the window. Admin only, like the Reports view.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use isoko_core::reports::{
    self, CashierPerformance, DailyRevenue, ProductPerformance, ReportSummary, ReportWindow,
};

use crate::commands::dashboard::SaleSummaryDto;
use crate::error::ApiError;
use crate::state::{AppState, View};

/// How many transactions the report table lists.
const REPORT_TRANSACTIONS_LIMIT: usize = 10;

/// The assembled report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub window: ReportWindow,
    pub summary: ReportSummary,
    pub top_products: Vec<ProductPerformance>,
    pub cashiers: Vec<CashierPerformance>,
    pub daily: Vec<DailyRevenue>,
    /// Latest transactions in the window, newest first.
    pub transactions: Vec<SaleSummaryDto>,
}

/// Builds the report for a window, evaluated at the current moment.
pub fn get_report(state: &AppState, window: ReportWindow) -> Result<ReportView, ApiError> {
    debug!(window = window.label(), "get_report command");
    super::require_view(state, View::Reports)?;

    let sales = state.store.sales().all();
    let now = Utc::now();

    let transactions = reports::filter_sales(sales, window, now)
        .into_iter()
        .rev()
        .take(REPORT_TRANSACTIONS_LIMIT)
        .map(SaleSummaryDto::from)
        .collect();

    Ok(ReportView {
        window,
        summary: reports::summary(sales, window, now),
        top_products: reports::top_products(sales, window, now),
        cashiers: reports::cashier_performance(sales, window, now),
        daily: reports::daily_revenue(sales, window, now),
        transactions,
    })
}
