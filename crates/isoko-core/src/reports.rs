//! # Reports Module
//!
//! Pure aggregation over the sale log. Every function takes the sales
//! slice and an explicit `now`; nothing here reads the clock or mutates
//! state, so each projection is a deterministic function of its inputs.
//!
//! ## Aggregations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  sale log ──► window filter ──┬──► summary (revenue, count, avg,    │
//! │                               │    VAT collected)                   │
//! │                               ├──► top 5 products by line revenue   │
//! │                               ├──► per-cashier revenue/transactions │
//! │                               └──► daily revenue (last 7 dates)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Sale;

// =============================================================================
// Report Window
// =============================================================================

/// Time window a report is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportWindow {
    /// Sales recorded on `now`'s calendar date.
    Today,
    /// Sales recorded within the last 7 calendar days.
    LastWeek,
    /// Sales recorded within the last 30 calendar days.
    LastMonth,
    /// Every sale in the log.
    AllTime,
}

impl ReportWindow {
    /// Checks whether a sale timestamp falls inside this window.
    ///
    /// Windows are calendar-based: `Today` means the same calendar date
    /// as `now`, so a sale from yesterday evening is excluded even if it
    /// is less than 24 hours old.
    pub fn contains(&self, recorded_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let sale_date = recorded_at.date_naive();
        let today = now.date_naive();

        match self {
            ReportWindow::Today => sale_date == today,
            ReportWindow::LastWeek => sale_date >= today - Duration::days(7),
            ReportWindow::LastMonth => sale_date >= today - Duration::days(30),
            ReportWindow::AllTime => true,
        }
    }

    /// Human-readable window label.
    pub fn label(&self) -> &'static str {
        match self {
            ReportWindow::Today => "Today",
            ReportWindow::LastWeek => "This Week",
            ReportWindow::LastMonth => "This Month",
            ReportWindow::AllTime => "All Time",
        }
    }
}

/// Filters the sale log down to the window.
pub fn filter_sales<'a>(
    sales: &'a [Sale],
    window: ReportWindow,
    now: DateTime<Utc>,
) -> Vec<&'a Sale> {
    sales
        .iter()
        .filter(|s| window.contains(s.recorded_at, now))
        .collect()
}

// =============================================================================
// Summary
// =============================================================================

/// Headline figures for the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of sale totals (VAT-inclusive).
    pub revenue: Money,
    /// Number of sales in the window.
    pub transactions: usize,
    /// Revenue divided by transaction count (zero when empty).
    pub average_transaction: Money,
    /// Sum of VAT amounts.
    pub vat_collected: Money,
}

/// Computes the headline figures for a window.
pub fn summary(sales: &[Sale], window: ReportWindow, now: DateTime<Utc>) -> ReportSummary {
    let in_window = filter_sales(sales, window, now);
    let revenue: Money = in_window.iter().map(|s| s.total).sum();
    let vat_collected: Money = in_window.iter().map(|s| s.vat).sum();
    let transactions = in_window.len();

    ReportSummary {
        revenue,
        transactions,
        average_transaction: revenue.divide_count(transactions),
        vat_collected,
    }
}

// =============================================================================
// Top Products
// =============================================================================

/// Revenue and units for one product across the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPerformance {
    pub product_id: String,
    pub name: String,
    /// Units sold.
    pub units: i64,
    /// Line revenue (unit price × quantity, before VAT).
    pub revenue: Money,
}

/// Top 5 products by line revenue.
///
/// Accumulation walks the sale log in order, so the result of the
/// stable descending sort keeps first-appearance order for products
/// with equal revenue.
pub fn top_products(
    sales: &[Sale],
    window: ReportWindow,
    now: DateTime<Utc>,
) -> Vec<ProductPerformance> {
    let mut perf: Vec<ProductPerformance> = Vec::new();

    for sale in filter_sales(sales, window, now) {
        for line in &sale.lines {
            match perf.iter_mut().find(|p| p.product_id == line.product_id) {
                Some(p) => {
                    p.units += line.quantity;
                    p.revenue += line.line_total;
                }
                None => perf.push(ProductPerformance {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    units: line.quantity,
                    revenue: line.line_total,
                }),
            }
        }
    }

    // sort_by is stable: ties keep accumulation (first-appearance) order
    perf.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    perf.truncate(5);
    perf
}

// =============================================================================
// Cashier Performance
// =============================================================================

/// Revenue and transaction count for one cashier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashierPerformance {
    pub name: String,
    pub transactions: usize,
    /// Sum of sale totals (VAT-inclusive).
    pub revenue: Money,
}

/// Per-cashier figures, sorted descending by revenue.
pub fn cashier_performance(
    sales: &[Sale],
    window: ReportWindow,
    now: DateTime<Utc>,
) -> Vec<CashierPerformance> {
    let mut perf: Vec<CashierPerformance> = Vec::new();

    for sale in filter_sales(sales, window, now) {
        match perf.iter_mut().find(|c| c.name == sale.cashier) {
            Some(c) => {
                c.transactions += 1;
                c.revenue += sale.total;
            }
            None => perf.push(CashierPerformance {
                name: sale.cashier.clone(),
                transactions: 1,
                revenue: sale.total,
            }),
        }
    }

    perf.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    perf
}

// =============================================================================
// Daily Revenue
// =============================================================================

/// Revenue for one calendar date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Money,
}

/// Revenue per distinct sale date within the window, ascending by date,
/// truncated to the most recent 7 dates.
pub fn daily_revenue(
    sales: &[Sale],
    window: ReportWindow,
    now: DateTime<Utc>,
) -> Vec<DailyRevenue> {
    let mut days: Vec<DailyRevenue> = Vec::new();

    for sale in filter_sales(sales, window, now) {
        let date = sale.recorded_at.date_naive();
        match days.iter_mut().find(|d| d.date == date) {
            Some(d) => d.revenue += sale.total,
            None => days.push(DailyRevenue {
                date,
                revenue: sale.total,
            }),
        }
    }

    days.sort_by_key(|d| d.date);
    if days.len() > 7 {
        days.drain(..days.len() - 7);
    }
    days
}

// =============================================================================
// Recent Sales
// =============================================================================

/// The latest `limit` sales, newest first.
pub fn recent_sales(sales: &[Sale], limit: usize) -> Vec<&Sale> {
    sales.iter().rev().take(limit).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SaleLine;
    use chrono::TimeZone;

    fn ts(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn sale(
        id: &str,
        cashier: &str,
        recorded_at: DateTime<Utc>,
        lines: Vec<(&str, &str, i64, i64)>,
    ) -> Sale {
        let lines: Vec<SaleLine> = lines
            .into_iter()
            .map(|(pid, name, price, qty)| SaleLine {
                product_id: pid.to_string(),
                name: name.to_string(),
                unit_price: Money::from_francs(price),
                quantity: qty,
                line_total: Money::from_francs(price * qty),
            })
            .collect();
        let subtotal: Money = lines.iter().map(|l| l.line_total).sum();
        let vat = subtotal.calculate_vat(crate::types::TaxRate::default());
        Sale {
            id: id.to_string(),
            lines,
            subtotal,
            vat,
            total: subtotal + vat,
            cashier: cashier.to_string(),
            recorded_at,
        }
    }

    #[test]
    fn test_today_window_is_calendar_based() {
        let now = ts(2024, 6, 15, 8);
        // 23:00 the previous day: under 24h ago, but a prior calendar date
        let yesterday_evening = ts(2024, 6, 14, 23);

        assert!(ReportWindow::Today.contains(ts(2024, 6, 15, 0), now));
        assert!(!ReportWindow::Today.contains(yesterday_evening, now));
        assert!(ReportWindow::LastWeek.contains(yesterday_evening, now));
    }

    #[test]
    fn test_week_and_month_windows() {
        let now = ts(2024, 6, 15, 12);

        assert!(ReportWindow::LastWeek.contains(ts(2024, 6, 8, 0), now));
        assert!(!ReportWindow::LastWeek.contains(ts(2024, 6, 7, 23), now));
        assert!(ReportWindow::LastMonth.contains(ts(2024, 5, 16, 0), now));
        assert!(!ReportWindow::LastMonth.contains(ts(2024, 5, 15, 23), now));
        assert!(ReportWindow::AllTime.contains(ts(1999, 1, 1, 0), now));
    }

    #[test]
    fn test_summary() {
        let now = ts(2024, 6, 15, 18);
        let sales = vec![
            // 2,000 + 360 VAT
            sale("s1", "Alice", ts(2024, 6, 15, 9), vec![("p1", "A", 1_000, 2)]),
            // 500 + 90 VAT
            sale("s2", "Bob", ts(2024, 6, 15, 10), vec![("p2", "B", 500, 1)]),
            // Excluded from Today
            sale("s3", "Alice", ts(2024, 6, 14, 10), vec![("p1", "A", 1_000, 1)]),
        ];

        let report = summary(&sales, ReportWindow::Today, now);
        assert_eq!(report.transactions, 2);
        assert_eq!(report.revenue.francs(), 2_360 + 590);
        assert_eq!(report.vat_collected.francs(), 360 + 90);
        assert_eq!(report.average_transaction.francs(), (2_360 + 590) / 2);
    }

    #[test]
    fn test_summary_empty_window() {
        let now = ts(2024, 6, 15, 18);
        let report = summary(&[], ReportWindow::Today, now);
        assert_eq!(report.transactions, 0);
        assert!(report.revenue.is_zero());
        assert!(report.average_transaction.is_zero());
    }

    #[test]
    fn test_top_products_ranking_and_units() {
        let now = ts(2024, 6, 15, 18);
        let sales = vec![
            sale("s1", "Alice", ts(2024, 6, 15, 9), vec![("p1", "A", 1_000, 1)]),
            sale(
                "s2",
                "Alice",
                ts(2024, 6, 15, 10),
                vec![("p2", "B", 500, 4), ("p1", "A", 1_000, 1)],
            ),
        ];

        let top = top_products(&sales, ReportWindow::Today, now);
        assert_eq!(top.len(), 2);
        // p1: 2,000 beats p2: 2,000? Equal - first appearance wins.
        assert_eq!(top[0].product_id, "p1");
        assert_eq!(top[0].units, 2);
        assert_eq!(top[0].revenue.francs(), 2_000);
        assert_eq!(top[1].product_id, "p2");
        assert_eq!(top[1].revenue.francs(), 2_000);
    }

    #[test]
    fn test_top_products_tie_keeps_first_appearance_order() {
        let now = ts(2024, 6, 15, 18);
        // p2 appears first in the log; both end at 1,000 revenue
        let sales = vec![
            sale("s1", "Alice", ts(2024, 6, 15, 9), vec![("p2", "B", 500, 2)]),
            sale("s2", "Alice", ts(2024, 6, 15, 10), vec![("p1", "A", 1_000, 1)]),
        ];

        let top = top_products(&sales, ReportWindow::AllTime, now);
        assert_eq!(top[0].product_id, "p2");
        assert_eq!(top[1].product_id, "p1");
    }

    #[test]
    fn test_top_products_truncates_to_five() {
        let now = ts(2024, 6, 15, 18);
        let lines: Vec<(String, String)> = (0..8)
            .map(|i| (format!("p{}", i), format!("P{}", i)))
            .collect();
        let line_refs: Vec<(&str, &str, i64, i64)> = lines
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str(), 100, 1))
            .collect();
        let sales = vec![sale("s1", "Alice", ts(2024, 6, 15, 9), line_refs)];

        assert_eq!(top_products(&sales, ReportWindow::AllTime, now).len(), 5);
    }

    #[test]
    fn test_cashier_performance_sorted_by_revenue() {
        let now = ts(2024, 6, 15, 18);
        let sales = vec![
            sale("s1", "Alice", ts(2024, 6, 15, 9), vec![("p1", "A", 500, 1)]),
            sale("s2", "Bob", ts(2024, 6, 15, 10), vec![("p1", "A", 5_000, 1)]),
            sale("s3", "Alice", ts(2024, 6, 15, 11), vec![("p1", "A", 500, 1)]),
        ];

        let cashiers = cashier_performance(&sales, ReportWindow::Today, now);
        assert_eq!(cashiers.len(), 2);
        assert_eq!(cashiers[0].name, "Bob");
        assert_eq!(cashiers[1].name, "Alice");
        assert_eq!(cashiers[1].transactions, 2);
    }

    #[test]
    fn test_daily_revenue_keeps_most_recent_seven_dates() {
        let now = ts(2024, 6, 20, 18);
        let sales: Vec<Sale> = (1..=9)
            .map(|d| {
                sale(
                    &format!("s{}", d),
                    "Alice",
                    ts(2024, 6, d, 9),
                    vec![("p1", "A", 100 * d as i64, 1)],
                )
            })
            .collect();

        let days = daily_revenue(&sales, ReportWindow::AllTime, now);
        assert_eq!(days.len(), 7);
        // Ascending, starting at the 3rd (two oldest dates dropped)
        assert_eq!(days[0].date, ts(2024, 6, 3, 0).date_naive());
        assert_eq!(days[6].date, ts(2024, 6, 9, 0).date_naive());
    }

    #[test]
    fn test_daily_revenue_groups_same_date() {
        let now = ts(2024, 6, 15, 18);
        let sales = vec![
            sale("s1", "Alice", ts(2024, 6, 15, 9), vec![("p1", "A", 1_000, 1)]),
            sale("s2", "Bob", ts(2024, 6, 15, 17), vec![("p1", "A", 1_000, 1)]),
        ];

        let days = daily_revenue(&sales, ReportWindow::Today, now);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].revenue.francs(), 2 * 1_180);
    }

    #[test]
    fn test_recent_sales_newest_first() {
        let sales = vec![
            sale("s1", "Alice", ts(2024, 6, 13, 9), vec![("p1", "A", 100, 1)]),
            sale("s2", "Alice", ts(2024, 6, 14, 9), vec![("p1", "A", 100, 1)]),
            sale("s3", "Alice", ts(2024, 6, 15, 9), vec![("p1", "A", 100, 1)]),
        ];

        let recent = recent_sales(&sales, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "s3");
        assert_eq!(recent[1].id, "s2");
    }
}
