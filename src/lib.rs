//! # Statement Balance View
//!
//! A library for turning bank statement data extracted from PDFs into a clean
//! daily balance series and a plain-text dashboard.
//!
//! ## Core Concepts
//!
//! - **Balance Records**: raw `{date, balance, description}` rows; balances are
//!   free-form strings such as `"Rp 1.234.567,00"` or empty cells
//! - **Summary Statistics**: pre-computed `{Description, Value}` metrics such as
//!   "Average Balance" or "Total Mutasi Debit"
//! - **Compacted Series**: one balance per calendar day, chronologically ordered,
//!   last record of the day wins
//! - **Daily Balance Table**: one row per day with opening and closing balance,
//!   first record of the day wins
//!
//! ## Example
//!
//! ```rust,ignore
//! use statement_balance_view::*;
//!
//! let records = vec![
//!     BalanceRecord::new("2024-01-02", "500", "Transfer"),
//!     BalanceRecord::new("2024-01-01", "300", "Opening"),
//! ];
//! let stats = vec![SummaryStat::new(" Average Balance ", StatValue::Text("400".into()))];
//!
//! let series = compact_series(&records);
//! assert_eq!(series[0].balance, 300.0);
//!
//! let average = lookup_amount(&stats, "Average Balance")?;
//! println!("{}", render_dashboard(&records, &stats));
//! ```

pub mod chart;
pub mod compactor;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod ingestion;
pub mod normalize;
pub mod schema;
pub mod stats;
pub mod utils;

pub use chart::render_balance_chart;
pub use compactor::{
    compact_series, daily_balance_rows, is_chartable, CompactedEntry, DailyBalanceRow,
};
pub use config::DashboardConfig;
pub use dashboard::{render_dashboard, BalanceDashboard, RenderedDashboard, Section};
pub use error::{BalanceViewError, Result};
pub use format::{format_amount, format_currency, NumberStyle};
pub use ingestion::{
    load_balance_records, load_summary_stats, parse_balance_records, parse_summary_stats,
};
pub use normalize::{normalize_json_value, parse_amount, parse_safe_float, Amount};
pub use schema::{BalanceRecord, StatValue, SummaryStat};
pub use stats::{balance_growth, lookup_amount, lookup_statistic, BalanceSummary, SeriesSummary};

use std::path::Path;

/// Loads both datasets from disk and renders the dashboard.
pub fn render_dashboard_from_files(
    records_path: impl AsRef<Path>,
    stats_path: impl AsRef<Path>,
    config: DashboardConfig,
) -> Result<RenderedDashboard> {
    let records = load_balance_records(records_path)?;
    let stats = load_summary_stats(stats_path)?;
    Ok(BalanceDashboard::new(config)?.render(&records, &stats))
}
