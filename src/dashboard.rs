use crate::chart::render_balance_chart;
use crate::compactor::{compact_series, daily_balance_rows, is_chartable, DailyBalanceRow};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::format::{format_amount, NumberStyle};
use crate::schema::{BalanceRecord, SummaryStat};
use crate::stats::{balance_growth, BalanceSummary};
use crate::utils::truncate;
use log::{debug, info};
use std::fmt;

// An empty series or a missing statistic degrades only its own section or card.
pub const NO_CHART_DATA: &str = "No valid data available to display the chart.";
pub const NO_TABLE_DATA: &str = "No daily balance data available.";
const UNAVAILABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub description: Option<String>,
    pub body: String,
    /// True when the body is a fallback message instead of data.
    pub degraded: bool,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        write!(f, "{}", self.body)?;
        if !self.body.ends_with('\n') {
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The rendered view. Sections disabled in the config are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDashboard {
    pub chart: Option<Section>,
    pub statistics: Option<Section>,
    pub daily_balance: Option<Section>,
}

impl RenderedDashboard {
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        [&self.chart, &self.statistics, &self.daily_balance]
            .into_iter()
            .flatten()
    }
}

impl fmt::Display for RenderedDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

pub struct BalanceDashboard {
    config: DashboardConfig,
}

impl BalanceDashboard {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Renders every enabled section from the two datasets. Pure: the same
    /// inputs always give the same output.
    pub fn render(&self, records: &[BalanceRecord], stats: &[SummaryStat]) -> RenderedDashboard {
        info!(
            "Rendering balance dashboard from {} records and {} statistics",
            records.len(),
            stats.len()
        );

        let entries = compact_series(records);

        let chart = self.config.show_chart.then(|| {
            let chartable = is_chartable(&entries);
            debug!("Chart section: {} entries, chartable={}", entries.len(), chartable);
            Section {
                title: "Balance Trend".to_string(),
                description: Some(
                    "Account balance progression over the selected time frame".to_string(),
                ),
                body: if chartable {
                    render_balance_chart(
                        &entries,
                        self.config.chart_width,
                        self.config.chart_height,
                        self.config.tooltip_style,
                    )
                } else {
                    NO_CHART_DATA.to_string()
                },
                degraded: !chartable,
            }
        });

        let statistics = self.config.show_statistics.then(|| {
            let summary = BalanceSummary::from_stats(stats);
            let missing = summary.missing().len();
            debug!("Statistics section: {} of 5 metrics missing", missing);
            Section {
                title: "Balance Statistics".to_string(),
                description: None,
                body: render_statistics(
                    &summary,
                    balance_growth(&entries),
                    self.config.number_style,
                ),
                degraded: missing > 0,
            }
        });

        let daily_balance = self.config.show_daily_balance.then(|| {
            let rows = daily_balance_rows(records);
            debug!("Daily balance section: {} rows", rows.len());
            Section {
                title: "Daily Balance".to_string(),
                description: None,
                body: if rows.is_empty() {
                    NO_TABLE_DATA.to_string()
                } else {
                    render_daily_table(
                        &rows,
                        self.config.description_width,
                        self.config.number_style,
                    )
                },
                degraded: rows.is_empty(),
            }
        });

        RenderedDashboard {
            chart,
            statistics,
            daily_balance,
        }
    }
}

/// Renders with the default configuration.
pub fn render_dashboard(records: &[BalanceRecord], stats: &[SummaryStat]) -> RenderedDashboard {
    BalanceDashboard {
        config: DashboardConfig::default(),
    }
    .render(records, stats)
}

fn render_statistics(summary: &BalanceSummary, growth: f64, style: NumberStyle) -> String {
    let metric = |value: &Result<f64>| match value {
        Ok(v) => format_amount(Some(*v), style),
        Err(_) => UNAVAILABLE.to_string(),
    };

    let cards = [
        ("Average Balance", metric(&summary.average_balance)),
        ("Highest Balance", metric(&summary.highest_balance)),
        ("Lowest Balance", metric(&summary.lowest_balance)),
        ("Balance Growth", format_amount(Some(growth), style)),
    ];

    let mut out = String::new();
    for (title, value) in cards {
        out.push_str(&format!("{:<18} {:>20}\n", title, value));
    }
    out.push_str(&format!("{:<18} {:>20}\n", "Total Debit", metric(&summary.total_debit)));
    out.push_str(&format!("{:<18} {:>20}\n", "Total Credit", metric(&summary.total_credit)));
    out
}

fn render_daily_table(
    rows: &[DailyBalanceRow],
    description_width: usize,
    style: NumberStyle,
) -> String {
    let date_width = rows
        .iter()
        .map(|r| r.date.chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len());
    let dw = description_width;

    let mut out = String::new();
    out.push_str(&format!(
        "{:>date_width$} {:<dw$} {:>18} {:>18}\n",
        "Date", "Description", "Opening Balance", "Closing Balance"
    ));
    out.push_str(&format!(
        "{:->date_width$} {:-<dw$} {:->18} {:->18}\n",
        "", "", "", ""
    ));

    for row in rows {
        out.push_str(
            format!(
                "{:>date_width$} {:<dw$} {:>18} {:>18}",
                row.date,
                truncate(&row.description, dw),
                format_amount(Some(row.opening_balance), style),
                format_amount(Some(row.closing_balance), style),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}
