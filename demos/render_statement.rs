//! Renders the balance dashboard for an extraction dataset and an analysis
//! dataset.
//!
//! ```text
//! cargo run --example render_statement -- <extraction.json> <analysis.json> [config.json]
//! RUST_LOG=debug cargo run --example render_statement -- \
//!     tests/fixtures/extraction.json tests/fixtures/analysis.json
//! ```

use anyhow::{anyhow, Result};
use statement_balance_view::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let records_path = args
        .next()
        .ok_or(anyhow!("No extraction dataset provided"))?;
    let stats_path = args.next().ok_or(anyhow!("No analysis dataset provided"))?;
    let config = match args.next() {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };

    let records = load_balance_records(&records_path)?;
    let stats = load_summary_stats(&stats_path)?;

    let view = BalanceDashboard::new(config)?.render(&records, &stats);
    println!("{view}");

    if let Some(summary) = SeriesSummary::from_entries(&compact_series(&records)) {
        println!(
            "Series: mean={} highest={} lowest={}",
            format_currency(Some(summary.mean)),
            format_currency(Some(summary.highest)),
            format_currency(Some(summary.lowest)),
        );
    }

    Ok(())
}
