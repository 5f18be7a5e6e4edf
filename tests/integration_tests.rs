use statement_balance_view::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rec(date: &str, balance: &str, description: &str) -> BalanceRecord {
    BalanceRecord::new(date, balance, description)
}

fn entry(date: &str, balance: f64, description: &str) -> CompactedEntry {
    CompactedEntry {
        date: date.to_string(),
        balance,
        description: description.to_string(),
    }
}

#[test]
fn test_scenario_out_of_order_records() {
    let records = vec![rec("2024-01-02", "500", "A"), rec("2024-01-01", "300", "B")];

    assert_eq!(
        compact_series(&records),
        vec![entry("2024-01-01", 300.0, "B"), entry("2024-01-02", 500.0, "A")]
    );
}

#[test]
fn test_scenario_blank_balance_only() {
    let records = vec![rec("2024-01-01", "", "x")];
    assert!(compact_series(&records).is_empty());
}

#[test]
fn test_scenario_same_day_last_write_wins() {
    let records = vec![rec("2024-01-01", "100", "a"), rec("2024-01-01", "200", "b")];

    let series = compact_series(&records);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].balance, 200.0);
}

#[test]
fn test_lookup_trimmed_average_balance() {
    let stats = vec![SummaryStat::new(
        " Average Balance ",
        StatValue::Text("100.50".to_string()),
    )];

    let value = lookup_statistic(&stats, "Average Balance").unwrap();
    assert_eq!(value.amount().or_zero(), 100.50);
}

#[test]
fn test_format_currency_examples() {
    assert_eq!(format_currency(Some(1234.5)), "1,234.50");
    assert_eq!(format_currency(None), "0.00");
}

#[test]
fn test_fixture_series_and_table() {
    let records = load_balance_records(fixture("extraction.json")).unwrap();
    assert_eq!(records.len(), 8);

    let series = compact_series(&records);
    assert_eq!(
        series,
        vec![
            entry("2024-03-01", 10_000_000.0, "SALDO AWAL"),
            entry("2024-03-02", 9_850_000.0, "BIAYA ADM"),
            entry("2024-03-04", 12_500_000.0, "TARIKAN ATM 04/03"),
            entry("2024-03-05", 0.0, "PEMINDAHAN SALDO"),
            entry("2024-03-07", 3_200_000.0, "SETORAN TUNAI"),
        ]
    );

    let rows = daily_balance_rows(&records);
    let summary: Vec<(&str, f64, f64)> = rows
        .iter()
        .map(|r| (r.date.as_str(), r.opening_balance, r.closing_balance))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2024-03-01", 10_000_000.0, 10_000_000.0),
            ("2024-03-02", 10_000_000.0, 9_850_000.0),
            ("2024-03-04", 9_850_000.0, 12_750_000.0),
            ("2024-03-07", 12_750_000.0, 3_200_000.0),
        ]
    );
    assert_eq!(rows[2].description, "TRSF E-BANKING CR 0403/FTSCY/WS95051");
}

#[test]
fn test_fixture_statistics() {
    let stats = load_summary_stats(fixture("analysis.json")).unwrap();
    let summary = BalanceSummary::from_stats(&stats);

    assert!(summary.missing().is_empty());
    assert_eq!(summary.total_debit.unwrap(), 9_900_000.0);
    assert_eq!(summary.total_credit.unwrap(), 3_100_000.0);
    assert_eq!(summary.average_balance.unwrap(), 8_700_000.0);
    assert_eq!(summary.highest_balance.unwrap(), 12_500_000.0);
    assert_eq!(summary.lowest_balance.unwrap(), 3_200_000.0);
}

#[test]
fn test_fixture_dashboard() {
    let view = render_dashboard_from_files(
        fixture("extraction.json"),
        fixture("analysis.json"),
        DashboardConfig::default(),
    )
    .unwrap();

    assert!(view.sections().all(|s| !s.degraded));

    let text = view.to_string();
    assert!(text.contains("Latest: 2024-03-07 | Balance: 3.200.000,00"));
    assert!(text.contains("8,700,000.00"));
    // Growth spans the explicit zero balance on 2024-03-05.
    assert!(text
        .lines()
        .any(|l| l.starts_with("Balance Growth") && l.ends_with("12,500,000.00")));
    assert!(text.contains("TRSF E-BANKING CR 0403/FTSCY/WS~"));
}

#[test]
fn test_compactor_properties_on_fixture() {
    let records = load_balance_records(fixture("extraction.json")).unwrap();
    let series = compact_series(&records);

    let days: Vec<_> = series
        .iter()
        .map(|e| utils::parse_statement_date(&e.date).unwrap())
        .collect();
    assert!(days.windows(2).all(|w| w[0] <= w[1]));

    let mut unique = days.clone();
    unique.dedup();
    assert_eq!(unique.len(), days.len());

    let replayed: Vec<BalanceRecord> = series.iter().map(BalanceRecord::from).collect();
    assert_eq!(compact_series(&replayed), series);
}

#[test]
fn test_missing_statistics_file_contents() {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let path = dir.join("analysis_without_lowest.json");
    let mut file = File::create(&path).unwrap();
    write!(
        file,
        r#"[{{"Description": "Average Balance", "Value": "1"}},
            {{"Description": "Highest Balance", "Value": "2"}}]"#
    )
    .unwrap();

    let stats = load_summary_stats(&path).unwrap();
    let err = lookup_statistic(&stats, "Lowest Balance").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No statistic found with description 'Lowest Balance'"
    );

    let records = vec![rec("2024-01-01", "10", "a")];
    let view = BalanceDashboard::new(DashboardConfig::default())
        .unwrap()
        .render(&records, &stats);
    let statistics = view.statistics.unwrap();
    assert!(statistics.degraded);
    assert!(view.chart.map_or(false, |c| !c.degraded));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_balance_records(fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, BalanceViewError::Io(_)));
}
