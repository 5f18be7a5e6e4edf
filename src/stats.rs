use crate::compactor::CompactedEntry;
use crate::error::{BalanceViewError, Result};
use crate::schema::{StatValue, SummaryStat};
use log::{debug, warn};
use serde::Serialize;

pub const TOTAL_DEBIT: &str = "Total Mutasi Debit";
pub const TOTAL_CREDIT: &str = "Total Mutasi Kredit";
pub const AVERAGE_BALANCE: &str = "Average Balance";
pub const HIGHEST_BALANCE: &str = "Highest Balance";
pub const LOWEST_BALANCE: &str = "Lowest Balance";

/// Finds the value of the statistic whose trimmed description equals the
/// trimmed `description`. The first match wins.
///
/// A missing record, or a record without a value, is a lookup failure.
pub fn lookup_statistic<'a>(stats: &'a [SummaryStat], description: &str) -> Result<&'a StatValue> {
    let target = description.trim();

    let found = stats
        .iter()
        .find(|stat| stat.description.trim() == target)
        .and_then(|stat| stat.value.as_ref());

    match found {
        Some(value) => {
            debug!("Found statistic '{}': {:?}", target, value);
            Ok(value)
        }
        None => {
            warn!("Statistic '{}' missing from analysis dataset", target);
            Err(BalanceViewError::Lookup {
                description: target.to_string(),
            })
        }
    }
}

/// Looks up a statistic and normalizes it to a number, zero-defaulting
/// unparseable text.
pub fn lookup_amount(stats: &[SummaryStat], description: &str) -> Result<f64> {
    lookup_statistic(stats, description).map(|value| value.amount().or_zero())
}

/// The five pre-computed metrics of the analysis dataset. Each is looked up on
/// its own so one missing record does not hide the rest.
#[derive(Debug)]
pub struct BalanceSummary {
    pub average_balance: Result<f64>,
    pub highest_balance: Result<f64>,
    pub lowest_balance: Result<f64>,
    pub total_debit: Result<f64>,
    pub total_credit: Result<f64>,
}

impl BalanceSummary {
    pub fn from_stats(stats: &[SummaryStat]) -> Self {
        Self {
            average_balance: lookup_amount(stats, AVERAGE_BALANCE),
            highest_balance: lookup_amount(stats, HIGHEST_BALANCE),
            lowest_balance: lookup_amount(stats, LOWEST_BALANCE),
            total_debit: lookup_amount(stats, TOTAL_DEBIT),
            total_credit: lookup_amount(stats, TOTAL_CREDIT),
        }
    }

    pub fn missing(&self) -> Vec<&BalanceViewError> {
        [
            &self.average_balance,
            &self.highest_balance,
            &self.lowest_balance,
            &self.total_debit,
            &self.total_credit,
        ]
        .into_iter()
        .filter_map(|r| r.as_ref().err())
        .collect()
    }
}

/// Statistics computed from the compacted series itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub highest: f64,
    pub lowest: f64,
    pub mean: f64,
    /// Highest minus lowest balance.
    pub growth: f64,
}

impl SeriesSummary {
    /// `None` for an empty series.
    pub fn from_entries(entries: &[CompactedEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let highest = entries
            .iter()
            .map(|e| e.balance)
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest = entries
            .iter()
            .map(|e| e.balance)
            .fold(f64::INFINITY, f64::min);
        let mean = entries.iter().map(|e| e.balance).sum::<f64>() / entries.len() as f64;

        Some(Self {
            highest,
            lowest,
            mean,
            growth: highest - lowest,
        })
    }
}

/// Highest minus lowest balance of the series, `0` when empty.
pub fn balance_growth(entries: &[CompactedEntry]) -> f64 {
    SeriesSummary::from_entries(entries).map_or(0.0, |s| s.growth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<SummaryStat> {
        vec![
            SummaryStat::new(" Average Balance ", StatValue::Text("100.50".to_string())),
            SummaryStat::new("Highest Balance", StatValue::Number(2500.0)),
            SummaryStat::new("Lowest Balance\t", StatValue::Text("Rp 10".to_string())),
            SummaryStat::new("Total Mutasi Debit", StatValue::Text("1,000.00".to_string())),
        ]
    }

    #[test]
    fn test_lookup_trims_both_sides() {
        let stats = stats();
        let value = lookup_statistic(&stats, "Average Balance").unwrap();
        assert_eq!(value.amount().or_zero(), 100.50);

        assert_eq!(lookup_amount(&stats, "  Highest Balance ").unwrap(), 2500.0);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let stats = vec![
            SummaryStat::new("Average Balance", StatValue::Number(1.0)),
            SummaryStat::new("Average Balance ", StatValue::Number(2.0)),
        ];
        assert_eq!(lookup_amount(&stats, "Average Balance").unwrap(), 1.0);
    }

    #[test]
    fn test_missing_statistic_is_an_error() {
        let err = lookup_statistic(&stats(), "Total Mutasi Kredit").unwrap_err();
        match err {
            BalanceViewError::Lookup { description } => {
                assert_eq!(description, "Total Mutasi Kredit")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_record_without_value_is_an_error() {
        let stats = vec![SummaryStat {
            description: "Average Balance".to_string(),
            value: None,
        }];
        assert!(lookup_statistic(&stats, "Average Balance").is_err());
    }

    #[test]
    fn test_summary_isolates_missing_metrics() {
        let summary = BalanceSummary::from_stats(&stats());

        assert_eq!(summary.average_balance.as_ref().unwrap(), &100.50);
        assert_eq!(summary.highest_balance.as_ref().unwrap(), &2500.0);
        assert_eq!(summary.lowest_balance.as_ref().unwrap(), &10.0);
        assert_eq!(summary.total_debit.as_ref().unwrap(), &1000.0);
        assert!(summary.total_credit.is_err());
        assert_eq!(summary.missing().len(), 1);
    }

    #[test]
    fn test_series_summary() {
        let entries = vec![
            CompactedEntry {
                date: "2024-01-01".to_string(),
                balance: 100.0,
                description: "a".to_string(),
            },
            CompactedEntry {
                date: "2024-01-02".to_string(),
                balance: 400.0,
                description: "b".to_string(),
            },
        ];

        let summary = SeriesSummary::from_entries(&entries).unwrap();
        assert_eq!(summary.highest, 400.0);
        assert_eq!(summary.lowest, 100.0);
        assert_eq!(summary.mean, 250.0);
        assert_eq!(balance_growth(&entries), 300.0);

        assert!(SeriesSummary::from_entries(&[]).is_none());
        assert_eq!(balance_growth(&[]), 0.0);
    }
}
