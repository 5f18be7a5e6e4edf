use crate::normalize::Amount;
use crate::schema::BalanceRecord;
use crate::utils::DateKey;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One point of the compacted balance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactedEntry {
    pub date: String,
    pub balance: f64,
    pub description: String,
}

impl From<&CompactedEntry> for BalanceRecord {
    fn from(entry: &CompactedEntry) -> Self {
        BalanceRecord {
            date: entry.date.clone(),
            balance: entry.balance.to_string(),
            description: entry.description.clone(),
        }
    }
}

/// One row of the daily balance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBalanceRow {
    pub date: String,
    pub description: String,
    pub opening_balance: f64,
    pub closing_balance: f64,
}

/// Records paired with their day key, in ascending calendar order.
///
/// The sort is stable. Unparseable dates go after every calendar date, ordered
/// by their trimmed text so that equal texts end up adjacent.
fn sorted_by_date(records: &[BalanceRecord]) -> Vec<(DateKey, &BalanceRecord)> {
    let mut keyed: Vec<(DateKey, &BalanceRecord)> = records
        .iter()
        .map(|record| {
            let key = DateKey::of(&record.date);
            if key.day().is_none() {
                warn!(
                    "Unparseable statement date {:?} ({}); ordering it last",
                    record.date, record.description
                );
            }
            (key, record)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    keyed
}

/// Builds the chart series: one entry per day, last record wins.
///
/// Compare [`daily_balance_rows`], which keeps the first record of each day.
///
/// A record is skipped only when its balance cell is blank. Explicit zeros and
/// unparseable balances stay in the series (the latter as zero). When a day
/// repeats, the entry keeps the first record's date text and takes the later
/// record's balance and description.
pub fn compact_series(records: &[BalanceRecord]) -> Vec<CompactedEntry> {
    let mut entries: Vec<CompactedEntry> = Vec::new();
    let mut last_key: Option<DateKey> = None;
    let mut skipped = 0usize;

    for (key, record) in sorted_by_date(records) {
        let amount = record.amount();
        if amount.is_blank() {
            skipped += 1;
            continue;
        }
        let balance = amount.or_zero();

        match entries.last_mut() {
            Some(last) if last_key.as_ref() == Some(&key) => {
                last.balance = balance;
                last.description = record.description.clone();
            }
            _ => {
                entries.push(CompactedEntry {
                    date: record.date.clone(),
                    balance,
                    description: record.description.clone(),
                });
                last_key = Some(key);
            }
        }
    }

    debug!(
        "Compacted {} records into {} entries ({} blank balances skipped)",
        records.len(),
        entries.len(),
        skipped
    );

    entries
}

/// Builds the daily balance table: one row per day, first record wins.
///
/// Only records with a parseable, non-zero balance take part. The opening
/// balance of a row is the previous row's closing balance; the first row opens
/// at its own balance.
pub fn daily_balance_rows(records: &[BalanceRecord]) -> Vec<DailyBalanceRow> {
    let mut seen: HashSet<DateKey> = HashSet::new();
    let mut rows: Vec<DailyBalanceRow> = Vec::new();

    for (key, record) in sorted_by_date(records) {
        let balance = match record.amount() {
            Amount::Value(v) if v != 0.0 => v,
            _ => continue,
        };

        if !seen.insert(key) {
            continue;
        }

        let opening_balance = rows.last().map_or(balance, |prev| prev.closing_balance);
        rows.push(DailyBalanceRow {
            date: record.date.clone(),
            description: record.description.clone(),
            opening_balance,
            closing_balance: balance,
        });
    }

    debug!(
        "Derived {} daily balance rows from {} records",
        rows.len(),
        records.len()
    );

    rows
}

/// Whether a compacted series can be charted: non-empty, every balance finite.
pub fn is_chartable(entries: &[CompactedEntry]) -> bool {
    !entries.is_empty() && entries.iter().all(|e| e.balance.is_finite())
}
