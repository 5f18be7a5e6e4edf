use crate::error::{BalanceViewError, Result};
use crate::schema::{BalanceRecord, StatValue, SummaryStat};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_balance_records(json: &str) -> Result<Vec<BalanceRecord>> {
    let rows = parse_object_array(json)?;

    let records: Vec<BalanceRecord> = rows
        .into_iter()
        .map(|row| BalanceRecord {
            date: text_field(&row, "date"),
            balance: text_field(&row, "balance"),
            description: text_field(&row, "description"),
        })
        .collect();

    info!("Loaded {} balance records", records.len());
    Ok(records)
}

/// Parses the analysis dataset. Rows without a string `Description` cannot be
/// looked up, so they are skipped with a warning rather than failing the load.
pub fn parse_summary_stats(json: &str) -> Result<Vec<SummaryStat>> {
    let rows = parse_object_array(json)?;

    let mut stats = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let description = match row.get("Description") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warn!(
                    "Skipping analysis row #{}: 'Description' is {}",
                    index,
                    kind(other)
                );
                continue;
            }
            None => {
                warn!("Skipping analysis row #{}: missing 'Description'", index);
                continue;
            }
        };

        let value = match row.get("Value") {
            Some(Value::String(s)) => Some(StatValue::Text(s.clone())),
            Some(Value::Number(n)) => n.as_f64().map(StatValue::Number),
            _ => None,
        };

        stats.push(SummaryStat { description, value });
    }

    info!("Loaded {} summary statistics", stats.len());
    Ok(stats)
}

pub fn load_balance_records(path: impl AsRef<Path>) -> Result<Vec<BalanceRecord>> {
    let path = path.as_ref();
    debug!("Reading balance records from {}", path.display());
    parse_balance_records(&std::fs::read_to_string(path)?)
}

pub fn load_summary_stats(path: impl AsRef<Path>) -> Result<Vec<SummaryStat>> {
    let path = path.as_ref();
    debug!("Reading summary statistics from {}", path.display());
    parse_summary_stats(&std::fs::read_to_string(path)?)
}

/// Parses a JSON array of objects, trimming every object key.
///
/// When two keys collide after trimming, the later one wins.
fn parse_object_array(json: &str) -> Result<Vec<BTreeMap<String, Value>>> {
    let root: Value = serde_json::from_str(json)?;

    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(BalanceViewError::InvalidDataset {
                index: 0,
                details: format!(
                    "expected a JSON array at the top level, found {}",
                    kind(&other)
                ),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(trim_keys(map)),
            other => Err(BalanceViewError::InvalidDataset {
                index,
                details: format!("expected an object, found {}", kind(&other)),
            }),
        })
        .collect()
}

fn trim_keys(map: Map<String, Value>) -> BTreeMap<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key.trim().to_string(), value))
        .collect()
}

/// Text form of a field. Numbers keep their JSON spelling; `null`, missing
/// fields and other shapes become the empty string.
fn text_field(row: &BTreeMap<String, Value>, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
