use crate::normalize::{parse_amount, Amount};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One raw balance observation as it comes out of statement extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceRecord {
    #[schemars(
        description = "Transaction or posting date. Accepted forms include YYYY-MM-DD, YYYY/MM/DD, DD/MM/YYYY, DD-MM-YYYY and '02 Jan 2024'."
    )]
    pub date: String,

    #[schemars(
        description = "Running balance after the transaction, as printed on the statement. May carry currency symbols or separators, or be empty when the row has no balance."
    )]
    #[serde(default)]
    pub balance: String,

    #[schemars(description = "Transaction narrative as printed on the statement")]
    #[serde(default)]
    pub description: String,
}

impl BalanceRecord {
    pub fn new(
        date: impl Into<String>,
        balance: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            balance: balance.into(),
            description: description.into(),
        }
    }

    /// The tagged outcome of normalizing this record's balance string.
    pub fn amount(&self) -> Amount {
        parse_amount(&self.balance)
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Vec<BalanceRecord>)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}

/// A pre-computed metric value. The analysis dataset mixes formatted strings
/// ("1.234.567,00") with plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    pub fn amount(&self) -> Amount {
        match self {
            StatValue::Number(n) if n.is_finite() => Amount::Value(*n),
            StatValue::Number(_) => Amount::Invalid,
            StatValue::Text(s) => parse_amount(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryStat {
    #[schemars(
        description = "Metric name, e.g. 'Average Balance' or 'Total Mutasi Debit'. Compared after trimming surrounding whitespace."
    )]
    pub description: String,

    #[schemars(description = "Metric value, either a formatted string or a number")]
    #[serde(default)]
    pub value: Option<StatValue>,
}

impl SummaryStat {
    pub fn new(description: impl Into<String>, value: StatValue) -> Self {
        Self {
            description: description.into(),
            value: Some(value),
        }
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Vec<SummaryStat>)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}
