use crate::error::{BalanceViewError, Result};
use crate::format::NumberStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering options for the balance dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DashboardConfig {
    #[schemars(description = "Width of the balance trend chart in characters (at least 10)")]
    pub chart_width: usize,

    #[schemars(description = "Height of the balance trend chart in rows (at least 5)")]
    pub chart_height: usize,

    #[schemars(description = "Number style for statistics and the daily balance table")]
    pub number_style: NumberStyle,

    #[schemars(description = "Number style for the chart's latest-point label")]
    pub tooltip_style: NumberStyle,

    #[schemars(
        description = "Maximum characters of a transaction description in the table (at least 4)"
    )]
    pub description_width: usize,

    pub show_chart: bool,
    pub show_statistics: bool,
    pub show_daily_balance: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            chart_width: 60,
            chart_height: 12,
            number_style: NumberStyle::Grouped,
            tooltip_style: NumberStyle::Indonesian,
            description_width: 32,
            show_chart: true,
            show_statistics: true,
            show_daily_balance: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart_width < 10 {
            return Err(BalanceViewError::InvalidConfig(format!(
                "chart_width {} is below the minimum of 10",
                self.chart_width
            )));
        }
        if self.chart_height < 5 {
            return Err(BalanceViewError::InvalidConfig(format!(
                "chart_height {} is below the minimum of 5",
                self.chart_height
            )));
        }
        if self.description_width < 4 {
            return Err(BalanceViewError::InvalidConfig(format!(
                "description_width {} is below the minimum of 4",
                self.description_width
            )));
        }
        Ok(())
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&schemars::schema_for!(DashboardConfig))
    }
}
