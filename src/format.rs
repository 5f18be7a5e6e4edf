use num_format::{Locale, ToFormattedString};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How grouped two-decimal amounts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// `1,234.50`
    #[default]
    Grouped,
    /// `1.234,50`
    Indonesian,
}

/// Formats an amount with thousands separators and exactly two decimals, no
/// currency symbol. Missing, zero and non-finite values render as `"0.00"`.
pub fn format_currency(value: Option<f64>) -> String {
    format_amount(value, NumberStyle::Grouped)
}

pub fn format_amount(value: Option<f64>, style: NumberStyle) -> String {
    let zero = match style {
        NumberStyle::Grouped => "0.00",
        NumberStyle::Indonesian => "0,00",
    };

    let amount = match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return zero.to_string(),
    };

    let text = format!("{:.2}", amount.abs());
    let (digits, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if amount < 0.0 && text != "0.00" { "-" } else { "" };
    let whole = group_thousands(digits);

    match style {
        NumberStyle::Grouped => format!("{sign}{whole}.{fraction}"),
        NumberStyle::Indonesian => format!("{sign}{},{fraction}", whole.replace(',', ".")),
    }
}

/// Inserts `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    if let Ok(n) = digits.parse::<u128>() {
        return n.to_formatted_string(&Locale::en);
    }

    // Beyond u128.
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
