use log::trace;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// A finite number was recovered from the input.
    Value(f64),
    /// The input was empty or whitespace only.
    Blank,
    /// The input had content but no parseable number.
    Invalid,
}

impl Amount {
    pub fn value(self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(v),
            Amount::Blank | Amount::Invalid => None,
        }
    }

    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_blank(self) -> bool {
        matches!(self, Amount::Blank)
    }
}

/// Parses a numeric string into a tagged [`Amount`].
///
/// Every character other than an ASCII digit, `.` or `-` is stripped, then the
/// longest leading `-?digits(.digits)?` is parsed and the rest ignored, so
/// `"Rp 1.234,56"` reads as `1.23456` and `"1.234.567"` as `1.234`.
pub fn parse_amount(raw: &str) -> Amount {
    if raw.trim().is_empty() {
        trace!("Blank numeric input: {:?}", raw);
        return Amount::Blank;
    }

    let cleaned = non_numeric_re().replace_all(raw, "");
    let amount = match leading_number_re()
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
    {
        Some(v) if v.is_finite() => Amount::Value(v),
        _ => Amount::Invalid,
    };

    trace!("Normalized {:?} (cleaned {:?}) to {:?}", raw, cleaned, amount);
    amount
}

/// Zero-defaulting form of [`parse_amount`].
pub fn parse_safe_float(raw: &str) -> f64 {
    parse_amount(raw).or_zero()
}

/// Normalizes an arbitrary JSON value. Only non-empty strings can produce a
/// non-zero result.
pub fn normalize_json_value(value: &Value) -> f64 {
    match value {
        Value::String(s) => parse_safe_float(s),
        other => {
            trace!("Non-string numeric input {} defaults to 0", other);
            0.0
        }
    }
}

fn non_numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.\-]+").expect("invalid non-numeric regex"))
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("invalid leading number regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_and_non_string_inputs_are_zero() {
        assert_eq!(parse_amount(""), Amount::Blank);
        assert_eq!(parse_amount(" \t "), Amount::Blank);
        assert_eq!(parse_safe_float(""), 0.0);

        assert_eq!(normalize_json_value(&json!(null)), 0.0);
        assert_eq!(normalize_json_value(&json!(1500)), 0.0);
        assert_eq!(normalize_json_value(&json!(true)), 0.0);
        assert_eq!(normalize_json_value(&json!("")), 0.0);
        assert_eq!(normalize_json_value(&json!("1500")), 1500.0);
    }

    #[test]
    fn test_symbols_and_separators_are_stripped() {
        assert_eq!(parse_safe_float("Rp 500"), 500.0);
        assert_eq!(parse_safe_float("1,234.56"), 1234.56);
        assert_eq!(parse_safe_float("$ -42.10"), -42.1);
        assert_eq!(parse_safe_float("  7 "), 7.0);
    }

    #[test]
    fn test_ambiguous_separators_follow_the_prefix_rule() {
        // Comma decimal marks are stripped, so the dot becomes the decimal point.
        assert_eq!(parse_safe_float("Rp 1.234,56"), 1.23456);
        // Only the first dot is honoured.
        assert_eq!(parse_safe_float("1.234.567"), 1.234);
        assert_eq!(parse_safe_float("1.234.567,00"), 1.234);
        // A minus after digits ends the number.
        assert_eq!(parse_safe_float("5-3"), 5.0);
    }

    #[test]
    fn test_unparseable_inputs_are_invalid() {
        assert_eq!(parse_amount("abc"), Amount::Invalid);
        assert_eq!(parse_amount("-"), Amount::Invalid);
        assert_eq!(parse_amount("--5"), Amount::Invalid);
        assert_eq!(parse_amount("."), Amount::Invalid);
        assert_eq!(parse_safe_float("N/A"), 0.0);
    }

    #[test]
    fn test_leading_and_trailing_dots() {
        assert_eq!(parse_amount(".5"), Amount::Value(0.5));
        assert_eq!(parse_amount("-.5"), Amount::Value(-0.5));
        assert_eq!(parse_amount("12."), Amount::Value(12.0));
    }

    #[test]
    fn test_explicit_zero_is_a_value() {
        assert_eq!(parse_amount("0"), Amount::Value(0.0));
        assert_eq!(parse_amount("0.00"), Amount::Value(0.0));
        assert!(!parse_amount("0").is_blank());
    }
}
