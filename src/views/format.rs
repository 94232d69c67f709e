//! Display formatting for values shown in the views.

use chrono::{DateTime, NaiveDate};

/// Placeholder for anything missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Group digits in threes: `30000000` -> `30,000,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Market value in euros, `N/A` when unknown.
///
/// ```rust
/// use football_scout::views::format::format_eur;
///
/// assert_eq!(format_eur(Some(30_000_000)), "€30,000,000");
/// assert_eq!(format_eur(None), "N/A");
/// ```
pub fn format_eur(value: Option<u64>) -> String {
    match value {
        Some(v) => format!("€{}", group_thousands(v)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Market value plus an `ESTIMATED` marker for model-derived values.
pub fn format_market_value(value: Option<u64>, is_estimated: bool) -> String {
    let formatted = format_eur(value);
    if is_estimated && value.is_some() {
        format!("{formatted} [ESTIMATED]")
    } else {
        formatted
    }
}

/// A `[0, 1]` fraction as a percentage with one decimal: `0.712` -> `71.2%`.
pub fn format_fraction(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// A signed attribution share as a whole percentage: `0.31` -> `+31%`.
pub fn format_contribution(value: f64) -> String {
    let pct = (value * 100.0).round();
    if pct > 0.0 {
        format!("+{pct:.0}%")
    } else if pct == 0.0 {
        // Avoids "-0%" for tiny negative shares
        "0%".to_string()
    } else {
        format!("{pct:.0}%")
    }
}

/// Expected-goals style decimals, `N/A` when missing.
pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Calendar date of a backend timestamp. Unparseable input is shown as is.
pub fn format_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(30_000_000), "30,000,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_format_market_value() {
        assert_eq!(format_market_value(Some(90_000_000), true), "€90,000,000 [ESTIMATED]");
        assert_eq!(format_market_value(Some(28_000_000), false), "€28,000,000");
        assert_eq!(format_market_value(None, true), "N/A");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction(Some(0.712)), "71.2%");
        assert_eq!(format_fraction(Some(1.0)), "100.0%");
        assert_eq!(format_fraction(None), "N/A");
    }

    #[test]
    fn test_format_contribution() {
        assert_eq!(format_contribution(0.31), "+31%");
        assert_eq!(format_contribution(-0.05), "-5%");
        assert_eq!(format_contribution(-0.001), "0%");
    }

    #[test]
    fn test_format_decimal_and_optional() {
        assert_eq!(format_decimal(Some(11.3)), "11.3");
        assert_eq!(format_decimal(None), "N/A");
        assert_eq!(format_optional(Some(24)), "24");
        assert_eq!(format_optional::<u32>(None), "N/A");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-06-01T12:00:00Z"), "2024-06-01");
        assert_eq!(format_date("2024-06-01T23:30:00-03:00"), "2024-06-01");
        assert_eq!(format_date("2024-06-01"), "2024-06-01");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
