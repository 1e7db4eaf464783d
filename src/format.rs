use serde::Serialize;

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Formats with the regional grouping convention: Cr, L and K suffixes.
///
/// Absent, NaN and infinite values render as `"0"`.
pub fn format_regional(value: impl Into<Option<f64>>) -> String {
    let Some(value) = finite(value.into()) else {
        return "0".to_string();
    };

    if value >= CRORE {
        scaled(value, CRORE, "Cr")
    } else if value >= LAKH {
        scaled(value, LAKH, "L")
    } else if value >= THOUSAND {
        scaled(value, THOUSAND, "K")
    } else {
        plain(value)
    }
}

/// Formats with the international convention: M and K suffixes.
pub fn format_compact(value: impl Into<Option<f64>>) -> String {
    let Some(value) = finite(value.into()) else {
        return "0".to_string();
    };

    if value >= MILLION {
        scaled(value, MILLION, "M")
    } else if value >= THOUSAND {
        scaled(value, THOUSAND, "K")
    } else {
        plain(value)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", one_decimal(value))
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthIndicator {
    pub value: String,
    pub is_positive: bool,
    pub arrow: char,
}

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when there is no meaningful baseline.
pub fn growth_indicator(current: f64, previous: f64) -> Option<GrowthIndicator> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    let growth = (current - previous) / previous * 100.0;
    let is_positive = growth >= 0.0;
    Some(GrowthIndicator {
        value: one_decimal(growth.abs()),
        is_positive,
        arrow: if is_positive { '↑' } else { '↓' },
    })
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

fn scaled(value: f64, divisor: f64, suffix: &str) -> String {
    format!("{}{}", one_decimal(value / divisor), suffix)
}

// Half-away-from-zero, so 1.25 renders as 1.3 rather than banker's 1.2.
fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}

// `Display` for f64 never switches to exponent form and drops a zero fraction.
fn plain(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_rounds_ties_away_from_zero() {
        assert_eq!(one_decimal(1.25), "1.3");
        assert_eq!(one_decimal(2.45), "2.5");
        assert_eq!(one_decimal(-1.25), "-1.3");
    }

    #[test]
    fn plain_keeps_fractional_values() {
        assert_eq!(plain(12.5), "12.5");
        assert_eq!(plain(0.0), "0");
        assert_eq!(plain(-42.0), "-42");
        assert_eq!(plain(-0.0), "0");
    }
}
