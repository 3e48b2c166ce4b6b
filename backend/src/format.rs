//! Display formatting for report figures
//!
//! Amounts render as Colombian pesos: leading `$`, a non-breaking space,
//! `.` as the thousands separator and no decimals (e.g. `$\u{a0}1.234.567`).

use crate::core::rounding::round_half_up;

/// Currency symbol for pesos
pub const CURRENCY_SYMBOL: &str = "$";

/// Separator between symbol and digits (U+00A0)
pub const SYMBOL_SEPARATOR: char = '\u{a0}';

const THOUSANDS_SEPARATOR: char = '.';

/// Decimal places used by [`format_percent`]
pub const DEFAULT_PERCENT_DECIMALS: usize = 1;

/// Upper bound on percentage decimals; larger requests are clamped
pub const MAX_PERCENT_DECIMALS: usize = 9;

/// Format a whole-peso amount
///
/// # Example
/// ```
/// use freight_settlement_core_rs::format::format_currency;
///
/// assert_eq!(format_currency(1_234_567), "$\u{a0}1.234.567");
/// assert_eq!(format_currency(0), "$\u{a0}0");
/// assert_eq!(format_currency(-5_000), "-$\u{a0}5.000");
/// ```
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!(
        "{}{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        SYMBOL_SEPARATOR,
        group_thousands(amount.unsigned_abs())
    )
}

/// Format a fractional amount, rounding half up to whole pesos first
pub fn format_currency_f64(amount: f64) -> String {
    format_currency(round_half_up(amount))
}

/// Format a percentage with `decimals` decimal places and a trailing `%`
///
/// The last digit is rounded half up like every other figure, so ties go
/// upward (`12.25` at one decimal is `12.3%`). Non-finite input renders as
/// zero.
///
/// # Example
/// ```
/// use freight_settlement_core_rs::format::format_percentage;
///
/// assert_eq!(format_percentage(12.25, 1), "12.3%");
/// assert_eq!(format_percentage(2.5, 0), "3%");
/// ```
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_PERCENT_DECIMALS);
    let scale = 10_u64.pow(decimals as u32);
    let scaled = round_half_up(value * scale as f64);

    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs();
    let whole = magnitude / scale;
    if decimals == 0 {
        return format!("{}{}%", sign, whole);
    }
    let fraction = magnitude % scale;
    format!("{}{}.{:0width$}%", sign, whole, fraction, width = decimals)
}

/// Format a percentage with one decimal place
///
/// # Example
/// ```
/// use freight_settlement_core_rs::format::format_percent;
///
/// assert_eq!(format_percent(66.667), "66.7%");
/// assert_eq!(format_percent(100.0), "100.0%");
/// ```
pub fn format_percent(value: f64) -> String {
    format_percentage(value, DEFAULT_PERCENT_DECIMALS)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(12_345), "12.345");
        assert_eq!(group_thousands(123_456), "123.456");
        assert_eq!(group_thousands(1_000_000_000), "1.000.000.000");
    }

    #[test]
    fn test_percentage_pads_leading_fraction_zeros() {
        assert_eq!(format_percentage(1.0625, 2), "1.06%");
        assert_eq!(format_percentage(0.004, 3), "0.004%");
    }

    #[test]
    fn test_percentage_decimals_are_clamped() {
        assert_eq!(format_percentage(1.0, 40), "1.000000000%");
    }

    #[test]
    fn test_i64_min_does_not_overflow() {
        let formatted = format_currency(i64::MIN);
        assert!(formatted.starts_with("-$\u{a0}9.223"));
    }
}
