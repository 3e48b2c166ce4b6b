//! Retention (deduction) on gross amounts
//!
//! Third-party settlements withhold a fixed rate of the gross amount.
//! The standard rate is 1% (100 bps), rounded half up to whole pesos.

use crate::config::BPS_PER_UNIT;
use crate::core::rounding::div_round_half_up;

/// Standard retention rate in basis points
pub const STANDARD_RETENTION_BPS: i64 = 100;

/// Standard 1% deduction of a gross amount
///
/// # Example
/// ```
/// use freight_settlement_core_rs::deduction;
///
/// assert_eq!(deduction(100_000), 1_000);
/// assert_eq!(deduction(12_345), 123);
/// assert_eq!(deduction(12_567), 126);
/// assert_eq!(deduction(0), 0);
/// ```
pub fn deduction(gross: i64) -> i64 {
    deduction_at_rate(gross, STANDARD_RETENTION_BPS)
}

/// Deduction of a gross amount at `rate_bps` basis points
pub fn deduction_at_rate(gross: i64, rate_bps: i64) -> i64 {
    div_round_half_up(
        i128::from(gross) * i128::from(rate_bps),
        i128::from(BPS_PER_UNIT),
    )
}
