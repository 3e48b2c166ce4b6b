//! Rollup formulas for dashboards and settlement reports
//!
//! Every division is guarded: a zero denominator yields 0 rather than an
//! error.

use super::execution::execution_percentage;
use super::types::{PaymentFacts, PeriodStat, PeriodTrend};
use crate::core::rounding::{div_round_half_up, percent_of};
use chrono::{Datelike, NaiveDate};

/// `round(total_paid / trips_executed)`, 0 when no trips ran
pub fn cost_per_trip(total_paid: i64, trips_executed: u64) -> i64 {
    div_round_half_up(i128::from(total_paid), i128::from(trips_executed))
}

/// Percentage of planned trips fulfilled
pub fn compliance_rate(fulfilled: u64, planned: u64) -> i64 {
    execution_percentage(fulfilled, 0, planned)
}

/// `round(total_paid / months_elapsed)`, 0 when no months elapsed
pub fn monthly_average(total_paid: i64, months_elapsed: u64) -> i64 {
    div_round_half_up(i128::from(total_paid), i128::from(months_elapsed))
}

/// Period-over-period change in whole percent
///
/// When `previous` is 0 there is no base to compare against: growth from
/// nothing reports 100, otherwise 0.
///
/// # Example
/// ```
/// use freight_settlement_core_rs::statistics::variation_percent;
///
/// assert_eq!(variation_percent(150, 100), 50);
/// assert_eq!(variation_percent(50, 100), -50);
/// assert_eq!(variation_percent(10, 0), 100);
/// assert_eq!(variation_percent(0, 0), 0);
/// ```
pub fn variation_percent(current: i64, previous: i64) -> i64 {
    if previous == 0 {
        return if current > 0 { 100 } else { 0 };
    }
    percent_of(current - previous, previous)
}

/// Calendar months from `from` to `to`, counting the current month, at least 1
pub fn months_elapsed(from: NaiveDate, to: NaiveDate) -> u64 {
    let year_diff = i64::from(to.year()) - i64::from(from.year());
    let month_diff = i64::from(to.month()) - i64::from(from.month());
    let months = year_diff * 12 + month_diff + 1;
    months.max(1) as u64
}

/// Fleet-wide cost per trip: totals summed first, then divided once
///
/// Averaging per-entity averages would over-weight entities with few trips.
pub fn fleet_cost_per_trip<T: PaymentFacts>(entities: &[T]) -> i64 {
    let total_paid: i128 = entities.iter().map(|e| i128::from(e.total_paid())).sum();
    let trips: i128 = entities.iter().map(|e| i128::from(e.trip_count())).sum();
    div_round_half_up(total_paid, trips)
}

/// Pair each period with its variation on total paid versus the one before
///
/// Periods must be supplied in chronological order.
pub fn period_trend(periods: &[PeriodStat]) -> Vec<PeriodTrend> {
    let mut trend = Vec::with_capacity(periods.len());
    let mut previous: Option<i64> = None;

    for period in periods {
        let variation = previous.map(|prev| variation_percent(period.total_paid, prev));
        previous = Some(period.total_paid);
        trend.push(PeriodTrend {
            period: period.clone(),
            variation_percent: variation,
        });
    }

    trend
}
