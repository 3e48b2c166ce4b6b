//! Execution rate
//!
//! Share of a period's planned trips that were fulfilled. Trips run through
//! a substituted route or vehicle (variations) count as fulfilled.

use crate::core::rounding::div_round_half_up;

/// `round((executed + variations) / planned_total * 100)`, 0 when nothing was planned
///
/// The result can exceed 100 when more trips ran than were planned.
///
/// # Example
/// ```
/// use freight_settlement_core_rs::execution_percentage;
///
/// assert_eq!(execution_percentage(8, 2, 10), 100);
/// assert_eq!(execution_percentage(2, 0, 3), 67);
/// assert_eq!(execution_percentage(0, 0, 0), 0);
/// ```
pub fn execution_percentage(executed: u64, variations: u64, planned_total: u64) -> i64 {
    let fulfilled = i128::from(executed) + i128::from(variations);
    div_round_half_up(fulfilled * 100, i128::from(planned_total))
}
