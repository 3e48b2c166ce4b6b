//! Trip scheduling over a settlement period
//!
//! Walks the dates of a fortnight and prices one trip for every date the
//! route's cost plan runs on. The caller persists the results; nothing here
//! touches storage.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use freight_settlement_core_rs::core::calendar::Fortnight;
//! use freight_settlement_core_rs::schedule::schedule_period;
//! use freight_settlement_core_rs::{DayCost, PlanDay, TripCostCalculator, WeeklyCostPlan};
//!
//! let plan = WeeklyCostPlan::new(20_000)
//!     .with_day(DayCost::new(PlanDay::Monday).with_fuel(80_000))
//!     .with_day(DayCost::new(PlanDay::Thursday).with_fuel(70_000));
//!
//! // 2024-04-01 is a Monday
//! let period = Fortnight::containing(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
//! let trips = schedule_period(&TripCostCalculator::default(), &plan, &period).unwrap();
//!
//! // Mondays 1, 8, 15 and Thursdays 4, 11
//! assert_eq!(trips.len(), 5);
//! assert_eq!(trips[0].cost.total_cost, 90_000);
//! ```

use crate::core::calendar::{iso_weekday_of, CalendarError, Fortnight};
use crate::costs::trip::{plan_day_for_iso, TripCostCalculator};
use crate::models::cost_plan::WeeklyCostPlan;
use crate::models::trip::TripCostBreakdown;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One priced trip placed in a settlement period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTrip {
    pub date: NaiveDate,
    /// Monday = 1 .. Sunday = 7
    pub iso_weekday: u32,
    /// Week within the fortnight (1 or 2)
    pub week: u8,
    pub cost: TripCostBreakdown,
    /// Priced from the plan's first day because the weekday is not scheduled
    pub is_variation: bool,
}

/// Price a trip for every date in `period` that the plan runs on
pub fn schedule_period(
    calculator: &TripCostCalculator,
    plan: &WeeklyCostPlan,
    period: &Fortnight,
) -> Result<Vec<ScheduledTrip>, CalendarError> {
    let first_week_days = calculator.config().first_week_days;
    let mut trips = Vec::new();

    for date in period.days() {
        let iso_weekday = iso_weekday_of(date);
        let scheduled = plan_day_for_iso(iso_weekday).is_some_and(|day| plan.runs_on(day));
        if !scheduled {
            continue;
        }

        trips.push(ScheduledTrip {
            date,
            iso_weekday,
            week: period.week_of(date, first_week_days)?,
            cost: calculator.compute(Some(plan), iso_weekday, false),
            is_variation: false,
        });
    }

    tracing::debug!(
        start = %period.start(),
        end = %period.end(),
        trips = trips.len(),
        "period scheduled"
    );
    Ok(trips)
}

/// Price a route variation: a trip on `date` regardless of the plan's weekdays
///
/// When the plan does not run on that weekday the first plan day's figures
/// are used.
pub fn schedule_variation(
    calculator: &TripCostCalculator,
    plan: &WeeklyCostPlan,
    period: &Fortnight,
    date: NaiveDate,
) -> Result<ScheduledTrip, CalendarError> {
    let week = period.week_of(date, calculator.config().first_week_days)?;
    let iso_weekday = iso_weekday_of(date);
    let is_variation = !plan_day_for_iso(iso_weekday).is_some_and(|day| plan.runs_on(day));

    Ok(ScheduledTrip {
        date,
        iso_weekday,
        week,
        cost: calculator.compute(Some(plan), iso_weekday, true),
        is_variation,
    })
}
