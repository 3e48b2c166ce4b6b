//! Trip cost calculation
//!
//! Turns a route's weekly cost plan and an ISO weekday into the cost
//! breakdown billed for one trip:
//! 1. Select the first plan entry for the weekday (or the plan's first
//!    entry when fallback is requested)
//! 2. Take fuel, extras and distance as-is
//! 3. Bill the configured share of the overnight allowance, rounded half up
//! 4. Amortize the cycle toll total over every entry in the plan
//! 5. Total = fuel + tolls + extras + overnight
//!
//! Missing data never fails: it yields the zero breakdown.

use crate::config::EngineConfig;
use crate::core::calendar::iso_weekday_of;
use crate::core::rounding::div_round_half_up;
use crate::models::cost_plan::{DayCost, PlanDay, WeeklyCostPlan};
use crate::models::trip::TripCostBreakdown;
use chrono::NaiveDate;

/// ISO day number → plan day, index 0 is Monday (ISO 1)
const ISO_DAY_TABLE: [PlanDay; 7] = [
    PlanDay::Monday,
    PlanDay::Tuesday,
    PlanDay::Wednesday,
    PlanDay::Thursday,
    PlanDay::Friday,
    PlanDay::Saturday,
    PlanDay::Sunday,
];

/// Plan day for an ISO weekday (1..=7)
pub fn plan_day_for_iso(iso_weekday: u32) -> Option<PlanDay> {
    let index = iso_weekday.checked_sub(1)? as usize;
    ISO_DAY_TABLE.get(index).copied()
}

/// Compute a trip's cost with the standard rules
///
/// # Arguments
///
/// * `plan` - The route's cost plan, if it has one
/// * `iso_weekday` - Day the trip runs (Monday = 1 .. Sunday = 7)
/// * `fallback_to_first_day` - Use the plan's first entry when the weekday
///   is not scheduled (route variations share the plan's cost figures)
///
/// # Example
/// ```
/// use freight_settlement_core_rs::{compute_trip_cost, DayCost, PlanDay, WeeklyCostPlan};
///
/// let plan = WeeklyCostPlan::new(50_000).with_day(
///     DayCost::new(PlanDay::Monday)
///         .with_distance(250.0)
///         .with_fuel(120_000)
///         .with_extras(15_000)
///         .with_overnight(60_000),
/// );
///
/// let cost = compute_trip_cost(Some(&plan), 1, false);
/// assert_eq!(cost.overnight_cost, 30_000);
/// assert_eq!(cost.toll_cost, 50_000);
/// assert_eq!(cost.total_cost, 215_000);
/// ```
pub fn compute_trip_cost(
    plan: Option<&WeeklyCostPlan>,
    iso_weekday: u32,
    fallback_to_first_day: bool,
) -> TripCostBreakdown {
    TripCostCalculator::default().compute(plan, iso_weekday, fallback_to_first_day)
}

/// Trip cost calculator bound to a set of rule parameters
#[derive(Debug, Clone, Default)]
pub struct TripCostCalculator {
    config: EngineConfig,
}

impl TripCostCalculator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cost of a trip running on `iso_weekday`
    pub fn compute(
        &self,
        plan: Option<&WeeklyCostPlan>,
        iso_weekday: u32,
        fallback_to_first_day: bool,
    ) -> TripCostBreakdown {
        let Some(plan) = plan else {
            tracing::debug!(iso_weekday, "no cost plan, zero trip cost");
            return TripCostBreakdown::default();
        };

        if plan.is_empty() {
            tracing::debug!(iso_weekday, "cost plan has no days, zero trip cost");
            return TripCostBreakdown::default();
        }

        let Some(day) = self.select_day(plan, iso_weekday, fallback_to_first_day) else {
            tracing::debug!(iso_weekday, "weekday not in cost plan, zero trip cost");
            return TripCostBreakdown::default();
        };

        let breakdown = self.price_day(plan, day);
        tracing::trace!(
            iso_weekday,
            weekday = %day.weekday,
            total = breakdown.total_cost,
            "trip cost computed"
        );
        breakdown
    }

    /// Cost of a trip running on `date`
    pub fn compute_for_date(
        &self,
        plan: Option<&WeeklyCostPlan>,
        date: NaiveDate,
        fallback_to_first_day: bool,
    ) -> TripCostBreakdown {
        self.compute(plan, iso_weekday_of(date), fallback_to_first_day)
    }

    fn select_day<'a>(
        &self,
        plan: &'a WeeklyCostPlan,
        iso_weekday: u32,
        fallback_to_first_day: bool,
    ) -> Option<&'a DayCost> {
        let matched = plan_day_for_iso(iso_weekday).and_then(|day| plan.find_day(day));
        match matched {
            Some(day) => Some(day),
            None if fallback_to_first_day => {
                tracing::debug!(iso_weekday, "weekday not in cost plan, using first day");
                plan.first_day()
            }
            None => None,
        }
    }

    fn price_day(&self, plan: &WeeklyCostPlan, day: &DayCost) -> TripCostBreakdown {
        let overnight_cost = self.overnight_share(day.overnight_allowance);
        let requires_overnight = overnight_cost > 0;
        let toll_cost = div_round_half_up(
            i128::from(plan.tolls_per_cycle),
            plan.day_count() as i128,
        );

        TripCostBreakdown {
            fuel_cost: day.fuel_cost,
            toll_cost,
            extras_cost: day.extras_cost,
            overnight_cost,
            requires_overnight,
            overnight_nights: u8::from(requires_overnight),
            distance_km: day.distance_km,
            total_cost: day.fuel_cost + toll_cost + day.extras_cost + overnight_cost,
        }
    }

    /// Billable part of a full overnight allowance
    fn overnight_share(&self, full_allowance: i64) -> i64 {
        div_round_half_up(
            i128::from(full_allowance) * i128::from(self.config.overnight_billable_percent),
            100,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_table_covers_week() {
        assert_eq!(plan_day_for_iso(1), Some(PlanDay::Monday));
        assert_eq!(plan_day_for_iso(3), Some(PlanDay::Wednesday));
        assert_eq!(plan_day_for_iso(7), Some(PlanDay::Sunday));
        for iso in 1..=7 {
            assert_eq!(plan_day_for_iso(iso).map(|d| d.iso_number()), Some(iso));
        }
    }

    #[test]
    fn test_iso_out_of_range() {
        assert_eq!(plan_day_for_iso(0), None);
        assert_eq!(plan_day_for_iso(8), None);
    }

    #[test]
    fn test_odd_overnight_allowance_rounds_up() {
        let calculator = TripCostCalculator::default();
        assert_eq!(calculator.overnight_share(60_001), 30_001);
        assert_eq!(calculator.overnight_share(1), 1);
        assert_eq!(calculator.overnight_share(0), 0);
    }

    #[test]
    fn test_full_overnight_share() {
        let calculator = TripCostCalculator::new(EngineConfig {
            overnight_billable_percent: 100,
            ..EngineConfig::default()
        });
        assert_eq!(calculator.overnight_share(60_000), 60_000);
    }
}
