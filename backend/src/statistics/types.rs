//! Aggregation result types
//!
//! Built fresh per call from facts supplied by the reporting layer and never
//! mutated afterwards. Derived figures (cost per trip, execution rate) are
//! computed at construction.

use super::aggregate::cost_per_trip;
use super::execution::execution_percentage;
use crate::core::rounding::percent_of;
use serde::{Deserialize, Serialize};

/// Common facts every rankable entity exposes
pub trait PaymentFacts {
    /// Total amount paid (pesos)
    fn total_paid(&self) -> i64;

    /// Trips executed
    fn trip_count(&self) -> u64;
}

/// Per-contractor totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorStat {
    pub id: String,
    pub name: String,
    pub vehicle_count: u64,
    pub trip_count: u64,
    pub total_paid: i64,
    pub cost_per_trip: i64,
}

impl ContractorStat {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vehicle_count: u64,
        trip_count: u64,
        total_paid: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vehicle_count,
            trip_count,
            total_paid,
            cost_per_trip: cost_per_trip(total_paid, trip_count),
        }
    }
}

impl PaymentFacts for ContractorStat {
    fn total_paid(&self) -> i64 {
        self.total_paid
    }

    fn trip_count(&self) -> u64 {
        self.trip_count
    }
}

/// Per-vehicle totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStat {
    pub id: String,
    /// Display name (plate)
    pub name: String,
    /// Owning contractor
    pub contractor_id: String,
    pub trip_count: u64,
    pub total_paid: i64,
    pub cost_per_trip: i64,
}

impl VehicleStat {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contractor_id: impl Into<String>,
        trip_count: u64,
        total_paid: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contractor_id: contractor_id.into(),
            trip_count,
            total_paid,
            cost_per_trip: cost_per_trip(total_paid, trip_count),
        }
    }
}

impl PaymentFacts for VehicleStat {
    fn total_paid(&self) -> i64 {
        self.total_paid
    }

    fn trip_count(&self) -> u64 {
        self.trip_count
    }
}

/// Per-route totals and fulfillment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStat {
    pub id: String,
    pub name: String,
    pub planned_trips: u64,
    pub executed_trips: u64,
    /// Trips run through a substituted route or vehicle
    pub variation_trips: u64,
    pub total_paid: i64,
    pub cost_per_trip: i64,
    pub execution_percent: i64,
}

impl RouteStat {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        planned_trips: u64,
        executed_trips: u64,
        variation_trips: u64,
        total_paid: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            planned_trips,
            executed_trips,
            variation_trips,
            total_paid,
            cost_per_trip: cost_per_trip(total_paid, executed_trips + variation_trips),
            execution_percent: execution_percentage(executed_trips, variation_trips, planned_trips),
        }
    }
}

impl PaymentFacts for RouteStat {
    fn total_paid(&self) -> i64 {
        self.total_paid
    }

    fn trip_count(&self) -> u64 {
        self.executed_trips + self.variation_trips
    }
}

/// Totals for one settlement period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStat {
    pub id: String,
    /// Display label (e.g. "2024-03 Q1")
    pub name: String,
    pub vehicle_count: u64,
    pub trip_count: u64,
    pub total_paid: i64,
    pub cost_per_trip: i64,
}

impl PeriodStat {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vehicle_count: u64,
        trip_count: u64,
        total_paid: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vehicle_count,
            trip_count,
            total_paid,
            cost_per_trip: cost_per_trip(total_paid, trip_count),
        }
    }
}

impl PaymentFacts for PeriodStat {
    fn total_paid(&self) -> i64 {
        self.total_paid
    }

    fn trip_count(&self) -> u64 {
        self.trip_count
    }
}

/// A period paired with its change versus the period before it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTrend {
    pub period: PeriodStat,
    /// None for the first period of a series
    pub variation_percent: Option<i64>,
}

/// Monetary buckets for cost distribution charts
///
/// Buckets need not add up to `total`; shares are always taken against
/// the supplied `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdownTotals {
    pub base_freight: i64,
    pub fuel: i64,
    pub tolls: i64,
    pub overnight: i64,
    pub extra_freight: i64,
    pub deductions: i64,
    pub total: i64,
}

/// Whole-percent share of each bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdownShares {
    pub base_freight: i64,
    pub fuel: i64,
    pub tolls: i64,
    pub overnight: i64,
    pub extra_freight: i64,
    pub deductions: i64,
}

impl CostBreakdownTotals {
    /// Percentage of `total` per bucket; all zero when `total` is 0
    ///
    /// # Example
    /// ```
    /// use freight_settlement_core_rs::statistics::CostBreakdownTotals;
    ///
    /// let totals = CostBreakdownTotals {
    ///     fuel: 500,
    ///     tolls: 250,
    ///     total: 1_000,
    ///     ..Default::default()
    /// };
    /// let shares = totals.percentages();
    /// assert_eq!(shares.fuel, 50);
    /// assert_eq!(shares.tolls, 25);
    /// assert_eq!(shares.overnight, 0);
    /// ```
    pub fn percentages(&self) -> CostBreakdownShares {
        CostBreakdownShares {
            base_freight: percent_of(self.base_freight, self.total),
            fuel: percent_of(self.fuel, self.total),
            tolls: percent_of(self.tolls, self.total),
            overnight: percent_of(self.overnight, self.total),
            extra_freight: percent_of(self.extra_freight, self.total),
            deductions: percent_of(self.deductions, self.total),
        }
    }
}
