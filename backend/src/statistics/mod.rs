//! Statistics Module
//!
//! Pure rollups over per-entity facts supplied by the reporting layer:
//! - Cost per trip, monthly averages, period-over-period variation
//! - Execution (fulfillment) rate including route variations
//! - Cost distribution shares
//! - Stable ranking by amount paid
//!
//! # Critical Invariants
//!
//! 1. **Guarded division**: a zero denominator yields 0, never an error
//! 2. **Round half up**: every figure is a whole number
//! 3. **Fleet averages sum first**: totals are summed, then divided once

pub mod aggregate;
pub mod execution;
pub mod ranking;
pub mod types;

// Re-export public API
pub use aggregate::{
    compliance_rate, cost_per_trip, fleet_cost_per_trip, monthly_average, months_elapsed,
    period_trend, variation_percent,
};
pub use execution::execution_percentage;
pub use ranking::{rank_by_total_paid, top_n};
pub use types::{
    ContractorStat, CostBreakdownShares, CostBreakdownTotals, PaymentFacts, PeriodStat,
    PeriodTrend, RouteStat, VehicleStat,
};
