//! Freight Settlement Core - Rust Engine
//!
//! Trip cost and settlement calculation for third-party transport vehicles
//! paid over fortnightly periods.
//!
//! # Architecture
//!
//! - **core**: Calendar placement (ISO weekdays, fortnights) and rounding
//! - **models**: Domain types (WeeklyCostPlan, DayCost, TripCostBreakdown)
//! - **costs**: Trip cost calculator and retention
//! - **schedule**: Pricing every trip of a period
//! - **settlement**: Aggregation into a payable settlement
//! - **statistics**: Rollups, rates and rankings for reporting
//! - **format**: Peso and percentage display strings
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole pesos)
//! 2. All rounding is half up, through `core::rounding`
//! 3. No I/O and no shared state: same inputs, same outputs

// Module declarations
pub mod config;
pub mod core;
pub mod costs;
pub mod format;
pub mod models;
pub mod schedule;
pub mod settlement;
pub mod statistics;

// Re-exports for convenience
pub use config::{ConfigError, EngineConfig};
pub use crate::core::calendar::{
    iso_weekday, iso_weekday_of, week_of_fortnight, CalendarError, Fortnight,
};
pub use costs::{compute_trip_cost, deduction, TripCostCalculator};
pub use models::{
    cost_plan::{CycleFrequency, DayCost, DayNameError, PlanDay, WeeklyCostPlan},
    trip::TripCostBreakdown,
};
pub use schedule::{schedule_period, schedule_variation, ScheduledTrip};
pub use settlement::{Settlement, SettlementError, SettlementLine};
pub use statistics::execution_percentage;
