//! Domain models for the settlement engine

pub mod cost_plan;
pub mod trip;

// Re-exports
pub use cost_plan::{CycleFrequency, DayCost, DayNameError, PlanDay, WeeklyCostPlan};
pub use trip::TripCostBreakdown;
