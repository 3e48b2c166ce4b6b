//! Cost calculators
//!
//! - **trip**: per-trip cost breakdown from a route's weekly cost plan
//! - **retention**: deduction withheld from gross settlement amounts

pub mod retention;
pub mod trip;

// Re-export public API
pub use retention::{deduction, deduction_at_rate, STANDARD_RETENTION_BPS};
pub use trip::{compute_trip_cost, plan_day_for_iso, TripCostCalculator};
