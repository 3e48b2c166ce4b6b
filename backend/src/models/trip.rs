//! Per-trip cost breakdown
//!
//! CRITICAL: All money values are i64 (whole pesos)

use serde::{Deserialize, Serialize};

/// Costs billed for a single executed trip
///
/// The all-zero value (`Default`) is returned whenever no cost plan or no
/// matching day exists; it is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripCostBreakdown {
    pub fuel_cost: i64,

    /// This trip's share of the cycle toll total
    pub toll_cost: i64,

    pub extras_cost: i64,

    /// Billable overnight allowance for this trip
    pub overnight_cost: i64,

    pub requires_overnight: bool,

    /// Nights of overnight stay (0 or 1)
    pub overnight_nights: u8,

    /// Distance traveled (km)
    pub distance_km: f64,

    /// fuel + tolls + extras + overnight
    pub total_cost: i64,
}

impl TripCostBreakdown {
    /// Whether this is the zero-value breakdown
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
