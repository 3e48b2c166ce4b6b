//! Settlement Module
//!
//! Aggregates priced trips of a fortnight into the amount payable to a
//! third-party contractor:
//! - Sum each cost component across trips
//! - Gross = sum of trip totals
//! - Deduction = retention on gross (1% by default)
//! - Net = gross - deduction
//!
//! # Critical Invariants
//!
//! 1. **Integrity**: gross always equals the sum of line totals
//! 2. **Net conservation**: net + deduction == gross
//! 3. **Determinism**: the same lines always produce the same settlement
//! 4. **Period membership**: every line is dated inside the period
//!
//! [`Settlement::validate`] re-checks these before a settlement is handed
//! to storage or payment export.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use freight_settlement_core_rs::core::calendar::Fortnight;
//! use freight_settlement_core_rs::settlement::{Settlement, SettlementLine};
//! use freight_settlement_core_rs::{EngineConfig, TripCostBreakdown};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let cost = TripCostBreakdown { fuel_cost: 100_000, total_cost: 100_000, ..Default::default() };
//! let lines = vec![
//!     SettlementLine::new("TRK-001", date, cost.clone()),
//!     SettlementLine::new("TRK-002", date, cost),
//! ];
//!
//! let settlement = Settlement::from_lines(Fortnight::containing(date), lines, &EngineConfig::default());
//! assert_eq!(settlement.gross, 200_000);
//! assert_eq!(settlement.deduction, 2_000);
//! assert_eq!(settlement.net, 198_000);
//! ```

use crate::config::EngineConfig;
use crate::core::calendar::Fortnight;
use crate::costs::retention::deduction_at_rate;
use crate::models::trip::TripCostBreakdown;
use crate::statistics::types::CostBreakdownTotals;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a settlement fails its integrity checks
#[derive(Debug, Error, PartialEq)]
pub enum SettlementError {
    #[error("Trip count {trip_count} does not match {lines} lines")]
    TripCountMismatch { trip_count: u64, lines: usize },

    #[error("Gross {gross} does not match line total {line_total}")]
    GrossMismatch { gross: i64, line_total: i64 },

    #[error("Deduction {deduction} does not match expected {expected}")]
    DeductionMismatch { deduction: i64, expected: i64 },

    #[error("Net {net} + deduction {deduction} != gross {gross}")]
    NetMismatch { net: i64, deduction: i64, gross: i64 },

    #[error("Trip of {vehicle_id} on {date} is outside period {start}..{end}")]
    LineOutsidePeriod {
        vehicle_id: String,
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// One executed trip billed in a settlement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementLine {
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub cost: TripCostBreakdown,
}

impl SettlementLine {
    pub fn new(vehicle_id: impl Into<String>, date: NaiveDate, cost: TripCostBreakdown) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            date,
            cost,
        }
    }
}

/// Gross billed per vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleTotal {
    pub vehicle_id: String,
    pub trip_count: u64,
    pub gross: i64,
}

/// Payable amount for one fortnight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub period: Fortnight,
    pub lines: Vec<SettlementLine>,
    pub trip_count: u64,
    pub fuel: i64,
    pub tolls: i64,
    pub extras: i64,
    pub overnight: i64,
    pub overnight_nights: u64,
    pub distance_km: f64,
    /// Sum of trip totals
    pub gross: i64,
    /// Retention withheld from gross
    pub deduction: i64,
    /// gross - deduction
    pub net: i64,
}

impl Settlement {
    /// Aggregate priced trips into a settlement
    pub fn from_lines(period: Fortnight, lines: Vec<SettlementLine>, config: &EngineConfig) -> Self {
        let mut settlement = Self {
            period,
            lines: Vec::new(),
            trip_count: 0,
            fuel: 0,
            tolls: 0,
            extras: 0,
            overnight: 0,
            overnight_nights: 0,
            distance_km: 0.0,
            gross: 0,
            deduction: 0,
            net: 0,
        };

        for line in &lines {
            let cost = &line.cost;
            settlement.trip_count += 1;
            settlement.fuel += cost.fuel_cost;
            settlement.tolls += cost.toll_cost;
            settlement.extras += cost.extras_cost;
            settlement.overnight += cost.overnight_cost;
            settlement.overnight_nights += u64::from(cost.overnight_nights);
            settlement.distance_km += cost.distance_km;
            settlement.gross += cost.total_cost;
        }

        settlement.deduction = deduction_at_rate(settlement.gross, config.retention_rate_bps);
        settlement.net = settlement.gross - settlement.deduction;
        settlement.lines = lines;

        tracing::debug!(
            start = %period.start(),
            trips = settlement.trip_count,
            gross = settlement.gross,
            net = settlement.net,
            "settlement aggregated"
        );
        settlement
    }

    /// Check the settlement against its own lines and the retention rate
    ///
    /// Catches settlements whose totals were edited after aggregation or
    /// that were aggregated under a different rate than `config`.
    pub fn validate(&self, config: &EngineConfig) -> Result<(), SettlementError> {
        if self.trip_count != self.lines.len() as u64 {
            return Err(SettlementError::TripCountMismatch {
                trip_count: self.trip_count,
                lines: self.lines.len(),
            });
        }

        let line_total: i64 = self.lines.iter().map(|l| l.cost.total_cost).sum();
        if line_total != self.gross {
            return Err(SettlementError::GrossMismatch {
                gross: self.gross,
                line_total,
            });
        }

        let expected = deduction_at_rate(self.gross, config.retention_rate_bps);
        if self.deduction != expected {
            return Err(SettlementError::DeductionMismatch {
                deduction: self.deduction,
                expected,
            });
        }

        if self.net + self.deduction != self.gross {
            return Err(SettlementError::NetMismatch {
                net: self.net,
                deduction: self.deduction,
                gross: self.gross,
            });
        }

        if let Some(line) = self.lines.iter().find(|l| !self.period.contains(l.date)) {
            return Err(SettlementError::LineOutsidePeriod {
                vehicle_id: line.vehicle_id.clone(),
                date: line.date,
                start: self.period.start(),
                end: self.period.end(),
            });
        }

        Ok(())
    }

    /// Gross per vehicle, in order of first appearance
    pub fn vehicle_totals(&self) -> Vec<VehicleTotal> {
        let mut totals: Vec<VehicleTotal> = Vec::new();
        for line in &self.lines {
            match totals.iter_mut().find(|t| t.vehicle_id == line.vehicle_id) {
                Some(total) => {
                    total.trip_count += 1;
                    total.gross += line.cost.total_cost;
                }
                None => totals.push(VehicleTotal {
                    vehicle_id: line.vehicle_id.clone(),
                    trip_count: 1,
                    gross: line.cost.total_cost,
                }),
            }
        }
        totals
    }

    /// Cost distribution buckets for charts
    ///
    /// Trip-priced settlements carry no base freight; extras map to extra
    /// freight.
    pub fn cost_breakdown(&self) -> CostBreakdownTotals {
        CostBreakdownTotals {
            base_freight: 0,
            fuel: self.fuel,
            tolls: self.tolls,
            overnight: self.overnight,
            extra_freight: self.extras,
            deductions: self.deduction,
            total: self.gross,
        }
    }
}
