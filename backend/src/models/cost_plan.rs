//! Route cost plan model
//!
//! A route's weekly cost plan lists the cost figures of each scheduled day
//! plus the cycle-level toll total. Plans arrive from the route catalogue
//! already validated; the engine only reads them.
//!
//! CRITICAL: All money values are i64 (whole pesos)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a weekday name
#[derive(Debug, Error, PartialEq)]
pub enum DayNameError {
    #[error("Unknown weekday name: {0}")]
    Unknown(String),
}

/// Day of the week as named in cost plans
///
/// Serialized as the canonical lowercase Spanish names used by the route
/// catalogue (`lunes`, `martes`, `miercoles`, `jueves`, `viernes`,
/// `sabado`, `domingo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanDay {
    #[serde(rename = "lunes")]
    Monday,
    #[serde(rename = "martes")]
    Tuesday,
    #[serde(rename = "miercoles")]
    Wednesday,
    #[serde(rename = "jueves")]
    Thursday,
    #[serde(rename = "viernes")]
    Friday,
    #[serde(rename = "sabado")]
    Saturday,
    #[serde(rename = "domingo")]
    Sunday,
}

impl PlanDay {
    /// Canonical catalogue name
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDay::Monday => "lunes",
            PlanDay::Tuesday => "martes",
            PlanDay::Wednesday => "miercoles",
            PlanDay::Thursday => "jueves",
            PlanDay::Friday => "viernes",
            PlanDay::Saturday => "sabado",
            PlanDay::Sunday => "domingo",
        }
    }

    /// ISO day number (Monday = 1 .. Sunday = 7)
    pub fn iso_number(&self) -> u32 {
        match self {
            PlanDay::Monday => 1,
            PlanDay::Tuesday => 2,
            PlanDay::Wednesday => 3,
            PlanDay::Thursday => 4,
            PlanDay::Friday => 5,
            PlanDay::Saturday => 6,
            PlanDay::Sunday => 7,
        }
    }
}

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanDay {
    type Err = DayNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunes" => Ok(PlanDay::Monday),
            "martes" => Ok(PlanDay::Tuesday),
            "miercoles" => Ok(PlanDay::Wednesday),
            "jueves" => Ok(PlanDay::Thursday),
            "viernes" => Ok(PlanDay::Friday),
            "sabado" => Ok(PlanDay::Saturday),
            "domingo" => Ok(PlanDay::Sunday),
            other => Err(DayNameError::Unknown(other.to_string())),
        }
    }
}

/// Cycle cadence label, carried through untouched
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CycleFrequency {
    #[default]
    Weekly,
    Biweekly,
    Monthly,
    Other(String),
}

impl From<String> for CycleFrequency {
    fn from(label: String) -> Self {
        match label.as_str() {
            "weekly" => CycleFrequency::Weekly,
            "biweekly" => CycleFrequency::Biweekly,
            "monthly" => CycleFrequency::Monthly,
            _ => CycleFrequency::Other(label),
        }
    }
}

impl From<CycleFrequency> for String {
    fn from(frequency: CycleFrequency) -> Self {
        match frequency {
            CycleFrequency::Weekly => "weekly".to_string(),
            CycleFrequency::Biweekly => "biweekly".to_string(),
            CycleFrequency::Monthly => "monthly".to_string(),
            CycleFrequency::Other(label) => label,
        }
    }
}

fn default_week() -> u8 {
    1
}

/// Cost figures for one scheduled day of a route
///
/// Numeric fields missing from serialized input read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCost {
    pub weekday: PlanDay,

    /// Week number within the cycle
    #[serde(default = "default_week")]
    pub week: u8,

    /// Total distance driven (km)
    #[serde(default)]
    pub distance_km: f64,

    #[serde(default)]
    pub fuel_cost: i64,

    /// Extra/incidental cost
    #[serde(default)]
    pub extras_cost: i64,

    /// Full (100%) crew overnight allowance
    #[serde(default)]
    pub overnight_allowance: i64,
}

impl DayCost {
    /// A day with every figure zero
    pub fn new(weekday: PlanDay) -> Self {
        Self {
            weekday,
            week: default_week(),
            distance_km: 0.0,
            fuel_cost: 0,
            extras_cost: 0,
            overnight_allowance: 0,
        }
    }

    pub fn with_week(mut self, week: u8) -> Self {
        self.week = week;
        self
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance_km = km;
        self
    }

    pub fn with_fuel(mut self, amount: i64) -> Self {
        self.fuel_cost = amount;
        self
    }

    pub fn with_extras(mut self, amount: i64) -> Self {
        self.extras_cost = amount;
        self
    }

    pub fn with_overnight(mut self, amount: i64) -> Self {
        self.overnight_allowance = amount;
        self
    }
}

/// A route's cost plan for one cycle
///
/// Entries need not be unique by weekday. Lookups return the first match,
/// but every entry counts toward the toll divisor.
///
/// # Example
/// ```
/// use freight_settlement_core_rs::{DayCost, PlanDay, WeeklyCostPlan};
///
/// let plan = WeeklyCostPlan::new(30_000)
///     .with_day(DayCost::new(PlanDay::Monday).with_fuel(100_000))
///     .with_day(DayCost::new(PlanDay::Friday).with_fuel(90_000));
///
/// assert_eq!(plan.day_count(), 2);
/// assert_eq!(plan.find_day(PlanDay::Friday).unwrap().fuel_cost, 90_000);
/// assert!(plan.find_day(PlanDay::Sunday).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyCostPlan {
    #[serde(default)]
    pub days: Vec<DayCost>,

    /// Toll total for the whole cycle, not per day
    #[serde(default)]
    pub tolls_per_cycle: i64,

    #[serde(default)]
    pub frequency: CycleFrequency,
}

impl WeeklyCostPlan {
    /// Empty weekly plan with the given cycle toll total
    pub fn new(tolls_per_cycle: i64) -> Self {
        Self {
            days: Vec::new(),
            tolls_per_cycle,
            frequency: CycleFrequency::Weekly,
        }
    }

    pub fn with_day(mut self, day: DayCost) -> Self {
        self.days.push(day);
        self
    }

    pub fn with_frequency(mut self, frequency: CycleFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// First entry scheduled on `weekday`
    pub fn find_day(&self, weekday: PlanDay) -> Option<&DayCost> {
        self.days.iter().find(|d| d.weekday == weekday)
    }

    pub fn first_day(&self) -> Option<&DayCost> {
        self.days.first()
    }

    /// Number of entries, duplicates included
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether any entry is scheduled on `weekday`
    pub fn runs_on(&self, weekday: PlanDay) -> bool {
        self.find_day(weekday).is_some()
    }
}
