//! Calendar placement and rounding primitives shared by every calculator

pub mod calendar;
pub mod rounding;
