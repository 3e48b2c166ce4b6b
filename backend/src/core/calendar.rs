//! Calendar utilities for settlement periods
//!
//! Settlements run over fortnights: days 1-15 of a month, then day 16 to the
//! end of the month. Each fortnight is split into week 1 (the first seven
//! days) and week 2 (the rest).
//!
//! Dates are `chrono::NaiveDate`, which carries no time-of-day, so
//! day differences are always whole calendar days.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days counted as week 1 of a fortnight under the standard rules
pub const DEFAULT_FIRST_WEEK_DAYS: i64 = 7;

/// Last day of the first fortnight of every month
const FIRST_FORTNIGHT_LAST_DAY: u32 = 15;

/// Errors from period placement
#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("Date {date} is before period start {start}")]
    DateBeforePeriodStart { date: NaiveDate, start: NaiveDate },

    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

/// Convert a Sunday-first weekday index (Sunday = 0) to ISO (Monday = 1 .. Sunday = 7)
///
/// # Example
/// ```
/// use freight_settlement_core_rs::core::calendar::iso_weekday;
///
/// assert_eq!(iso_weekday(0), 7);
/// assert_eq!(iso_weekday(3), 3);
/// ```
pub fn iso_weekday(sunday_based: u32) -> u32 {
    if sunday_based == 0 {
        7
    } else {
        sunday_based
    }
}

/// ISO weekday (Monday = 1 .. Sunday = 7) of a date
pub fn iso_weekday_of(date: NaiveDate) -> u32 {
    iso_weekday(date.weekday().num_days_from_sunday())
}

/// Week number (1 or 2) of `date` within the fortnight starting at `start`
///
/// Days 0..=6 after `start` are week 1, everything later is week 2.
/// A date before `start` is rejected.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use freight_settlement_core_rs::core::calendar::week_of_fortnight;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let day8 = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// assert_eq!(week_of_fortnight(start, start), Ok(1));
/// assert_eq!(week_of_fortnight(day8, start), Ok(2));
/// ```
pub fn week_of_fortnight(date: NaiveDate, start: NaiveDate) -> Result<u8, CalendarError> {
    week_of_fortnight_with(date, start, DEFAULT_FIRST_WEEK_DAYS)
}

/// Same as [`week_of_fortnight`] with a configurable week-1 length
pub fn week_of_fortnight_with(
    date: NaiveDate,
    start: NaiveDate,
    first_week_days: i64,
) -> Result<u8, CalendarError> {
    let elapsed = (date - start).num_days();
    if elapsed < 0 {
        return Err(CalendarError::DateBeforePeriodStart { date, start });
    }

    if elapsed < first_week_days {
        Ok(1)
    } else {
        Ok(2)
    }
}

/// Last calendar day of the month containing `date`
fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let mut last = date;
    while let Some(next) = last.succ_opt() {
        if next.month() != date.month() {
            break;
        }
        last = next;
    }
    last
}

/// A settlement period, inclusive on both ends
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use freight_settlement_core_rs::core::calendar::Fortnight;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
/// let period = Fortnight::containing(date);
/// assert_eq!(period.start(), NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
/// assert_eq!(period.end(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(period.len_days(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fortnight {
    start: NaiveDate,
    end: NaiveDate,
}

impl Fortnight {
    /// Create a period from explicit bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// The standard fortnight (1-15 or 16-end of month) containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let day = date.day();
        if day <= FIRST_FORTNIGHT_LAST_DAY {
            let start = date - Days::new(u64::from(day - 1));
            let end = start + Days::new(u64::from(FIRST_FORTNIGHT_LAST_DAY - 1));
            Self { start, end }
        } else {
            let start = date - Days::new(u64::from(day - (FIRST_FORTNIGHT_LAST_DAY + 1)));
            Self {
                start,
                end: last_day_of_month(date),
            }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the period (inclusive)
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the period, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Week number of `date` within this period
    pub fn week_of(&self, date: NaiveDate, first_week_days: i64) -> Result<u8, CalendarError> {
        week_of_fortnight_with(date, self.start, first_week_days)
    }

    /// The standard fortnight immediately after this one, `None` at the end
    /// of the representable calendar
    pub fn following(&self) -> Option<Self> {
        self.end.checked_add_days(Days::new(1)).map(Self::containing)
    }

    /// The standard fortnight immediately before this one, `None` at the start
    /// of the representable calendar
    pub fn preceding(&self) -> Option<Self> {
        self.start.checked_sub_days(Days::new(1)).map(Self::containing)
    }
}
