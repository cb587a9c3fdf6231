//! Month grid layout and navigation.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Serialize, Serializer};

use datebook_core::error::CoreError;

use crate::error::ServiceResult;

const MONTHS_PER_YEAR: i64 = 12;
const DAYS_PER_WEEK: usize = 7;

/// One calendar row, Monday first. `None` pads days outside the month.
pub type Week = [Option<u32>; DAYS_PER_WEEK];

/// A normalized `(year, month)` pair with `month` in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    /// ## Summary
    /// Normalizes an out-of-range month by carrying into the year, so month 13
    /// is January of the next year and month 0 is December of the previous.
    ///
    /// ## Errors
    /// Returns `InvalidInput` if the carried year does not fit in an `i32`.
    pub fn normalize(year: i32, month: i32) -> ServiceResult<Self> {
        let total = i64::from(year) * MONTHS_PER_YEAR + i64::from(month) - 1;

        let year = i32::try_from(total.div_euclid(MONTHS_PER_YEAR))
            .map_err(|_e| CoreError::InvalidInput(format!("Year out of range: {year}")))?;
        let month = u32::try_from(total.rem_euclid(MONTHS_PER_YEAR) + 1)
            .map_err(|_e| CoreError::InvariantViolation("rem_euclid(12) + 1 is in 1..=12"))?;

        Ok(Self { year, month })
    }

    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// ## Errors
    /// Returns `InvalidInput` if the year is outside the supported date range.
    pub fn first_day(self) -> ServiceResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            CoreError::InvalidInput(format!("Unsupported year: {}", self.year)).into()
        })
    }

    /// English month name, e.g. "January".
    ///
    /// ## Errors
    /// Returns `InvariantViolation` if the month is not in `1..=12`.
    pub fn name(self) -> ServiceResult<&'static str> {
        u8::try_from(self.month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .map(|month| month.name())
            .ok_or_else(|| CoreError::InvariantViolation("month outside 1..=12").into())
    }
}

impl From<NaiveDate> for MonthRef {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Layout of one month plus its navigation targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    #[serde(serialize_with = "serialize_weeks")]
    pub weeks: Vec<Week>,
    pub prev: MonthRef,
    pub next: MonthRef,
}

/// Padding slots are written as `0`, the conventional month-calendar encoding.
fn serialize_weeks<S: Serializer>(weeks: &[Week], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(weeks.iter().map(|week| week.map(|slot| slot.unwrap_or(0))))
}

/// ## Summary
/// Builds the Monday-first grid for `month` of `year`, normalizing the month
/// first (see [`MonthRef::normalize`]).
///
/// Every week holds exactly seven slots and each day of the month appears
/// once, in order.
///
/// ## Errors
/// Returns `InvalidInput` if the normalized year is outside the supported
/// date range.
pub fn build_grid(year: i32, month: i32) -> ServiceResult<MonthGrid> {
    let target = MonthRef::normalize(year, month)?;
    let first = target.first_day()?;

    let lead = first.weekday().num_days_from_monday();
    let mut slots: Vec<Option<u32>> = (0..lead).map(|_| None).collect();
    slots.extend(
        first
            .iter_days()
            .take_while(|day| day.month() == target.month)
            .map(|day| Some(day.day())),
    );
    while slots.len() % DAYS_PER_WEEK != 0 {
        slots.push(None);
    }

    let weeks = slots
        .chunks_exact(DAYS_PER_WEEK)
        .filter_map(|chunk| Week::try_from(chunk).ok())
        .collect();

    Ok(MonthGrid {
        year: target.year,
        month: target.month,
        month_name: target.name()?,
        weeks,
        prev: target.previous(),
        next: target.next(),
    })
}
