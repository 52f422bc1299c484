//! Calendar primitives shared by aggregation and presentation.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar year and month pair, compared at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Builds a year/month pair; `month` must be in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns `true` when `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn day_count(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Every calendar date of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let first = self.first_day();
        (0..self.day_count() as i64).map(move |offset| first + Duration::days(offset))
    }

    pub fn next(&self) -> Self {
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

    pub fn prev(&self) -> Self {
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
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The date currently in view.
///
/// Owned by the presentation layer and passed by value into aggregation
/// calls; never part of the durable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
}

impl Selection {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The month the selection falls in.
    pub fn month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }

    /// Moves the view one month back, clamping the day to the target month.
    pub fn prev_month(&self) -> Self {
        Self {
            date: shift_month(self.date, -1),
        }
    }

    /// Moves the view one month forward, clamping the day to the target month.
    pub fn next_month(&self) -> Self {
        Self {
            date: shift_month(self.date, 1),
        }
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
