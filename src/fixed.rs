// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-date (Rata Die) arithmetic.
//!
//! A [`FixedDate`] is a signed day count whose day 1 is January 1 of year 1
//! in the proleptic Gregorian calendar. It is the interchange value between
//! the civil calendar, the astronomical moments of [`Instant`](crate::Instant),
//! and the Chinese calendar.
//!
//! Years are *astronomical* year numbers: 1 BC is `0`, 2 BC is `-1`, etc.
//! All conversions here are exact integer arithmetic and `const`, so
//! epoch constants such as [`CHINESE_EPOCH`](crate::chinese::CHINESE_EPOCH)
//! are folded at compile time.

use crate::error::{CalendarError, Result};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day count since the Gregorian epoch (January 1, year 1 ≡ day 1).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FixedDate(i64);

impl FixedDate {
    /// January 1, 1 CE.
    pub const GREGORIAN_EPOCH: Self = Self(1);

    /// Creates a `FixedDate` from a raw day count.
    #[inline]
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// The raw day count.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Creates a `FixedDate` from a Gregorian calendar date, rejecting
    /// months outside `1..=12` and days past the end of the month.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::FixedDate;
    ///
    /// let date = FixedDate::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(730_120, date.value());
    /// assert!(FixedDate::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(fixed_from_gregorian(year, month, day))
    }

    /// Represents the date in the Gregorian calendar as `(year, month, day)`.
    #[inline]
    pub fn gregorian(self) -> (i32, u32, u32) {
        gregorian_from_fixed(self)
    }

    /// Gregorian year containing this date.
    #[inline]
    pub const fn year(self) -> i32 {
        gregorian_year_from_fixed(self)
    }
}

/// `true` for Gregorian leap years: divisible by 4 and not by 100, or
/// divisible by 400.
#[inline]
pub const fn gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of Gregorian `year`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if gregorian_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Fixed date of a proleptic Gregorian date.
///
/// No range checks are made: a day past the end of the month simply rolls
/// into the next month. Use [`FixedDate::from_gregorian`] for validated
/// input.
pub const fn fixed_from_gregorian(year: i32, month: u32, day: u32) -> FixedDate {
    let prior = year as i64 - 1;
    let month = month as i64;
    let mut days = FixedDate::GREGORIAN_EPOCH.0 - 1
        + 365 * prior
        + prior.div_euclid(4)
        - prior.div_euclid(100)
        + prior.div_euclid(400)
        + (367 * month - 362).div_euclid(12);
    // February has 28 or 29 days, not the 30 assumed above.
    if month > 2 {
        days -= if gregorian_leap_year(year) { 1 } else { 2 };
    }
    FixedDate(days + day as i64)
}

/// Fixed date of January 1 of Gregorian `year`.
#[inline]
pub const fn gregorian_new_year(year: i32) -> FixedDate {
    fixed_from_gregorian(year, 1, 1)
}

/// Gregorian year containing `date`.
///
/// Decomposes the day count into 400-, 100-, 4- and 1-year cycles. The last
/// day of a 400-year or 4-year cycle (day 366 of a leap year) belongs to the
/// lower year.
pub const fn gregorian_year_from_fixed(date: FixedDate) -> i32 {
    let d0 = date.0 - FixedDate::GREGORIAN_EPOCH.0;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1_461;
    let d3 = d2 % 1_461;
    let n1 = d3 / 365;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 {
        year as i32
    } else {
        (year + 1) as i32
    }
}

/// Gregorian `(year, month, day)` of `date`.
pub fn gregorian_from_fixed(date: FixedDate) -> (i32, u32, u32) {
    let year = gregorian_year_from_fixed(date);
    let prior_days = date - gregorian_new_year(year);
    let correction = if date < fixed_from_gregorian(year, 3, 1) {
        0
    } else if gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u32;
    let day = (date - fixed_from_gregorian(year, month, 1) + 1) as u32;
    (year, month, day)
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<i64> for FixedDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i64> for FixedDate {
    #[inline]
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl Sub<i64> for FixedDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<i64> for FixedDate {
    #[inline]
    fn sub_assign(&mut self, rhs: i64) {
        self.0 -= rhs;
    }
}

impl Sub for FixedDate {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// ISO 8601 calendar date, e.g. `2000-01-01`.
impl fmt::Display for FixedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.gregorian();
        write!(f, "{:04}-{:02}-{:02}", y, m, d)
    }
}
