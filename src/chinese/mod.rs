// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chinese lunisolar calendar.
//!
//! Months begin on the day, in Beijing, of a new moon. The solar year
//! (*sui*) runs from one winter solstice to the next and month 11 always
//! contains the solstice. A *sui* with 13 new moons has a leap month: the
//! first month that contains no major solar term, which repeats the number
//! of the month before it.
//!
//! Years are numbered in 60-year cycles counted from the epoch of
//! February 15, 2637 BCE (Gregorian, astronomical year −2636).
//!
//! # Example
//!
//! ```
//! use lunisolar::convert_gregorian_to_chinese;
//!
//! let date = convert_gregorian_to_chinese(2024, 2, 10).unwrap();
//! assert_eq!((78, 41), (date.cycle, date.year));
//! assert_eq!((1, false, 1), (date.month, date.is_leap_month, date.day));
//! assert_eq!("Jia-Chen", date.name);
//! ```

pub mod names;
pub mod solar_term;
pub mod solstice;

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::fixed::{fixed_from_gregorian, FixedDate};
use crate::lunar::MEAN_SYNODIC_MONTH;
use crate::series::amod;
use crate::solar::MEAN_TROPICAL_YEAR;

use names::{sexagenary_name, Branch, MonthSeason, Stem};
use solar_term::{chinese_no_major_solar_term, chinese_prior_leap_month};
use solstice::{
    chinese_new_moon_before, chinese_new_moon_on_or_after, chinese_winter_solstice_on_or_before,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed date of the Chinese calendar epoch, Gregorian −2636-02-15.
pub const CHINESE_EPOCH: FixedDate = fixed_from_gregorian(-2636, 2, 15);

/// A date of the Chinese calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChineseDate {
    /// 60-year cycle, `1` for the cycle starting at the epoch.
    pub cycle: i64,
    /// Year within the cycle, `1..=60`.
    pub year: u32,
    /// Month number, `1..=12`; a leap month repeats the previous number.
    pub month: u32,
    pub is_leap_month: bool,
    /// Day of the month, `1..=30`.
    pub day: u32,
    /// `"<Stem>-<Branch>"` name of the year.
    pub name: String,
}

impl ChineseDate {
    /// Heavenly stem of the year.
    pub fn stem(&self) -> Stem {
        Stem::of_sexagenary(self.year as i64)
    }

    /// Earthly branch of the year.
    pub fn branch(&self) -> Branch {
        Branch::of_sexagenary(self.year as i64)
    }

    /// Season and branch of the month.
    pub fn season(&self) -> MonthSeason {
        // month is always in 1..=12 for dates built by this crate
        let branch = Branch::ALL[((self.month + 1) % 12) as usize];
        MonthSeason {
            season: branch.season(),
            branch,
        }
    }

    /// Chinese month name, e.g. `閏六月`.
    pub fn month_label(&self) -> Option<String> {
        names::month_label(self.month, self.is_leap_month)
    }

    /// Chinese day name, e.g. `初一`.
    pub fn day_label(&self) -> Option<String> {
        names::day_label(self.day)
    }

    /// Fixed date of this Chinese date.
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarError::Computation`](crate::CalendarError) from
    /// the underlying searches.
    pub fn to_fixed(&self) -> Result<FixedDate> {
        let elapsed_years = (self.cycle - 1) * 60 + self.year as i64 - 1;
        let mid_year = CHINESE_EPOCH
            + ((elapsed_years as f64 + 0.5) * MEAN_TROPICAL_YEAR.value()).floor() as i64;
        let new_year = chinese_new_year_on_or_before(mid_year)?;
        let p = chinese_new_moon_on_or_after(new_year + (self.month as i64 - 1) * 29)?;
        let d = chinese_from_fixed(p)?;
        let month_start = if self.month == d.month && self.is_leap_month == d.is_leap_month {
            p
        } else {
            chinese_new_moon_on_or_after(p + 1)?
        };
        Ok(month_start + self.day as i64 - 1)
    }
}

impl fmt::Display for ChineseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { "leap " } else { "" };
        write!(
            f,
            "{} year (cycle {}, year {}), {}month {}, day {}",
            self.name, self.cycle, self.year, leap, self.month, self.day
        )
    }
}

/// Whole lunations between two new-moon days.
#[inline]
fn lunations_between(from: FixedDate, to: FixedDate) -> i64 {
    ((to - from) as f64 / MEAN_SYNODIC_MONTH.value()).round() as i64
}

/// Chinese date of fixed `date`.
///
/// # Errors
///
/// [`CalendarError::Computation`](crate::CalendarError) if one of the
/// bounded searches fails to converge.
pub fn chinese_from_fixed(date: FixedDate) -> Result<ChineseDate> {
    let s1 = chinese_winter_solstice_on_or_before(date)?;
    let s2 = chinese_winter_solstice_on_or_before(s1 + 370)?;
    let m12 = chinese_new_moon_on_or_after(s1 + 1)?;
    let next_m11 = chinese_new_moon_before(s2 + 1)?;
    let m = chinese_new_moon_before(date + 1)?;
    let leap_year = lunations_between(m12, next_m11) == 12;

    let leap_before = leap_year && chinese_prior_leap_month(m12, m)?;
    let month = amod(lunations_between(m12, m) - leap_before as i64, 12) as u32;
    let is_leap_month = leap_year
        && chinese_no_major_solar_term(m)?
        && !chinese_prior_leap_month(m12, chinese_new_moon_before(m)?)?;

    let elapsed_years = (1.5 - month as f64 / 12.0
        + (date - CHINESE_EPOCH) as f64 / MEAN_TROPICAL_YEAR.value())
    .floor() as i64;
    let cycle = (elapsed_years - 1).div_euclid(60) + 1;
    let year = amod(elapsed_years, 60);
    let day = (date - m + 1) as u32;

    debug!(
        date = date.value(),
        cycle, year, month, is_leap_month, day, "chinese date"
    );
    Ok(ChineseDate {
        cycle,
        year: year as u32,
        month,
        is_leap_month,
        day,
        name: sexagenary_name(year),
    })
}

/// Chinese date of a proleptic Gregorian date.
///
/// # Errors
///
/// [`CalendarError::InvalidDate`](crate::CalendarError::InvalidDate) if the
/// Gregorian date does not exist, or a computation error from
/// [`chinese_from_fixed`].
pub fn convert_gregorian_to_chinese(year: i32, month: u32, day: u32) -> Result<ChineseDate> {
    chinese_from_fixed(FixedDate::from_gregorian(year, month, day)?)
}

/// Chinese New Year of the *sui* containing `date`.
fn chinese_new_year_in_sui(date: FixedDate) -> Result<FixedDate> {
    let s1 = chinese_winter_solstice_on_or_before(date)?;
    let s2 = chinese_winter_solstice_on_or_before(s1 + 370)?;
    let m12 = chinese_new_moon_on_or_after(s1 + 1)?;
    let m13 = chinese_new_moon_on_or_after(m12 + 1)?;
    let next_m11 = chinese_new_moon_before(s2 + 1)?;
    // a leap month 11 or 12 pushes the new year one month later
    if lunations_between(m12, next_m11) == 12
        && (chinese_no_major_solar_term(m12)? || chinese_no_major_solar_term(m13)?)
    {
        chinese_new_moon_on_or_after(m13 + 1)
    } else {
        Ok(m13)
    }
}

/// Fixed date of the last Chinese New Year on or before `date`.
pub fn chinese_new_year_on_or_before(date: FixedDate) -> Result<FixedDate> {
    let new_year = chinese_new_year_in_sui(date)?;
    if date >= new_year {
        Ok(new_year)
    } else {
        chinese_new_year_in_sui(date - 180)
    }
}

/// Fixed date of Chinese New Year in Gregorian year `year`.
///
/// ```
/// use lunisolar::{chinese_new_year, FixedDate};
///
/// let new_year = chinese_new_year(2024).unwrap();
/// assert_eq!(FixedDate::from_gregorian(2024, 2, 10).unwrap(), new_year);
/// ```
pub fn chinese_new_year(year: i32) -> Result<FixedDate> {
    chinese_new_year_on_or_before(fixed_from_gregorian(year, 7, 1))
}
