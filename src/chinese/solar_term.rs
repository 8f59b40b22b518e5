// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Major solar terms (zhongqi) and the leap-month rule.
//!
//! Major term `k` begins when the solar longitude reaches `30·(k − 2)`
//! degrees (mod 360): term 1 at 330°, term 2 at the March equinox, term 11
//! at the winter solstice. A lunar month that contains no term boundary is
//! the candidate leap month of its solar year.

use tracing::warn;

use super::solstice::{chinese_new_moon_before, chinese_new_moon_on_or_after};
use crate::error::{CalendarError, Result};
use crate::fixed::FixedDate;
use crate::instant::Instant;
use crate::location::universal_from_standard;
use crate::series::amod;
use crate::solar::solar_longitude;

/// Maximum lunations the leap-month walk may step back.
pub const LEAP_MONTH_WALK_LIMIT: u32 = 13;

/// Index `1..=12` of the last major solar term to begin on or before
/// Beijing midnight starting `date`.
pub fn current_major_solar_term(date: FixedDate) -> u32 {
    let lambda = solar_longitude(universal_from_standard(Instant::from_fixed(date)));
    amod((lambda / 30.0).floor() as i64 + 2, 12) as u32
}

/// Index `1..=12` of the last minor solar term (jieqi), which fall midway
/// between major terms: minor term 1 begins at 315°.
pub fn current_minor_solar_term(date: FixedDate) -> u32 {
    let lambda = solar_longitude(universal_from_standard(Instant::from_fixed(date)));
    amod(((lambda - 15.0) / 30.0).floor() as i64 + 3, 12) as u32
}

/// `true` if the lunar month beginning on `date` contains no major term
/// boundary.
pub fn chinese_no_major_solar_term(date: FixedDate) -> Result<bool> {
    let next = chinese_new_moon_on_or_after(date + 1)?;
    Ok(current_major_solar_term(date) == current_major_solar_term(next))
}

/// `true` if some lunar month from `m12` through the month beginning on `m`
/// lacks a major term.
///
/// Walks back one new moon at a time from `m`.
///
/// # Errors
///
/// [`CalendarError::Computation`] if `m12` is not reached within
/// [`LEAP_MONTH_WALK_LIMIT`] lunations.
pub fn chinese_prior_leap_month(m12: FixedDate, m: FixedDate) -> Result<bool> {
    let mut month = m;
    for _ in 0..=LEAP_MONTH_WALK_LIMIT {
        if month < m12 {
            return Ok(false);
        }
        if chinese_no_major_solar_term(month)? {
            return Ok(true);
        }
        month = chinese_new_moon_before(month)?;
    }
    warn!(
        m12 = m12.value(),
        m = m.value(),
        limit = LEAP_MONTH_WALK_LIMIT,
        "leap month walk did not converge"
    );
    Err(CalendarError::Computation {
        search: "leap month walk",
        limit: LEAP_MONTH_WALK_LIMIT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;

    #[test]
    fn major_terms_of_2024() {
        let cases = [
            ((2024, 1, 1), 11),
            ((2024, 3, 21), 2),
            ((2024, 6, 21), 4),
            ((2024, 12, 20), 10),
            ((2024, 12, 22), 11),
        ];
        for ((y, m, d), term) in cases {
            assert_eq!(
                term,
                current_major_solar_term(fixed_from_gregorian(y, m, d)),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn minor_term_sits_between_major_terms() {
        // lichun (315°) falls on 2024-02-04
        assert_eq!(12, current_minor_solar_term(fixed_from_gregorian(2024, 2, 3)));
        assert_eq!(1, current_minor_solar_term(fixed_from_gregorian(2024, 2, 5)));
    }

    #[test]
    fn leap_month_2023_lacks_major_term() {
        // leap second month began 2023-03-22
        assert!(chinese_no_major_solar_term(fixed_from_gregorian(2023, 3, 22)).unwrap());
        assert!(!chinese_no_major_solar_term(fixed_from_gregorian(2023, 4, 20)).unwrap());
    }

    #[test]
    fn prior_leap_month_walk() {
        // months of 2023 begin 01-22, 02-20, 03-22 (leap), 04-20
        let first = fixed_from_gregorian(2023, 1, 22);
        let leap = fixed_from_gregorian(2023, 3, 22);
        let after = fixed_from_gregorian(2023, 4, 20);
        assert!(chinese_prior_leap_month(first, after).unwrap());
        assert!(chinese_prior_leap_month(first, leap).unwrap());
        assert!(!chinese_prior_leap_month(first, fixed_from_gregorian(2023, 2, 20)).unwrap());
        assert!(!chinese_prior_leap_month(after, first).unwrap());
    }

    #[test]
    fn prior_leap_month_walk_is_bounded() {
        // thirty regular months separate these new moons
        let m12 = fixed_from_gregorian(2017, 11, 18);
        let m = fixed_from_gregorian(2020, 4, 23);
        assert_eq!(
            Err(CalendarError::Computation {
                search: "leap month walk",
                limit: LEAP_MONTH_WALK_LIMIT,
            }),
            chinese_prior_leap_month(m12, m)
        );
    }
}
