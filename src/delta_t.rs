// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): Universal ↔ Dynamical correction layer
//!
//! This module implements the piecewise polynomial model for
//! **ΔT = TD − UT** of Espenak & Meeus (NASA *Five Millennium Canon*), in
//! the era layout used by Reingold & Dershowitz, *Calendrical Calculations*.
//!
//! ## Integration with Time Scales
//!
//! The correction is applied **automatically** by the [`Universal`] time
//! scale marker. When you convert an `Instant<Universal>` to
//! [`Dynamical`](crate::Dynamical), `Universal::to_dynamical` adds ΔT; the
//! inverse uses a three-iteration fixed-point solver.
//!
//! ## Quick Example
//! ```rust
//! use lunisolar::{Dynamical, Instant, Universal};
//!
//! let ut = Instant::<Universal>::new(730_120.5);
//! let td = ut.to::<Dynamical>();
//! println!("{td}");
//!
//! let dt = ut.delta_t();
//! println!("ΔT = {dt}");
//! ```
//!
//! ## Era layout
//!
//! The polynomial is selected by the Gregorian year of the moment. Within
//! an era the value is constant for the whole year, and adjacent eras agree
//! to within a few seconds at every breakpoint.

use super::fixed::{fixed_from_gregorian, gregorian_year_from_fixed};
use super::instant::Instant;
use super::scales::{Dynamical, Universal};
use super::series::poly;
use qtty::{Day, Days, Seconds};

const SECONDS_PER_DAY: f64 = 86_400.0;

// ------------------------------------------------------------------------------------
// ΔT Approximation Sections by Era
// ------------------------------------------------------------------------------------

/// Julian centuries from 1900-01-01 to the middle of `year`.
#[inline]
fn centuries_from_1900(year: i32) -> f64 {
    let elapsed = fixed_from_gregorian(year, 7, 1) - fixed_from_gregorian(1900, 1, 1);
    elapsed as f64 / 36_525.0
}

/// **Before −500 and after 2150**: long-term parabola.
#[inline]
fn delta_t_long_term(year: i32) -> Seconds {
    let u = (year as f64 - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u)
}

/// **2051–2150**: parabola blended into the 2050 value.
#[inline]
fn delta_t_2051_2150(year: i32) -> Seconds {
    let y = year as f64;
    let u = (y - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y))
}

/// **2006–2050**
#[inline]
fn delta_t_2006_2050(year: i32) -> Seconds {
    let y2000 = year as f64 - 2000.0;
    Seconds::new(poly(y2000, &[62.92, 0.32217, 0.005589]))
}

/// **1987–2005**
#[inline]
fn delta_t_1987_2005(year: i32) -> Seconds {
    let y2000 = year as f64 - 2000.0;
    Seconds::new(poly(
        y2000,
        &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
    ))
}

/// **1900–1986**: polynomial in centuries, result in days.
#[inline]
fn delta_t_1900_1986(year: i32) -> Seconds {
    let c = centuries_from_1900(year);
    let days = poly(
        c,
        &[
            -0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066, -0.212591,
        ],
    );
    Seconds::new(days * SECONDS_PER_DAY)
}

/// **1800–1899**: polynomial in centuries, result in days.
#[inline]
fn delta_t_1800_1899(year: i32) -> Seconds {
    let c = centuries_from_1900(year);
    let days = poly(
        c,
        &[
            -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267, 38.291999,
            28.316289, 11.636204, 2.043794,
        ],
    );
    Seconds::new(days * SECONDS_PER_DAY)
}

/// **1700–1799**
#[inline]
fn delta_t_1700_1799(year: i32) -> Seconds {
    let y1700 = year as f64 - 1700.0;
    Seconds::new(poly(
        y1700,
        &[8.118780842, -0.005092142, 0.003336121, -0.0000266484],
    ))
}

/// **1600–1699**
#[inline]
fn delta_t_1600_1699(year: i32) -> Seconds {
    let y1600 = year as f64 - 1600.0;
    Seconds::new(poly(y1600, &[120.0, -0.9808, -0.01532, 0.000140272128]))
}

/// **500–1599**
#[inline]
fn delta_t_500_1599(year: i32) -> Seconds {
    let y1000 = (year as f64 - 1000.0) / 100.0;
    Seconds::new(poly(
        y1000,
        &[
            1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073,
        ],
    ))
}

/// **−500–499**
#[inline]
fn delta_t_ancient(year: i32) -> Seconds {
    let y0 = year as f64 / 100.0;
    Seconds::new(poly(
        y0,
        &[
            10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521,
        ],
    ))
}

/// Returns **ΔT** in seconds for a Gregorian year.
pub(crate) fn delta_t_for_year(year: i32) -> Seconds {
    match year {
        2051..=2150 => delta_t_2051_2150(year),
        2006..=2050 => delta_t_2006_2050(year),
        1987..=2005 => delta_t_1987_2005(year),
        1900..=1986 => delta_t_1900_1986(year),
        1800..=1899 => delta_t_1800_1899(year),
        1700..=1799 => delta_t_1700_1799(year),
        1600..=1699 => delta_t_1600_1699(year),
        500..=1599 => delta_t_500_1599(year),
        -500..=499 => delta_t_ancient(year),
        _ => delta_t_long_term(year),
    }
}

/// Ephemeris correction **ΔT** for a Universal moment, in days.
pub fn ephemeris_correction(ut: Instant<Universal>) -> Days {
    delta_t_for_year(gregorian_year_from_fixed(ut.fixed_date())).to::<Day>()
}

/// Dynamical time of a Universal moment: `t + ΔT(t)`.
#[inline]
pub fn dynamical_from_universal(ut: Instant<Universal>) -> Instant<Dynamical> {
    ut.to::<Dynamical>()
}

/// Universal time of a Dynamical moment, inverting [`dynamical_from_universal`].
#[inline]
pub fn universal_from_dynamical(td: Instant<Dynamical>) -> Instant<Universal> {
    td.to::<Universal>()
}

// ── Instant<Universal> convenience method ─────────────────────────────────

impl Instant<Universal> {
    /// Returns **ΔT = TD − UT** in seconds for this moment.
    ///
    /// The same correction is applied automatically when converting to
    /// [`Dynamical`].
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_for_year(gregorian_year_from_fixed(self.fixed_date()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;
    use qtty::Second;

    fn assert_seconds(actual: Seconds, expected: f64, tol: f64) {
        assert!(
            (actual - Seconds::new(expected)).abs() < Seconds::new(tol),
            "ΔT = {} s, expected {} s",
            actual,
            expected
        );
    }

    #[test]
    fn delta_t_2000() {
        assert_seconds(delta_t_for_year(2000), 63.86, 1e-9);
    }

    #[test]
    fn delta_t_1900_sample() {
        let ut = Instant::<Universal>::from_fixed(fixed_from_gregorian(1900, 6, 1));
        assert_seconds(ut.delta_t(), -1.549, 0.01);
    }

    #[test]
    fn delta_t_medieval_sample() {
        assert_seconds(delta_t_for_year(1000), 1574.2, 1e-9);
    }

    #[test]
    fn delta_t_ancient_sample() {
        assert_seconds(delta_t_for_year(-1000), 25_427.68, 1e-6);
    }

    #[test]
    fn era_boundaries_are_continuous() {
        let eras: [(i32, fn(i32) -> Seconds, fn(i32) -> Seconds); 9] = [
            (-500, delta_t_long_term, delta_t_ancient),
            (500, delta_t_ancient, delta_t_500_1599),
            (1600, delta_t_500_1599, delta_t_1600_1699),
            (1700, delta_t_1600_1699, delta_t_1700_1799),
            (1800, delta_t_1700_1799, delta_t_1800_1899),
            (1900, delta_t_1800_1899, delta_t_1900_1986),
            (1987, delta_t_1900_1986, delta_t_1987_2005),
            (2006, delta_t_1987_2005, delta_t_2006_2050),
            (2051, delta_t_2006_2050, delta_t_2051_2150),
        ];
        for (boundary, before, after) in eras {
            let jump = (before(boundary) - after(boundary)).abs();
            assert!(
                jump < Seconds::new(3.0),
                "ΔT jumps {} s at year {}",
                jump,
                boundary
            );
        }
        let jump = (delta_t_2051_2150(2150) - delta_t_long_term(2151)).abs();
        assert!(jump < Seconds::new(3.0), "ΔT jumps {} s at year 2151", jump);
    }

    #[test]
    fn dispatch_selects_era_by_year() {
        assert_eq!(delta_t_for_year(1986), delta_t_1900_1986(1986));
        assert_eq!(delta_t_for_year(1987), delta_t_1987_2005(1987));
        assert_eq!(delta_t_for_year(2150), delta_t_2051_2150(2150));
        assert_eq!(delta_t_for_year(2151), delta_t_long_term(2151));
        assert_eq!(delta_t_for_year(-501), delta_t_long_term(-501));
        assert_eq!(delta_t_for_year(-500), delta_t_ancient(-500));
        assert_eq!(delta_t_for_year(-499), delta_t_ancient(-499));
    }

    #[test]
    fn universal_dynamical_helpers_roundtrip() {
        let ut = Instant::<Universal>::new(730_120.5);
        let td = dynamical_from_universal(ut);
        let offset = (td - Instant::<Dynamical>::new(730_120.5)).to::<Second>();
        assert_seconds(offset, 63.86, 0.001);
        let back = universal_from_dynamical(td);
        assert!((back - ut).abs() < Days::new(1e-9));
    }

    #[test]
    fn ephemeris_correction_in_days() {
        let ut = Instant::<Universal>::new(730_120.5);
        let days = ephemeris_correction(ut);
        assert!((days - Days::new(63.86 / 86_400.0)).abs() < Days::new(1e-12));
    }
}
