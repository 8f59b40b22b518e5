// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent solar longitude
//!
//! Geocentric ecliptic longitude of the Sun after Bretagnon & Simon
//! (*Planetary Programs and Tables*, 1986) as tabulated in Reingold &
//! Dershowitz, *Calendrical Calculations*: a mean longitude linear in Julian
//! centuries, 49 periodic terms, and the aberration and nutation
//! corrections.
//!
//! Accuracy is a few arc-seconds over several millennia around J2000, far
//! below the resolution needed to place a solar term on the right civil day.

use qtty::Days;
use tracing::trace;

use super::instant::{Instant, TimeScale};
use super::julian::julian_centuries;
use super::scales::Universal;
use super::series::{cos_degrees, normalize_degrees, poly, sin_degrees};

/// Mean tropical year in days.
pub const MEAN_TROPICAL_YEAR: Days = Days::new(365.242189);

/// Solar longitude of the northern winter solstice, in degrees.
pub const WINTER: f64 = 270.0;

/// Periodic terms `(coefficient, addend, multiplier)`: each contributes
/// `coefficient · sin(addend + multiplier · C)` in units of 10⁻⁷ rad scaled
/// to degrees.
#[rustfmt::skip]
const SOLAR_TERMS: [(f64, f64, f64); 49] = [
    (403406.0, 270.54861, 0.9287892),
    (195207.0, 340.19128, 35999.1376958),
    (119433.0, 63.91854, 35999.4089666),
    (112392.0, 331.2622, 35998.7287385),
    (3891.0, 317.843, 71998.20261),
    (2819.0, 86.631, 71998.4403),
    (1721.0, 240.052, 36000.35726),
    (660.0, 310.26, 71997.4812),
    (350.0, 247.23, 32964.4678),
    (334.0, 260.87, -19.441),
    (314.0, 297.82, 445267.1117),
    (268.0, 343.14, 45036.884),
    (242.0, 166.79, 3.1008),
    (234.0, 81.53, 22518.4434),
    (158.0, 3.5, -19.9739),
    (132.0, 132.75, 65928.9345),
    (129.0, 182.95, 9038.0293),
    (114.0, 162.03, 3034.7684),
    (99.0, 29.8, 33718.148),
    (93.0, 266.4, 3034.448),
    (86.0, 249.2, -2280.773),
    (78.0, 157.6, 29929.992),
    (72.0, 257.8, 31556.493),
    (68.0, 185.1, 149.588),
    (64.0, 69.9, 9037.75),
    (46.0, 8.0, 107997.405),
    (38.0, 197.1, -4444.176),
    (37.0, 250.4, 151.771),
    (32.0, 65.3, 67555.316),
    (29.0, 162.7, 31556.08),
    (28.0, 341.5, -4561.54),
    (27.0, 291.6, 107996.706),
    (27.0, 98.5, 1221.655),
    (25.0, 146.7, 62894.167),
    (24.0, 110.0, 31437.369),
    (21.0, 5.2, 14578.298),
    (21.0, 342.6, -31931.757),
    (20.0, 230.9, 34777.243),
    (18.0, 256.1, 1221.999),
    (17.0, 45.3, 62894.511),
    (14.0, 242.9, -4442.039),
    (13.0, 115.2, 107997.909),
    (13.0, 151.8, 119.066),
    (13.0, 285.3, 16859.071),
    (12.0, 53.3, -4.578),
    (10.0, 126.6, 26895.292),
    (10.0, 205.7, -39.127),
    (10.0, 85.9, 12297.536),
    (10.0, 146.1, 90073.778),
];

/// Aberration in degrees for `c` Julian centuries since J2000.
#[inline]
pub fn aberration(c: f64) -> f64 {
    0.0000974 * cos_degrees(177.63 + 35999.01848 * c) - 0.005575
}

/// Nutation in longitude, in degrees, for `c` Julian centuries since J2000.
#[inline]
pub fn nutation(c: f64) -> f64 {
    let a = poly(c, &[124.90, -1934.134, 0.002063]);
    let b = poly(c, &[201.11, 72001.5377, 0.00057]);
    -0.004778 * sin_degrees(a) - 0.0003667 * sin_degrees(b)
}

/// Apparent solar longitude at moment `t`, in degrees within `[0, 360)`.
///
/// The moment may live on any time scale; the series is evaluated in
/// dynamical time.
///
/// # Example
///
/// ```
/// use lunisolar::{solar_longitude, FixedDate, Instant, Universal};
///
/// let date = FixedDate::from_gregorian(2000, 1, 1).unwrap();
/// let lambda = solar_longitude(Instant::<Universal>::from_fixed(date));
/// assert!((lambda - 279.859).abs() < 1e-3);
/// ```
pub fn solar_longitude<S: TimeScale>(t: Instant<S>) -> f64 {
    let c = julian_centuries(t);
    let periodic: f64 = SOLAR_TERMS
        .iter()
        .map(|&(x, y, z)| x * sin_degrees(y + z * c))
        .sum();
    let lambda = 282.7771834 + 36000.76953744 * c + 0.000005729577951308232 * periodic;
    normalize_degrees(lambda + aberration(c) + nutation(c))
}

/// Approximate moment at or before `t` when the solar longitude was
/// `lambda` degrees.
///
/// Uses the mean solar rate and one secant-style correction. The result is
/// a search seed good to about a day, never later than `t`.
pub fn estimate_prior_solar_longitude(lambda: f64, t: Instant<Universal>) -> Instant<Universal> {
    let rate = MEAN_TROPICAL_YEAR.value() / 360.0;
    let tau = t - Days::new(rate * normalize_degrees(solar_longitude(t) - lambda));
    let delta = normalize_degrees(solar_longitude(tau) - lambda + 180.0) - 180.0;
    let estimate = t.min(tau - Days::new(rate * delta));
    trace!(lambda, estimate = estimate.value(), "estimated prior solar longitude");
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;
    use crate::location::midnight_in_china;
    use crate::scales::Dynamical;

    #[test]
    fn solar_longitude_at_2000_new_year() {
        let t = Instant::<Universal>::from_fixed(fixed_from_gregorian(2000, 1, 1));
        let lambda = solar_longitude(t);
        assert!(
            (lambda - 279.85938549).abs() < 1e-6,
            "λ☉ = {lambda}, expected 279.85938549"
        );
    }

    #[test]
    fn solar_longitude_is_scale_aware() {
        let ut = Instant::<Universal>::from_fixed(fixed_from_gregorian(2000, 1, 1));
        let td = Instant::<Dynamical>::new(ut.value());
        // same numeric value on the dynamical axis is 63.86 s earlier
        assert!(solar_longitude(td) < solar_longitude(ut));
        assert_eq!(solar_longitude(ut), solar_longitude(ut.to::<Dynamical>()));
    }

    #[test]
    fn solar_longitude_in_range_across_a_year() {
        let start = Instant::<Universal>::from_fixed(fixed_from_gregorian(2023, 1, 1));
        for day in 0..365 {
            let lambda = solar_longitude(start + Days::new(day as f64 + 0.3));
            assert!((0.0..360.0).contains(&lambda), "λ☉ = {lambda}");
        }
    }

    #[test]
    fn equinox_and_solstice_longitudes() {
        // 2024-03-20 03:06 UT and 2024-12-21 09:20 UT
        let march = Instant::<Universal>::from_fixed(fixed_from_gregorian(2024, 3, 20))
            + Days::new(3.1 / 24.0);
        let december = Instant::<Universal>::from_fixed(fixed_from_gregorian(2024, 12, 21))
            + Days::new(9.35 / 24.0);
        let spring = solar_longitude(march);
        assert!(spring < 0.01 || spring > 359.99, "λ☉ = {spring}");
        assert!((solar_longitude(december) - WINTER).abs() < 0.01);
    }

    #[test]
    fn aberration_and_nutation_magnitudes() {
        for c in [-2.0, -0.5, 0.0, 0.24, 1.0] {
            let ab = aberration(c);
            assert!((-0.0057..=-0.0054).contains(&ab), "aberration {ab}");
            assert!(nutation(c).abs() < 0.0052, "nutation {}", nutation(c));
        }
    }

    #[test]
    fn estimate_prior_is_close_and_not_after() {
        let t = midnight_in_china(fixed_from_gregorian(2017, 3, 1));
        let estimate = estimate_prior_solar_longitude(WINTER, t);
        assert!(estimate <= t);
        assert!(
            (estimate.value() - 736_319.515).abs() < 0.01,
            "estimate = {}",
            estimate.value()
        );
    }
}
