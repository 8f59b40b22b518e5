// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent lunar longitude
//!
//! Geocentric ecliptic longitude of the Moon from the ELP-2000/82 truncation
//! of Meeus, *Astronomical Algorithms* ch. 47: five fundamental arguments as
//! quartics in Julian centuries, 59 periodic terms in longitude, the Venus,
//! Jupiter and flattening perturbations, and nutation.

use qtty::{Days, Simplify};

use super::instant::{Instant, TimeScale};
use super::julian::julian_centuries;
use super::new_moon::nth_new_moon;
use super::scales::Universal;
use super::series::{normalize_degrees, poly, sin_degrees};
use super::solar::{nutation, solar_longitude};

/// Mean time between successive new moons.
pub const MEAN_SYNODIC_MONTH: Days = Days::new(29.530588861);

/// Periodic terms `(D, M, M′, F, coefficient)`: each contributes
/// `coefficient · E^|M| · sin(D·d + M·m + M′·m′ + F·f)` in 10⁻⁶ degrees.
#[rustfmt::skip]
pub(crate) const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 59] = [
    (0, 0, 1, 0, 6288774.0),
    (2, 0, -1, 0, 1274027.0),
    (2, 0, 0, 0, 658314.0),
    (0, 0, 2, 0, 213618.0),
    (0, 1, 0, 0, -185116.0),
    (0, 0, 0, 2, -114332.0),
    (2, 0, -2, 0, 58793.0),
    (2, -1, -1, 0, 57066.0),
    (2, 0, 1, 0, 53322.0),
    (2, -1, 0, 0, 45758.0),
    (0, 1, -1, 0, -40923.0),
    (1, 0, 0, 0, -34720.0),
    (0, 1, 1, 0, -30383.0),
    (2, 0, 0, -2, 15327.0),
    (0, 0, 1, 2, -12528.0),
    (0, 0, 1, -2, 10980.0),
    (4, 0, -1, 0, 10675.0),
    (0, 0, 3, 0, 10034.0),
    (4, 0, -2, 0, 8548.0),
    (2, 1, -1, 0, -7888.0),
    (2, 1, 0, 0, -6766.0),
    (1, 0, -1, 0, -5163.0),
    (1, 1, 0, 0, 4987.0),
    (2, -1, 1, 0, 4036.0),
    (2, 0, 2, 0, 3994.0),
    (4, 0, 0, 0, 3861.0),
    (2, 0, -3, 0, 3665.0),
    (0, 1, -2, 0, -2689.0),
    (2, 0, -1, 2, -2602.0),
    (2, -1, -2, 0, 2390.0),
    (1, 0, 1, 0, -2348.0),
    (2, -2, 0, 0, 2236.0),
    (0, 1, 2, 0, -2120.0),
    (0, 2, 0, 0, -2069.0),
    (2, -2, -1, 0, 2048.0),
    (2, 0, 1, -2, -1773.0),
    (2, 0, 0, 2, -1595.0),
    (4, -1, -1, 0, 1215.0),
    (0, 0, 2, 2, -1110.0),
    (3, 0, -1, 0, -892.0),
    (2, 1, 1, 0, -810.0),
    (4, -1, -2, 0, 759.0),
    (0, 2, -1, 0, -713.0),
    (2, 2, -1, 0, -700.0),
    (2, 1, -2, 0, 691.0),
    (2, -1, 0, -2, 596.0),
    (4, 0, 1, 0, 549.0),
    (0, 0, 4, 0, 537.0),
    (4, -1, 0, 0, 520.0),
    (1, 0, -2, 0, -487.0),
    (2, 1, 0, -2, -399.0),
    (0, 0, 2, -2, -381.0),
    (1, 1, 1, 0, 351.0),
    (3, 0, -2, 0, -340.0),
    (4, 0, -3, 0, 330.0),
    (2, -1, 2, 0, 327.0),
    (0, 2, 1, 0, -323.0),
    (1, 1, -1, 0, 299.0),
    (2, 0, 3, 0, 294.0),
];

/// Mean longitude of the Moon, referred to the mean equinox of date.
pub fn mean_lunar_longitude(c: f64) -> f64 {
    normalize_degrees(poly(
        c,
        &[
            218.3164477,
            481267.88123421,
            -0.0015786,
            1.0 / 538841.0,
            -1.0 / 65194000.0,
        ],
    ))
}

/// Mean elongation of the Moon from the Sun.
pub fn lunar_elongation(c: f64) -> f64 {
    normalize_degrees(poly(
        c,
        &[
            297.8501921,
            445267.1114034,
            -0.0018819,
            1.0 / 545868.0,
            -1.0 / 113065000.0,
        ],
    ))
}

/// Mean anomaly of the Sun.
pub fn solar_anomaly(c: f64) -> f64 {
    normalize_degrees(poly(
        c,
        &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0],
    ))
}

/// Mean anomaly of the Moon.
pub fn lunar_anomaly(c: f64) -> f64 {
    normalize_degrees(poly(
        c,
        &[
            134.9633964,
            477198.8675055,
            0.0087414,
            1.0 / 69699.0,
            -1.0 / 14712000.0,
        ],
    ))
}

/// Argument of latitude: mean distance of the Moon from its ascending node.
pub fn moon_node(c: f64) -> f64 {
    normalize_degrees(poly(
        c,
        &[
            93.2720950,
            483202.0175233,
            -0.0036539,
            -1.0 / 3526000.0,
            1.0 / 863310000.0,
        ],
    ))
}

/// Eccentricity factor of Earth's orbit applied to terms in the solar
/// anomaly.
#[inline]
pub(crate) fn eccentricity_factor(c: f64) -> f64 {
    poly(c, &[1.0, -0.002516, -0.0000074])
}

/// Apparent lunar longitude at moment `t`, in degrees within `[0, 360)`.
pub fn lunar_longitude<S: TimeScale>(t: Instant<S>) -> f64 {
    let c = julian_centuries(t);
    let mean_moon = mean_lunar_longitude(c);
    let elongation = lunar_elongation(c);
    let solar_anomaly = solar_anomaly(c);
    let lunar_anomaly = lunar_anomaly(c);
    let node = moon_node(c);
    let e = eccentricity_factor(c);

    let correction = LONGITUDE_TERMS
        .iter()
        .map(|&(d, m, mp, f, v)| {
            let arg = d as f64 * elongation
                + m as f64 * solar_anomaly
                + mp as f64 * lunar_anomaly
                + f as f64 * node;
            v * e.powi(m.unsigned_abs() as i32) * sin_degrees(arg)
        })
        .sum::<f64>()
        / 1_000_000.0;
    let venus = 3958.0 / 1_000_000.0 * sin_degrees(119.75 + 131.849 * c);
    let jupiter = 318.0 / 1_000_000.0 * sin_degrees(53.09 + 479264.29 * c);
    let flat_earth = 1962.0 / 1_000_000.0 * sin_degrees(mean_moon - node);

    normalize_degrees(mean_moon + correction + venus + jupiter + flat_earth + nutation(c))
}

/// Lunar phase at moment `t`: the Moon's elongation in longitude from the
/// Sun, in degrees within `[0, 360)`.
///
/// The longitude difference is cross-checked against the phase implied by
/// the number of lunations elapsed since [`nth_new_moon`]`(0)`. If the two
/// disagree by more than 180° the angle sits on the wrap-around cut and
/// `180.0` is returned.
pub fn lunar_phase(t: Instant<Universal>) -> f64 {
    let phi = normalize_degrees(lunar_longitude(t) - solar_longitude(t));
    let t0 = nth_new_moon(0);
    let n = ((t - t0) / MEAN_SYNODIC_MONTH).simplify().value().round() as i64;
    let lunations = ((t - nth_new_moon(n)) / MEAN_SYNODIC_MONTH)
        .simplify()
        .value();
    let phi_prime = 360.0 * lunations.rem_euclid(1.0);
    if (phi - phi_prime).abs() > 180.0 {
        180.0
    } else {
        phi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;

    #[test]
    fn lunar_longitude_at_2000_new_year() {
        let t = Instant::<Universal>::from_fixed(fixed_from_gregorian(2000, 1, 1));
        let lambda = lunar_longitude(t);
        assert!(
            (lambda - 217.29346969).abs() < 1e-6,
            "λ☾ = {lambda}, expected 217.29346969"
        );
    }

    #[test]
    fn lunar_phase_at_2000_new_year() {
        let t = Instant::<Universal>::from_fixed(fixed_from_gregorian(2000, 1, 1));
        let phase = lunar_phase(t);
        assert!((phase - 297.434).abs() < 1e-3, "phase = {phase}");
    }

    #[test]
    fn lunar_longitude_in_range_across_a_month() {
        let start = Instant::<Universal>::from_fixed(fixed_from_gregorian(1850, 5, 1));
        for hour in 0..(30 * 24) {
            let lambda = lunar_longitude(start + Days::new(hour as f64 / 24.0));
            assert!((0.0..360.0).contains(&lambda), "λ☾ = {lambda}");
        }
    }

    #[test]
    fn phase_is_near_zero_at_new_moon() {
        let new_moon = nth_new_moon(24_724);
        let phase = lunar_phase(new_moon);
        assert!(
            phase < 0.5 || phase > 359.5,
            "phase at new moon = {phase}"
        );
        let half = lunar_phase(new_moon + MEAN_SYNODIC_MONTH * 0.5);
        assert!((half - 180.0).abs() < 15.0, "phase half a month later = {half}");
    }

    #[test]
    fn fundamental_arguments_at_j2000() {
        assert!((mean_lunar_longitude(0.0) - 218.3164477).abs() < 1e-12);
        assert!((lunar_elongation(0.0) - 297.8501921).abs() < 1e-12);
        assert!((solar_anomaly(0.0) - 357.5291092).abs() < 1e-12);
        assert!((lunar_anomaly(0.0) - 134.9633964).abs() < 1e-12);
        assert!((moon_node(0.0) - 93.2720950).abs() < 1e-12);
        assert_eq!(eccentricity_factor(0.0), 1.0);
    }
}
