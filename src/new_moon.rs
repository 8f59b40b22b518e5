// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # New moons
//!
//! [`nth_new_moon`] gives the moment of the `n`-th new moon counted from the
//! one of January 11, 1 CE (Meeus, *Astronomical Algorithms* ch. 49), and
//! the bracketing searches locate the new moon nearest a moment from a
//! lunation-count estimate.

use qtty::{Days, Simplify};
use tracing::{debug, trace, warn};

use super::error::{CalendarError, Result};
use super::instant::Instant;
use super::lunar::{eccentricity_factor, lunar_phase, MEAN_SYNODIC_MONTH};
use super::scales::{Dynamical, Universal};
use super::series::{poly, sin_degrees};

/// Lunation count of the first new moon of 2000 (January 6).
const LUNATIONS_BEFORE_2000: i64 = 24_724;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Maximum index steps a bracketing search may take from its estimate.
pub const NEW_MOON_SEARCH_LIMIT: u32 = 10;

/// Periodic corrections `(v, w, x, y, z)`: each contributes
/// `v · E^w · sin(x·M + y·M′ + z·F)` days.
#[rustfmt::skip]
const CORRECTION_TERMS: [(f64, i32, f64, f64, f64); 24] = [
    (-0.40720, 0, 0.0, 1.0, 0.0),
    (0.17241, 1, 1.0, 0.0, 0.0),
    (0.01608, 0, 0.0, 2.0, 0.0),
    (0.01039, 0, 0.0, 0.0, 2.0),
    (0.00739, 1, -1.0, 1.0, 0.0),
    (-0.00514, 1, 1.0, 1.0, 0.0),
    (0.00208, 2, 2.0, 0.0, 0.0),
    (-0.00111, 0, 0.0, 1.0, -2.0),
    (-0.00057, 0, 0.0, 1.0, 2.0),
    (0.00056, 1, 1.0, 2.0, 0.0),
    (-0.00042, 0, 0.0, 3.0, 0.0),
    (0.00042, 1, 1.0, 0.0, 2.0),
    (0.00038, 1, 1.0, 0.0, -2.0),
    (-0.00024, 1, -1.0, 2.0, 0.0),
    (-0.00007, 0, 2.0, 1.0, 0.0),
    (0.00004, 0, 0.0, 2.0, -2.0),
    (0.00004, 0, 3.0, 0.0, 0.0),
    (0.00003, 0, 1.0, 1.0, -2.0),
    (0.00003, 0, 0.0, 2.0, 2.0),
    (-0.00003, 0, 1.0, 1.0, 2.0),
    (0.00003, 0, -1.0, 1.0, 2.0),
    (-0.00002, 0, -1.0, 1.0, -2.0),
    (-0.00002, 0, 1.0, 3.0, 0.0),
    (0.00002, 0, 0.0, 4.0, 0.0),
];

/// Planetary arguments `(i, j, l)`: each contributes `l · sin(i + j·k)` days.
#[rustfmt::skip]
const ADDITIONAL_TERMS: [(f64, f64, f64); 13] = [
    (251.88, 0.016321, 0.000165),
    (251.83, 26.651886, 0.000164),
    (349.42, 36.412478, 0.000126),
    (84.66, 18.206239, 0.000110),
    (141.74, 53.303771, 0.000062),
    (207.14, 2.453732, 0.00006),
    (154.84, 7.30686, 0.000056),
    (34.52, 27.261239, 0.000047),
    (207.19, 0.121824, 0.000042),
    (291.34, 1.844379, 0.00004),
    (161.72, 24.198154, 0.000037),
    (239.56, 25.513099, 0.000035),
    (331.55, 3.592518, 0.000023),
];

/// Moment (Universal time) of the `n`-th new moon after the one of
/// January 11, 1 CE.
///
/// # Example
///
/// ```
/// use lunisolar::{nth_new_moon, FixedDate};
///
/// // first new moon of 2000: January 6, 18:14 UT
/// let t = nth_new_moon(24_724);
/// assert_eq!(t.fixed_date(), FixedDate::from_gregorian(2000, 1, 6).unwrap());
/// ```
pub fn nth_new_moon(n: i64) -> Instant<Universal> {
    let k = (n - LUNATIONS_BEFORE_2000) as f64;
    let c = k / LUNATIONS_PER_CENTURY;
    let approx = Instant::<Dynamical>::J2000
        + Days::new(poly(
            c,
            &[
                5.09766,
                MEAN_SYNODIC_MONTH.value() * LUNATIONS_PER_CENTURY,
                0.00015437,
                -0.000000150,
                0.00000000073,
            ],
        ));
    let e = eccentricity_factor(c);
    let solar_anomaly = poly(
        c,
        &[2.5534, LUNATIONS_PER_CENTURY * 29.10535670, -0.0000014, -0.00000011],
    );
    let lunar_anomaly = poly(
        c,
        &[
            201.5643,
            385.81693528 * LUNATIONS_PER_CENTURY,
            0.0107582,
            0.00001238,
            -0.000000058,
        ],
    );
    let moon_argument = poly(
        c,
        &[
            160.7108,
            390.67050284 * LUNATIONS_PER_CENTURY,
            -0.0016118,
            -0.00000227,
            0.000000011,
        ],
    );
    let omega = poly(
        c,
        &[124.7746, -1.56375588 * LUNATIONS_PER_CENTURY, 0.0020672, 0.00000215],
    );

    let correction = -0.00017 * sin_degrees(omega)
        + CORRECTION_TERMS
            .iter()
            .map(|&(v, w, x, y, z)| {
                v * e.powi(w)
                    * sin_degrees(x * solar_anomaly + y * lunar_anomaly + z * moon_argument)
            })
            .sum::<f64>();
    let extra = 0.000325 * sin_degrees(poly(c, &[299.77, 132.8475848, -0.009173]));
    let additional: f64 = ADDITIONAL_TERMS
        .iter()
        .map(|&(i, j, l)| l * sin_degrees(i + j * k))
        .sum();

    (approx + Days::new(correction + extra + additional)).to::<Universal>()
}

/// Lunation index estimate for the new moon nearest `t`.
fn estimate_lunation(t: Instant<Universal>) -> i64 {
    let t0 = nth_new_moon(0);
    let phi = lunar_phase(t);
    let lunations = ((t - t0) / MEAN_SYNODIC_MONTH).simplify().value();
    (lunations - phi / 360.0).round() as i64
}

fn search_exhausted(search: &'static str, t: Instant<Universal>) -> CalendarError {
    warn!(search, moment = t.value(), limit = NEW_MOON_SEARCH_LIMIT, "search did not converge");
    CalendarError::Computation {
        search,
        limit: NEW_MOON_SEARCH_LIMIT,
    }
}

/// Moment of the first new moon at or after `t`.
///
/// # Errors
///
/// [`CalendarError::Computation`] if the new moon is more than
/// [`NEW_MOON_SEARCH_LIMIT`] lunations away from the estimate.
pub fn new_moon_at_or_after(t: Instant<Universal>) -> Result<Instant<Universal>> {
    new_moon_at_or_after_from(t, estimate_lunation(t))
}

/// Steps the lunation index from `n` to the first new moon at or after `t`.
fn new_moon_at_or_after_from(t: Instant<Universal>, mut n: i64) -> Result<Instant<Universal>> {
    const SEARCH: &str = "new moon at or after";
    let mut steps = 0;
    if nth_new_moon(n) >= t {
        while nth_new_moon(n - 1) >= t {
            n -= 1;
            steps += 1;
            trace!(search = SEARCH, n, steps, "stepping back");
            if steps > NEW_MOON_SEARCH_LIMIT {
                return Err(search_exhausted(SEARCH, t));
            }
        }
    } else {
        while nth_new_moon(n) < t {
            n += 1;
            steps += 1;
            trace!(search = SEARCH, n, steps, "stepping forward");
            if steps > NEW_MOON_SEARCH_LIMIT {
                return Err(search_exhausted(SEARCH, t));
            }
        }
    }
    let new_moon = nth_new_moon(n);
    debug!(search = SEARCH, n, steps, moment = new_moon.value(), "new moon found");
    Ok(new_moon)
}

/// Moment of the last new moon strictly before `t`.
///
/// # Errors
///
/// [`CalendarError::Computation`] if the new moon is more than
/// [`NEW_MOON_SEARCH_LIMIT`] lunations away from the estimate.
pub fn new_moon_before(t: Instant<Universal>) -> Result<Instant<Universal>> {
    new_moon_before_from(t, estimate_lunation(t))
}

/// Steps the lunation index from `n` to the last new moon before `t`.
fn new_moon_before_from(t: Instant<Universal>, mut n: i64) -> Result<Instant<Universal>> {
    const SEARCH: &str = "new moon before";
    let mut steps = 0;
    if nth_new_moon(n) < t {
        while nth_new_moon(n + 1) < t {
            n += 1;
            steps += 1;
            trace!(search = SEARCH, n, steps, "stepping forward");
            if steps > NEW_MOON_SEARCH_LIMIT {
                return Err(search_exhausted(SEARCH, t));
            }
        }
    } else {
        while nth_new_moon(n) >= t {
            n -= 1;
            steps += 1;
            trace!(search = SEARCH, n, steps, "stepping back");
            if steps > NEW_MOON_SEARCH_LIMIT {
                return Err(search_exhausted(SEARCH, t));
            }
        }
    }
    let new_moon = nth_new_moon(n);
    debug!(search = SEARCH, n, steps, moment = new_moon.value(), "new moon found");
    Ok(new_moon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;

    #[test]
    fn first_new_moon_of_2000() {
        let t = nth_new_moon(24_724);
        assert!(
            (t.value() - 730_125.759_518_670_5).abs() < 1e-6,
            "new moon = {}",
            t.value()
        );
        assert_eq!(t.fixed_date(), fixed_from_gregorian(2000, 1, 6));
    }

    #[test]
    fn new_moons_a_century_from_2000() {
        for (n, expected, date) in [
            (23_487, 693_596.577_709_457_1, (1900, 1, 1)),
            (25_961, 766_654.538_550_512_9, (2100, 1, 10)),
        ] {
            let t = nth_new_moon(n);
            assert!(
                (t.value() - expected).abs() < 1e-6,
                "lunation {n}: {}, expected {expected}",
                t.value()
            );
            assert_eq!(t.fixed_date(), fixed_from_gregorian(date.0, date.1, date.2));
        }
    }

    #[test]
    fn lunation_zero_is_january_11_of_year_1() {
        let t = nth_new_moon(0);
        assert!((t.value() - 11.4589).abs() < 1e-3, "new moon = {}", t.value());
    }

    #[test]
    fn consecutive_new_moons_are_a_synodic_month_apart() {
        for n in 24_700..24_760 {
            let gap = nth_new_moon(n + 1) - nth_new_moon(n);
            assert!(
                (29.2..29.9).contains(&gap.value()),
                "lunation {n} lasts {} days",
                gap.value()
            );
        }
    }

    #[test]
    fn bracketing_searches_surround_the_moment() {
        let start = Instant::<Universal>::from_fixed(fixed_from_gregorian(2023, 1, 1));
        for day in (0..400).step_by(7) {
            let t = start + Days::new(day as f64 + 0.37);
            let after = new_moon_at_or_after(t).unwrap();
            let before = new_moon_before(t).unwrap();
            assert!(before < t && t <= after, "day {day}");
            let span = (after - before).value();
            assert!((29.2..29.9).contains(&span), "span {span} at day {day}");
        }
    }

    #[test]
    fn search_gives_up_past_the_step_limit() {
        let t = nth_new_moon(24_724) + Days::new(3.0);
        let exhausted = |search: &'static str| -> Result<Instant<Universal>> {
            Err(CalendarError::Computation {
                search,
                limit: NEW_MOON_SEARCH_LIMIT,
            })
        };
        assert_eq!(new_moon_at_or_after_from(t, 24_704), exhausted("new moon at or after"));
        assert_eq!(new_moon_at_or_after_from(t, 24_745), exhausted("new moon at or after"));
        assert_eq!(new_moon_before_from(t, 24_744), exhausted("new moon before"));
        assert_eq!(new_moon_before_from(t, 24_704), exhausted("new moon before"));
    }

    #[test]
    fn search_recovers_from_a_nearby_estimate() {
        let t = nth_new_moon(24_724) + Days::new(3.0);
        for seed in [24_719, 24_730] {
            assert_eq!(new_moon_at_or_after_from(t, seed).unwrap(), nth_new_moon(24_725));
            assert_eq!(new_moon_before_from(t, seed).unwrap(), nth_new_moon(24_724));
        }
    }

    #[test]
    fn search_at_exact_new_moon() {
        let t = nth_new_moon(24_724);
        assert_eq!(new_moon_at_or_after(t).unwrap(), t);
        assert_eq!(new_moon_before(t).unwrap(), nth_new_moon(24_723));
    }
}
