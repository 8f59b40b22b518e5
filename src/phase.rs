// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase, age and illumination for a civil instant.
//!
//! A lighter model than [`lunar_longitude`](crate::lunar_longitude): the
//! Sun's geometric longitude from a three-term equation of the centre and
//! the Moon's longitude from the 24 largest ELP terms plus two
//! perturbations (Meeus, *Astronomical Algorithms* ch. 25 and 47). No ΔT,
//! aberration or nutation is applied; the result is good to a fraction of
//! a degree, plenty for naming the phase of the day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use std::fmt;

use crate::error::{CalendarError, Result};
use crate::fixed::FixedDate;
use crate::lunar::{LONGITUDE_TERMS, MEAN_SYNODIC_MONTH};
use crate::series::{cos_degrees, normalize_degrees, sin_degrees};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Illumination band around 0, ½ and 1 that names New, Quarter and Full.
const PHASE_TOLERANCE: f64 = 0.13;

/// Number of leading ELP longitude terms used by the light model.
const LOW_PRECISION_TERMS: usize = 24;

/// Julian Day of J2000.0.
const J2000_JD: f64 = 2_451_545.0;

/// Eight conventional phase names, waxing then waning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// Classify by illuminated fraction; `waxing` splits the halves.
    pub fn classify(illumination: f64, waxing: bool) -> Self {
        if illumination <= PHASE_TOLERANCE {
            PhaseName::NewMoon
        } else if illumination >= 1.0 - PHASE_TOLERANCE {
            PhaseName::FullMoon
        } else if (illumination - 0.5).abs() <= PHASE_TOLERANCE {
            if waxing {
                PhaseName::FirstQuarter
            } else {
                PhaseName::LastQuarter
            }
        } else if illumination < 0.5 {
            if waxing {
                PhaseName::WaxingCrescent
            } else {
                PhaseName::WaningCrescent
            }
        } else if waxing {
            PhaseName::WaxingGibbous
        } else {
            PhaseName::WaningGibbous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase of the Moon at an instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPhaseResult {
    pub julian_day: f64,
    /// Days since the last new moon, from the elongation; in
    /// `[0, synodic month)`.
    pub age_days: f64,
    /// Illuminated fraction of the disc, in `[0, 1]`.
    pub illumination: f64,
    pub phase_name: PhaseName,
}

/// Julian Day of a UTC instant (proleptic Gregorian calendar).
pub fn julian_day_from_datetime(datetime: DateTime<Utc>) -> f64 {
    let mut year = datetime.year() as i64;
    let mut month = datetime.month() as i64;
    let seconds = datetime.num_seconds_from_midnight() as f64
        + datetime.nanosecond() as f64 / 1e9;
    let day = datetime.day() as f64 + seconds / 86_400.0;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (year + 4716) as f64).floor() + (30.6001 * (month + 1) as f64).floor() + day
        + b as f64
        - 1524.5
}

/// Geometric solar longitude and elongation of the Moon for Julian Day `jd`.
fn elongation(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / 36_525.0;

    let l0 = 280.46646 + t * (36000.76983 + 0.0003032 * t);
    let m = 357.52911 + t * (35999.05029 - 0.0001537 * t);
    let centre = (1.914602 - t * (0.004817 + 0.000014 * t)) * sin_degrees(m)
        + (0.019993 - 0.000101 * t) * sin_degrees(2.0 * m)
        + 0.000289 * sin_degrees(3.0 * m);
    let sun = normalize_degrees(l0 + centre);

    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let mean_moon =
        218.3164591 + 481267.88134236 * t - 0.0013268 * t2 + t3 / 538841.0 - t4 / 65194000.0;
    let d = 297.8502042 + 445267.1115168 * t - 0.0016300 * t2 + t3 / 545868.0 - t4 / 113065000.0;
    let mp = 134.9634114 + 477198.8676313 * t + 0.0089970 * t2 + t3 / 69699.0 - t4 / 14712000.0;
    let f = 93.2720993 + 483202.0175273 * t - 0.0034029 * t2 - t3 / 3526000.0 + t4 / 863310000.0;

    let mut sigma: f64 = LONGITUDE_TERMS[..LOW_PRECISION_TERMS]
        .iter()
        .map(|&(cd, cm, cmp, cf, coefficient)| {
            coefficient
                * sin_degrees(cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f)
        })
        .sum();
    sigma += 3958.0 * sin_degrees(119.75 + 131.849 * t);
    sigma += 1962.0 * sin_degrees(mean_moon - f);
    let moon = normalize_degrees(mean_moon + sigma / 1_000_000.0);

    normalize_degrees(moon - sun)
}

/// Phase of the Moon at a UTC instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lunisolar::{moon_phase_at, PhaseName};
///
/// // total solar eclipse of 2024-04-08
/// let phase = moon_phase_at(Utc.with_ymd_and_hms(2024, 4, 8, 0, 0, 0).unwrap());
/// assert_eq!(PhaseName::NewMoon, phase.phase_name);
/// assert!(phase.illumination < 0.01);
/// ```
pub fn moon_phase_at(datetime: DateTime<Utc>) -> MoonPhaseResult {
    let julian_day = julian_day_from_datetime(datetime);
    let delta = elongation(julian_day);
    let illumination = (1.0 - cos_degrees(delta)) / 2.0;
    MoonPhaseResult {
        julian_day,
        age_days: delta / 360.0 * MEAN_SYNODIC_MONTH.value(),
        illumination,
        phase_name: PhaseName::classify(illumination, delta < 180.0),
    }
}

/// Phase of the Moon on a Gregorian date, at `time` as
/// `(hour, minute, second)` UTC or at 00:00 UTC when omitted.
///
/// # Errors
///
/// [`CalendarError::InvalidDate`] or [`CalendarError::InvalidTime`] for
/// civil values that do not exist.
pub fn moon_phase_on(
    year: i32,
    month: u32,
    day: u32,
    time: Option<(u32, u32, u32)>,
) -> Result<MoonPhaseResult> {
    FixedDate::from_gregorian(year, month, day)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })?;
    let time = match time {
        None => NaiveTime::MIN,
        Some((hour, minute, second)) => NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            })?,
    };
    Ok(moon_phase_at(date.and_time(time).and_utc()))
}
