// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunisolar
//!
//! Chinese lunisolar calendar and lunar phase engine built on typed
//! astronomical time.
//!
//! # Core types
//!
//! - [`FixedDate`]: integer day count (Rata Die), the interchange value
//!   between calendars.
//! - [`Instant<S>`]: moment parameterised by a [`TimeScale`] marker.
//! - [`ChineseDate`]: cycle, year, month (with leap flag), day and
//!   sexagenary year name.
//! - [`MoonPhaseResult`]: Julian Day, age, illumination and phase name.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`Dynamical`] | Dynamical (ephemeris) time |
//! | [`Universal`] | Universal Time (Earth rotation) |
//! | [`ChinaStandard`] | Beijing standard time of the Chinese calendar |
//!
//! # ΔT (Delta T)
//!
//! The difference **ΔT = TD − UT** is applied automatically by the
//! [`Universal`] time scale. Construct any scale via `from_utc()`, which
//! routes through `Universal` internally. The raw value in seconds is
//! available via [`Instant::<Universal>::delta_t()`](Instant::delta_t).
//!
//! # Calendar pipeline
//!
//! [`chinese_from_fixed`] locates the winter solstices around the date
//! ([`chinese_winter_solstice_on_or_before`]), counts the new moons between
//! them ([`nth_new_moon`]) and places the leap month at the first lunar month
//! without a major solar term. Every search is bounded and reports
//! [`CalendarError::Computation`] instead of looping.
//!
//! ```
//! use lunisolar::{convert_gregorian_to_chinese, moon_phase_on};
//!
//! let date = convert_gregorian_to_chinese(2017, 7, 23).unwrap();
//! assert!(date.is_leap_month);
//! assert_eq!((6, 1), (date.month, date.day));
//!
//! let phase = moon_phase_on(2024, 4, 23, None).unwrap();
//! assert_eq!("Full Moon", phase.phase_name.label());
//! ```

pub mod chinese;
mod delta_t;
mod error;
mod fixed;
pub(crate) mod instant;
mod julian;
mod location;
mod lunar;
mod new_moon;
mod phase;
pub(crate) mod scales;
mod series;
mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use chinese::names::{
    day_label, month_label, season_for_month, sexagenary_characters, sexagenary_day,
    sexagenary_name, Branch, Element, MonthSeason, Polarity, Season, Stem,
};
pub use chinese::solar_term::{
    chinese_no_major_solar_term, chinese_prior_leap_month, current_major_solar_term,
    current_minor_solar_term, LEAP_MONTH_WALK_LIMIT,
};
pub use chinese::solstice::{
    chinese_new_moon_before, chinese_new_moon_on_or_after, chinese_winter_solstice_on_or_before,
    SOLSTICE_SCAN_LIMIT,
};
pub use chinese::{
    chinese_from_fixed, chinese_new_year, chinese_new_year_on_or_before,
    convert_gregorian_to_chinese, ChineseDate, CHINESE_EPOCH,
};
pub use delta_t::{dynamical_from_universal, ephemeris_correction, universal_from_dynamical};
pub use error::{CalendarError, Result};
pub use fixed::{
    days_in_month, fixed_from_gregorian, gregorian_from_fixed, gregorian_leap_year,
    gregorian_new_year, gregorian_year_from_fixed, FixedDate,
};
pub use instant::{Instant, TimeScale};
pub use julian::julian_centuries;
pub use location::{
    chinese_location, midnight_in_china, standard_from_universal, universal_from_standard,
    Location,
};
pub use lunar::{
    lunar_anomaly, lunar_elongation, lunar_longitude, lunar_phase, mean_lunar_longitude,
    moon_node, solar_anomaly, MEAN_SYNODIC_MONTH,
};
pub use new_moon::{new_moon_at_or_after, new_moon_before, nth_new_moon, NEW_MOON_SEARCH_LIMIT};
pub use phase::{julian_day_from_datetime, moon_phase_at, moon_phase_on, MoonPhaseResult, PhaseName};
pub use scales::{ChinaStandard, Dynamical, Universal};
pub use solar::{
    aberration, estimate_prior_solar_longitude, nutation, solar_longitude, MEAN_TROPICAL_YEAR,
    WINTER,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Moment in Universal Time.
pub type UniversalTime = Instant<Universal>;

/// Moment in dynamical (ephemeris) time.
pub type DynamicalTime = Instant<Dynamical>;

/// Moment in Beijing standard time.
pub type ChinaStandardTime = Instant<ChinaStandard>;
