// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Historical reference location of the Chinese calendar.
//!
//! Only the time-zone offset matters for calendar computations. Before 1929
//! China kept the local mean time of Beijing (116°25′ E, i.e. 1397/180 h
//! ahead of Greenwich); from 1929 on it uses UTC+8.

use qtty::Days;

use super::fixed::{gregorian_year_from_fixed, FixedDate};
use super::instant::Instant;
use super::scales::{ChinaStandard, Universal};

/// First year the Chinese calendar is computed for UTC+8.
const STANDARD_ZONE_YEAR: i32 = 1929;

/// Beijing local mean time offset, in hours.
const BEIJING_MEAN_TIME_HOURS: f64 = 1397.0 / 180.0;

/// A location reduced to its zone offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Location {
    zone_offset_hours: f64,
}

impl Location {
    pub const fn new(zone_offset_hours: f64) -> Self {
        Self { zone_offset_hours }
    }

    /// The Chinese calendar's location for a Gregorian year.
    #[inline]
    pub const fn china(year: i32) -> Self {
        if year < STANDARD_ZONE_YEAR {
            Self::new(BEIJING_MEAN_TIME_HOURS)
        } else {
            Self::new(8.0)
        }
    }

    #[inline]
    pub const fn zone_offset_hours(&self) -> f64 {
        self.zone_offset_hours
    }

    /// Zone offset as a fraction of a day.
    #[inline]
    pub fn zone(&self) -> Days {
        Days::new(self.zone_offset_hours / 24.0)
    }
}

/// The Chinese calendar's location for the year containing `date`.
#[inline]
pub fn chinese_location(date: FixedDate) -> Location {
    Location::china(gregorian_year_from_fixed(date))
}

/// Beijing standard time of a Universal moment.
#[inline]
pub fn standard_from_universal(ut: Instant<Universal>) -> Instant<ChinaStandard> {
    Instant::from_days(ut.quantity() + chinese_location(ut.fixed_date()).zone())
}

/// Universal time of a Beijing standard-time moment.
#[inline]
pub fn universal_from_standard(standard: Instant<ChinaStandard>) -> Instant<Universal> {
    Instant::from_days(standard.quantity() - chinese_location(standard.fixed_date()).zone())
}

/// Universal moment of midnight starting `date` in Beijing.
#[inline]
pub fn midnight_in_china(date: FixedDate) -> Instant<Universal> {
    universal_from_standard(Instant::from_fixed(date))
}
