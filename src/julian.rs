// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day and Julian-century extensions for [`Instant`].

use qtty::*;

use super::instant::{Instant, TimeScale};
use super::scales::Dynamical;

/// Fixed-date moment of Julian Day 0 (noon, November 24, 4714 BCE
/// Gregorian): `JD = moment + 1 721 424.5`.
const JD_EPOCH: Days = Days::new(-1_721_424.5);

impl Instant<Dynamical> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TD.
    pub const J2000: Self = Self::new(730_120.5);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0, the time argument of every solar and
    /// lunar series in this crate.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl<S: TimeScale> Instant<S> {
    /// Julian Day number of this moment, on the same scale.
    #[inline]
    pub fn julian_day(&self) -> Days {
        self.quantity() - JD_EPOCH
    }

    /// Moment on this scale from a Julian Day number.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(jd + JD_EPOCH)
    }
}

/// Julian centuries of dynamical time since J2000.0, for a moment on any
/// scale.
#[inline]
pub fn julian_centuries<S: TimeScale>(t: Instant<S>) -> f64 {
    t.to::<Dynamical>().julian_centuries().value()
}
