// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale parameterised moment.
//!
//! [`Instant<S>`] is the core value type of the astronomical layer. It stores
//! a single [`Days`] quantity, a *fixed-date moment* (day count with a
//! fractional part, midnight of [`FixedDate`] `d` being `d.0`), whose
//! meaning is fixed by the compile-time marker `S: TimeScale`.
//!
//! Moments on different scales cannot be mixed: arithmetic is only defined
//! between instants of the same scale, and crossing scales requires an
//! explicit [`Instant::to`].

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::fixed::FixedDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A time scale defines a display label and a pair of conversions between
/// its native moment and the canonical **dynamical** moment (uniform
/// ephemeris time on the fixed-date axis).
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Instant`] formatting.
    const LABEL: &'static str;

    /// Convert a moment on this scale to the dynamical axis.
    fn to_dynamical(value: Days) -> Days;

    /// Convert a dynamical moment back to this scale.
    fn from_dynamical(dynamical: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Instant<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A moment on time scale `S`, counted in days on the fixed-date axis.
///
/// `PhantomData` is zero-sized, so `Instant<S>` is layout-identical to
/// `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Instant<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

/// Fixed-date moment of the Unix epoch, 1970-01-01T00:00.
const UNIX_EPOCH_MOMENT: Days = Days::new(719_163.0);

impl<S: TimeScale> Instant<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw fixed-date moment.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// Midnight at the start of `date` on this scale.
    #[inline]
    pub fn from_fixed(date: FixedDate) -> Self {
        Self::new(date.value() as f64)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar moment.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The civil day containing this moment on this scale.
    #[inline]
    pub fn fixed_date(&self) -> FixedDate {
        FixedDate::new(self.value().floor() as i64)
    }

    /// Time-of-day part of the moment, in `[0, 1)` days.
    #[inline]
    pub fn time_of_day(&self) -> f64 {
        self.value().rem_euclid(1.0)
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another time scale.
    ///
    /// The conversion routes through the dynamical axis:
    ///
    /// ```text
    /// self → dynamical → target
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Instant<T> {
        Instant::<T>::from_days(T::from_dynamical(S::to_dynamical(self.quantity)))
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`, treating UTC as Universal Time.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use crate::scales::Universal;
        let universal = self.to::<Universal>().quantity();
        let seconds_since_epoch = (universal - UNIX_EPOCH_MOMENT).to::<Second>().value();
        let (secs, nanos) = split_seconds(seconds_since_epoch);
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// The timestamp is placed on the [`Universal`](crate::Universal) axis
    /// and converted to `S`, so the ephemeris correction is applied
    /// automatically for dynamical targets.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use crate::scales::Universal;
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        let universal = UNIX_EPOCH_MOMENT + (seconds_since_epoch + nanos).to::<Day>();
        Instant::<Universal>::from_days(universal).to::<S>()
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// The earlier of two instants.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The later of two instants.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

/// Whole seconds and nanoseconds of a signed second count, with the
/// nanosecond part kept below one second.
fn split_seconds(seconds: f64) -> (i64, u32) {
    let secs = seconds.floor();
    let nanos = ((seconds - secs) * 1e9) as u32;
    if nanos >= 1_000_000_000 {
        (secs as i64 + 1, nanos - 1_000_000_000)
    } else {
        (secs as i64, nanos)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Instant<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Instant<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Instant<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Instant<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Instant<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Instant<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Instant<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Instant<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Instant<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Instant<S>> for Days {
    #[inline]
    fn from(instant: Instant<S>) -> Self {
        instant.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
