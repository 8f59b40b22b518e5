// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a time scale and encodes how a moment on
//! that scale relates to the canonical **dynamical** moment (uniform
//! ephemeris time counted on the fixed-date axis).
//!
//! | Marker | Description |
//! |--------|-------------|
//! | [`Dynamical`] | Ephemeris / Terrestrial Time (canonical) |
//! | [`Universal`] | Universal Time, tied to Earth rotation |
//! | [`ChinaStandard`] | Civil time at the Beijing reference meridian |

use super::delta_t::ephemeris_correction;
use super::instant::{Instant, TimeScale};
use super::location::Location;
use qtty::Days;

// ---------------------------------------------------------------------------
// Dynamical time
// ---------------------------------------------------------------------------

/// Dynamical (ephemeris) time, the identity scale.
///
/// All solar and lunar series are evaluated on this axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Dynamical;

impl TimeScale for Dynamical {
    const LABEL: &'static str = "TD";

    #[inline(always)]
    fn to_dynamical(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_dynamical(dynamical: Days) -> Days {
        dynamical
    }
}

// ---------------------------------------------------------------------------
// Universal Time (Earth-rotation based)
// ---------------------------------------------------------------------------

/// Universal Time, the civil time scale tied to Earth's rotation.
///
/// The conversion to [`Dynamical`] adds the epoch-dependent ΔT correction
/// from [`ephemeris_correction`]; the inverse uses a three-iteration
/// fixed-point solver.
///
/// [`Instant::from_utc`] routes through this scale automatically.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Universal;

impl TimeScale for Universal {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_dynamical(value: Days) -> Days {
        value + ephemeris_correction(Instant::<Universal>::from_days(value))
    }

    #[inline]
    fn from_dynamical(dynamical: Days) -> Days {
        // Solve ut + ΔT(ut) = td by fixed-point iteration.
        // dΔT/dt is of order 1e-8, so convergence is immediate.
        let mut ut = dynamical;
        for _ in 0..3 {
            ut = dynamical - ephemeris_correction(Instant::<Universal>::from_days(ut));
        }
        ut
    }
}

// ---------------------------------------------------------------------------
// China standard time
// ---------------------------------------------------------------------------

/// Standard civil time of the Chinese calendar's reference location.
///
/// The zone offset is the Beijing local mean time (1397/180 h) before 1929
/// and UTC+8 from 1929 on; see [`Location::china`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ChinaStandard;

impl TimeScale for ChinaStandard {
    const LABEL: &'static str = "CST";

    #[inline]
    fn to_dynamical(value: Days) -> Days {
        let standard = Instant::<ChinaStandard>::from_days(value);
        let zone = Location::china(standard.fixed_date().year()).zone();
        Universal::to_dynamical(value - zone)
    }

    #[inline]
    fn from_dynamical(dynamical: Days) -> Days {
        let universal = Instant::<Universal>::from_days(Universal::from_dynamical(dynamical));
        let zone = Location::china(universal.fixed_date().year()).zone();
        universal.quantity() + zone
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Instant<A>> for Instant<B>` implementations.
macro_rules! impl_instant_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Instant<$first>> for Instant<$rest> {
                #[inline]
                fn from(t: Instant<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<Instant<$rest>> for Instant<$first> {
                #[inline]
                fn from(t: Instant<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_instant_conversions!($($rest),+);
    };
}

impl_instant_conversions!(Dynamical, Universal, ChinaStandard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::fixed_from_gregorian;
    use qtty::{Day, Second, Seconds};

    #[test]
    fn dynamical_identity() {
        let t = Instant::<Dynamical>::new(730_120.5);
        assert_eq!(t.to::<Dynamical>(), t);
    }

    #[test]
    fn universal_to_dynamical_applies_delta_t() {
        let ut = Instant::<Universal>::new(730_120.5);
        let td: Instant<Dynamical> = ut.to::<Dynamical>();
        let offset = (td.quantity() - ut.quantity()).to::<Second>();
        assert!(
            (offset - Seconds::new(63.86)).abs() < Seconds::new(0.01),
            "UT→TD offset = {} s, expected 63.86 s",
            offset
        );
    }

    #[test]
    fn universal_dynamical_roundtrip() {
        for value in [-1_000_000.25, 0.0, 693_595.5, 730_120.5, 1_095_000.0] {
            let td = Instant::<Dynamical>::new(value);
            let back = td.to::<Universal>().to::<Dynamical>();
            assert!(
                (back - td).abs() < Days::new(1e-9),
                "roundtrip error at {value}: {} days",
                (back - td).abs()
            );
        }
    }

    #[test]
    fn china_standard_is_utc_plus_eight_after_1929() {
        let noon = Instant::<ChinaStandard>::from_fixed(fixed_from_gregorian(2024, 2, 10))
            + Days::new(0.5);
        let ut: Instant<Universal> = noon.to::<Universal>();
        let offset = noon.quantity() - ut.quantity();
        assert!((offset - Days::new(8.0 / 24.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn china_standard_uses_beijing_mean_time_before_1929() {
        let midnight = Instant::<ChinaStandard>::from_fixed(fixed_from_gregorian(1900, 1, 31));
        let ut: Instant<Universal> = midnight.into();
        let offset = (midnight.quantity() - ut.quantity()).to::<Day>();
        assert!((offset - Days::new(1397.0 / 180.0 / 24.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn from_into_between_scales() {
        let ut = Instant::<Universal>::new(730_120.5);
        let td: Instant<Dynamical> = ut.into();
        let cst: Instant<ChinaStandard> = td.into();
        let back: Instant<Universal> = cst.into();
        assert!((back - ut).abs() < Days::new(1e-9));
    }
}
