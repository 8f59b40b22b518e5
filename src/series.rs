// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Small numeric helpers shared by the astronomical series.
//!
//! Angles are plain `f64` degrees throughout the crate.

/// Evaluate `a[0] + a[1]·x + a[2]·x² + …` by Horner's rule.
#[inline]
pub(crate) fn poly(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &a| acc * x + a)
}

#[inline]
pub(crate) fn sin_degrees(theta: f64) -> f64 {
    theta.to_radians().sin()
}

#[inline]
pub(crate) fn cos_degrees(theta: f64) -> f64 {
    theta.to_radians().cos()
}

/// Reduce an angle to `[0, 360)`.
#[inline]
pub(crate) fn normalize_degrees(theta: f64) -> f64 {
    let reduced = theta.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Adjusted remainder: like `rem_euclid`, but returns `b` instead of `0`.
#[inline]
pub(crate) fn amod(x: i64, b: i64) -> i64 {
    let r = x.rem_euclid(b);
    if r == 0 {
        b
    } else {
        r
    }
}
