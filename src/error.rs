// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy shared by every fallible entry point.
//!
//! Two classes of failure exist:
//!
//! * **Invalid input**: the caller handed in a civil date or time of day
//!   that cannot be constructed ([`CalendarError::InvalidDate`],
//!   [`CalendarError::InvalidTime`]).
//! * **Computation**: one of the bounded iterative searches (new-moon
//!   bracketing, solstice scan, leap-month walk) ran past its step limit
//!   ([`CalendarError::Computation`]). This points at a modelling
//!   inconsistency, never at a transient condition, so it is not retriable.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("{search} did not converge within {limit} steps")]
    Computation { search: &'static str, limit: u32 },
}

impl CalendarError {
    /// `true` for errors caused by malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::InvalidTime { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
