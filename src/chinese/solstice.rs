// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Winter solstice and new-moon days in Beijing standard time.

use tracing::{debug, trace, warn};

use crate::error::{CalendarError, Result};
use crate::fixed::FixedDate;
use crate::location::{midnight_in_china, standard_from_universal};
use crate::new_moon::{new_moon_at_or_after, new_moon_before};
use crate::solar::{estimate_prior_solar_longitude, solar_longitude, WINTER};

/// Maximum days the solstice scan may advance past its estimate.
pub const SOLSTICE_SCAN_LIMIT: u32 = 10;

/// Day, in Beijing, of the winter solstice on or before `date`.
///
/// # Errors
///
/// [`CalendarError::Computation`] if the solar longitude does not reach
/// 270° within [`SOLSTICE_SCAN_LIMIT`] days of the estimate.
pub fn chinese_winter_solstice_on_or_before(date: FixedDate) -> Result<FixedDate> {
    let approx = estimate_prior_solar_longitude(WINTER, midnight_in_china(date + 1));
    winter_solstice_scan_from(date, approx.fixed_date() - 1)
}

/// Advances from `day` to the first day whose following Beijing midnight
/// has the sun at or past 270°.
fn winter_solstice_scan_from(date: FixedDate, mut day: FixedDate) -> Result<FixedDate> {
    let mut scanned = 0;
    while solar_longitude(midnight_in_china(day + 1)) < WINTER {
        day += 1;
        scanned += 1;
        trace!(day = day.value(), scanned, "winter solstice scan");
        if scanned > SOLSTICE_SCAN_LIMIT {
            warn!(
                date = date.value(),
                limit = SOLSTICE_SCAN_LIMIT,
                "winter solstice scan did not converge"
            );
            return Err(CalendarError::Computation {
                search: "winter solstice scan",
                limit: SOLSTICE_SCAN_LIMIT,
            });
        }
    }
    debug!(date = date.value(), solstice = day.value(), "winter solstice");
    Ok(day)
}

/// Day, in Beijing, of the first new moon on or after `date`.
pub fn chinese_new_moon_on_or_after(date: FixedDate) -> Result<FixedDate> {
    let t = new_moon_at_or_after(midnight_in_china(date))?;
    Ok(standard_from_universal(t).fixed_date())
}

/// Day, in Beijing, of the last new moon before `date`.
pub fn chinese_new_moon_before(date: FixedDate) -> Result<FixedDate> {
    let t = new_moon_before(midnight_in_china(date))?;
    Ok(standard_from_universal(t).fixed_date())
}
