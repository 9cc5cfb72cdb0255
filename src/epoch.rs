// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bidirectional O(1) mapping between Gregorian calendar fields and a
//! signed count of seconds since 1970-01-01T00:00:00.
//!
//! Both directions are closed-form: the forward path counts leap days by
//! inclusion–exclusion, the reverse path decomposes the day count along
//! the Gregorian 400-year cycle (146 097 days).  The epoch year 1970
//! sits 30 years before the year-2000 leap century, so the first
//! 100-year stretch of each cycle is one day longer than the other
//! three and must be split off asymmetrically; getting this boundary
//! wrong corrupts dates near multiples of 100 years from the epoch.
//!
//! These routines assume pre-validated inputs and are used only through
//! [`Time`](crate::Time) and [`Instant`](crate::Instant).

use crate::fields::Month;
use crate::gregorian::{days_before_month, days_in_month, days_in_year};

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

const DAYS_PER_400Y: i64 = 146_097;
const DAYS_PER_100Y: i64 = 36_524;
const DAYS_PER_4Y: i64 = 1_461;

const EPOCH_YEAR: i64 = 1970;

/// Leap days in years 1..=1969: ⌊1969/4⌋ − ⌊1969/100⌋ + ⌊1969/400⌋.
const LEAPS_AT_EPOCH: i64 = 477;

/// Days from 1970-01-01 to the given date (negative before the epoch).
///
/// The year field is total over `i64`, so the day count can exceed the
/// `i64` domain; it clamps to the boundary then, which keeps the
/// mapping monotone without a partial signature on an internally
/// validated path.
pub(crate) fn epoch_days_from_date(year: i64, month: Month, day: u8) -> i64 {
    let prev = year.saturating_sub(1);
    let leaps =
        prev.div_euclid(4) - prev.div_euclid(100) + prev.div_euclid(400) - LEAPS_AT_EPOCH;
    year.saturating_sub(EPOCH_YEAR)
        .saturating_mul(365)
        .saturating_add(leaps)
        .saturating_add(days_before_month(year, month))
        .saturating_add(day as i64 - 1)
}

/// Inverse of [`epoch_days_from_date`]: `(year, month, day)`.
pub(crate) fn date_from_epoch_days(days: i64) -> (i64, Month, u8) {
    let (year, mut remaining) = year_and_ordinal(days);
    let mut month = 1u8;
    loop {
        let len = days_in_month(year, Month::new_unchecked(month)) as i64;
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }
    (year, Month::new_unchecked(month), (remaining + 1) as u8)
}

/// Splits an epoch day count into a year and a zero-based day of year.
fn year_and_ordinal(days: i64) -> (i64, i64) {
    let mut year = EPOCH_YEAR + 400 * days.div_euclid(DAYS_PER_400Y);
    let mut rem = days.rem_euclid(DAYS_PER_400Y);
    if rem > DAYS_PER_100Y {
        // Past the 36 525-day first stretch (1970–2069 pattern), which
        // contains the year % 400 == 0 leap century.
        rem -= DAYS_PER_100Y + 1;
        year += 100 * (1 + rem / DAYS_PER_100Y);
        rem %= DAYS_PER_100Y;
        // The trailing stretches skip their century leap 30 years in,
        // leaving the 4-year group that straddles it one day short.
        // Re-align the day count for everything past that group.
        if rem >= 8 * DAYS_PER_4Y - 1 {
            rem += 1;
        }
    }
    year += 4 * (rem / DAYS_PER_4Y);
    rem %= DAYS_PER_4Y;
    while rem >= days_in_year(year) {
        rem -= days_in_year(year);
        year += 1;
    }
    (year, rem)
}

/// Seconds since the Unix epoch for a calendar date and time of day,
/// clamped to the `i64` boundary for years too remote to count in
/// seconds.
pub(crate) fn epoch_seconds_from_fields(
    year: i64,
    month: Month,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> i64 {
    epoch_days_from_date(year, month, day)
        .saturating_mul(SECONDS_PER_DAY)
        .saturating_add(hour as i64 * 3_600 + minute as i64 * 60 + second as i64)
}

/// Inverse of [`epoch_seconds_from_fields`]:
/// `(year, month, day, hour, minute, second)`.
///
/// Never yields `second == 60`; a stored leap second aliases the
/// following second on the forward path.
pub(crate) fn fields_from_epoch_seconds(seconds: i64) -> (i64, Month, u8, u8, u8, u8) {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let second_of_day = seconds.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = date_from_epoch_days(days);
    let hour = (second_of_day / 3_600) as u8;
    let minute = (second_of_day % 3_600 / 60) as u8;
    let second = (second_of_day % 60) as u8;
    (year, month, day, hour, minute, second)
}
