// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar algorithms.
//!
//! Leap-year rule, month-length tables, and day-of-week via Zeller's
//! congruence.  Everything here is a pure function of its inputs and
//! valid over the full `i64` year range.

use crate::fields::Month;
use std::fmt;

/// Month lengths for a common year, indexed by `month - 1`.
const DAYS_IN_MONTH_COMMON: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month lengths for a leap year, indexed by `month - 1`.
const DAYS_IN_MONTH_LEAP: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true for Gregorian leap years.
///
/// Divisible by 4, except century years not divisible by 400.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Number of days in `month` of `year` (28–31).
#[inline]
pub const fn days_in_month(year: i64, month: Month) -> u8 {
    let table = if is_leap_year(year) {
        &DAYS_IN_MONTH_LEAP
    } else {
        &DAYS_IN_MONTH_COMMON
    };
    table[(month.get() - 1) as usize]
}

/// Number of days in `year` (365 or 366).
#[inline]
pub const fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days in the months of `year` before `month`.
#[inline]
pub(crate) const fn days_before_month(year: i64, month: Month) -> i64 {
    let table = if is_leap_year(year) {
        &DAYS_IN_MONTH_LEAP
    } else {
        &DAYS_IN_MONTH_COMMON
    };
    let mut days = 0;
    let mut m = 0;
    while m < (month.get() - 1) as usize {
        days += table[m] as i64;
        m += 1;
    }
    days
}

// ── Weekday ───────────────────────────────────────────────────────────────

/// Day of the week, Sunday-origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// Index with Sunday = 0 through Saturday = 6.
    #[inline]
    pub const fn number_from_sunday(self) -> u8 {
        self as u8
    }

    const fn from_index(index: i64) -> Self {
        match index {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Day of the week for a Gregorian date, via Zeller's congruence.
///
/// January and February are counted as months 13 and 14 of the previous
/// year; Zeller's Saturday-origin result is remapped to the
/// Sunday-origin [`Weekday`] enumeration.
pub fn weekday(year: i64, month: Month, day: u8) -> Weekday {
    let (y, m) = if month.get() <= 2 {
        (year - 1, month.get() as i64 + 12)
    } else {
        (year, month.get() as i64)
    };
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);
    let h = (day as i64 + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    // h = 0 is Saturday; shift to Sunday = 0.
    Weekday::from_index((h + 6) % 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Month;

    fn month(m: u8) -> Month {
        Month::new(m).unwrap()
    }

    #[test]
    fn leap_year_rule() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(0));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, month(2)), 29);
        assert_eq!(days_in_month(2023, month(2)), 28);
        assert_eq!(days_in_month(1900, month(2)), 28);
        assert_eq!(days_in_month(2000, month(2)), 29);
        for (m, expect) in [(1, 31), (4, 30), (6, 30), (7, 31), (9, 30), (12, 31)] {
            assert_eq!(days_in_month(2023, month(m)), expect);
        }
    }

    #[test]
    fn cumulative_month_days() {
        assert_eq!(days_before_month(2023, month(1)), 0);
        assert_eq!(days_before_month(2023, month(3)), 59);
        assert_eq!(days_before_month(2024, month(3)), 60);
        assert_eq!(days_before_month(2023, month(12)), 334);
        assert_eq!(
            days_before_month(2024, month(12)) + days_in_month(2024, month(12)) as i64,
            366
        );
    }

    #[test]
    fn zeller_reference_date() {
        assert_eq!(weekday(2024, month(1), 15), Weekday::Monday);
    }

    #[test]
    fn zeller_full_week_from_reference() {
        // 2024-01-14 was a Sunday; sweep all seven offsets.
        let expected = [
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ];
        for (offset, want) in expected.iter().enumerate() {
            assert_eq!(weekday(2024, month(1), 14 + offset as u8), *want);
        }
    }

    #[test]
    fn zeller_handles_january_and_february() {
        assert_eq!(weekday(2000, month(1), 1), Weekday::Saturday);
        assert_eq!(weekday(2024, month(2), 29), Weekday::Thursday);
        assert_eq!(weekday(1970, month(1), 1), Weekday::Thursday);
    }

    #[test]
    fn zeller_proleptic_years() {
        // 1582-10-15, first day of the Gregorian reform, was a Friday.
        assert_eq!(weekday(1582, month(10), 15), Weekday::Friday);
    }

    #[test]
    fn weekday_display_and_index() {
        assert_eq!(Weekday::Sunday.number_from_sunday(), 0);
        assert_eq!(Weekday::Saturday.number_from_sunday(), 6);
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
