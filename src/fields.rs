// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated calendar field types.
//!
//! One refinement newtype per granularity: [`Year`], [`Month`], [`Day`],
//! [`Hour`], [`Minute`], [`Second`], [`Millisecond`], [`Microsecond`],
//! [`Nanosecond`].  Each wraps a single integer and enforces its range
//! at construction time:
//!
//! | Field | Range |
//! |-------|-------|
//! | `Year` | any `i64` (proleptic Gregorian) |
//! | `Month` | `1..=12` |
//! | `Day` | `1..=28/29/30/31`, depending on month and year |
//! | `Hour` | `0..=23` |
//! | `Minute` | `0..=59` |
//! | `Second` | `0..=60` (60 admits a leap second) |
//! | `Millisecond` / `Microsecond` / `Nanosecond` | `0..=999` |
//!
//! The validating `new` constructors fail with the field-specific
//! [`TimeError`](crate::TimeError) variant.  Each type also has a
//! crate-private `const new_unchecked` used by the conversion engines
//! for values that are in range by construction; that path is never
//! reachable with external unvalidated input.

use crate::error::{Result, TimeError};
use crate::gregorian::days_in_month;
use std::fmt;

/// Generate a range-validated clock-style field newtype.
macro_rules! clock_field {
    (
        $(#[$doc:meta])*
        $name:ident($raw:ty), $min:literal..=$max:literal, $err:ident
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($raw);

        impl $name {
            /// Smallest valid value.
            pub const MIN: Self = Self($min);
            /// Largest valid value.
            pub const MAX: Self = Self($max);

            /// Validates `value` against the field's range.
            #[inline]
            pub fn new(value: $raw) -> Result<Self> {
                if ($min..=$max).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(TimeError::$err(value))
                }
            }

            /// Caller must guarantee `value` is in range.
            #[inline]
            pub(crate) const fn new_unchecked(value: $raw) -> Self {
                debug_assert!($min <= value && value <= $max);
                Self(value)
            }

            /// The wrapped integer.
            #[inline]
            pub const fn get(self) -> $raw {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

clock_field!(
    /// Month of the year, `1..=12`.
    Month(u8), 1..=12, MonthOutOfRange
);
clock_field!(
    /// Hour of the day, `0..=23`.
    Hour(u8), 0..=23, HourOutOfRange
);
clock_field!(
    /// Minute of the hour, `0..=59`.
    Minute(u8), 0..=59, MinuteOutOfRange
);
clock_field!(
    /// Second of the minute, `0..=60`.
    ///
    /// The value 60 is representable so that a leap second can be
    /// expressed; no check is made that it falls on a legitimate
    /// leap-second boundary.
    Second(u8), 0..=60, SecondOutOfRange
);
clock_field!(
    /// Millisecond component, `0..=999`.
    Millisecond(u16), 0..=999, MillisecondOutOfRange
);
clock_field!(
    /// Microsecond component, `0..=999`.
    Microsecond(u16), 0..=999, MicrosecondOutOfRange
);
clock_field!(
    /// Nanosecond component, `0..=999`.
    Nanosecond(u16), 0..=999, NanosecondOutOfRange
);

// ── Year ──────────────────────────────────────────────────────────────────

/// Proleptic Gregorian year.
///
/// Any `i64` is a valid year, so construction is total.  Epoch-seconds
/// conversion is exact for every year whose second count fits in `i64`
/// and clamps to the domain boundary beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i64);

impl Year {
    /// Wraps a raw year value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The wrapped year.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Day ───────────────────────────────────────────────────────────────────

/// Day of the month.
///
/// The valid range depends on the month and, for February, on the
/// year's leap status, so the validating constructor takes all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    /// Validates `day` against the length of `month` in `year`.
    #[inline]
    pub fn new(day: u8, month: Month, year: Year) -> Result<Self> {
        let upper = days_in_month(year.get(), month);
        if (1..=upper).contains(&day) {
            Ok(Self(day))
        } else {
            Err(TimeError::DayOutOfRange {
                day,
                month: month.get(),
                year: year.get(),
            })
        }
    }

    /// Caller must guarantee `day` is valid for its month and year.
    #[inline]
    pub(crate) const fn new_unchecked(day: u8) -> Self {
        debug_assert!(1 <= day && day <= 31);
        Self(day)
    }

    /// The wrapped day of month.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_fields_accept_their_ranges() {
        assert_eq!(Month::new(1).unwrap().get(), 1);
        assert_eq!(Month::new(12).unwrap().get(), 12);
        assert_eq!(Hour::new(23).unwrap().get(), 23);
        assert_eq!(Minute::new(59).unwrap().get(), 59);
        assert_eq!(Second::new(60).unwrap().get(), 60);
        assert_eq!(Millisecond::new(999).unwrap().get(), 999);
        assert_eq!(Nanosecond::new(0).unwrap().get(), 0);
    }

    #[test]
    fn clock_fields_reject_out_of_range() {
        assert_eq!(Month::new(0), Err(TimeError::MonthOutOfRange(0)));
        assert_eq!(Month::new(13), Err(TimeError::MonthOutOfRange(13)));
        assert_eq!(Hour::new(24), Err(TimeError::HourOutOfRange(24)));
        assert_eq!(Minute::new(60), Err(TimeError::MinuteOutOfRange(60)));
        assert_eq!(Second::new(61), Err(TimeError::SecondOutOfRange(61)));
        assert_eq!(
            Microsecond::new(1000),
            Err(TimeError::MicrosecondOutOfRange(1000))
        );
    }

    #[test]
    fn day_depends_on_month_and_year() {
        let feb = Month::new(2).unwrap();
        assert!(Day::new(29, feb, Year::new(2024)).is_ok());
        assert_eq!(
            Day::new(29, feb, Year::new(2023)),
            Err(TimeError::DayOutOfRange {
                day: 29,
                month: 2,
                year: 2023
            })
        );
        assert!(Day::new(29, feb, Year::new(2000)).is_ok());
        assert!(Day::new(29, feb, Year::new(1900)).is_err());

        let apr = Month::new(4).unwrap();
        assert!(Day::new(30, apr, Year::new(2024)).is_ok());
        assert!(Day::new(31, apr, Year::new(2024)).is_err());
        assert!(Day::new(0, apr, Year::new(2024)).is_err());
    }

    #[test]
    fn fields_order_and_display() {
        assert!(Hour::new(3).unwrap() < Hour::new(4).unwrap());
        assert_eq!(Month::new(7).unwrap().to_string(), "7");
        assert_eq!(Year::new(-44).to_string(), "-44");
    }
}
