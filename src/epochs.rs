// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reference epochs of common timestamp conventions.
//!
//! Each constant is the calendar origin a protocol or platform counts
//! from, expressed as a UTC [`Time`].  Converting a foreign timestamp
//! is then ordinary instant arithmetic, e.g. a GPS week-zero count
//! starts at `GPS.to_instant()`.

use crate::calendar::Time;
use crate::fields::{Day, Hour, Microsecond, Millisecond, Minute, Month, Nanosecond, Second, Year};

const fn midnight(year: i64, month: u8, day: u8) -> Time {
    Time::from_fields(
        Year::new(year),
        Month::new_unchecked(month),
        Day::new_unchecked(day),
        Hour::new_unchecked(0),
        Minute::new_unchecked(0),
        Second::new_unchecked(0),
        Millisecond::new_unchecked(0),
        Microsecond::new_unchecked(0),
        Nanosecond::new_unchecked(0),
    )
}

/// Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX: Time = midnight(1970, 1, 1);

/// NTP prime epoch (era 0), 1900-01-01T00:00:00Z.
pub const NTP: Time = midnight(1900, 1, 1);

/// GPS time zero, 1980-01-06T00:00:00Z.
pub const GPS: Time = midnight(1980, 1, 6);

/// TAI origin as used by atomic timestamp schemes, 1958-01-01T00:00:00Z.
pub const TAI: Time = midnight(1958, 1, 1);

/// Windows FILETIME epoch, 1601-01-01T00:00:00Z.
pub const WINDOWS: Time = midnight(1601, 1, 1);

/// Apple Core Data / CFAbsoluteTime epoch, 2001-01-01T00:00:00Z.
pub const APPLE: Time = midnight(2001, 1, 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_second_offsets() {
        assert_eq!(UNIX.epoch_seconds(), 0);
        assert_eq!(NTP.epoch_seconds(), -2_208_988_800);
        assert_eq!(GPS.epoch_seconds(), 315_964_800);
        assert_eq!(TAI.epoch_seconds(), -378_691_200);
        assert_eq!(WINDOWS.epoch_seconds(), -11_644_473_600);
        assert_eq!(APPLE.epoch_seconds(), 978_307_200);
    }

    #[test]
    fn foreign_timestamp_rebasing() {
        use crate::duration::Duration;

        // A FILETIME of zero is the Windows origin on the Unix timeline.
        let windows_origin = WINDOWS.to_instant();
        assert_eq!(windows_origin.seconds(), -11_644_473_600);

        // 1e9 seconds after the NTP origin.
        let shifted = NTP.to_instant() + Duration::from_seconds(1_000_000_000);
        assert_eq!(
            Time::from_instant(shifted),
            Time::new(1931, 9, 10, 1, 46, 40).unwrap()
        );
    }

    #[test]
    fn epoch_weekdays() {
        use crate::gregorian::Weekday;

        assert_eq!(UNIX.weekday(), Weekday::Thursday);
        assert_eq!(GPS.weekday(), Weekday::Sunday);
        assert_eq!(NTP.weekday(), Weekday::Monday);
        assert_eq!(WINDOWS.weekday(), Weekday::Monday);
    }
}
