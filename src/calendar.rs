// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Broken-down calendar time.
//!
//! [`Time`] aggregates the nine validated field types of
//! [`fields`](crate::fields) into one proleptic Gregorian date-time.
//! Because every field is range-checked at construction, a `Time` value
//! is valid by construction and the epoch conversions never fail on the
//! calendar side.
//!
//! The epoch-seconds mapping is closed-form in both directions, using
//! only the 12-entry month tables and no iteration over years; see
//! [`epoch`](crate::epoch) for the engine.  A stored leap second
//! (`second == 60`) aliases the first second of the following minute on
//! the forward path, and the reverse path never produces one.

use crate::duration::NANOS_PER_SECOND;
use crate::epoch::{epoch_seconds_from_fields, fields_from_epoch_seconds};
use crate::error::{Result, TimeError};
use crate::fields::{
    Day, Hour, Microsecond, Millisecond, Minute, Month, Nanosecond, Second, Year,
};
use crate::gregorian::{weekday, Weekday};
use crate::instant::Instant;
use crate::offset::UtcOffset;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A proleptic Gregorian calendar date-time, UTC-referenced.
///
/// Ordering is derived field-by-field, which coincides with timeline
/// order because the fields are stored most-significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    year: Year,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
    second: Second,
    millisecond: Millisecond,
    microsecond: Microsecond,
    nanosecond: Nanosecond,
}

impl Time {
    /// Assembles a `Time` from already-validated fields.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_fields(
        year: Year,
        month: Month,
        day: Day,
        hour: Hour,
        minute: Minute,
        second: Second,
        millisecond: Millisecond,
        microsecond: Microsecond,
        nanosecond: Nanosecond,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Validates raw date and time-of-day values; the subsecond fields
    /// are zero.
    ///
    /// The first out-of-range field reports its error.
    pub fn new(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        Self::with_subsec(year, month, day, hour, minute, second, 0, 0, 0)
    }

    /// Validates raw values for all nine fields.
    #[allow(clippy::too_many_arguments)]
    pub fn with_subsec(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Result<Self> {
        let year = Year::new(year);
        let month = Month::new(month)?;
        Ok(Self {
            year,
            month,
            day: Day::new(day, month, year)?,
            hour: Hour::new(hour)?,
            minute: Minute::new(minute)?,
            second: Second::new(second)?,
            millisecond: Millisecond::new(millisecond)?,
            microsecond: Microsecond::new(microsecond)?,
            nanosecond: Nanosecond::new(nanosecond)?,
        })
    }

    /// Reconstructs calendar fields from seconds since the Unix epoch.
    ///
    /// Total: every `i64` second count maps to a valid date-time, and
    /// the result never carries a leap second.
    pub fn from_epoch_seconds(seconds: i64) -> Self {
        Self::from_split(seconds, 0, 0, 0)
    }

    /// Like [`from_epoch_seconds`](Self::from_epoch_seconds), with a
    /// nanosecond fraction that is split into the three subsecond
    /// fields.
    pub fn from_epoch_seconds_nanos(seconds: i64, nanoseconds: u32) -> Result<Self> {
        if nanoseconds >= NANOS_PER_SECOND {
            return Err(TimeError::SubsecondOutOfRange(nanoseconds));
        }
        let millisecond = (nanoseconds / 1_000_000) as u16;
        let microsecond = (nanoseconds / 1_000 % 1_000) as u16;
        let nanosecond = (nanoseconds % 1_000) as u16;
        Ok(Self::from_split(
            seconds,
            millisecond,
            microsecond,
            nanosecond,
        ))
    }

    fn from_split(seconds: i64, millisecond: u16, microsecond: u16, nanosecond: u16) -> Self {
        let (year, month, day, hour, minute, second) = fields_from_epoch_seconds(seconds);
        Self {
            year: Year::new(year),
            month,
            day: Day::new_unchecked(day),
            hour: Hour::new_unchecked(hour),
            minute: Minute::new_unchecked(minute),
            second: Second::new_unchecked(second),
            millisecond: Millisecond::new_unchecked(millisecond),
            microsecond: Microsecond::new_unchecked(microsecond),
            nanosecond: Nanosecond::new_unchecked(nanosecond),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> Day {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> Minute {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> Second {
        self.second
    }

    #[inline]
    pub const fn millisecond(&self) -> Millisecond {
        self.millisecond
    }

    #[inline]
    pub const fn microsecond(&self) -> Microsecond {
        self.microsecond
    }

    #[inline]
    pub const fn nanosecond(&self) -> Nanosecond {
        self.nanosecond
    }

    // ── conversions ───────────────────────────────────────────────────

    /// Seconds since the Unix epoch, ignoring the subsecond fields.
    ///
    /// A stored leap second counts as the first second of the following
    /// minute.  Years too remote for an `i64` second count clamp to the
    /// domain boundary.
    pub fn epoch_seconds(&self) -> i64 {
        epoch_seconds_from_fields(
            self.year.get(),
            self.month,
            self.day.get(),
            self.hour.get(),
            self.minute.get(),
            self.second.get(),
        )
    }

    /// The combined subsecond fields as nanoseconds, `0..10^9`.
    pub fn subsec_nanoseconds(&self) -> u32 {
        self.millisecond.get() as u32 * 1_000_000
            + self.microsecond.get() as u32 * 1_000
            + self.nanosecond.get() as u32
    }

    /// Day of the week of the date part.
    pub fn weekday(&self) -> Weekday {
        weekday(self.year.get(), self.month, self.day.get())
    }

    /// This date-time, read as UTC, as a timeline instant.
    pub fn to_instant(&self) -> Instant {
        Instant::from_parts_unchecked(self.epoch_seconds(), self.subsec_nanoseconds())
    }

    /// Calendar fields of `instant`, read back in UTC.
    pub fn from_instant(instant: Instant) -> Self {
        // The instant's fraction is in range by its own invariant.
        let nanos = instant.subsec_nanoseconds();
        Self::from_split(
            instant.seconds(),
            (nanos / 1_000_000) as u16,
            (nanos / 1_000 % 1_000) as u16,
            (nanos % 1_000) as u16,
        )
    }

    /// As [`to_instant`](Self::to_instant), but the fields are local to
    /// `offset` rather than UTC.
    pub fn to_instant_with_offset(&self, offset: UtcOffset) -> Instant {
        Instant::from_parts_unchecked(
            self.epoch_seconds() - offset.seconds() as i64,
            self.subsec_nanoseconds(),
        )
    }

    /// Calendar fields of `instant` in the wall clock of `offset`.
    pub fn from_instant_with_offset(instant: Instant, offset: UtcOffset) -> Self {
        let local = Instant::from_parts_unchecked(
            instant.seconds() + offset.seconds() as i64,
            instant.subsec_nanoseconds(),
        );
        Self::from_instant(local)
    }
}

impl From<Time> for Instant {
    fn from(time: Time) -> Self {
        time.to_instant()
    }
}

impl From<Instant> for Time {
    fn from(instant: Instant) -> Self {
        Time::from_instant(instant)
    }
}

impl fmt::Display for Time {
    /// RFC 3339 layout, `YYYY-MM-DDThh:mm:ssZ`, with nine fraction
    /// digits appended when any subsecond field is non-zero.  Years
    /// outside `0..=9999` keep their sign and natural width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year.get();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}")?;
        } else {
            write!(f, "{year}")?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month.get(),
            self.day.get(),
            self.hour.get(),
            self.minute.get(),
            self.second.get()
        )?;
        let nanos = self.subsec_nanoseconds();
        if nanos != 0 {
            write!(f, ".{nanos:09}")?;
        }
        write!(f, "Z")
    }
}

impl fmt::Display for Instant {
    /// Renders the instant through its UTC calendar fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Time::from_instant(*self).fmt(f)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Time", 9)?;
        s.serialize_field("year", &self.year.get())?;
        s.serialize_field("month", &self.month.get())?;
        s.serialize_field("day", &self.day.get())?;
        s.serialize_field("hour", &self.hour.get())?;
        s.serialize_field("minute", &self.minute.get())?;
        s.serialize_field("second", &self.second.get())?;
        s.serialize_field("millisecond", &self.millisecond.get())?;
        s.serialize_field("microsecond", &self.microsecond.get())?;
        s.serialize_field("nanosecond", &self.nanosecond.get())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i64,
            month: u8,
            day: u8,
            hour: u8,
            minute: u8,
            second: u8,
            #[serde(default)]
            millisecond: u16,
            #[serde(default)]
            microsecond: u16,
            #[serde(default)]
            nanosecond: u16,
        }

        let raw = Raw::deserialize(deserializer)?;
        Time::with_subsec(
            raw.year,
            raw.month,
            raw.day,
            raw.hour,
            raw.minute,
            raw.second,
            raw.millisecond,
            raw.microsecond,
            raw.nanosecond,
        )
        .map_err(serde::de::Error::custom)
    }
}
