// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day numbers.
//!
//! [`JulianDay`] stores a continuous day count from the Julian epoch
//! (noon, 1 January 4713 BC in the proleptic Julian calendar) as a
//! [`Days`] quantity.  Values ending in `.5` are civil midnights; the
//! Unix epoch is JD 2 440 587.5.
//!
//! Calendar conversion is closed-form in both directions: the forward
//! direction uses the Fliegel–Van Flandern day-number formula, the
//! reverse the Richards algorithm.  Both are exact over the proleptic
//! Gregorian range; the fractional time of day is carried in the `f64`,
//! which resolves roughly a microsecond near the current era.

use crate::calendar::Time;
use crate::epoch::SECONDS_PER_DAY;
use crate::instant::Instant;
use qtty::*;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time as a continuous Julian Day count.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// JD of the Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::new(2_440_587.5);

    /// JD of the J2000.0 reference epoch, 2000-01-01T12:00:00Z.
    pub const J2000: Self = Self::new(2_451_545.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    // ── calendar conversion ───────────────────────────────────────────

    /// Julian Day of a calendar date-time.
    ///
    /// Fliegel–Van Flandern for the integer day number, with the
    /// midnight `-0.5` offset and the time of day folded into the
    /// fraction.
    pub fn from_time(time: &Time) -> Self {
        let year = time.year().get();
        let month = time.month().get() as i64;
        let day = time.day().get() as i64;

        let a = (14 - month).div_euclid(12);
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;
        let jdn = day
            + (153 * m + 2).div_euclid(5)
            + 365 * y
            + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32_045;

        let second_of_day = time.hour().get() as f64 * 3_600.0
            + time.minute().get() as f64 * 60.0
            + time.second().get() as f64
            + time.subsec_nanoseconds() as f64 / 1e9;

        Self::new(jdn as f64 - 0.5 + second_of_day / SECONDS_PER_DAY as f64)
    }

    /// Calendar date-time of this Julian Day.
    ///
    /// Richards' inverse with the Explanatory Supplement constants.
    /// The time of day is rounded to the nearest nanosecond; rounding
    /// up across midnight carries into the next day.
    pub fn to_time(&self) -> Time {
        // Shift so the integer part counts civil days from midnight.
        let shifted = self.value() + 0.5;
        let mut jdn = shifted.floor() as i64;
        let frac = shifted - shifted.floor();

        let mut nanos = (frac * SECONDS_PER_DAY as f64 * 1e9).round() as i64;
        if nanos >= SECONDS_PER_DAY * 1_000_000_000 {
            nanos = 0;
            jdn += 1;
        }

        let (year, month, day) = Self::date_from_jdn(jdn);
        let second_of_day = nanos / 1_000_000_000;
        let subsec = (nanos % 1_000_000_000) as u32;

        let instant = Instant::from_parts_unchecked(
            crate::epoch::epoch_seconds_from_fields(
                year,
                month,
                day,
                (second_of_day / 3_600) as u8,
                (second_of_day % 3_600 / 60) as u8,
                (second_of_day % 60) as u8,
            ),
            subsec,
        );
        Time::from_instant(instant)
    }

    /// Richards' algorithm: proleptic Gregorian date of a Julian Day
    /// number (the JDN labels the day starting at the preceding
    /// midnight here).
    fn date_from_jdn(jdn: i64) -> (i64, crate::fields::Month, u8) {
        const Y: i64 = 4716;
        const J: i64 = 1401;
        const M: i64 = 2;
        const N: i64 = 12;
        const R: i64 = 4;
        const P: i64 = 1461;
        const V: i64 = 3;
        const U: i64 = 5;
        const S: i64 = 153;
        const W: i64 = 2;
        const B: i64 = 274_277;
        const C: i64 = -38;

        let f = jdn + J + ((4 * jdn + B).div_euclid(146_097) * 3).div_euclid(4) + C;
        let e = R * f + V;
        let g = e.rem_euclid(P).div_euclid(R);
        let h = U * g + W;

        let day = h.rem_euclid(S).div_euclid(U) + 1;
        let month = (h.div_euclid(S) + M).rem_euclid(N) + 1;
        let year = e.div_euclid(P) - Y + (N + M - month).div_euclid(N);

        (year, crate::fields::Month::new_unchecked(month as u8), day as u8)
    }

    // ── timeline conversion ───────────────────────────────────────────

    /// Julian Day of a timeline instant, by direct scaling through the
    /// Unix epoch offset.
    pub fn from_instant(instant: &Instant) -> Self {
        let seconds =
            Seconds::new(instant.seconds() as f64 + instant.subsec_nanoseconds() as f64 / 1e9);
        Self::from_days(Self::UNIX_EPOCH.quantity + seconds.to::<Day>())
    }

    /// Timeline instant of this Julian Day.
    pub fn to_instant(&self) -> Instant {
        let seconds = (self.quantity - Self::UNIX_EPOCH.quantity)
            .to::<Second>()
            .value();
        let mut secs = seconds.floor() as i64;
        let mut nanos = ((seconds - seconds.floor()) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            nanos -= 1_000_000_000;
            secs += 1;
        }
        Instant::from_parts_unchecked(secs, nanos)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}
