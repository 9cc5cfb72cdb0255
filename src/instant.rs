// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timeline instants.
//!
//! [`Instant`] is the canonical timeline representation: a signed count
//! of seconds since the Unix epoch plus a nanosecond fraction in
//! `[0, 10^9)`.  The fraction invariant makes each instant the unique
//! canonical representative of its `(seconds, nanoseconds)` equivalence
//! class under carrying, so derived ordering and equality are exact.
//!
//! Two arithmetic paths exist:
//!
//! 1. The **operators** (`instant + duration`, `instant - duration`,
//!    `instant - instant`) work over the full `i64` second range with
//!    carrying normalization.  Overflow there is a programmer error and
//!    panics with a message, matching the operator convention of `std`
//!    and chrono.
//! 2. The **clock methods** (`checked_*`, `saturating_*`) compute in the
//!    64-bit *nanosecond* domain (≈ ±292 years around 1970): every
//!    intermediate multiply and add is overflow-checked and reported as
//!    [`TimeError::Overflow`](crate::TimeError::Overflow) instead of
//!    wrapping, or clamped to [`Instant::MIN`]/[`Instant::MAX`] by the
//!    saturating variants.
//!
//! Duration input is reduced to nanosecond resolution first: the default
//! policy truncates the sub-nanosecond remainder (a documented quotient
//! map, not an accident), while the `*_exact` methods refuse to lose it.

use crate::duration::{Duration, ATTOS_PER_NANO, NANOS_PER_SECOND};
use crate::error::{Result, TimeError};
use chrono::{DateTime, Utc};
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the Unix timeline: seconds plus a nanosecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    seconds: i64,
    nanoseconds: u32,
}

impl Instant {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Earliest instant of the checked 64-bit nanosecond domain.
    pub const MIN: Self = Self {
        seconds: i64::MIN.div_euclid(NANOS_PER_SECOND as i64),
        nanoseconds: i64::MIN.rem_euclid(NANOS_PER_SECOND as i64) as u32,
    };

    /// Latest instant of the checked 64-bit nanosecond domain.
    pub const MAX: Self = Self {
        seconds: i64::MAX.div_euclid(NANOS_PER_SECOND as i64),
        nanoseconds: i64::MAX.rem_euclid(NANOS_PER_SECOND as i64) as u32,
    };

    /// Validates the nanosecond fraction and builds an instant.
    #[inline]
    pub fn new(seconds: i64, nanoseconds: u32) -> Result<Self> {
        if nanoseconds < NANOS_PER_SECOND {
            Ok(Self {
                seconds,
                nanoseconds,
            })
        } else {
            Err(TimeError::SubsecondOutOfRange(nanoseconds))
        }
    }

    /// Caller must guarantee the fraction is in `[0, 10^9)`.
    #[inline]
    pub(crate) const fn from_parts_unchecked(seconds: i64, nanoseconds: u32) -> Self {
        debug_assert!(nanoseconds < NANOS_PER_SECOND);
        Self {
            seconds,
            nanoseconds,
        }
    }

    /// Seconds since the Unix epoch (negative before 1970).
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond fraction in `[0, 10^9)`.
    #[inline]
    pub const fn subsec_nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    // ── full-range carrying arithmetic ────────────────────────────────

    /// Shifts by a normalized `(seconds, fraction)` delta, carrying the
    /// fraction back into `[0, 10^9)`.
    fn checked_shift(self, seconds: i64, nanoseconds: u32) -> Option<Self> {
        let mut secs = self.seconds.checked_add(seconds)?;
        let mut nanos = self.nanoseconds + nanoseconds;
        if nanos >= NANOS_PER_SECOND {
            nanos -= NANOS_PER_SECOND;
            secs = secs.checked_add(1)?;
        }
        Some(Self {
            seconds: secs,
            nanoseconds: nanos,
        })
    }

    /// Elapsed time from `earlier` to `self` (negative if `self` is the
    /// earlier instant), exact at nanosecond resolution.
    ///
    /// Panics when the second difference leaves the `i64` domain, like
    /// the other operators.
    pub fn duration_since(&self, earlier: &Self) -> Duration {
        let mut seconds = self
            .seconds
            .checked_sub(earlier.seconds)
            .expect("instant difference overflowed the i64 second domain");
        let mut nanos = self.nanoseconds as i64 - earlier.nanoseconds as i64;
        if nanos < 0 {
            seconds = seconds
                .checked_sub(1)
                .expect("instant difference overflowed the i64 second domain");
            nanos += NANOS_PER_SECOND as i64;
        }
        Duration::from_parts_unchecked(seconds, nanos as u64 * ATTOS_PER_NANO)
    }

    // ── checked clock arithmetic (64-bit nanosecond domain) ───────────

    /// Total nanoseconds since the epoch, failing when `seconds × 10^9`
    /// leaves the i64 domain.
    fn total_nanoseconds(self) -> Result<i64> {
        self.seconds
            .checked_mul(NANOS_PER_SECOND as i64)
            .and_then(|n| n.checked_add(self.nanoseconds as i64))
            .ok_or(TimeError::Overflow)
    }

    fn from_total_nanoseconds(nanoseconds: i64) -> Self {
        Self {
            seconds: nanoseconds.div_euclid(NANOS_PER_SECOND as i64),
            nanoseconds: nanoseconds.rem_euclid(NANOS_PER_SECOND as i64) as u32,
        }
    }

    /// Signed nanosecond delta of a duration, failing on overflow.
    fn delta_nanoseconds(duration: &Duration, subsec: u32) -> Result<i64> {
        duration
            .seconds()
            .checked_mul(NANOS_PER_SECOND as i64)
            .and_then(|n| n.checked_add(subsec as i64))
            .ok_or(TimeError::Overflow)
    }

    fn checked_offset(self, duration: &Duration, subsec: u32, negate: bool) -> Result<Self> {
        let delta = Self::delta_nanoseconds(duration, subsec)?;
        let total = self.total_nanoseconds()?;
        let shifted = if negate {
            total.checked_sub(delta)
        } else {
            total.checked_add(delta)
        };
        shifted
            .map(Self::from_total_nanoseconds)
            .ok_or(TimeError::Overflow)
    }

    /// Overflow-checked addition, truncating sub-nanosecond resolution.
    pub fn checked_add(self, duration: &Duration) -> Result<Self> {
        self.checked_offset(duration, duration.subsec_nanoseconds_truncating(), false)
    }

    /// Overflow-checked subtraction, truncating sub-nanosecond resolution.
    pub fn checked_sub(self, duration: &Duration) -> Result<Self> {
        self.checked_offset(duration, duration.subsec_nanoseconds_truncating(), true)
    }

    /// Overflow-checked addition that refuses a duration carrying a
    /// non-zero sub-nanosecond remainder.
    pub fn checked_add_exact(self, duration: &Duration) -> Result<Self> {
        let subsec = duration.subsec_nanoseconds_exact()?;
        self.checked_offset(duration, subsec, false)
    }

    /// Overflow-checked subtraction with the strict resolution policy.
    pub fn checked_sub_exact(self, duration: &Duration) -> Result<Self> {
        let subsec = duration.subsec_nanoseconds_exact()?;
        self.checked_offset(duration, subsec, true)
    }

    /// Like [`checked_add`](Self::checked_add), but clamps to
    /// [`Instant::MIN`]/[`Instant::MAX`] instead of failing, choosing
    /// the bound by the sign of the elapsed time.
    pub fn saturating_add(self, duration: &Duration) -> Self {
        match self.checked_add(duration) {
            Ok(instant) => instant,
            Err(_) if duration.is_negative() => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    /// Like [`checked_sub`](Self::checked_sub), but clamps instead of
    /// failing.
    pub fn saturating_sub(self, duration: &Duration) -> Self {
        match self.checked_sub(duration) {
            Ok(instant) => instant,
            Err(_) if duration.is_negative() => Self::MAX,
            Err(_) => Self::MIN,
        }
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// chrono encodes a leap second as a fraction of 10^9 or more; the
    /// excess is carried into the following second, consistent with the
    /// loose leap-second policy of the calendar types.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let seconds = datetime.timestamp();
        let nanoseconds = datetime.timestamp_subsec_nanos();
        if nanoseconds >= NANOS_PER_SECOND {
            Self {
                seconds: seconds + 1,
                nanoseconds: nanoseconds - NANOS_PER_SECOND,
            }
        } else {
            Self {
                seconds,
                nanoseconds,
            }
        }
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        self.checked_shift(rhs.seconds(), rhs.subsec_nanoseconds_truncating())
            .expect("instant addition overflowed the i64 second domain")
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        let negated = rhs
            .checked_neg()
            .expect("instant subtraction overflowed the i64 second domain");
        self.checked_shift(negated.seconds(), negated.subsec_nanoseconds_truncating())
            .expect("instant subtraction overflowed the i64 second domain")
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.duration_since(&rhs)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Instant", 2)?;
        s.serialize_field("seconds", &self.seconds)?;
        s.serialize_field("nanoseconds", &self.nanoseconds)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            seconds: i64,
            nanoseconds: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Instant::new(raw.seconds, raw.nanoseconds).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::ATTOS_PER_SECOND;

    #[test]
    fn fraction_is_validated() {
        assert!(Instant::new(0, 999_999_999).is_ok());
        assert_eq!(
            Instant::new(0, 1_000_000_000),
            Err(TimeError::SubsecondOutOfRange(1_000_000_000))
        );
    }

    #[test]
    fn addition_carries_once_per_billion_nanoseconds() {
        let base = Instant::new(0, 999_999_999).unwrap();
        let shifted = base + Duration::from_nanoseconds(2);
        assert_eq!(shifted, Instant::new(1, 1).unwrap());

        let far = base + Duration::from_nanoseconds(2_000_000_001);
        assert_eq!(far, Instant::new(3, 0).unwrap());
    }

    #[test]
    fn subtraction_borrows_from_seconds() {
        let base = Instant::new(1, 0).unwrap();
        let back = base - Duration::from_nanoseconds(1);
        assert_eq!(back, Instant::new(0, 999_999_999).unwrap());
    }

    #[test]
    fn instant_difference_is_a_duration() {
        let a = Instant::new(10, 250_000_000).unwrap();
        let b = Instant::new(8, 750_000_000).unwrap();
        let d = a - b;
        assert_eq!(d, Duration::from_nanoseconds(1_500_000_000));
        assert_eq!(b - a, -d);
        assert_eq!(b + d, a);
    }

    #[test]
    #[should_panic(expected = "instant difference overflowed the i64 second domain")]
    fn instant_difference_panics_on_second_overflow() {
        let late = Instant::new(i64::MAX, 0).unwrap();
        let early = Instant::new(i64::MIN, 0).unwrap();
        let _ = late - early;
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max_seconds = Instant::new(i64::MAX, 0).unwrap();
        assert_eq!(
            max_seconds.checked_add(&Duration::from_nanoseconds(1)),
            Err(TimeError::Overflow)
        );
        assert_eq!(
            Instant::MAX.checked_add(&Duration::from_nanoseconds(1)),
            Err(TimeError::Overflow)
        );
        assert_eq!(
            Instant::MIN.checked_sub(&Duration::from_seconds(1)),
            Err(TimeError::Overflow)
        );
        assert!(Instant::MAX
            .checked_sub(&Duration::from_nanoseconds(1))
            .is_ok());
    }

    #[test]
    fn saturating_arithmetic_clamps_by_sign() {
        assert_eq!(
            Instant::MAX.saturating_add(&Duration::from_seconds(1)),
            Instant::MAX
        );
        assert_eq!(
            Instant::MAX.saturating_add(&Duration::from_seconds(i64::MIN)),
            Instant::MIN
        );
        assert_eq!(
            Instant::MIN.saturating_sub(&Duration::from_seconds(1)),
            Instant::MIN
        );
        let nearby = Instant::UNIX_EPOCH;
        assert_eq!(
            nearby.saturating_add(&Duration::from_seconds(5)),
            Instant::new(5, 0).unwrap()
        );
    }

    #[test]
    fn exact_policy_rejects_sub_nanosecond_remainders() {
        let base = Instant::UNIX_EPOCH;
        let lossy = Duration::new(0, 500 * ATTOS_PER_NANO + 1).unwrap();
        assert_eq!(
            base.checked_add_exact(&lossy),
            Err(TimeError::ResolutionLoss { attoseconds: 1 })
        );
        // The truncating policy accepts the same duration.
        assert_eq!(
            base.checked_add(&lossy).unwrap(),
            Instant::new(0, 500).unwrap()
        );
        let clean = Duration::from_nanoseconds(500);
        assert_eq!(
            base.checked_sub_exact(&clean).unwrap(),
            Instant::new(-1, 999_999_500).unwrap()
        );
    }

    #[test]
    fn checked_and_operator_paths_agree_in_range() {
        let base = Instant::new(1_000, 400_000_000).unwrap();
        let d = Duration::from_nanoseconds(1_700_000_000);
        assert_eq!(base.checked_add(&d).unwrap(), base + d);
        assert_eq!(base.checked_sub(&d).unwrap(), base - d);
    }

    #[test]
    fn negative_durations_move_backwards() {
        let base = Instant::new(10, 0).unwrap();
        let minus_half = -Duration::new(0, ATTOS_PER_SECOND / 2).unwrap();
        assert_eq!(base + minus_half, Instant::new(9, 500_000_000).unwrap());
        assert_eq!(
            base.checked_add(&minus_half).unwrap(),
            Instant::new(9, 500_000_000).unwrap()
        );
    }

    #[test]
    fn chrono_round_trip() {
        let instant = Instant::new(946_728_000, 123_456_789).unwrap();
        let dt = instant.to_datetime().expect("in chrono range");
        assert_eq!(Instant::from_datetime(dt), instant);

        let before_epoch = Instant::new(-1, 500_000_000).unwrap();
        let dt = before_epoch.to_datetime().expect("in chrono range");
        assert_eq!(Instant::from_datetime(dt), before_epoch);
    }

    #[test]
    fn min_max_are_the_nanosecond_domain_bounds() {
        assert_eq!(Instant::MAX.total_nanoseconds().unwrap(), i64::MAX);
        assert_eq!(Instant::MIN.total_nanoseconds().unwrap(), i64::MIN);
    }
}
