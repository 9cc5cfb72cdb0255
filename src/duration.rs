// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed elapsed time with attosecond resolution.
//!
//! [`Duration`] stores whole seconds plus an attosecond (10⁻¹⁸ s)
//! fraction in **canonical carried form**: the fraction is always in
//! `[0, 10^18)`, so a negative duration has negative seconds and a
//! non-negative fraction (−0.5 s is `(-1 s, 5·10^17 as)`).  This makes
//! derived ordering and equality coincide with the represented value.
//!
//! Timeline arithmetic on [`Instant`](crate::Instant) only ever consumes
//! durations through the nanosecond quotient maps
//! [`subsec_nanoseconds_truncating`](Duration::subsec_nanoseconds_truncating)
//! and [`subsec_nanoseconds_exact`](Duration::subsec_nanoseconds_exact),
//! which discard (or refuse to discard) resolution below one nanosecond.

use crate::error::{Result, TimeError};
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) const ATTOS_PER_SECOND: u64 = 1_000_000_000_000_000_000;
pub(crate) const ATTOS_PER_NANO: u64 = 1_000_000_000;
pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A signed span of elapsed time: seconds plus an attosecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    seconds: i64,
    attoseconds: u64,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Self = Self {
        seconds: 0,
        attoseconds: 0,
    };

    /// Validates the attosecond fraction and builds a duration.
    #[inline]
    pub fn new(seconds: i64, attoseconds: u64) -> Result<Self> {
        if attoseconds < ATTOS_PER_SECOND {
            Ok(Self {
                seconds,
                attoseconds,
            })
        } else {
            Err(TimeError::AttosecondOutOfRange(attoseconds))
        }
    }

    /// Caller must guarantee the fraction is in `[0, 10^18)`.
    #[inline]
    pub(crate) const fn from_parts_unchecked(seconds: i64, attoseconds: u64) -> Self {
        debug_assert!(attoseconds < ATTOS_PER_SECOND);
        Self {
            seconds,
            attoseconds,
        }
    }

    /// A whole number of seconds.
    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            attoseconds: 0,
        }
    }

    /// A signed number of nanoseconds, carried into canonical form.
    #[inline]
    pub fn from_nanoseconds(nanoseconds: i64) -> Self {
        let seconds = nanoseconds.div_euclid(NANOS_PER_SECOND as i64);
        let frac = nanoseconds.rem_euclid(NANOS_PER_SECOND as i64) as u64;
        Self {
            seconds,
            attoseconds: frac * ATTOS_PER_NANO,
        }
    }

    /// A signed number of attoseconds, carried into canonical form.
    #[inline]
    pub fn from_attoseconds(attoseconds: i64) -> Self {
        let seconds = attoseconds.div_euclid(ATTOS_PER_SECOND as i64);
        let frac = attoseconds.rem_euclid(ATTOS_PER_SECOND as i64) as u64;
        Self {
            seconds,
            attoseconds: frac,
        }
    }

    /// Whole-second component (negative for negative durations).
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Attosecond fraction in `[0, 10^18)`.
    #[inline]
    pub const fn subsec_attoseconds(&self) -> u64 {
        self.attoseconds
    }

    /// True when the represented value is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// True for the zero-length duration.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.attoseconds == 0
    }

    // ── quotient maps to nanosecond resolution ────────────────────────

    /// Nanosecond fraction, discarding any sub-nanosecond remainder.
    #[inline]
    pub const fn subsec_nanoseconds_truncating(&self) -> u32 {
        (self.attoseconds / ATTOS_PER_NANO) as u32
    }

    /// Nanosecond fraction, failing if a sub-nanosecond remainder would
    /// be lost.
    #[inline]
    pub fn subsec_nanoseconds_exact(&self) -> Result<u32> {
        let remainder = self.attoseconds % ATTOS_PER_NANO;
        if remainder == 0 {
            Ok((self.attoseconds / ATTOS_PER_NANO) as u32)
        } else {
            Err(TimeError::ResolutionLoss {
                attoseconds: remainder,
            })
        }
    }

    // ── checked arithmetic ────────────────────────────────────────────

    /// Sum in canonical form, `None` on second overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let mut seconds = self.seconds.checked_add(rhs.seconds)?;
        let mut attoseconds = self.attoseconds + rhs.attoseconds;
        if attoseconds >= ATTOS_PER_SECOND {
            attoseconds -= ATTOS_PER_SECOND;
            seconds = seconds.checked_add(1)?;
        }
        Some(Self {
            seconds,
            attoseconds,
        })
    }

    /// Negation in canonical form, `None` at the representable edge.
    pub fn checked_neg(self) -> Option<Self> {
        if self.attoseconds == 0 {
            Some(Self {
                seconds: self.seconds.checked_neg()?,
                attoseconds: 0,
            })
        } else {
            Some(Self {
                seconds: self.seconds.checked_neg()?.checked_sub(1)?,
                attoseconds: ATTOS_PER_SECOND - self.attoseconds,
            })
        }
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs)
            .expect("duration addition overflowed the i64 second domain")
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        self.checked_neg()
            .expect("duration negation overflowed the i64 second domain")
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decompose the canonical form into sign, whole seconds and an
        // 18-digit fraction for human-readable output.
        let (sign, whole, frac) = if self.seconds >= 0 {
            ("", self.seconds as u64, self.attoseconds)
        } else if self.attoseconds == 0 {
            ("-", self.seconds.unsigned_abs(), 0)
        } else {
            (
                "-",
                (self.seconds + 1).unsigned_abs(),
                ATTOS_PER_SECOND - self.attoseconds,
            )
        };
        if frac == 0 {
            write!(f, "{sign}{whole}s")
        } else {
            let digits = format!("{frac:018}");
            write!(f, "{sign}{whole}.{}s", digits.trim_end_matches('0'))
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Duration", 2)?;
        s.serialize_field("seconds", &self.seconds)?;
        s.serialize_field("attoseconds", &self.attoseconds)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            seconds: i64,
            attoseconds: u64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Duration::new(raw.seconds, raw.attoseconds).map_err(serde::de::Error::custom)
    }
}
