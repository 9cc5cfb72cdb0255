// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil time conversion.
//!
//! This crate maps between broken-down proleptic Gregorian calendar
//! fields and a seconds-since-epoch timeline, with closed-form
//! conversion in both directions and validated types at the boundary.
//!
//! # Core types
//!
//! - [`Time`] — broken-down UTC date-time built from nine validated
//!   field types.
//! - [`Instant`] — canonical timeline point: seconds since the Unix
//!   epoch plus a nanosecond fraction in `[0, 10^9)`.
//! - [`Duration`] — signed elapsed time with attosecond resolution.
//! - [`JulianDay`] — continuous Julian Day count over [`qtty::Days`].
//! - [`UtcOffset`] — fixed offset from UTC for wall-clock conversion.
//! - [`TimeError`] — the error type of every fallible constructor and
//!   checked operation.
//!
//! # Field types
//!
//! Each calendar granularity is its own refinement newtype, validated
//! at construction:
//!
//! | Type | Range |
//! |------|-------|
//! | [`Year`] | any `i64` |
//! | [`Month`] | `1..=12` |
//! | [`Day`] | month- and year-dependent |
//! | [`Hour`] | `0..=23` |
//! | [`Minute`] | `0..=59` |
//! | [`Second`] | `0..=60` |
//! | [`Millisecond`], [`Microsecond`], [`Nanosecond`] | `0..=999` |
//!
//! # Conversion
//!
//! Calendar-to-epoch and back are closed-form over 400-year Gregorian
//! cycles; beyond the 12-entry month tables, no per-year iteration.  A
//! stored leap second (`second == 60`) aliases the first second of the
//! following minute; the reverse direction never produces one.
//!
//! ```
//! use civtime::{Duration, Instant, Time};
//!
//! let t = Time::new(2024, 1, 15, 12, 30, 45)?;
//! let instant = t.to_instant();
//! let later = instant + Duration::from_seconds(86_400);
//! assert_eq!(Time::from_instant(later).day().get(), 16);
//! assert_eq!(later.to_string(), "2024-01-16T12:30:45Z");
//! # Ok::<(), civtime::TimeError>(())
//! ```

mod calendar;
mod duration;
mod epoch;
pub mod epochs;
mod error;
mod fields;
mod gregorian;
mod instant;
mod julian;
mod offset;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::Time;
pub use duration::Duration;
pub use error::{Result, TimeError};
pub use fields::{
    Day, Hour, Microsecond, Millisecond, Minute, Month, Nanosecond, Second, Year,
};
pub use gregorian::{days_in_month, days_in_year, is_leap_year, weekday, Weekday};
pub use instant::Instant;
pub use julian::JulianDay;
pub use offset::UtcOffset;
