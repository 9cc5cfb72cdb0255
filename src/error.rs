// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar and timeline operations.
//!
//! Every error is local and recoverable: validating constructors return
//! the field-specific range variant, timeline arithmetic reports
//! [`TimeError::Overflow`] instead of wrapping, and the strict
//! duration-to-nanosecond conversion reports
//! [`TimeError::ResolutionLoss`] instead of silently discarding the
//! sub-nanosecond remainder.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, TimeError>;

/// Failure modes of the civil time core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// Month outside `1..=12`.
    #[error("month {0} out of range 1..=12")]
    MonthOutOfRange(u8),

    /// Day outside the valid range for its month and year.
    #[error("day {day} out of range for {year:+05}-{month:02}")]
    DayOutOfRange {
        /// The offending day value.
        day: u8,
        /// Month that bounded the valid range.
        month: u8,
        /// Year that decided February's length.
        year: i64,
    },

    /// Hour outside `0..=23`.
    #[error("hour {0} out of range 0..=23")]
    HourOutOfRange(u8),

    /// Minute outside `0..=59`.
    #[error("minute {0} out of range 0..=59")]
    MinuteOutOfRange(u8),

    /// Second outside `0..=60` (60 admits a leap second).
    #[error("second {0} out of range 0..=60")]
    SecondOutOfRange(u8),

    /// Millisecond outside `0..=999`.
    #[error("millisecond {0} out of range 0..=999")]
    MillisecondOutOfRange(u16),

    /// Microsecond outside `0..=999`.
    #[error("microsecond {0} out of range 0..=999")]
    MicrosecondOutOfRange(u16),

    /// Nanosecond outside `0..=999`.
    #[error("nanosecond {0} out of range 0..=999")]
    NanosecondOutOfRange(u16),

    /// Nanosecond fraction of an instant outside `0..1_000_000_000`.
    #[error("nanosecond fraction {0} out of range 0..1000000000")]
    SubsecondOutOfRange(u32),

    /// Attosecond fraction of a duration outside `0..10^18`.
    #[error("attosecond fraction {0} out of range 0..10^18")]
    AttosecondOutOfRange(u64),

    /// Fixed UTC offset at or beyond ±24 hours.
    #[error("UTC offset {0} s out of range -86399..=86399")]
    OffsetOutOfRange(i32),

    /// Checked timeline arithmetic left the 64-bit nanosecond domain.
    #[error("instant arithmetic overflowed the 64-bit nanosecond domain")]
    Overflow,

    /// Strict conversion refused to discard a sub-nanosecond remainder.
    #[error("duration carries a sub-nanosecond remainder of {attoseconds} as")]
    ResolutionLoss {
        /// The remainder below one nanosecond, in attoseconds.
        attoseconds: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        assert_eq!(
            TimeError::MonthOutOfRange(13).to_string(),
            "month 13 out of range 1..=12"
        );
        assert_eq!(
            TimeError::DayOutOfRange {
                day: 29,
                month: 2,
                year: 2023
            }
            .to_string(),
            "day 29 out of range for +2023-02"
        );
        assert_eq!(
            TimeError::ResolutionLoss { attoseconds: 7 }.to_string(),
            "duration carries a sub-nanosecond remainder of 7 as"
        );
    }
}
