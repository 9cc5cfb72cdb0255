// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed UTC offsets.
//!
//! Only constant offsets are modeled; time-zone rules never enter the
//! core.  An offset is the number of seconds to *add* to a timeline
//! instant to obtain the local calendar representation.

use crate::error::{Result, TimeError};
use std::fmt;

/// A fixed offset from UTC in whole seconds, strictly below ±24 h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// Exact zero offset (`Z`).
    ///
    /// The `-00:00` unknown-offset convention is a format-layer notion
    /// and is not representable here.
    pub const UTC: Self = Self { seconds: 0 };

    /// Validates an offset in seconds east of UTC.
    #[inline]
    pub fn from_seconds(seconds: i32) -> Result<Self> {
        if seconds.abs() < 86_400 {
            Ok(Self { seconds })
        } else {
            Err(TimeError::OffsetOutOfRange(seconds))
        }
    }

    /// Builds an offset from signed hour, minute, and second components.
    ///
    /// The components are summed, so a westward offset negates each of
    /// them: `from_hms(-3, -30, 0)` is `-03:30`.
    #[inline]
    pub fn from_hms(hours: i32, minutes: i32, seconds: i32) -> Result<Self> {
        Self::from_seconds(hours * 3_600 + minutes * 60 + seconds)
    }

    /// The offset in seconds east of UTC.
    #[inline]
    pub const fn seconds(self) -> i32 {
        self.seconds
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            return f.write_str("Z");
        }
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 3_600, abs % 3_600 / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sub_day_offsets() {
        assert_eq!(UtcOffset::from_seconds(0).unwrap(), UtcOffset::UTC);
        assert_eq!(UtcOffset::from_hms(5, 30, 0).unwrap().seconds(), 19_800);
        assert_eq!(UtcOffset::from_hms(-7, 0, 0).unwrap().seconds(), -25_200);
        assert!(UtcOffset::from_seconds(86_399).is_ok());
    }

    #[test]
    fn rejects_full_day_offsets() {
        assert_eq!(
            UtcOffset::from_seconds(86_400),
            Err(TimeError::OffsetOutOfRange(86_400))
        );
        assert!(UtcOffset::from_hms(-24, 0, 0).is_err());
    }

    #[test]
    fn display_formats() {
        assert_eq!(UtcOffset::UTC.to_string(), "Z");
        assert_eq!(UtcOffset::from_hms(5, 30, 0).unwrap().to_string(), "+05:30");
        assert_eq!(UtcOffset::from_hms(-7, 0, 0).unwrap().to_string(), "-07:00");
    }
}
