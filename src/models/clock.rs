//! Wall-clock time model.
//!
//! Program times are minute-resolution wall-clock readings counted from
//! midnight of the event day. Arithmetic never wraps: a long program keeps
//! counting past 24:00 (`25:30`), and wrapping is a display decision made by
//! the caller (see [`ClockTime::wrapped`]).
//!
//! # Formats
//!
//! | Form | Example | Produced by |
//! |------|---------|-------------|
//! | 24-hour | `06:13` | `Display`, `to_hhmm` |
//! | 12-hour | `6:13 AM` | `to_12h` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProgramError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A minute-precision time of day, counted from midnight.
///
/// Values past [`MINUTES_PER_DAY`] are allowed and render with hours ≥ 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Creates a time from hours and minutes.
    ///
    /// Minutes overflow into hours (`from_hm(6, 75)` is `07:15`).
    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        Self {
            minutes: hours * 60 + minutes,
        }
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Parses a 24-hour `HH:MM` string.
    ///
    /// Hours may be one or two digits and must be below 24; minutes must be
    /// two digits below 60.
    pub fn parse(text: &str) -> Result<Self, ProgramError> {
        let invalid = || ProgramError::InvalidClockTime(text.to_string());
        let (h, m) = text.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: u32 = h.parse().map_err(|_| invalid())?;
        let minutes: u32 = m.parse().map_err(|_| invalid())?;
        if hours >= 24 || minutes >= 60 {
            return Err(invalid());
        }
        Ok(Self::from_hm(hours, minutes))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        self.minutes
    }

    /// Hour field (may be ≥ 24 for times past midnight of the next day).
    #[inline]
    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    /// Minute field (0..60).
    #[inline]
    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Returns this time advanced by `minutes`. Does not wrap at midnight.
    #[must_use]
    pub fn add_minutes(self, minutes: u32) -> Self {
        Self {
            minutes: self.minutes.saturating_add(minutes),
        }
    }

    /// Elapsed minutes from `self` to `later`, zero if `later` is earlier.
    pub fn minutes_until(&self, later: ClockTime) -> u32 {
        later.minutes.saturating_sub(self.minutes)
    }

    /// Whether this time lies beyond the end of the event day (after 24:00).
    pub fn is_past_midnight(&self) -> bool {
        self.minutes > MINUTES_PER_DAY
    }

    /// The same time folded into a single day (modulo 24 hours).
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self {
            minutes: self.minutes % MINUTES_PER_DAY,
        }
    }

    /// Zero-padded 24-hour form (`06:05`).
    pub fn to_hhmm(&self) -> String {
        self.to_string()
    }

    /// 12-hour display form (`6:05 AM`).
    ///
    /// Hour 0 displays as 12; hours 1–12 as-is; hours above 12 have 12
    /// subtracted. Hours 12 and above carry the `PM` suffix.
    pub fn to_12h(&self) -> String {
        let h = self.hour();
        let suffix = if h >= 12 { "PM" } else { "AM" };
        let display_h = match h {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        format!("{display_h}:{:02} {suffix}", self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ProgramError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Formats elapsed minutes as `"Hh Mm"` (`36` → `"0h 36m"`).
pub fn format_elapsed(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(t("06:00").to_string(), "06:00");
        assert_eq!(t("6:05").to_string(), "06:05");
        assert_eq!(t("23:59").minutes_since_midnight(), 23 * 60 + 59);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "6", "06:0", "24:00", "06:60", "ab:cd", "06-00", "-1:00", "006:00"] {
            assert!(ClockTime::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_add_minutes() {
        assert_eq!(t("06:00").add_minutes(10).to_string(), "06:10");
        assert_eq!(t("06:55").add_minutes(7).to_string(), "07:02");
        assert_eq!(t("06:00").add_minutes(0), t("06:00"));
    }

    #[test]
    fn test_add_minutes_does_not_wrap() {
        let late = t("23:50").add_minutes(100);
        assert_eq!(late.to_string(), "25:30");
        assert!(late.is_past_midnight());
        assert_eq!(late.wrapped().to_string(), "01:30");
    }

    #[test]
    fn test_midnight_exactly_is_not_past() {
        let end = t("23:00").add_minutes(60);
        assert_eq!(end.to_string(), "24:00");
        assert!(!end.is_past_midnight());
    }

    #[test]
    fn test_to_12h_boundaries() {
        assert_eq!(t("00:00").to_12h(), "12:00 AM");
        assert_eq!(t("12:00").to_12h(), "12:00 PM");
        assert_eq!(t("13:05").to_12h(), "1:05 PM");
        assert_eq!(t("23:59").to_12h(), "11:59 PM");
        assert_eq!(t("06:00").to_12h(), "6:00 AM");
        assert_eq!(t("11:59").to_12h(), "11:59 AM");
    }

    #[test]
    fn test_minutes_until() {
        assert_eq!(t("06:00").minutes_until(t("06:36")), 36);
        assert_eq!(t("06:36").minutes_until(t("06:00")), 0);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0h 0m");
        assert_eq!(format_elapsed(36), "0h 36m");
        assert_eq!(format_elapsed(125), "2h 5m");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&t("06:13")).unwrap();
        assert_eq!(json, "\"06:13\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("06:13"));
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
