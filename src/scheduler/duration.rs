//! Duration text parsing.
//!
//! Regulation durations are free text ("15 min", "Up to 30 minutes").
//! The first run of ASCII digits is read as a minute count; no unit
//! conversion is applied. Anything without digits, a count longer than
//! one event day, or a missing duration falls back to a conservative
//! default so that unregulated items still occupy a slot.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::MINUTES_PER_DAY;

/// Fallback slot length for items without a usable duration (minutes).
pub const DEFAULT_DURATION_MINUTES: u32 = 10;

/// Longest slot a single performance may occupy (minutes).
pub const MAX_DURATION_MINUTES: u32 = MINUTES_PER_DAY;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

fn first_digit_run(text: &str) -> Option<&str> {
    DIGITS.find(text).map(|m| m.as_str())
}

/// Parses a duration in minutes, falling back to [`DEFAULT_DURATION_MINUTES`].
///
/// # Example
/// ```
/// use event_program::scheduler::parse_duration;
///
/// assert_eq!(parse_duration(Some("15 min")), 15);
/// assert_eq!(parse_duration(Some("Up to 30 minutes")), 30);
/// assert_eq!(parse_duration(Some("no digits here")), 10);
/// assert_eq!(parse_duration(None), 10);
/// ```
pub fn parse_duration(max_time: Option<&str>) -> u32 {
    parse_duration_or(max_time, DEFAULT_DURATION_MINUTES)
}

/// Parses a duration in minutes, falling back to `default_minutes`.
///
/// A count above [`MAX_DURATION_MINUTES`] also falls back.
pub fn parse_duration_or(max_time: Option<&str>, default_minutes: u32) -> u32 {
    max_time
        .and_then(first_digit_run)
        .and_then(|digits| digits.parse::<u32>().ok())
        .filter(|&minutes| minutes <= MAX_DURATION_MINUTES)
        .unwrap_or(default_minutes)
}

/// Whether a duration text states more than [`MAX_DURATION_MINUTES`].
///
/// Texts without digits are not oversized; they simply fall back.
pub fn exceeds_max_duration(max_time: &str) -> bool {
    first_digit_run(max_time).is_some_and(|digits| {
        digits
            .parse::<u32>()
            .map_or(true, |minutes| minutes > MAX_DURATION_MINUTES)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_duration(Some("15 min")), 15);
        assert_eq!(parse_duration(Some("7 min")), 7);
        assert_eq!(parse_duration(Some("30")), 30);
    }

    #[test]
    fn test_parse_first_run_anywhere() {
        assert_eq!(parse_duration(Some("Up to 30 minutes")), 30);
        assert_eq!(parse_duration(Some("max 12-15 min")), 12);
        assert_eq!(parse_duration(Some("1 hour")), 1); // no unit conversion
    }

    #[test]
    fn test_parse_fallbacks() {
        assert_eq!(parse_duration(None), DEFAULT_DURATION_MINUTES);
        assert_eq!(parse_duration(Some("")), DEFAULT_DURATION_MINUTES);
        assert_eq!(parse_duration(Some("no digits here")), DEFAULT_DURATION_MINUTES);
        assert_eq!(
            parse_duration(Some("99999999999999999999 min")),
            DEFAULT_DURATION_MINUTES
        );
    }

    #[test]
    fn test_parse_longer_than_a_day_falls_back() {
        assert_eq!(parse_duration(Some("1440 min")), 1440);
        assert_eq!(parse_duration(Some("1441 min")), DEFAULT_DURATION_MINUTES);
        assert_eq!(parse_duration(Some("4000000000 min")), DEFAULT_DURATION_MINUTES);
    }

    #[test]
    fn test_exceeds_max_duration() {
        assert!(!exceeds_max_duration("15 min"));
        assert!(!exceeds_max_duration("1440 min"));
        assert!(!exceeds_max_duration("no digits here"));
        assert!(exceeds_max_duration("1441 min"));
        assert!(exceeds_max_duration("4000000000 min"));
        assert!(exceeds_max_duration("99999999999999999999 min"));
    }

    #[test]
    fn test_parse_zero_is_kept() {
        assert_eq!(parse_duration(Some("0 min")), 0);
    }

    #[test]
    fn test_custom_default() {
        assert_eq!(parse_duration_or(None, 12), 12);
        assert_eq!(parse_duration_or(Some("5 min"), 12), 5);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        // Arabic-Indic digits are not minute counts.
        assert_eq!(parse_duration(Some("\u{0661}\u{0665} min")), DEFAULT_DURATION_MINUTES);
    }
}
