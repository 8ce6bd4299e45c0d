//! Sequential slot builder.
//!
//! # Algorithm
//!
//! 1. Start the venue clock at the venue start time.
//! 2. For each item, in input order:
//!    a. Resolve its regulation by `(category, item type)`.
//!    b. Parse the regulation's maximum duration (default if unresolved).
//!    c. Emit a slot `[current, current + duration)`.
//!    d. Advance the clock to the slot end plus the transition interval.
//!
//! No reordering, load balancing, or cross-venue coordination: the same
//! registrations always produce the same program.
//!
//! # Complexity
//! O(n * r) where n=items, r=regulations per category.

use tracing::debug;

use super::duration::{parse_duration_or, DEFAULT_DURATION_MINUTES};
use crate::models::{ClockTime, RegisteredItem, RegulationTable, ScheduleSlot};

/// Fixed gap between consecutive performances in one venue (minutes).
pub const INTERVAL_MINUTES: u32 = 3;

/// Lays items out back-to-back on a single venue's timeline.
///
/// Never fails: items with a missing regulation or an unparseable duration
/// get the default duration and no cast limit.
///
/// # Example
///
/// ```
/// use event_program::models::{ClockTime, RegisteredItem, RegulationTable};
/// use event_program::scheduler::ScheduleBuilder;
///
/// let regulations = RegulationTable::standard();
/// let items = vec![
///     RegisteredItem::new("Play", "SIA-PRI-01", "Primary"),
///     RegisteredItem::new("Modern Creative Dance", "SIA-PRI-02", "Primary"),
/// ];
/// let start = ClockTime::parse("06:00").unwrap();
///
/// let slots = ScheduleBuilder::new().build(&items, &regulations, start);
/// assert_eq!(slots[0].end_time.to_string(), "06:15");
/// assert_eq!(slots[1].start_time.to_string(), "06:18");
/// assert_eq!(slots[1].end_time.to_string(), "06:25");
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    interval_minutes: u32,
    default_duration_minutes: u32,
}

impl ScheduleBuilder {
    /// Creates a builder with the standard interval and default duration.
    pub fn new() -> Self {
        Self {
            interval_minutes: INTERVAL_MINUTES,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }

    /// Sets the transition interval.
    pub fn with_interval(mut self, minutes: u32) -> Self {
        self.interval_minutes = minutes;
        self
    }

    /// Sets the fallback duration for unregulated items.
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_minutes = minutes;
        self
    }

    /// Transition interval (minutes).
    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Fallback duration (minutes).
    pub fn default_duration_minutes(&self) -> u32 {
        self.default_duration_minutes
    }

    /// Builds the slot list for one venue.
    ///
    /// An empty item list yields an empty slot list.
    pub fn build(
        &self,
        items: &[RegisteredItem],
        regulations: &RegulationTable,
        start: ClockTime,
    ) -> Vec<ScheduleSlot> {
        let mut slots = Vec::with_capacity(items.len());
        let mut current = start;

        for item in items {
            let regulation = regulations.regulation(&item.category, &item.item_type);
            if regulation.is_none() {
                debug!(
                    item_code = %item.item_code,
                    category = %item.category,
                    item_type = %item.item_type,
                    "no regulation found, using default duration"
                );
            }

            let max_time = regulation.and_then(|r| r.max_time.as_deref());
            let duration = parse_duration_or(max_time, self.default_duration_minutes);
            let end = current.add_minutes(duration);

            slots.push(ScheduleSlot {
                start_time: current,
                end_time: end,
                item: item.item_type.clone(),
                item_code: item.item_code.clone(),
                school_name: item.school_name.clone(),
                category: item.category.clone(),
                code: regulation
                    .and_then(|r| r.code.clone())
                    .unwrap_or_default(),
                duration_minutes: duration,
                max_cast: regulation.and_then(|r| r.max_cast),
            });

            current = end.add_minutes(self.interval_minutes);
        }

        slots
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
