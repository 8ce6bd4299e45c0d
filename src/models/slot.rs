//! Schedule slot (solution) model.
//!
//! A slot places one performance on a venue's timeline. Slots are derived
//! on every planning pass and never persisted or mutated.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// One performance's allocated time window within a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Slot start.
    pub start_time: ClockTime,
    /// Slot end (start + duration).
    pub end_time: ClockTime,
    /// Performance item type.
    pub item: String,
    /// Registration item code.
    pub item_code: String,
    /// Owning school.
    pub school_name: String,
    /// School category.
    pub category: String,
    /// Regulation code, empty if unresolved.
    pub code: String,
    /// Minutes allocated to the performance.
    pub duration_minutes: u32,
    /// Regulation cast limit, if any.
    pub max_cast: Option<u32>,
}

/// A venue (hall) and its ordered slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSchedule {
    /// Venue name (e.g., "Hall 1").
    pub name: String,
    /// Venue description (e.g., "Category A (EYE)").
    pub description: String,
    /// Slots in start-time order.
    pub slots: Vec<ScheduleSlot>,
}

impl ScheduleSlot {
    /// Whether this slot overlaps another on the same timeline.
    ///
    /// Slots are half-open: `[start, end)`.
    pub fn overlaps(&self, other: &ScheduleSlot) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl VenueSchedule {
    /// Creates an empty venue schedule.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            slots: Vec::new(),
        }
    }

    /// Sets the slots.
    pub fn with_slots(mut self, slots: Vec<ScheduleSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Latest end time, if any slot exists.
    pub fn end_time(&self) -> Option<ClockTime> {
        self.slots.last().map(|s| s.end_time)
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether no items were scheduled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Finds the slot of a registration item.
    pub fn slot_for_item(&self, item_code: &str) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.item_code == item_code)
    }

    /// Distinct categories hosted, in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for slot in &self.slots {
            if !seen.contains(&slot.category.as_str()) {
                seen.push(&slot.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(code: &str, category: &str, start: u32, end: u32) -> ScheduleSlot {
        ScheduleSlot {
            start_time: ClockTime::from_minutes(start),
            end_time: ClockTime::from_minutes(end),
            item: "Play".into(),
            item_code: code.into(),
            school_name: String::new(),
            category: category.into(),
            code: String::new(),
            duration_minutes: end - start,
            max_cast: None,
        }
    }

    #[test]
    fn test_overlaps_half_open() {
        let a = slot("1", "Primary", 360, 370);
        let b = slot("2", "Primary", 370, 380);
        let c = slot("3", "Primary", 365, 375);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_venue_accessors() {
        let venue = VenueSchedule::new("Hall 1", "Category A").with_slots(vec![
            slot("1", "Pre-Primary", 360, 370),
            slot("2", "Lower Primary", 373, 379),
            slot("3", "Pre-Primary", 382, 386),
        ]);
        assert_eq!(venue.slot_count(), 3);
        assert_eq!(venue.end_time(), Some(ClockTime::from_minutes(386)));
        assert_eq!(venue.categories(), vec!["Pre-Primary", "Lower Primary"]);
        assert_eq!(venue.slot_for_item("2").unwrap().duration_minutes, 6);
        assert!(venue.slot_for_item("9").is_none());
    }

    #[test]
    fn test_empty_venue() {
        let venue = VenueSchedule::new("Hall 2", "");
        assert!(venue.is_empty());
        assert_eq!(venue.end_time(), None);
        assert!(venue.categories().is_empty());
    }
}
