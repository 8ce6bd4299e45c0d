//! Program statistics.
//!
//! Computes the display figures of a venue schedule and the per-item-type
//! registration tally.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Count | Number of slots |
//! | Total minutes | First slot start → last slot end, intervals included |
//! | Performance minutes | Sum of slot durations, intervals excluded |
//! | Item count | Registrations per (category, item type) |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ordering::compare_item_types;
use crate::models::{format_elapsed, RegisteredItem, ScheduleSlot};

/// Summary of one venue's slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of slots.
    pub count: usize,
    /// Elapsed venue time from the first start to the last end (minutes).
    pub total_minutes: u32,
    /// Sum of slot durations (minutes).
    pub performance_minutes: u32,
}

impl ScheduleSummary {
    /// Summarizes a slot list in start-time order.
    ///
    /// The total is wall-clock elapsed time, not the sum of durations: it
    /// includes every transition interval between slots. An empty list
    /// summarizes to zero.
    pub fn calculate(slots: &[ScheduleSlot]) -> Self {
        let total_minutes = match (slots.first(), slots.last()) {
            (Some(first), Some(last)) => first.start_time.minutes_until(last.end_time),
            _ => 0,
        };
        Self {
            count: slots.len(),
            total_minutes,
            performance_minutes: slots
                .iter()
                .fold(0u32, |acc, s| acc.saturating_add(s.duration_minutes)),
        }
    }

    /// Minutes spent in transitions between slots.
    pub fn transition_minutes(&self) -> u32 {
        self.total_minutes.saturating_sub(self.performance_minutes)
    }

    /// Elapsed time as `"Hh Mm"`.
    pub fn total_elapsed(&self) -> String {
        format_elapsed(self.total_minutes)
    }
}

/// Registrations of one item type within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCount {
    /// Performance item type.
    pub item_type: String,
    /// School category.
    pub category: String,
    /// Number of registrations.
    pub count: usize,
}

impl ItemCount {
    /// Counts registrations per `(category, item type)`.
    ///
    /// Sorted by category rank in `category_order` (unranked categories
    /// last), then by item type.
    pub fn tally(items: &[RegisteredItem], category_order: &[String]) -> Vec<ItemCount> {
        let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
        for item in items {
            *counts
                .entry((item.category.as_str(), item.item_type.as_str()))
                .or_insert(0) += 1;
        }

        let rank = |category: &str| {
            category_order
                .iter()
                .position(|c| c == category)
                .unwrap_or(category_order.len())
        };

        let mut tally: Vec<ItemCount> = counts
            .into_iter()
            .map(|((category, item_type), count)| ItemCount {
                item_type: item_type.to_string(),
                category: category.to_string(),
                count,
            })
            .collect();
        tally.sort_by(|a, b| {
            rank(&a.category)
                .cmp(&rank(&b.category))
                .then_with(|| a.category.cmp(&b.category))
                .then_with(|| compare_item_types(&a.item_type, &b.item_type))
        });
        tally
    }
}
