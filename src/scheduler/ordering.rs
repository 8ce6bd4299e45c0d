//! Program ordering policies.
//!
//! The builder never reorders: performance order within a hall is the
//! order of its input. An ordering policy decides that order once, over
//! the whole registration set, before hall partitioning.
//!
//! # Policies
//!
//! | Policy | Order |
//! |--------|-------|
//! | `RegistrationOrder` | As read from the registration store |
//! | `CategoryThenItemType` | Category rank, then item type (case-insensitive) |
//!
//! All policies sort stably, so ties keep registration order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::RegisteredItem;

/// Decides the relative order of two registrations in the program.
pub trait OrderingPolicy: Send + Sync + Debug {
    /// Policy name.
    fn name(&self) -> &'static str;

    /// Compares two items. `Less` = performs earlier.
    fn compare(&self, a: &RegisteredItem, b: &RegisteredItem) -> Ordering;

    /// Returns the items in program order (stable).
    fn arrange(&self, items: &[RegisteredItem]) -> Vec<RegisteredItem> {
        let mut ordered = items.to_vec();
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered
    }
}

/// Keeps registration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationOrder;

impl OrderingPolicy for RegistrationOrder {
    fn name(&self) -> &'static str {
        "registration"
    }

    fn compare(&self, _a: &RegisteredItem, _b: &RegisteredItem) -> Ordering {
        Ordering::Equal
    }
}

/// Groups by category rank, then sorts by item type.
///
/// Categories missing from the rank list sort after all ranked ones.
#[derive(Debug, Clone)]
pub struct CategoryThenItemType {
    category_order: Vec<String>,
}

impl CategoryThenItemType {
    /// Creates the policy with a category rank list.
    pub fn new(category_order: Vec<String>) -> Self {
        Self { category_order }
    }

    fn rank(&self, category: &str) -> usize {
        self.category_order
            .iter()
            .position(|c| c == category)
            .unwrap_or(self.category_order.len())
    }
}

impl OrderingPolicy for CategoryThenItemType {
    fn name(&self) -> &'static str {
        "category-then-item-type"
    }

    fn compare(&self, a: &RegisteredItem, b: &RegisteredItem) -> Ordering {
        self.rank(&a.category)
            .cmp(&self.rank(&b.category))
            .then_with(|| compare_item_types(&a.item_type, &b.item_type))
    }
}

/// Case-insensitive item type comparison with a byte-order tie-break.
pub(crate) fn compare_item_types(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Configured ordering policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingKind {
    /// [`RegistrationOrder`].
    #[default]
    Registration,
    /// [`CategoryThenItemType`].
    CategoryThenItemType,
}

impl OrderingKind {
    /// Builds the policy.
    pub fn policy(self, category_order: &[String]) -> Box<dyn OrderingPolicy> {
        match self {
            OrderingKind::Registration => Box::new(RegistrationOrder),
            OrderingKind::CategoryThenItemType => {
                Box::new(CategoryThenItemType::new(category_order.to_vec()))
            }
        }
    }
}
