//! Registered performance item.

use serde::{Deserialize, Serialize};

/// One performance submitted by a school.
///
/// Read from the registration store as an immutable snapshot. The item type
/// is expected to match a regulation of the school's category, but the
/// scheduler tolerates unknown types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredItem {
    /// Performance item type (e.g., "Play").
    pub item_type: String,
    /// Unique item code assigned at registration (e.g., "SIA-PRI-01").
    pub item_code: String,
    /// Owning school.
    #[serde(default)]
    pub school_name: String,
    /// School category (e.g., "Primary").
    pub category: String,
}

impl RegisteredItem {
    /// Creates an item with no school name.
    pub fn new(
        item_type: impl Into<String>,
        item_code: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            item_type: item_type.into(),
            item_code: item_code.into(),
            school_name: String::new(),
            category: category.into(),
        }
    }

    /// Sets the school name.
    pub fn with_school(mut self, school_name: impl Into<String>) -> Self {
        self.school_name = school_name.into();
        self
    }
}
