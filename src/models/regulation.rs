//! Regulation catalog.
//!
//! Each school category admits an ordered list of performance item types,
//! each with a maximum duration and an optional maximum cast. The catalog
//! is static data: it is built once at startup (built-in or from
//! configuration) and only read afterwards.
//!
//! # Built-in catalog
//!
//! | Category | Codes |
//! |----------|-------|
//! | Pre-Primary | A1–A3 |
//! | Lower Primary | A3–A5 |
//! | Primary | B1–B10 |

use serde::{Deserialize, Serialize};

use super::RegisteredItem;

/// Pre-Primary school category.
pub const PRE_PRIMARY: &str = "Pre-Primary";
/// Lower Primary school category.
pub const LOWER_PRIMARY: &str = "Lower Primary";
/// Primary school category.
pub const PRIMARY: &str = "Primary";

/// Regulation for one item type within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRegulation {
    /// Performance item type (e.g., "Play").
    pub item_type: String,
    /// Short display code (e.g., "B1"). Absent in some catalogs.
    #[serde(default)]
    pub code: Option<String>,
    /// Free-text maximum duration (e.g., "15 min"). `None` = unregulated.
    #[serde(default)]
    pub max_time: Option<String>,
    /// Maximum performer count. `None` = unlimited / not applicable.
    #[serde(default)]
    pub max_cast: Option<u32>,
}

/// The ordered regulations of one school category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegulations {
    /// School category name.
    pub category: String,
    /// Allowed items, in catalog order.
    #[serde(default)]
    pub items: Vec<ItemRegulation>,
}

/// Category → allowed item regulations.
///
/// Categories keep their insertion order, which is also the order of the
/// catalog program (see [`RegulationTable::catalog_items`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegulationTable {
    categories: Vec<CategoryRegulations>,
}

impl ItemRegulation {
    /// Creates a regulation with no code, duration, or cast limit.
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            code: None,
            max_time: None,
            max_cast: None,
        }
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the maximum duration text.
    pub fn with_max_time(mut self, max_time: impl Into<String>) -> Self {
        self.max_time = Some(max_time.into());
        self
    }

    /// Sets the maximum cast.
    pub fn with_max_cast(mut self, max_cast: u32) -> Self {
        self.max_cast = Some(max_cast);
        self
    }
}

impl CategoryRegulations {
    /// Creates an empty category.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: Vec::new(),
        }
    }

    /// Adds an item regulation.
    pub fn with_item(mut self, item: ItemRegulation) -> Self {
        self.items.push(item);
        self
    }
}

fn reg(item_type: &str, code: &str, max_time: &str, max_cast: Option<u32>) -> ItemRegulation {
    let r = ItemRegulation::new(item_type)
        .with_code(code)
        .with_max_time(max_time);
    match max_cast {
        Some(cast) => r.with_max_cast(cast),
        None => r,
    }
}

impl RegulationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog for the creative arts festival.
    pub fn standard() -> Self {
        Self::new()
            .with_category(
                CategoryRegulations::new(PRE_PRIMARY)
                    .with_item(reg("Dramatized Singing Games", "A1", "5 min", Some(20)))
                    .with_item(reg("Dramatized Verse (Solo)", "A2", "4 min", Some(2)))
                    .with_item(reg("Dramatized Verse (Choral)", "A3", "4 min", Some(16))),
            )
            .with_category(
                CategoryRegulations::new(LOWER_PRIMARY)
                    .with_item(reg("Dramatized Verse (Choral)", "A3", "6 min", Some(18)))
                    .with_item(reg("Dramatized Solo Verse", "A4", "6 min", Some(2)))
                    .with_item(reg("Film for Early Years", "A5", "30 min", None)),
            )
            .with_category(
                CategoryRegulations::new(PRIMARY)
                    .with_item(reg("Play", "B1", "15 min", Some(20)))
                    .with_item(reg("Cultural Creative Dance", "B2", "7 min", Some(30)))
                    .with_item(reg("Modern Creative Dance", "B3", "7 min", Some(9)))
                    .with_item(reg("Dramatized Verse (Solo)", "B4", "6 min", Some(2)))
                    .with_item(reg("Dramatized Verse (Choral)", "B5", "6 min", Some(18)))
                    .with_item(reg("Narrative", "B6", "5 min", Some(4)))
                    .with_item(reg("Film", "B7", "30 min", None))
                    .with_item(reg("Play in Kenyan Sign Language", "B8", "20 min", Some(20)))
                    .with_item(reg(
                        "Dramatized Dance for Special Needs (Mentally Handicapped)",
                        "B9",
                        "10 min",
                        Some(25),
                    ))
                    .with_item(reg(
                        "Dramatized Dance for Special Needs (Physically Handicapped)",
                        "B10",
                        "10 min",
                        Some(25),
                    )),
            )
    }

    /// Adds a category. A category already present is replaced in place.
    pub fn with_category(mut self, category: CategoryRegulations) -> Self {
        match self
            .categories
            .iter_mut()
            .find(|c| c.category == category.category)
        {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        self
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[CategoryRegulations] {
        &self.categories
    }

    /// Category names, in catalog order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.category.as_str()).collect()
    }

    /// Whether a category is known.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.category == category)
    }

    /// Regulations of a category (empty if unknown).
    pub fn regulations_for(&self, category: &str) -> &[ItemRegulation] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    /// Item types allowed in a category, in catalog order.
    pub fn allowed_item_types(&self, category: &str) -> Vec<&str> {
        self.regulations_for(category)
            .iter()
            .map(|r| r.item_type.as_str())
            .collect()
    }

    /// Looks up the regulation for `(category, item_type)`. First match wins.
    pub fn regulation(&self, category: &str, item_type: &str) -> Option<&ItemRegulation> {
        self.regulations_for(category)
            .iter()
            .find(|r| r.item_type == item_type)
    }

    /// One synthetic registration per catalog entry, in catalog order.
    ///
    /// Feeding these to the planner yields the sample program that lists
    /// every regulated item once. The item code is the regulation code.
    pub fn catalog_items(&self) -> Vec<RegisteredItem> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.items.iter().map(move |r| {
                    RegisteredItem::new(
                        r.item_type.clone(),
                        r.code.clone().unwrap_or_default(),
                        &c.category,
                    )
                })
            })
            .collect()
    }

    /// Total number of item regulations across categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Whether the table holds no regulations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
