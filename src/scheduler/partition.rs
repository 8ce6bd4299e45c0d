//! Category → hall partitioning.
//!
//! Every hall hosts a fixed set of school categories. Partitioning routes
//! each registration to the hall hosting its category, keeping input order
//! within each hall (a stable split, not a sort). Registrations whose
//! category no hall hosts are returned separately; what happens to them is
//! the planner's policy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{RegisteredItem, LOWER_PRIMARY, PRE_PRIMARY, PRIMARY};
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// A venue and the categories it hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallSpec {
    /// Display name (e.g., "Hall 1").
    pub name: String,
    /// Display description (e.g., "Category A (EYE)").
    #[serde(default)]
    pub description: String,
    /// Hosted school categories.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Items routed to one hall, in program order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallItems {
    /// The hall.
    pub hall: HallSpec,
    /// Its items.
    pub items: Vec<RegisteredItem>,
}

/// Result of partitioning a registration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// One entry per configured hall, in configuration order.
    pub halls: Vec<HallItems>,
    /// Items whose category no hall hosts, in input order.
    pub unmapped: Vec<RegisteredItem>,
}

/// Routes registrations to halls by category.
///
/// # Example
/// ```
/// use event_program::models::RegisteredItem;
/// use event_program::scheduler::HallPartitioner;
///
/// let partitioner = HallPartitioner::new(HallPartitioner::standard_halls()).unwrap();
/// let items = vec![
///     RegisteredItem::new("Play", "A-PRI-01", "Primary"),
///     RegisteredItem::new("Film for Early Years", "B-LPR-01", "Lower Primary"),
/// ];
/// let partition = partitioner.partition(&items);
/// assert_eq!(partition.halls[0].items[0].item_code, "B-LPR-01");
/// assert_eq!(partition.halls[1].items[0].item_code, "A-PRI-01");
/// ```
#[derive(Debug, Clone)]
pub struct HallPartitioner {
    halls: Vec<HallSpec>,
    hall_by_category: HashMap<String, usize>,
}

impl HallSpec {
    /// Creates a hall hosting no categories.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            categories: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a hosted category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Whether this hall hosts a category.
    pub fn hosts(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

impl HallPartitioner {
    /// Creates a partitioner.
    ///
    /// Fails if a category is hosted by more than one hall or two halls
    /// share a name.
    pub fn new(halls: Vec<HallSpec>) -> ValidationResult<Self> {
        let mut errors = Vec::new();
        let mut hall_by_category: HashMap<String, usize> = HashMap::new();

        for (idx, hall) in halls.iter().enumerate() {
            if halls[..idx].iter().any(|h| h.name == hall.name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate hall name: {}", hall.name),
                ));
            }
            for category in &hall.categories {
                if let Some(&prev) = hall_by_category.get(category) {
                    if prev != idx {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::AmbiguousHall,
                            format!(
                                "Category '{}' is hosted by both '{}' and '{}'",
                                category, halls[prev].name, hall.name
                            ),
                        ));
                    }
                    continue;
                }
                hall_by_category.insert(category.clone(), idx);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            halls,
            hall_by_category,
        })
    }

    /// The two-hall layout of the festival: early years in Hall 1,
    /// primary schools in Hall 2.
    pub fn standard_halls() -> Vec<HallSpec> {
        vec![
            HallSpec::new("Hall 1")
                .with_description("Category A (EYE)")
                .with_category(PRE_PRIMARY)
                .with_category(LOWER_PRIMARY),
            HallSpec::new("Hall 2")
                .with_description("Category B (Primary)")
                .with_category(PRIMARY),
        ]
    }

    /// Configured halls, in order.
    pub fn halls(&self) -> &[HallSpec] {
        &self.halls
    }

    /// The hall hosting a category.
    pub fn hall_for(&self, category: &str) -> Option<&HallSpec> {
        self.hall_by_category
            .get(category)
            .map(|&idx| &self.halls[idx])
    }

    /// Splits items by hall, preserving relative order.
    pub fn partition(&self, items: &[RegisteredItem]) -> Partition {
        let mut halls: Vec<HallItems> = self
            .halls
            .iter()
            .map(|hall| HallItems {
                hall: hall.clone(),
                items: Vec::new(),
            })
            .collect();
        let mut unmapped = Vec::new();

        for item in items {
            match self.hall_by_category.get(&item.category) {
                Some(&idx) => halls[idx].items.push(item.clone()),
                None => unmapped.push(item.clone()),
            }
        }

        Partition { halls, unmapped }
    }
}

impl Partition {
    /// Distinct unmapped categories, in first-appearance order.
    pub fn unmapped_categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.unmapped {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }

    /// Total items routed to halls.
    pub fn mapped_count(&self) -> usize {
        self.halls.iter().map(|h| h.items.len()).sum()
    }
}
