//! Integrity checks for regulations, halls, and registrations.
//!
//! Scheduling itself tolerates bad data (unknown item types get a default
//! slot, unmapped categories are set aside). These checks surface the same
//! problems up front, so operators can fix the data instead of discovering
//! a thin program. Detects:
//! - Duplicate item types within a category, empty categories
//! - Regulated durations longer than one event day
//! - Categories hosted by two halls, regulated categories hosted by none
//! - Duplicate item codes
//! - Registrations in unknown categories or with disallowed item types

use std::collections::HashSet;

use crate::models::{RegisteredItem, RegulationTable};
use crate::scheduler::{exceeds_max_duration, HallSpec, MAX_DURATION_MINUTES};

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A category lists no items.
    EmptyCategory,
    /// A regulated duration exceeds the longest allowed slot.
    InvalidDuration,
    /// A category is hosted by more than one hall.
    AmbiguousHall,
    /// A regulated category is hosted by no hall.
    UnhostedCategory,
    /// A registration names a category with no regulations.
    UnknownCategory,
    /// A registration's item type is not allowed in its category.
    DisallowedItemType,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a regulation catalog.
///
/// Checks:
/// 1. No category appears twice
/// 2. Every category lists at least one item
/// 3. Item types are unique within a category (lookup is first-match)
/// 4. No `max_time` states more than [`MAX_DURATION_MINUTES`]
pub fn validate_regulations(table: &RegulationTable) -> ValidationResult {
    let mut errors = Vec::new();
    let mut categories = HashSet::new();

    for category in table.categories() {
        if !categories.insert(category.category.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate category: {}", category.category),
            ));
        }

        if category.items.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCategory,
                format!("Category '{}' has no items", category.category),
            ));
        }

        let mut item_types = HashSet::new();
        for item in &category.items {
            if !item_types.insert(item.item_type.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Duplicate item type '{}' in category '{}'",
                        item.item_type, category.category
                    ),
                ));
            }

            if let Some(max_time) = item.max_time.as_deref() {
                if exceeds_max_duration(max_time) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDuration,
                        format!(
                            "'{}' in category '{}' lasts '{}', above the {} minute limit",
                            item.item_type, category.category, max_time, MAX_DURATION_MINUTES
                        ),
                    ));
                }
            }
        }
    }

    finish(errors)
}

/// Validates a hall layout against a regulation catalog.
///
/// Checks:
/// 1. No category is hosted by two different halls
/// 2. Every regulated category is hosted by some hall
pub fn validate_halls(halls: &[HallSpec], table: &RegulationTable) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, hall) in halls.iter().enumerate() {
        for category in &hall.categories {
            if let Some(other) = halls[..idx]
                .iter()
                .find(|h| h.name != hall.name && h.hosts(category))
            {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AmbiguousHall,
                    format!(
                        "Category '{}' is hosted by both '{}' and '{}'",
                        category, other.name, hall.name
                    ),
                ));
            }
        }
    }

    for category in table.category_names() {
        if !halls.iter().any(|h| h.hosts(category)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnhostedCategory,
                format!("Category '{category}' is not hosted by any hall"),
            ));
        }
    }

    finish(errors)
}

/// Validates registrations against a regulation catalog.
///
/// Checks:
/// 1. No duplicate item codes
/// 2. Every category has regulations
/// 3. Every item type is allowed in its category
pub fn validate_registrations(items: &[RegisteredItem], table: &RegulationTable) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for item in items {
        if !codes.insert(item.item_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item code: {}", item.item_code),
            ));
        }

        if !table.has_category(&item.category) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCategory,
                format!(
                    "Item '{}' has unknown category '{}'",
                    item.item_code, item.category
                ),
            ));
        } else if table.regulation(&item.category, &item.item_type).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DisallowedItemType,
                format!(
                    "Item '{}': '{}' is not allowed in category '{}'",
                    item.item_code, item.item_type, item.category
                ),
            ));
        }
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRegulations, ItemRegulation};
    use crate::scheduler::HallPartitioner;

    #[test]
    fn test_standard_catalog_is_valid() {
        assert!(validate_regulations(&RegulationTable::standard()).is_ok());
    }

    #[test]
    fn test_duplicate_item_type() {
        let table = RegulationTable::new().with_category(
            CategoryRegulations::new("Primary")
                .with_item(ItemRegulation::new("Play"))
                .with_item(ItemRegulation::new("Play")),
        );
        let errors = validate_regulations(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("Play")));
    }

    #[test]
    fn test_empty_category() {
        let table = RegulationTable::new().with_category(CategoryRegulations::new("Nursery"));
        let errors = validate_regulations(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCategory));
    }

    #[test]
    fn test_oversized_duration() {
        let table = RegulationTable::new().with_category(
            CategoryRegulations::new("Primary")
                .with_item(ItemRegulation::new("Film").with_max_time("1440 min"))
                .with_item(ItemRegulation::new("Marathon").with_max_time("4000000000 min")),
        );
        let errors = validate_regulations(&table).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidDuration);
        assert!(errors[0].message.contains("Marathon"));
    }

    #[test]
    fn test_standard_halls_are_valid() {
        let halls = HallPartitioner::standard_halls();
        assert!(validate_halls(&halls, &RegulationTable::standard()).is_ok());
    }

    #[test]
    fn test_unhosted_category() {
        let halls = vec![HallSpec::new("Hall 1").with_category("Primary")];
        let errors = validate_halls(&halls, &RegulationTable::standard()).unwrap_err();
        let unhosted: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::UnhostedCategory)
            .collect();
        assert_eq!(unhosted.len(), 2); // Pre-Primary and Lower Primary
    }

    #[test]
    fn test_ambiguous_hall() {
        let halls = vec![
            HallSpec::new("Hall 1").with_category("Pre-Primary").with_category("Lower Primary"),
            HallSpec::new("Hall 2").with_category("Primary").with_category("Lower Primary"),
        ];
        let errors = validate_halls(&halls, &RegulationTable::standard()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::AmbiguousHall
                && e.message.contains("Lower Primary")));
    }

    #[test]
    fn test_valid_registrations() {
        let items = vec![
            RegisteredItem::new("Play", "SIA-PRI-01", "Primary"),
            RegisteredItem::new("Film for Early Years", "SIA-LPR-01", "Lower Primary"),
        ];
        assert!(validate_registrations(&items, &RegulationTable::standard()).is_ok());
    }

    #[test]
    fn test_duplicate_item_code() {
        let items = vec![
            RegisteredItem::new("Play", "SIA-PRI-01", "Primary"),
            RegisteredItem::new("Film", "SIA-PRI-01", "Primary"),
        ];
        let errors = validate_registrations(&items, &RegulationTable::standard()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_unknown_category_and_disallowed_type() {
        let items = vec![
            RegisteredItem::new("Play", "X-UNK-01", "Secondary"),
            RegisteredItem::new("Play", "Y-PPR-01", "Pre-Primary"),
        ];
        let errors = validate_registrations(&items, &RegulationTable::standard()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownCategory);
        assert_eq!(errors[1].kind, ValidationErrorKind::DisallowedItemType);
    }
}
