//! Registration store.
//!
//! The planner only ever reads a consistent snapshot of registrations;
//! writes and their conflict handling belong to the store. This module
//! defines the store seam and an in-memory implementation used by the
//! server and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::codes::{item_code, normalize_school_name};
use crate::models::RegisteredItem;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors raised by a registration store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An item code is already taken.
    #[error("item code already registered: {0}")]
    DuplicateItemCode(String),

    /// The school already registered in this category.
    #[error("'{school}' is already registered under the {category} category")]
    DuplicateSchool { school: String, category: String },

    /// Seed data could not be loaded.
    #[error("seed error: {0}")]
    Seed(String),

    /// The backing store is unreachable.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Source of registered performance items.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// All registered items, in registration order.
    async fn registered_items(&self) -> RepositoryResult<Vec<RegisteredItem>>;

    /// Registers a school's items, assigning item codes in submission order.
    ///
    /// Returns the stored items.
    async fn register_school(
        &self,
        school_name: &str,
        category: &str,
        item_types: &[String],
    ) -> RepositoryResult<Vec<RegisteredItem>>;

    /// Cheap liveness probe.
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[derive(Debug, Default)]
struct Store {
    items: Vec<RegisteredItem>,
    codes: HashSet<String>,
    schools: HashSet<(String, String)>,
}

impl Store {
    fn insert(&mut self, item: RegisteredItem) -> RepositoryResult<()> {
        if !self.codes.insert(item.item_code.clone()) {
            return Err(RepositoryError::DuplicateItemCode(item.item_code));
        }
        self.schools.insert((
            normalize_school_name(&item.school_name).to_lowercase(),
            item.category.clone(),
        ));
        self.items.push(item);
        Ok(())
    }
}

/// In-memory registration store.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

/// On-disk seed format: `{ "items": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct Seed {
    items: Vec<RegisteredItem>,
}

impl InMemoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `items`.
    ///
    /// Fails on duplicate item codes.
    pub fn with_items(items: Vec<RegisteredItem>) -> RepositoryResult<Self> {
        let repo = Self::new();
        {
            let mut store = repo.store.write();
            for item in items {
                store.insert(item)?;
            }
        }
        Ok(repo)
    }

    /// Parses seed JSON (`{ "items": [ { "itemType", "itemCode", "schoolName", "category" } ] }`).
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let seed: Seed =
            serde_json::from_str(json).map_err(|e| RepositoryError::Seed(e.to_string()))?;
        Self::with_items(seed.items)
    }

    /// Loads seed JSON from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RepositoryError::Seed(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.store.read().items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRepository {
    async fn registered_items(&self) -> RepositoryResult<Vec<RegisteredItem>> {
        Ok(self.store.read().items.clone())
    }

    async fn register_school(
        &self,
        school_name: &str,
        category: &str,
        item_types: &[String],
    ) -> RepositoryResult<Vec<RegisteredItem>> {
        let school = normalize_school_name(school_name);
        let key = (school.to_lowercase(), category.to_string());

        let mut store = self.store.write();
        if store.schools.contains(&key) {
            return Err(RepositoryError::DuplicateSchool {
                school,
                category: category.to_string(),
            });
        }

        let items: Vec<RegisteredItem> = item_types
            .iter()
            .enumerate()
            .map(|(idx, item_type)| {
                RegisteredItem::new(item_type.clone(), item_code(&school, category, idx + 1), category)
                    .with_school(school.clone())
            })
            .collect();

        // All-or-nothing: check every code before storing any.
        if let Some(taken) = items.iter().find(|i| store.codes.contains(&i.item_code)) {
            return Err(RepositoryError::DuplicateItemCode(taken.item_code.clone()));
        }
        for item in &items {
            store.insert(item.clone())?;
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_register_assigns_codes() {
        let repo = InMemoryRepository::new();
        let items = repo
            .register_school("  Sisoni   Academy ", "Primary", &types(&["Play", "Film"]))
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_code, "SIA-PRI-01");
        assert_eq!(items[1].item_code, "SIA-PRI-02");
        assert_eq!(items[0].school_name, "Sisoni Academy");
        assert_eq!(repo.registered_items().await.unwrap(), items);
    }

    #[tokio::test]
    async fn test_same_school_other_category_allowed() {
        let repo = InMemoryRepository::new();
        repo.register_school("Sisoni Academy", "Primary", &types(&["Play"]))
            .await
            .unwrap();
        let items = repo
            .register_school("Sisoni Academy", "Pre-Primary", &types(&["Dramatized Singing Games"]))
            .await
            .unwrap();
        assert_eq!(items[0].item_code, "SIA-PPR-01");
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_school_rejected() {
        let repo = InMemoryRepository::new();
        repo.register_school("Sisoni Academy", "Primary", &types(&["Play"]))
            .await
            .unwrap();
        let err = repo
            .register_school("sisoni  academy", "Primary", &types(&["Film"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateSchool { .. }));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_code_collision_stores_nothing() {
        // Different schools sharing an abbreviation collide on codes.
        let repo = InMemoryRepository::new();
        repo.register_school("Sisoni Academy", "Primary", &types(&["Play"]))
            .await
            .unwrap();
        let err = repo
            .register_school("Silver Arrow", "Primary", &types(&["Film", "Narrative"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateItemCode(ref c) if c == "SIA-PRI-01"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_from_json_seed() {
        let json = r#"{"items": [
            {"itemType": "Play", "itemCode": "A-PRI-01", "schoolName": "A", "category": "Primary"},
            {"itemType": "Film", "itemCode": "A-PRI-02", "schoolName": "A", "category": "Primary"}
        ]}"#;
        let repo = InMemoryRepository::from_json(json).unwrap();
        let items = repo.registered_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].item_type, "Film");
        assert!(repo.health_check().await.unwrap());
    }

    #[test]
    fn test_demo_seed_loads() {
        let repo = InMemoryRepository::from_json(include_str!("../demos/registrations.json")).unwrap();
        assert_eq!(repo.len(), 6);
    }

    #[test]
    fn test_seed_duplicate_code_rejected() {
        let items = vec![
            RegisteredItem::new("Play", "X", "Primary"),
            RegisteredItem::new("Film", "X", "Primary"),
        ];
        assert!(matches!(
            InMemoryRepository::with_items(items),
            Err(RepositoryError::DuplicateItemCode(_))
        ));
    }

    #[test]
    fn test_bad_seed_json() {
        assert!(matches!(
            InMemoryRepository::from_json("not json"),
            Err(RepositoryError::Seed(_))
        ));
    }
}
