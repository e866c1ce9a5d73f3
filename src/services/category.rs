//! Category service
//!
//! Lookup by name and creation of new categories. The default set is seeded
//! by storage initialization, not here.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, DEFAULT_CATEGORY_COLOR};
use crate::storage::TransactionStore;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a dyn TransactionStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// All categories, ascending by name
    pub fn list(&self) -> FinanceResult<Vec<Category>> {
        self.store.fetch_categories()
    }

    /// Find a category by its exact name
    pub fn find_by_name(&self, name: &str) -> FinanceResult<Option<Category>> {
        Ok(self
            .store
            .fetch_categories()?
            .into_iter()
            .find(|c| c.name == name))
    }

    /// Resolve a category name, failing with `MissingCategory` if absent
    pub fn resolve(&self, name: &str) -> FinanceResult<Category> {
        self.find_by_name(name)?
            .ok_or_else(|| FinanceError::MissingCategory(name.to_string()))
    }

    /// Create a new category
    pub fn create(&self, name: &str, color: Option<&str>) -> FinanceResult<Category> {
        let name = name.trim();
        let category =
            Category::with_color(name, color.unwrap_or(DEFAULT_CATEGORY_COLOR).trim());

        category
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        if self.find_by_name(name)?.is_some() {
            return Err(FinanceError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        self.store.insert_category(category.clone())?;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::create_test_store;

    #[test]
    fn test_list_is_sorted() {
        let (_temp_dir, store) = create_test_store();
        let service = CategoryService::new(&store);

        let names: Vec<_> = service.list().unwrap().into_iter().map(|c| c.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_resolve_missing_category() {
        let (_temp_dir, store) = create_test_store();
        let service = CategoryService::new(&store);

        assert_eq!(service.resolve("Travel").unwrap().color, "#2ecc71");
        let err = service.resolve("Gardening").unwrap_err();
        assert!(matches!(err, FinanceError::MissingCategory(name) if name == "Gardening"));
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, store) = create_test_store();
        let service = CategoryService::new(&store);

        let pets = service.create("Pets", None).unwrap();
        assert_eq!(pets.color, DEFAULT_CATEGORY_COLOR);
        assert!(service.find_by_name("Pets").unwrap().is_some());

        let err = service.create("Pets", Some("#000000")).unwrap_err();
        assert!(matches!(err, FinanceError::Duplicate { .. }));

        assert!(service.create("   ", None).is_err());
    }
}
