//! Category repository backed by categories.json

use std::path::PathBuf;

use crate::error::FinanceError;
use crate::models::Category;

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All categories, ascending by name
    pub fn get_all(&self) -> Result<Vec<Category>, FinanceError> {
        let data: CategoryData = read_json(&self.path)?;
        let mut categories = data.categories;
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Add a category; fails if the name is already taken
    pub fn insert(&self, category: Category) -> Result<(), FinanceError> {
        let mut data: CategoryData = read_json(&self.path)?;

        if data.categories.iter().any(|c| c.name == category.name) {
            return Err(FinanceError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        data.categories.push(category);
        write_json_atomic(&self.path, &data)
    }

    /// Overwrite the whole category set
    pub fn replace_all(&self, categories: Vec<Category>) -> Result<(), FinanceError> {
        write_json_atomic(&self.path, &CategoryData { categories })
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));

        repo.insert(Category::new("Travel")).unwrap();
        repo.insert(Category::new("Education")).unwrap();
        repo.insert(Category::new("Shopping")).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Education", "Shopping", "Travel"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));

        repo.insert(Category::new("Travel")).unwrap();
        let err = repo.insert(Category::new("Travel")).unwrap_err();
        assert!(matches!(err, FinanceError::Duplicate { .. }));
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }
}
