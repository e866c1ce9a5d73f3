//! Storage initialization
//!
//! First-run setup: directories plus the default category set.

use log::info;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::Category;

use super::categories::CategoryRepository;

/// Initialize storage for a fresh installation
///
/// Existing category data is left untouched.
pub fn initialize_storage(paths: &FinancePaths) -> Result<(), FinanceError> {
    paths.ensure_directories()?;

    let categories = CategoryRepository::new(paths.categories_file());
    if !categories.exists() {
        let defaults = Category::defaults();
        info!("Seeding {} default categories", defaults.len());
        categories.replace_all(defaults)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinancePaths) -> bool {
    !paths.categories_file().exists()
}
