//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::FinanceResult;
use crate::services::CategoryService;
use crate::storage::TransactionStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    #[command(alias = "create")]
    Add {
        /// Category name
        name: String,
        /// Display color (e.g., "#3498db")
        #[arg(short, long)]
        color: Option<String>,
    },
}

/// Handle a category command
pub fn handle_category_command(
    store: &dyn TransactionStore,
    cmd: CategoryCommands,
) -> FinanceResult<()> {
    let service = CategoryService::new(store);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name, color } => {
            let category = service.create(&name, color.as_deref())?;
            println!("Created category: {} ({})", category.name, category.color);
        }
    }

    Ok(())
}
