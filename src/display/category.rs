//! Category display formatting

use crate::models::Category;

/// Format categories as a name/color table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'finance init' to create default categories."
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  Color\n", "Name", width = name_width));
    output.push_str(&format!("{}\n", "-".repeat(name_width + 9)));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            category.name,
            category.color,
            width = name_width
        ));
    }

    output
}
