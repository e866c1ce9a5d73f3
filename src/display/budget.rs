//! Budget status formatting

use super::report::{format_percentage, format_progress};
use crate::models::{BudgetStatus, BudgetTier};

const BAR_WIDTH: usize = 20;

fn tier_marker(tier: BudgetTier) -> &'static str {
    match tier {
        BudgetTier::OnTrack => "✓",
        BudgetTier::Warning => "!",
        BudgetTier::Over => "⚠",
    }
}

/// Format budget statuses for a month, one block per category
pub fn format_budget_statuses(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set for this month.\n\nUse 'finance budget set <category> <amount>' to add one."
            .to_string();
    }

    let mut output = String::new();

    for status in statuses {
        output.push_str(&format!(
            "{} {} ({})\n",
            tier_marker(status.tier),
            status.category_name,
            status.tier
        ));
        output.push_str(&format!(
            "  {} {}\n",
            format_progress(status.percent_used, BAR_WIDTH),
            format_percentage(status.percent_used)
        ));

        let remaining = if status.is_overspent() {
            format!("{} over", status.remaining.abs().format_with_symbol(symbol))
        } else {
            format!("{} left", status.remaining.format_with_symbol(symbol))
        };
        output.push_str(&format!(
            "  Spent {} of {}, {}\n",
            status.spent_amount.format_with_symbol(symbol),
            status.budget_amount.format_with_symbol(symbol),
            remaining
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetRow, CategoryId, Money};

    fn status(budget: i64, spent: i64) -> BudgetStatus {
        let row = BudgetRow {
            budget: Budget::new(CategoryId::new(), Money::from_cents(budget), 6, 2025),
            category_name: "Shopping".to_string(),
            category_color: "#9b59b6".to_string(),
        };
        BudgetStatus::compute(&row, Money::from_cents(spent))
    }

    #[test]
    fn test_over_budget_shows_overage() {
        let output = format_budget_statuses(&[status(20000, 25000)], "$");

        assert!(output.contains("⚠ Shopping (over)"));
        assert!(output.contains("125.0%"));
        assert!(output.contains("Spent $250.00 of $200.00, $50.00 over"));
    }

    #[test]
    fn test_on_track_shows_remaining() {
        let output = format_budget_statuses(&[status(20000, 16000)], "$");

        assert!(output.contains("✓ Shopping (on-track)"));
        assert!(output.contains("$40.00 left"));
    }

    #[test]
    fn test_no_budgets() {
        assert!(format_budget_statuses(&[], "$").starts_with("No budgets set"));
    }
}
