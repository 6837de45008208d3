//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display. These
//! functions build strings; printing is the caller's job.

use crate::models::Expense;

/// Format a single expense for display (numbered row)
pub fn format_expense_row(index: usize, expense: &Expense) -> String {
    format!("{}. {}", index, expense)
}

/// Format an iterator of (index, expense) pairs as a listing
pub fn format_expense_list<'a>(entries: impl Iterator<Item = (usize, &'a Expense)>) -> String {
    let mut output = String::new();

    for (index, expense) in entries {
        output.push_str(&format_expense_row(index, expense));
        output.push('\n');
    }

    if output.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    format!("Expenses:\n{}", output)
}

/// Format the total of all expenses
pub fn format_total(total: f64) -> String {
    format!("Total expenses: {}", total)
}
