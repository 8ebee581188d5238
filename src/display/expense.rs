//! Expense display formatting
//!
//! Register and detail views for expense records.

use crate::models::Expense;

use super::{separator, truncate};

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:<12} {:<10} {:<28} {:<14} {:>12}",
        expense.id,
        truncate(&expense.date, 10),
        truncate(&expense.description, 28),
        truncate(&expense.category, 14),
        expense.amount.format_with_symbol(symbol),
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<10} {:<28} {:<14} {:>12}\n",
        "Id", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Id:          {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Category:    {}\n", expense.category));

    output
}
