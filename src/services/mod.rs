//! Service layer for expense-cli
//!
//! The service layer provides the record-store operations on top of the
//! storage layer, handling validation and derived views.

pub mod expense;

pub use expense::{AddExpenseInput, ExpenseService};
