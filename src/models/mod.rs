//! Core data models for expense-cli
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, amounts, and identifiers.

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
