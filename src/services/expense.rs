//! Expense service
//!
//! Provides the operation surface over the expense repository: guarded
//! record creation, deletion by id, and the derived views (running total,
//! per-category aggregation). Aggregates are always recomputed from the
//! collection; no separately maintained counters exist to drift.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, ExpenseId};
use crate::storage::Storage;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub date: String,
    pub amount: Amount,
    pub description: String,
    pub category: String,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the collection from disk and return it for rendering
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.load()
    }

    /// Record a new expense
    ///
    /// All fields are validated before anything is mutated; a validation
    /// failure leaves both the collection and the persisted file untouched.
    /// On success the record is appended and the full collection persisted.
    pub fn add(&self, input: AddExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::new(input.date, input.amount, input.description, input.category);

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.append(expense.clone())?;
        self.persist();

        Ok(expense)
    }

    /// Delete an expense by id
    ///
    /// Returns whether a record was actually removed so the caller can
    /// decide what to re-render. Deleting an unknown id is a no-op.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let removed = self.storage.expenses.remove(id)?;
        if removed {
            self.persist();
        }
        Ok(removed)
    }

    /// Find an expense by a user-supplied identifier
    ///
    /// Accepts the full UUID or the short `exp-xxxxxxxx` display form.
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Expense>> {
        let records = self.storage.expenses.list()?;
        Ok(records.into_iter().find(|e| e.id.matches(identifier)))
    }

    /// Get all expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list()
    }

    /// Count expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.len()
    }

    /// Sum of all expense amounts, recomputed from the collection
    pub fn total(&self) -> ExpenseResult<Amount> {
        let records = self.storage.expenses.list()?;
        Ok(records.iter().map(|e| e.amount).sum())
    }

    /// Per-category totals
    ///
    /// Categories with no records are absent from the result. Iteration
    /// order is unspecified; display code sorts for stable output.
    pub fn totals_by_category(&self) -> ExpenseResult<HashMap<String, Amount>> {
        let records = self.storage.expenses.list()?;

        let mut totals: HashMap<String, Amount> = HashMap::new();
        for expense in &records {
            *totals.entry(expense.category.clone()).or_default() += expense.amount;
        }

        Ok(totals)
    }

    /// Persist the collection, tolerating write failures
    ///
    /// A failed write is logged and otherwise ignored: the in-memory state
    /// stays authoritative for the running session, and the next successful
    /// mutation re-serializes the whole collection anyway.
    fn persist(&self) {
        if let Err(err) = self.storage.expenses.save() {
            warn!(
                error = %err,
                "failed to persist expenses; the in-memory state is still current for this session"
            );
        }
    }
}
