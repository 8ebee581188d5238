//! Expense repository for JSON storage
//!
//! Owns the in-memory expense collection and mirrors it to expenses.json.
//! The collection keeps insertion order; the persisted form is a bare JSON
//! array of records, re-serialized in full after every mutation.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    records: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    fn read_lock(&self) -> ExpenseResult<RwLockReadGuard<'_, Vec<Expense>>> {
        self.records
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> ExpenseResult<RwLockWriteGuard<'_, Vec<Expense>>> {
        self.records
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk, replacing the in-memory collection
    ///
    /// A missing file yields an empty collection. Malformed content (invalid
    /// JSON, not an array, or any element that is not record-shaped) is
    /// logged and also yields an empty collection; there is no partial
    /// recovery. String amounts in otherwise well-formed records are coerced
    /// by the lenient amount policy.
    ///
    /// Returns the loaded collection for the caller to render.
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let loaded = match read_json::<Vec<Expense>, _>(&self.path) {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(ExpenseError::Json(err)) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "stored expense data is malformed, starting with an empty list"
                );
                Vec::new()
            }
            Err(other) => return Err(other),
        };

        let mut records = self.write_lock()?;
        *records = loaded.clone();
        Ok(loaded)
    }

    /// Save the full collection to disk atomically
    pub fn save(&self) -> ExpenseResult<()> {
        let records = self.read_lock()?;
        write_json_atomic(&self.path, &*records)
    }

    /// Append an expense to the end of the collection
    pub fn append(&self, expense: Expense) -> ExpenseResult<()> {
        let mut records = self.write_lock()?;
        records.push(expense);
        Ok(())
    }

    /// Remove the expense with the given id
    ///
    /// Returns whether a record was actually removed; a missing id is a
    /// no-op, not an error.
    pub fn remove(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut records = self.write_lock()?;
        let before = records.len();
        records.retain(|e| e.id != id);
        Ok(records.len() != before)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let records = self.read_lock()?;
        Ok(records.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        let records = self.read_lock()?;
        Ok(records.clone())
    }

    /// Count expenses
    pub fn len(&self) -> ExpenseResult<usize> {
        let records = self.read_lock()?;
        Ok(records.len())
    }

    /// Check whether the collection is empty
    pub fn is_empty(&self) -> ExpenseResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(date: &str, amount: f64, description: &str, category: &str) -> Expense {
        Expense::new(date, Amount::new(amount), description, category)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
        assert_eq!(repo.len().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample("2024-01-01", 12.5, "coffee", "food");
        let id = expense.id;
        repo.append(expense).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.value(), 12.5);
        assert_eq!(retrieved.description, "coffee");
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(sample("2024-01-01", 10.0, "first", "a")).unwrap();
        repo.append(sample("2024-01-02", 5.0, "second", "b")).unwrap();
        repo.append(sample("2024-01-03", 3.0, "third", "a")).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("expenses.json");
        let repo2 = ExpenseRepository::new(path);
        let reloaded = repo2.load().unwrap();

        let descriptions: Vec<&str> = reloaded.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample("2024-01-01", 12.5, "coffee", "food");
        let id = expense.id;
        repo.append(expense).unwrap();

        assert!(repo.remove(id).unwrap());
        assert_eq!(repo.len().unwrap(), 0);

        // Second removal is a no-op
        assert!(!repo.remove(id).unwrap());
    }

    #[test]
    fn test_persisted_form_is_a_bare_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(sample("2024-01-01", 12.5, "coffee", "food")).unwrap();
        repo.save().unwrap();

        let content = fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_load_malformed_content_resets_to_empty() {
        let (temp_dir, repo) = create_test_repo();
        let path = temp_dir.path().join("expenses.json");

        // Valid JSON, but not an array of records
        fs::write(&path, "\"not an array\"").unwrap();
        assert!(repo.load().unwrap().is_empty());

        // Not JSON at all
        fs::write(&path, "{{{ garbage").unwrap();
        assert!(repo.load().unwrap().is_empty());

        // An array with a non-record element poisons the whole load
        fs::write(&path, "[{\"id\": 1}]").unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_coerces_string_amounts() {
        let (temp_dir, repo) = create_test_repo();
        let path = temp_dir.path().join("expenses.json");

        fs::write(
            &path,
            r#"[
                {
                    "id": "550e8400-e29b-41d4-a716-446655440000",
                    "date": "2024-01-01",
                    "amount": "12.50",
                    "description": "coffee",
                    "category": "food"
                },
                {
                    "id": "550e8400-e29b-41d4-a716-446655440001",
                    "date": "2024-01-02",
                    "amount": "abc",
                    "description": "mystery",
                    "category": "misc"
                }
            ]"#,
        )
        .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].amount.value(), 12.5);
        assert!(loaded[1].amount.is_zero());
    }
}
