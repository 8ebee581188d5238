//! Expense record model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;

/// A single recorded expense
///
/// Records are append-only: they are created through a validated add
/// operation and removed by id, never edited in place. The `date` field is
/// an opaque token; it is checked for presence only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: String,

    /// Amount spent, always positive for records admitted through add
    pub amount: Amount,

    /// What the money was spent on
    pub description: String,

    /// Category label used as the aggregation key
    pub category: String,
}

impl Expense {
    /// Create a new expense with a fresh id
    ///
    /// Leading and trailing whitespace is trimmed from the text fields so
    /// that validation sees what the user actually entered.
    pub fn new(
        date: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date: date.into().trim().to_string(),
            amount,
            description: description.into().trim().to_string(),
            category: category.into().trim().to_string(),
        }
    }

    /// Validate the expense fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.date.is_empty() {
            return Err(ExpenseValidationError::MissingDate);
        }
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(ExpenseValidationError::InvalidAmount(self.amount.value()));
        }
        if self.description.is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }
        if self.category.is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    MissingDate,
    MissingDescription,
    MissingCategory,
    InvalidAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "Date must not be empty"),
            Self::MissingDescription => write!(f, "Description must not be empty"),
            Self::MissingCategory => write!(f, "Category must not be empty"),
            Self::InvalidAmount(value) => {
                write!(f, "Amount must be a positive number, got {}", value)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("2024-01-01", Amount::new(12.5), "coffee", "food");
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.amount.value(), 12.5);
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.category, "food");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_new_trims_text_fields() {
        let expense = Expense::new(" 2024-01-01 ", Amount::new(1.0), " coffee ", " food ");
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.category, "food");
    }

    #[test]
    fn test_validate_missing_date() {
        let expense = Expense::new("", Amount::new(10.0), "coffee", "food");
        assert_eq!(expense.validate(), Err(ExpenseValidationError::MissingDate));

        let expense = Expense::new("   ", Amount::new(10.0), "coffee", "food");
        assert_eq!(expense.validate(), Err(ExpenseValidationError::MissingDate));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let expense = Expense::new("2024-01-01", Amount::zero(), "coffee", "food");
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));

        let expense = Expense::new("2024-01-01", Amount::new(-5.0), "coffee", "food");
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_validate_non_finite_amount() {
        let expense = Expense::new("2024-01-01", Amount::new(f64::NAN), "coffee", "food");
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_validate_missing_description_and_category() {
        let expense = Expense::new("2024-01-01", Amount::new(10.0), "", "food");
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::MissingDescription)
        );

        let expense = Expense::new("2024-01-01", Amount::new(10.0), "coffee", "");
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::MissingCategory)
        );
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new("2024-01-01", Amount::new(12.5), "coffee", "food");
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }

    #[test]
    fn test_deserialization_coerces_string_amount() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2024-01-01",
            "amount": "12.50",
            "description": "coffee",
            "category": "food"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.value(), 12.5);
    }
}
