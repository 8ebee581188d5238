//! User settings for expense-cli
//!
//! Manages display preferences persisted in config.json.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::storage::file_io;

/// User settings for expense-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used for the default expense date (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        match file_io::read_json(&paths.settings_file())? {
            Some(settings) => Ok(settings),
            None => {
                let settings = Self::default();
                settings.save(paths)?;
                Ok(settings)
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        file_io::write_json_atomic(&paths.settings_file(), self)
    }
}
