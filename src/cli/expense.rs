//! Expense CLI commands
//!
//! Bridges clap argument parsing with the service layer: input is
//! normalized here (currency-string parsing, default date) before it
//! reaches the record store, and returned state is rendered through the
//! display module.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::summary::format_category_summary;
use crate::display::{format_expense_details, format_expense_register, truncate};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Amount;
use crate::services::{AddExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. "12.50" or "$1,200.00")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category label used for summaries
        #[arg(short, long)]
        category: String,
        /// Expense date, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all recorded expenses
    List,
    /// Show the running total
    Total,
    /// Show per-category totals with a bar chart
    Summary,
    /// Delete an expense by id
    Delete {
        /// Expense id (full UUID or the short exp-xxxxxxxx form)
        id: String,
    },
    /// Show resolved paths and settings
    Config,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = Amount::parse(&amount).map_err(|e| {
                ExpenseError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '12.50'. Error: {}",
                    amount, e
                ))
            })?;

            let date = date
                .unwrap_or_else(|| Local::now().format(&settings.date_format).to_string());

            let expense = service.add(AddExpenseInput {
                date,
                amount,
                description,
                category,
            })?;

            println!("Recorded expense:");
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_register(&expenses, symbol));
        }

        ExpenseCommands::Total => {
            let total = service.total()?;
            let count = service.count()?;
            println!(
                "{} expense(s), total {}",
                count,
                total.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::Summary => {
            let totals = service.totals_by_category()?;
            print!("{}", format_category_summary(&totals, symbol));
        }

        ExpenseCommands::Delete { id } => match service.find(&id)? {
            Some(expense) => {
                service.delete(expense.id)?;
                println!(
                    "Deleted {} ({} {})",
                    expense.id,
                    expense.date,
                    truncate(&expense.description, 40)
                );
            }
            None => {
                println!("No expense found matching '{}'.", id);
            }
        },

        ExpenseCommands::Config => {
            let paths = storage.paths();
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
