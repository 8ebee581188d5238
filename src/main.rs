use anyhow::Result;
use clap::Parser;

use expense_cli::cli::{handle_expense_command, ExpenseCommands};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track dated, categorized expenses from the terminal",
    long_about = "expense-cli records dated, categorized expenses in a local JSON \
                  file, shows a running total, and breaks spending down by category."
)]
struct Cli {
    #[command(subcommand)]
    command: ExpenseCommands,
}

fn main() -> Result<()> {
    expense_cli::init_tracing();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    // Initialize the in-memory collection from the persisted store
    storage.expenses.load()?;

    handle_expense_command(&storage, &settings, cli.command)?;

    Ok(())
}
