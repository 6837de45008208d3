//! Expense CLI commands
//!
//! Implements the expense commands, bridging clap argument parsing with the
//! ledger. Amount validation happens at the clap boundary (a non-numeric
//! amount is rejected before the ledger is touched).

use clap::Subcommand;

use crate::display::{format_expense_list, format_total};
use crate::error::OutlayResult;
use crate::models::Expense;
use crate::storage::Ledger;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. 12.50)
        amount: f64,
        /// Category label (avoid commas; the ledger format does not escape them)
        category: String,
        /// Free-text note, may contain commas
        #[arg(default_value = "")]
        description: String,
    },
    /// List all recorded expenses
    List,
    /// Show the total of all recorded expenses
    Total,
}

/// Handle an expense command
pub fn handle_expense_command(ledger: &mut Ledger, cmd: ExpenseCommands) -> OutlayResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            ledger.add(Expense::new(amount, category, description))?;
            println!("Expense added successfully!");
        }
        ExpenseCommands::List => {
            print!("{}", format_expense_list(ledger.entries()));
        }
        ExpenseCommands::Total => {
            println!("{}", format_total(ledger.total()));
        }
    }

    Ok(())
}
