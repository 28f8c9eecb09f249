//! Transaction CLI commands
//!
//! Transactions added here live in the session ledger only; the data file
//! is never written.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::format_money;
use crate::display::{format_recent_table, format_transaction_details};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, TransactionId};
use crate::reports::Totals;
use crate::services::{CategoryService, TransactionForm, TransactionService};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// income or expense (default: expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// Category ID
        #[arg(short, long)]
        category: String,
        /// Amount (e.g., "42.50" or "42,50")
        #[arg(short, long)]
        amount: String,
        /// Description
        #[arg(short, long)]
        description: String,
        /// Transaction date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List the most recent transactions
    List {
        /// Number of transactions to show (default from settings)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
///
/// Returns the ledger as it stands after the command.
pub fn handle_transaction_command(
    ledger: Ledger,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<Ledger> {
    match cmd {
        TransactionCommands::Add {
            kind,
            category,
            amount,
            description,
            date,
        } => {
            let mut form = TransactionForm::default();
            if let Some(kind) = kind {
                form.kind = kind;
            }
            if let Some(date) = date {
                form.date = date;
            }
            form.category_id = category;
            form.amount = amount;
            form.description = description;

            let (updated, txn) = TransactionService::new(&ledger).create_from_form(&form)?;

            let label = CategoryService::new(&updated)
                .label_for(txn.category_id, &settings.fallback_category_label);
            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, label, settings));

            let totals = Totals::compute(updated.transactions());
            let symbol = settings.currency_symbol.as_str();
            println!();
            println!("Income:   {}", format_money(totals.income, symbol));
            println!("Expenses: {}", format_money(totals.expense, symbol));
            println!("Balance:  {}", format_money(totals.balance, symbol));

            Ok(updated)
        }

        TransactionCommands::List { limit } => {
            let limit = limit.unwrap_or(settings.recent_limit);
            let recent = TransactionService::new(&ledger)
                .recent(limit, &settings.fallback_category_label);
            print!("{}", format_recent_table(&recent, settings));
            Ok(ledger)
        }

        TransactionCommands::Show { id } => {
            let txn_id: TransactionId = id
                .parse()
                .map_err(|_| FinanceError::Validation(format!("Invalid transaction id: {}", id)))?;
            let txn = TransactionService::new(&ledger)
                .get(txn_id)
                .ok_or_else(|| FinanceError::transaction_not_found(&id))?;

            let label = CategoryService::new(&ledger)
                .label_for(txn.category_id, &settings.fallback_category_label);
            print!("{}", format_transaction_details(txn, label, settings));
            Ok(ledger)
        }
    }
}
