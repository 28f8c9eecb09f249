//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_category_list;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Ledger, TransactionKind};
use crate::services::CategoryService;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only show categories of this kind (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show one category
    Show {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: CategoryCommands,
) -> FinanceResult<()> {
    let service = CategoryService::new(ledger);

    match cmd {
        CategoryCommands::List { kind } => match kind {
            Some(kind) => {
                let kind: TransactionKind = kind.parse().map_err(FinanceError::Validation)?;
                print!(
                    "{}",
                    format_category_list(service.list_by_kind(kind), settings.locale)
                );
            }
            None => print!("{}", format_category_list(service.list(), settings.locale)),
        },

        CategoryCommands::Show { category } => {
            let cat = service
                .find(&category)
                .ok_or_else(|| FinanceError::category_not_found(&category))?;

            let count = ledger
                .transactions()
                .iter()
                .filter(|t| t.category_id == cat.id)
                .count();

            println!("Category:     {}", cat.name);
            println!("ID:           {}", cat.id);
            println!("Kind:         {}", settings.locale.kind_label(cat.kind));
            println!("Transactions: {}", count);
        }
    }

    Ok(())
}
