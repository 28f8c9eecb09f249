//! Transaction display formatting
//!
//! Tables for the recent transactions view and a detail block for a single
//! transaction.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_money, truncate};
use crate::config::Settings;
use crate::models::Transaction;
use crate::reports::RecentTransactions;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render the recent view as a table, newest first
pub fn format_recent_table(recent: &RecentTransactions, settings: &Settings) -> String {
    if recent.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = recent
        .iter()
        .map(|entry| {
            let txn = &entry.transaction;
            TransactionRow {
                date: txn.date.format(&settings.date_format).to_string(),
                description: truncate(&txn.description, 30),
                category: entry.category_label.clone(),
                kind: settings.locale.kind_label(txn.kind).to_string(),
                amount: format_money(txn.signed_amount(), &settings.currency_symbol),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_label: &str,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Kind:        {}\n",
        settings.locale.kind_label(txn.kind)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_money(txn.amount, &settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", category_label));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}
