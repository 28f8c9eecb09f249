//! Aggregation engine
//!
//! Pure functions from a transaction list (plus the category list) to the
//! figures the dashboard displays: totals, expense breakdown, monthly series
//! and the recent transactions view.

pub mod categories;
pub mod dashboard;
pub mod monthly;
pub mod recent;
pub mod totals;

pub use categories::{CategoryBreakdown, CategoryTotal};
pub use dashboard::{DashboardReport, ReportOptions};
pub use monthly::{MonthlyBucket, MonthlySeries};
pub use recent::{RecentEntry, RecentTransactions, DEFAULT_FALLBACK_LABEL, DEFAULT_RECENT_LIMIT};
pub use totals::Totals;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{Category, CategoryId, Ledger, Money, Transaction, TransactionId, TransactionKind};

    pub fn txn(id: i64, units: i64, kind: TransactionKind, category: u32, date: &str) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            Money::from_units(units),
            kind,
            CategoryId::new(category),
            "Test",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    pub fn sample_categories() -> Vec<Category> {
        vec![
            Category::expense(1, "Food"),
            Category::expense(2, "Transport"),
            Category::income(3, "Salary"),
            Category::income(4, "Investments"),
            Category::expense(5, "Leisure"),
            Category::expense(6, "Health"),
        ]
    }

    pub fn sample_transactions() -> Vec<Transaction> {
        let mut salary = txn(1, 1000, TransactionKind::Income, 3, "2024-01-15");
        salary.description = "Salary".into();
        let mut groceries = txn(2, 300, TransactionKind::Expense, 1, "2024-01-16");
        groceries.description = "Groceries".into();
        let mut fuel = txn(3, 150, TransactionKind::Expense, 2, "2024-01-17");
        fuel.description = "Fuel".into();
        vec![salary, groceries, fuel]
    }

    pub fn sample_ledger() -> Ledger {
        Ledger::from_parts(sample_categories(), sample_transactions()).unwrap()
    }
}
