//! Summary totals
//!
//! Total income, total expense and the resulting balance over a set of
//! transactions. This backs the three summary cards of the dashboard.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of income amounts
    pub income: Money,
    /// Sum of expense amounts
    pub expense: Money,
    /// income - expense
    pub balance: Money,
}

impl Totals {
    /// Compute totals over a transaction list
    ///
    /// Cannot fail; an empty list gives all zeros.
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expense += txn.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    pub fn is_negative_balance(&self) -> bool {
        self.balance.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{sample_transactions, txn};

    #[test]
    fn test_sample_totals() {
        let totals = Totals::compute(&sample_transactions());
        assert_eq!(totals.income, Money::from_units(1000));
        assert_eq!(totals.expense, Money::from_units(450));
        assert_eq!(totals.balance, Money::from_units(550));
        assert!(!totals.is_negative_balance());
    }

    #[test]
    fn test_empty_list() {
        let totals = Totals::compute(&[]);
        assert_eq!(totals, Totals::default());
        assert!(totals.balance.is_zero());
    }

    #[test]
    fn test_negative_balance() {
        let transactions = vec![
            txn(1, 100, TransactionKind::Income, 3, "2024-03-01"),
            txn(2, 250, TransactionKind::Expense, 1, "2024-03-02"),
        ];
        let totals = Totals::compute(&transactions);
        assert_eq!(totals.balance, Money::from_units(-150));
        assert!(totals.is_negative_balance());
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let mut big_income = txn(1, 0, TransactionKind::Income, 3, "2024-03-01");
        big_income.amount = Money::from_cents(i64::MAX);
        let mut big_expense = txn(2, 0, TransactionKind::Expense, 1, "2024-03-02");
        big_expense.amount = Money::from_cents(i64::MAX);

        let transactions = vec![big_income.clone(), big_income, big_expense.clone(), big_expense];
        let totals = Totals::compute(&transactions);
        assert_eq!(totals.income, Money::from_cents(i64::MAX));
        assert_eq!(totals.expense, Money::from_cents(i64::MAX));
        assert!(totals.balance.is_zero());
    }

    #[test]
    fn test_matches_naive_reducer() {
        // Amounts chosen so that float accumulation would drift
        let transactions: Vec<Transaction> = (0..200)
            .map(|i| {
                let kind = if i % 3 == 0 {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                };
                let mut t = txn(i, 0, kind, 1, "2024-05-05");
                t.amount = Money::from_cents(10 + i % 7);
                t
            })
            .collect();

        let totals = Totals::compute(&transactions);

        let naive_income: i64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount.cents())
            .sum();
        let naive_expense: i64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount.cents())
            .sum();

        assert_eq!(totals.income.cents(), naive_income);
        assert_eq!(totals.expense.cents(), naive_expense);
        assert_eq!(totals.income - totals.expense, totals.balance);
    }
}
