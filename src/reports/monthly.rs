//! Income vs. expense per calendar month
//!
//! Always twelve buckets, January to December. Transactions are bucketed by
//! month of year only, so the same month of different years lands in one
//! bucket unless a year filter is given.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::config::Locale;
use crate::models::{Money, Transaction, TransactionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// 1 = January
    pub month: u32,
    pub label: String,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyBucket {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Year the input was restricted to, if any
    pub year: Option<i32>,
    pub buckets: Vec<MonthlyBucket>,
}

impl MonthlySeries {
    /// Bucket all transactions by month of year
    pub fn compute(transactions: &[Transaction], locale: Locale) -> Self {
        Self::build(transactions.iter(), None, locale)
    }

    /// Bucket only the transactions dated in `year`
    pub fn compute_for_year(transactions: &[Transaction], year: i32, locale: Locale) -> Self {
        Self::build(
            transactions.iter().filter(|t| t.date.year() == year),
            Some(year),
            locale,
        )
    }

    fn build<'a>(
        transactions: impl Iterator<Item = &'a Transaction>,
        year: Option<i32>,
        locale: Locale,
    ) -> Self {
        let mut buckets: Vec<MonthlyBucket> = locale
            .month_labels()
            .iter()
            .zip(1u32..)
            .map(|(label, month)| MonthlyBucket {
                month,
                label: (*label).to_string(),
                income: Money::zero(),
                expense: Money::zero(),
            })
            .collect();

        for txn in transactions {
            // month0() is always 0..=11
            let bucket = &mut buckets[txn.date.month0() as usize];
            match txn.kind {
                TransactionKind::Income => bucket.income += txn.amount,
                TransactionKind::Expense => bucket.expense += txn.amount,
            }
        }

        Self { year, buckets }
    }

    /// Bucket for a 1-based month
    pub fn month(&self, month: u32) -> Option<&MonthlyBucket> {
        self.buckets.iter().find(|b| b.month == month)
    }

    pub fn total_income(&self) -> Money {
        self.buckets.iter().map(|b| b.income).sum()
    }

    pub fn total_expense(&self) -> Money {
        self.buckets.iter().map(|b| b.expense).sum()
    }

    /// Largest single income or expense value, used to scale bar charts
    pub fn peak(&self) -> Money {
        self.buckets
            .iter()
            .flat_map(|b| [b.income, b.expense])
            .max()
            .unwrap_or_default()
    }
}
