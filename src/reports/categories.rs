//! Expense breakdown by category
//!
//! One entry per expense category with a non-zero total, in the order the
//! categories were defined. This feeds the "expenses by category" pie chart,
//! so empty slices are left out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Money, Transaction};

/// Spending for one expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub name: String,
    pub total: Money,
    /// Number of transactions summed into `total`
    pub transaction_count: usize,
    /// Share of the breakdown total, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategoryTotal>,
    /// Sum of all entry totals
    pub total: Money,
}

impl CategoryBreakdown {
    /// Sum expense transactions per expense category
    ///
    /// Expense transactions pointing at an unknown or income category are not
    /// attributed to any slice.
    pub fn compute(transactions: &[Transaction], categories: &[Category]) -> Self {
        let mut sums: HashMap<CategoryId, (Money, usize)> = HashMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let entry = sums.entry(txn.category_id).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut entries: Vec<CategoryTotal> = categories
            .iter()
            .filter(|c| c.kind.is_expense())
            .filter_map(|c| {
                let (total, count) = sums.get(&c.id).copied()?;
                if total.is_zero() {
                    return None;
                }
                Some(CategoryTotal {
                    category_id: c.id,
                    name: c.name.clone(),
                    total,
                    transaction_count: count,
                    percentage: 0.0,
                })
            })
            .collect();

        let total: Money = entries.iter().map(|e| e.total).sum();
        if !total.is_zero() {
            for entry in &mut entries {
                entry.percentage =
                    (entry.total.cents() as f64 / total.cents() as f64) * 100.0;
            }
        }

        Self { entries, total }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category_id: CategoryId) -> Option<&CategoryTotal> {
        self.entries.iter().find(|e| e.category_id == category_id)
    }
}
