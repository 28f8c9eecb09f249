//! Transaction model
//!
//! A transaction is a single recorded money movement. Amounts are always
//! positive; the direction lives in `kind`. Transactions are immutable once
//! created and are only ever appended to a ledger.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::kind::TransactionKind;
use super::money::{Money, MAX_AMOUNT};

/// A transaction that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Money,
    pub kind: TransactionKind,
    pub category_id: CategoryId,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        amount: Money,
        kind: TransactionKind,
        category_id: CategoryId,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            kind,
            category_id,
            description: description.into(),
            date,
        }
    }

    /// Attach an id, producing a full transaction
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            kind: self.kind,
            category_id: self.category_id,
            description: self.description,
            date: self.date,
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.description)
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always positive
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,

    /// Referenced category (may not resolve)
    pub category_id: CategoryId,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Calendar date of the movement
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        amount: Money,
        kind: TransactionKind,
        category_id: CategoryId,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        NewTransaction::new(amount, kind, category_id, description, date).with_id(id)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with sign applied: positive for income, negative for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Calendar month of the transaction date, 1 through 12
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.description)
    }
}

fn validate_fields(amount: Money, description: &str) -> Result<(), TransactionValidationError> {
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }

    if amount > MAX_AMOUNT {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }

    if description.trim().is_empty() {
        return Err(TransactionValidationError::EmptyDescription);
    }

    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
