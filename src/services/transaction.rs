//! Transaction service
//!
//! Form validation for new transactions and the creation interface that
//! appends them to a ledger snapshot.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::error::{FinanceError, FinanceResult, FormErrors};
use crate::models::{
    CategoryId, Ledger, Money, NewTransaction, Transaction, TransactionId, TransactionKind,
};
use crate::reports::RecentTransactions;

use super::category::CategoryService;

/// Date format accepted by the form
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw text of the new-transaction form
///
/// Every field is kept as typed so `parse` can report all problems at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: String,
    pub category_id: String,
    pub amount: String,
    pub description: String,
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl TransactionForm {
    /// Empty form with kind "expense" and the given date pre-filled
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::default().as_str().to_string(),
            category_id: String::new(),
            amount: String::new(),
            description: String::new(),
            date: date.format(FORM_DATE_FORMAT).to_string(),
        }
    }

    /// Validate every field and build the creation input
    pub fn parse(&self) -> Result<CreateTransactionInput, FormErrors> {
        let mut errors = FormErrors::default();

        let kind = match self.kind.trim() {
            "" => {
                errors.push("kind", "Kind is required");
                None
            }
            raw => match raw.parse::<TransactionKind>() {
                Ok(kind) => Some(kind),
                Err(msg) => {
                    errors.push("kind", msg);
                    None
                }
            },
        };

        let category_id = match self.category_id.trim() {
            "" => {
                errors.push("category_id", "Category is required");
                None
            }
            raw => match raw.parse::<CategoryId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("category_id", format!("Invalid category id: {}", raw));
                    None
                }
            },
        };

        let amount = match self.amount.trim() {
            "" => {
                errors.push("amount", "Amount is required");
                None
            }
            raw => match Money::parse(raw) {
                Ok(amount) if amount.is_positive() => Some(amount),
                Ok(_) => {
                    errors.push("amount", "Amount must be greater than zero");
                    None
                }
                Err(e) => {
                    errors.push("amount", e.to_string());
                    None
                }
            },
        };

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("description", "Description is required");
        }

        let date = match self.date.trim() {
            "" => {
                errors.push("date", "Date is required");
                None
            }
            raw => match NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("date", format!("Invalid date '{}', use YYYY-MM-DD", raw));
                    None
                }
            },
        };

        match (kind, category_id, amount, date) {
            (Some(kind), Some(category_id), Some(amount), Some(date)) if errors.is_empty() => {
                Ok(CreateTransactionInput {
                    kind,
                    category_id,
                    amount,
                    description: description.to_string(),
                    date,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub category_id: CategoryId,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
}

impl From<CreateTransactionInput> for NewTransaction {
    fn from(input: CreateTransactionInput) -> Self {
        NewTransaction::new(
            input.amount,
            input.kind,
            input.category_id,
            input.description,
            input.date,
        )
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    ledger: &'a Ledger,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Create a new transaction, returning the new snapshot and the stored
    /// transaction
    ///
    /// The ledger this service was built on is left untouched.
    pub fn create(&self, input: CreateTransactionInput) -> FinanceResult<(Ledger, Transaction)> {
        self.create_at(input, Utc::now())
    }

    /// Same as `create` with an explicit clock, for id allocation
    pub fn create_at(
        &self,
        input: CreateTransactionInput,
        now: DateTime<Utc>,
    ) -> FinanceResult<(Ledger, Transaction)> {
        let new_txn = NewTransaction::from(input);

        // Verify the category exists and agrees on direction
        let category = CategoryService::new(self.ledger).require(new_txn.category_id)?;

        if category.kind != new_txn.kind {
            return Err(FinanceError::KindMismatch {
                category: category.name.clone(),
                category_kind: category.kind.to_string(),
                transaction_kind: new_txn.kind.to_string(),
            });
        }

        new_txn
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let id = TransactionId::allocate(now, self.ledger.max_transaction_id())
            .ok_or_else(|| FinanceError::Validation("Transaction id space exhausted".into()))?;
        let txn = new_txn.with_id(id);
        let ledger = self.ledger.with_transaction(txn.clone())?;

        tracing::info!(
            id = %txn.id,
            kind = %txn.kind,
            category = %txn.category_id,
            amount = txn.amount.cents(),
            version = ledger.version(),
            "created transaction"
        );

        Ok((ledger, txn))
    }

    /// Parse a form and create the transaction in one step
    pub fn create_from_form(&self, form: &TransactionForm) -> FinanceResult<(Ledger, Transaction)> {
        let input = form.parse().map_err(|errors| {
            tracing::debug!(errors = %errors, "rejected transaction form");
            FinanceError::from(errors)
        })?;
        self.create(input)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&'a Transaction> {
        self.ledger.transaction(id)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> &'a [Transaction] {
        self.ledger.transactions()
    }

    /// The most recent `limit` transactions, newest first
    pub fn recent(&self, limit: usize, fallback_label: &str) -> RecentTransactions {
        RecentTransactions::compute(
            self.ledger.transactions(),
            self.ledger.categories(),
            limit,
            fallback_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::Category;

    fn ledger() -> Ledger {
        Ledger::new(vec![
            Category::expense(1, "Groceries"),
            Category::income(2, "Salary"),
        ])
        .unwrap()
    }

    fn filled_form() -> TransactionForm {
        TransactionForm {
            kind: "expense".into(),
            category_id: "1".into(),
            amount: "42,50".into(),
            description: "  Market  ".into(),
            date: "2024-03-05".into(),
        }
    }

    fn input() -> CreateTransactionInput {
        filled_form().parse().unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_form_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let form = TransactionForm::for_date(date);
        assert_eq!(form.kind, "expense");
        assert_eq!(form.date, "2024-07-01");
        assert!(form.amount.is_empty());
    }

    #[test]
    fn test_form_parse() {
        let input = input();
        assert_eq!(input.kind, TransactionKind::Expense);
        assert_eq!(input.category_id, CategoryId::new(1));
        assert_eq!(input.amount, Money::from_cents(4250));
        assert_eq!(input.description, "Market");
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_form_reports_every_missing_field() {
        let form = TransactionForm {
            kind: "expense".into(),
            category_id: String::new(),
            amount: String::new(),
            description: "   ".into(),
            date: String::new(),
        };

        let errors = form.parse().unwrap_err();
        assert_eq!(errors.0.len(), 4);
        assert_eq!(errors.for_field("amount"), Some("Amount is required"));
        assert_eq!(errors.for_field("category_id"), Some("Category is required"));
        assert_eq!(errors.for_field("description"), Some("Description is required"));
        assert_eq!(errors.for_field("date"), Some("Date is required"));
    }

    #[test]
    fn test_form_rejects_malformed_values() {
        let form = TransactionForm {
            kind: "transfer".into(),
            category_id: "food".into(),
            amount: "-3".into(),
            description: "x".into(),
            date: "05/03/2024".into(),
        };

        let errors = form.parse().unwrap_err();
        assert!(errors.for_field("kind").is_some());
        assert!(errors.for_field("category_id").unwrap().contains("food"));
        assert_eq!(
            errors.for_field("amount"),
            Some("Amount must be greater than zero")
        );
        assert!(errors.for_field("date").unwrap().contains("YYYY-MM-DD"));
        assert!(errors.for_field("description").is_none());
    }

    #[test]
    fn test_create_appends_to_new_snapshot() {
        let ledger = ledger();
        let service = TransactionService::new(&ledger);

        let (updated, txn) = service.create_at(input(), noon()).unwrap();

        assert_eq!(txn.id, TransactionId::new(noon().timestamp_millis()));
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.version(), ledger.version() + 1);
        assert_eq!(updated.transactions()[0], txn);
        // The original snapshot is unchanged
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_create_same_millisecond_gets_distinct_ids() {
        let ledger = ledger();
        let (first_ledger, first) = TransactionService::new(&ledger)
            .create_at(input(), noon())
            .unwrap();
        let (second_ledger, second) = TransactionService::new(&first_ledger)
            .create_at(input(), noon())
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.id.value(), first.id.value() + 1);
        assert_eq!(second_ledger.len(), 2);
    }

    #[test]
    fn test_create_unknown_category() {
        let ledger = ledger();
        let mut input = input();
        input.category_id = CategoryId::new(9);

        let err = TransactionService::new(&ledger).create(input).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_kind_mismatch() {
        let ledger = ledger();
        let mut input = input();
        input.category_id = CategoryId::new(2);

        let err = TransactionService::new(&ledger).create(input).unwrap_err();
        assert!(matches!(err, FinanceError::KindMismatch { .. }));
        assert!(err.is_validation());
        assert!(err.to_string().contains("Salary"));
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        let ledger = ledger();
        let mut input = input();
        input.amount = Money::zero();

        let err = TransactionService::new(&ledger).create(input).unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
    }

    #[test]
    fn test_create_rejects_amount_above_maximum() {
        let ledger = ledger();
        let mut input = input();
        input.amount = Money::from_cents(i64::MAX);

        let err = TransactionService::new(&ledger).create(input).unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
        assert!(err.to_string().contains("exceeds the maximum"));
    }

    #[test]
    fn test_create_fails_when_id_space_exhausted() {
        let txn = NewTransaction::from(input()).with_id(TransactionId::new(i64::MAX));
        let ledger = Ledger::from_parts(ledger().categories().to_vec(), vec![txn]).unwrap();

        let err = TransactionService::new(&ledger)
            .create_at(input(), noon())
            .unwrap_err();
        assert!(err.to_string().contains("id space exhausted"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_form_rejects_amount_above_maximum() {
        let mut form = filled_form();
        form.amount = "92233720368547758.07".into();

        let errors = form.parse().unwrap_err();
        assert!(errors
            .for_field("amount")
            .unwrap()
            .contains("exceeds the maximum"));
    }

    #[test]
    fn test_create_from_invalid_form() {
        let ledger = ledger();
        let mut form = filled_form();
        form.amount.clear();

        let err = TransactionService::new(&ledger)
            .create_from_form(&form)
            .unwrap_err();
        assert!(matches!(err, FinanceError::InvalidForm(_)));
        assert!(err.to_string().contains("Amount is required"));
    }

    #[test]
    fn test_recent_through_service() {
        let ledger = ledger();
        let (ledger, _) = TransactionService::new(&ledger)
            .create_at(input(), noon())
            .unwrap();

        let service = TransactionService::new(&ledger);
        let recent = service.recent(10, "N/A");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent.entries[0].category_label, "Groceries");
        assert_eq!(service.list().len(), 1);
        assert!(service.get(recent.entries[0].transaction.id).is_some());
    }
}
