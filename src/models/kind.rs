//! Income/expense tag shared by transactions and categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    /// The new-transaction form starts on expense
    #[default]
    Expense,
}

impl TransactionKind {
    /// Lowercase wire name ("income" / "expense")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction kind '{}' (expected income or expense)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" Expense ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert_eq!("despesa".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_default_is_expense() {
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, "\"income\"");
        let kind: TransactionKind = serde_json::from_str("\"expense\"").unwrap();
        assert!(kind.is_expense());
    }
}
