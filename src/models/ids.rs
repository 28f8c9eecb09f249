//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are plain numbers (categories are small static reference data,
//! transaction ids are creation timestamps), wrapped so that a category id
//! can never be passed where a transaction id is expected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate numeric ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $inner:ty, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Get the underlying number
            pub const fn value(&self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(CategoryId, u32, "cat-");
define_id!(TransactionId, i64, "txn-");

impl TransactionId {
    /// Allocate an id for a new transaction
    ///
    /// The id is the creation time in milliseconds, bumped past `highest` so
    /// two transactions created within the same millisecond stay distinct.
    /// Returns `None` once `highest` is already `i64::MAX`.
    pub fn allocate(now: DateTime<Utc>, highest: Option<TransactionId>) -> Option<Self> {
        let stamp = now.timestamp_millis();
        match highest {
            Some(TransactionId(max)) if max >= stamp => max.checked_add(1).map(Self),
            _ => Some(Self(stamp)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_display() {
        assert_eq!(CategoryId::new(3).to_string(), "3");
        assert_eq!(TransactionId::new(1705276800000).to_string(), "1705276800000");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("3".parse::<CategoryId>().unwrap(), CategoryId::new(3));
        assert_eq!(" cat-7 ".parse::<CategoryId>().unwrap(), CategoryId::new(7));
        assert_eq!("txn-12".parse::<TransactionId>().unwrap(), TransactionId::new(12));
        assert!("abc".parse::<CategoryId>().is_err());
        assert!("-1".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_allocate_uses_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let id = TransactionId::allocate(now, Some(TransactionId::new(3))).unwrap();
        assert_eq!(id.value(), now.timestamp_millis());
    }

    #[test]
    fn test_allocate_bumps_on_collision() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let taken = TransactionId::new(now.timestamp_millis());

        let id = TransactionId::allocate(now, Some(taken)).unwrap();
        assert_eq!(id.value(), taken.value() + 1);

        let ahead = TransactionId::new(now.timestamp_millis() + 50);
        assert_eq!(
            TransactionId::allocate(now, Some(ahead)).unwrap().value(),
            ahead.value() + 1
        );
    }

    #[test]
    fn test_allocate_exhausted_id_space() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(TransactionId::allocate(now, Some(TransactionId::new(i64::MAX))), None);
        assert_eq!(
            TransactionId::allocate(now, Some(TransactionId::new(i64::MAX - 1))),
            Some(TransactionId::new(i64::MAX))
        );
    }
}
