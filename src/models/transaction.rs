//! Transaction model
//!
//! A single recorded expense. There is no identity: records are never
//! updated, only regenerated and filtered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount spent (positive)
    pub amount: Money,

    /// Date of the expense
    pub date: NaiveDate,

    /// Category label, e.g. "Food"
    pub category: String,

    /// How it was paid, e.g. "Cash" or "GCash"
    pub payment_method: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            category: category.into(),
            payment_method: payment_method.into(),
        }
    }

    /// Check if the date falls within an inclusive range
    pub fn is_within(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.date >= from && self.date <= to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(Money::from_cents(50000), date(2025, 1, 15), "Food", "Cash");
        assert_eq!(txn.amount, Money::from_cents(50000));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.payment_method, "Cash");
    }

    #[test]
    fn test_is_within_is_inclusive() {
        let txn = Transaction::new(Money::from_cents(100), date(2025, 1, 15), "Food", "Cash");
        assert!(txn.is_within(date(2025, 1, 15), date(2025, 1, 15)));
        assert!(txn.is_within(date(2025, 1, 1), date(2025, 1, 31)));
        assert!(!txn.is_within(date(2025, 1, 16), date(2025, 1, 31)));
        assert!(!txn.is_within(date(2025, 1, 1), date(2025, 1, 14)));
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(Money::from_cents(1200), date(2025, 3, 1), "Snacks", "GCash");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"date\":\"2025-03-01\""));
        assert!(json.contains("\"payment_method\":\"GCash\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
