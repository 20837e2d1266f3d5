//! In-memory sample data
//!
//! Five fixed expenses dated relative to "today". Regenerated on every call.

use chrono::{Days, Local, NaiveDate};

use super::TransactionSource;
use crate::models::{Money, Transaction};

/// (cents, days before today, category, payment method)
const SAMPLE_ROWS: &[(i64, u64, &str, &str)] = &[
    (50000, 0, "Food", "Cash"),
    (120000, 1, "Transport", "Credit Card"),
    (80000, 3, "Bills", "Online"),
    (20000, 5, "Snacks", "GCash"),
    (15000, 2, "Food", "Cash"),
];

/// Deterministic sample transactions anchored to a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTransactionSource {
    today: NaiveDate,
}

impl MockTransactionSource {
    /// Anchor the sample dates to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

impl Default for MockTransactionSource {
    /// Anchored to the local calendar date
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl TransactionSource for MockTransactionSource {
    fn list_all(&self) -> Vec<Transaction> {
        SAMPLE_ROWS
            .iter()
            .map(|&(cents, days_ago, category, payment_method)| {
                let date = self
                    .today
                    .checked_sub_days(Days::new(days_ago))
                    .unwrap_or(self.today);
                Transaction::new(Money::from_cents(cents), date, category, payment_method)
            })
            .collect()
    }
}
