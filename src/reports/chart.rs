//! Chart projection
//!
//! Turns a category summary into labelled points for a chart. No arithmetic
//! beyond the optional share-of-total used for pie-style labels.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::summary::CategorySummary;
use crate::models::Money;

/// One slice of the spending-by-category chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Money,
}

impl ChartPoint {
    /// Percentage of `total` this point represents, 0 when total is zero
    pub fn share_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            return 0.0;
        }
        (self.value.amount() / total.amount() * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }
}

/// One point per category, in summary order
pub fn to_chart_points(summary: &CategorySummary) -> Vec<ChartPoint> {
    summary
        .categories
        .iter()
        .map(|entry| ChartPoint {
            label: entry.category.clone(),
            value: entry.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::reports::summarize;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category,
            "Cash",
        )
    }

    #[test]
    fn test_points_follow_summary_order() {
        let summary = summarize(&[txn(300, "Bills"), txn(100, "Food"), txn(100, "Bills")]);
        let points = to_chart_points(&summary);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Bills");
        assert_eq!(points[0].value, Money::from_cents(400));
        assert_eq!(points[1].label, "Food");
        assert_eq!(points[1].value, Money::from_cents(100));
    }

    #[test]
    fn test_empty_summary_has_no_points() {
        assert!(to_chart_points(&summarize(&[])).is_empty());
    }

    #[test]
    fn test_share_of() {
        let summary = summarize(&[txn(300, "Bills"), txn(100, "Food")]);
        let points = to_chart_points(&summary);

        assert!((points[0].share_of(summary.grand_total) - 75.0).abs() < 1e-9);
        assert!((points[1].share_of(summary.grand_total) - 25.0).abs() < 1e-9);
        assert_eq!(points[0].share_of(Money::zero()), 0.0);
    }
}
