//! Category summary
//!
//! Totals filtered transactions per category, keeping categories in the order
//! they first appear.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction};

/// Shown instead of the category list when nothing matched
pub const NO_DATA_MESSAGE: &str = "No data to summarize.";

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label as written on the transactions
    pub category: String,
    /// Sum of amounts
    pub total: Money,
    /// Number of transactions
    pub transaction_count: usize,
}

/// Per-category totals and the grand total
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Totals in first-seen category order
    pub categories: Vec<CategoryTotal>,
    /// Sum of all category totals
    pub grand_total: Money,
}

impl CategorySummary {
    /// Summarize a filtered transaction list
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for txn in transactions {
            match categories.iter_mut().find(|c| c.category == txn.category) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.transaction_count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                }),
            }
        }

        let grand_total = categories.iter().map(|c| c.total).sum();

        Self {
            categories,
            grand_total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// One "Category: amount" line per category, or the no-data message
    pub fn format_categories(&self, symbol: &str) -> String {
        if self.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }

        let mut output = String::new();
        for entry in &self.categories {
            output.push_str(&format!(
                "{}: {}\n",
                entry.category,
                entry.total.format_with_symbol(symbol)
            ));
        }
        output
    }

    /// The grand total label
    pub fn format_total(&self, symbol: &str) -> String {
        format!(
            "Total Spending: {}",
            self.grand_total.format_with_symbol(symbol)
        )
    }
}

/// Summarize a filtered transaction list
pub fn summarize(transactions: &[Transaction]) -> CategorySummary {
    CategorySummary::from_transactions(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryFilter;
    use crate::services::{filter_transactions, FilterCriteria};
    use crate::storage::{MockTransactionSource, TransactionSource};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        MockTransactionSource::new(today()).list_all()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let summary = summarize(&sample());
        let names: Vec<&str> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport", "Bills", "Snacks"]);

        let food = &summary.categories[0];
        assert_eq!(food.total, Money::from_cents(65000));
        assert_eq!(food.transaction_count, 2);
    }

    #[test]
    fn test_totals_are_consistent() {
        let txns = sample();
        let summary = summarize(&txns);

        let from_groups: Money = summary.categories.iter().map(|c| c.total).sum();
        let from_rows: Money = txns.iter().map(|t| t.amount).sum();

        assert_eq!(summary.grand_total, from_groups);
        assert_eq!(summary.grand_total, from_rows);
        assert_eq!(summary.grand_total, Money::from_cents(285000));
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, Money::zero());
        assert_eq!(summary.format_categories("₱"), NO_DATA_MESSAGE);
        assert_eq!(summary.format_total("₱"), "Total Spending: ₱0.00");
    }

    #[test]
    fn test_food_only_end_to_end() {
        let criteria =
            FilterCriteria::last_days(today(), 30).category(CategoryFilter::parse("Food"));
        let outcome = filter_transactions(sample(), &criteria);
        let summary = summarize(&outcome.transactions);

        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].category, "Food");
        assert_eq!(summary.categories[0].total, Money::from_cents(65000));
        assert_eq!(summary.grand_total, Money::from_cents(65000));
        assert_eq!(summary.format_categories("₱"), "Food: ₱650.00\n");
        assert_eq!(summary.format_total("₱"), "Total Spending: ₱650.00");
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let date = today();
        let txns = vec![
            Transaction::new(Money::from_cents(100), date, "Food", "Cash"),
            Transaction::new(Money::from_cents(200), date, "food", "Cash"),
        ];
        let summary = summarize(&txns);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.grand_total, Money::from_cents(300));
    }

    #[test]
    fn test_format_categories_all() {
        let output = summarize(&sample()).format_categories("₱");
        assert_eq!(
            output,
            "Food: ₱650.00\nTransport: ₱1,200.00\nBills: ₱800.00\nSnacks: ₱200.00\n"
        );
    }
}
