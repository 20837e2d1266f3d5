//! Transaction history service
//!
//! The one command both front ends issue: regenerate the dataset, filter it,
//! summarize it, and project the chart. Front ends only render the returned
//! [`HistoryView`].

use serde::{Deserialize, Serialize};

use super::filter::{filter_transactions, FilterCriteria};
use crate::models::Transaction;
use crate::reports::{summarize, to_chart_points, CategorySummary, ChartPoint};
use crate::storage::TransactionSource;

/// Everything the history screen shows after a reload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryView {
    /// Filtered rows for the grid
    pub transactions: Vec<Transaction>,
    /// Category totals and grand total
    pub summary: CategorySummary,
    /// Chart points, one per category
    pub chart: Vec<ChartPoint>,
    /// User-facing warning when the amount filter was skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Service for the transaction history screen
pub struct HistoryService<'a> {
    source: &'a dyn TransactionSource,
}

impl<'a> HistoryService<'a> {
    pub fn new(source: &'a dyn TransactionSource) -> Self {
        Self { source }
    }

    /// Regenerate the dataset, filter it, summarize it, and project the chart
    pub fn reload(&self, criteria: &FilterCriteria) -> HistoryView {
        let outcome = filter_transactions(self.source.list_all(), criteria);
        let summary = summarize(&outcome.transactions);
        let chart = to_chart_points(&summary);

        tracing::debug!(
            from = %criteria.date_from,
            to = %criteria.date_to,
            category = %criteria.category,
            rows = outcome.transactions.len(),
            "history reloaded"
        );

        HistoryView {
            transactions: outcome.transactions,
            summary,
            chart,
            warning: outcome.warning.as_ref().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryFilter, Money};
    use crate::storage::MockTransactionSource;
    use chrono::NaiveDate;

    fn source() -> MockTransactionSource {
        MockTransactionSource::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::last_days(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), 30)
    }

    #[test]
    fn test_reload_everything() {
        let source = source();
        let view = HistoryService::new(&source).reload(&criteria());

        assert_eq!(view.transactions.len(), 5);
        assert_eq!(view.summary.categories.len(), 4);
        assert_eq!(view.chart.len(), 4);
        assert_eq!(view.summary.grand_total, Money::from_cents(285000));
        assert!(view.warning.is_none());
    }

    #[test]
    fn test_reload_food() {
        let source = source();
        let view = HistoryService::new(&source)
            .reload(&criteria().category(CategoryFilter::Named("Food".into())));

        assert_eq!(view.transactions.len(), 2);
        assert_eq!(view.chart.len(), 1);
        assert_eq!(view.chart[0].label, "Food");
        assert_eq!(view.chart[0].value, Money::from_cents(65000));
    }

    #[test]
    fn test_reload_with_bad_amount_still_summarizes() {
        let source = source();
        let view = HistoryService::new(&source).reload(&criteria().amount("abc"));

        assert_eq!(view.transactions.len(), 5);
        assert_eq!(view.warning.as_deref(), Some("Invalid amount value."));

        let view = HistoryService::new(&source).reload(&criteria().amount("1-2-3"));
        assert_eq!(view.transactions.len(), 5);
        assert_eq!(
            view.warning.as_deref(),
            Some("Invalid amount range format. Use min-max, e.g. 100-500.")
        );
    }

    #[test]
    fn test_reload_no_matches() {
        let source = source();
        let view = HistoryService::new(&source).reload(&criteria().amount("9999"));

        assert!(view.is_empty());
        assert!(view.summary.is_empty());
        assert!(view.chart.is_empty());
        assert_eq!(view.summary.grand_total, Money::zero());
    }

    #[test]
    fn test_view_serializes_without_empty_warning() {
        let source = source();
        let view = HistoryService::new(&source).reload(&criteria());
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"transactions\""));
        assert!(json.contains("\"grand_total\""));
        assert!(!json.contains("\"warning\""));
    }
}
