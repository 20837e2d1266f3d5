//! Transaction filtering
//!
//! Narrows a transaction list by an inclusive date range, a category, and
//! an optional amount specification. A malformed amount specification never
//! fails the filter: that one clause is skipped and the parse error is handed
//! back as a warning.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InputFormatError;
use crate::models::{CategoryFilter, Money, Transaction};

/// Parsed amount clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSpec {
    /// Keep only this exact amount
    Exact(Money),
    /// Keep amounts in `[min, max]`
    Range { min: Money, max: Money },
}

impl AmountSpec {
    /// Parse the raw amount text.
    ///
    /// Returns `Ok(None)` for blank text. Text containing `-` must be exactly
    /// two decimals separated by it (`"100-500"`); anything else is parsed as
    /// a single exact amount.
    pub fn parse(text: &str) -> Result<Option<Self>, InputFormatError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        if text.contains('-') {
            let parts: Vec<&str> = text.split('-').collect();
            if let [min, max] = parts.as_slice() {
                if let (Ok(min), Ok(max)) = (Money::parse(min), Money::parse(max)) {
                    return Ok(Some(Self::Range { min, max }));
                }
            }
            return Err(InputFormatError::InvalidRange {
                input: text.to_string(),
            });
        }

        Money::parse(text)
            .map(|amount| Some(Self::Exact(amount)))
            .map_err(|_| InputFormatError::InvalidAmount {
                input: text.to_string(),
            })
    }

    /// Check whether an amount satisfies this clause
    pub fn matches(&self, amount: Money) -> bool {
        match *self {
            Self::Exact(expected) => amount == expected,
            Self::Range { min, max } => amount >= min && amount <= max,
        }
    }
}

/// Everything the user chose on the history screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive start date
    pub date_from: NaiveDate,

    /// Inclusive end date. Not checked against `date_from`.
    pub date_to: NaiveDate,

    /// Category selection
    #[serde(default)]
    pub category: CategoryFilter,

    /// Raw amount text: blank, an exact amount, or `min-max`
    #[serde(default)]
    pub amount_spec: String,
}

impl FilterCriteria {
    /// Criteria for a date range with no category or amount restriction
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self {
            date_from,
            date_to,
            category: CategoryFilter::All,
            amount_spec: String::new(),
        }
    }

    /// The `days` days up to and including `today`
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let from = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self::new(from, today)
    }

    /// Restrict to a category
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the raw amount text
    pub fn amount(mut self, amount_spec: impl Into<String>) -> Self {
        self.amount_spec = amount_spec.into();
        self
    }
}

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Matching transactions in source order. May be empty.
    pub transactions: Vec<Transaction>,

    /// Set when the amount text could not be parsed and its clause was skipped
    pub warning: Option<InputFormatError>,
}

/// Apply the criteria to a transaction list
pub fn filter_transactions(transactions: Vec<Transaction>, criteria: &FilterCriteria) -> FilterOutcome {
    let (amount_clause, warning) = match AmountSpec::parse(&criteria.amount_spec) {
        Ok(spec) => (spec, None),
        Err(err) => {
            tracing::debug!(input = err.input(), "skipping amount filter: {}", err);
            (None, Some(err))
        }
    };

    let transactions = transactions
        .into_iter()
        .filter(|txn| txn.is_within(criteria.date_from, criteria.date_to))
        .filter(|txn| criteria.category.matches(&txn.category))
        .filter(|txn| amount_clause.map_or(true, |spec| spec.matches(txn.amount)))
        .collect();

    FilterOutcome {
        transactions,
        warning,
    }
}
