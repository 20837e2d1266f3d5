//! Category model
//!
//! Categories are plain labels on a transaction. The known set is offered
//! to the user for selection but transactions may carry any label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the "no category filter" choice
pub const ALL_CATEGORIES: &str = "All";

/// The categories the mock data uses, in display order
pub const DEFAULT_CATEGORIES: &[&str] = &["Food", "Transport", "Bills", "Snacks"];

/// Choices offered in a category selector, "All" first
pub fn category_choices() -> Vec<String> {
    std::iter::once(ALL_CATEGORIES)
        .chain(DEFAULT_CATEGORIES.iter().copied())
        .map(String::from)
        .collect()
}

/// Category part of the filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum CategoryFilter {
    /// No filtering on the category dimension
    #[default]
    All,
    /// Keep only transactions with this category (case-insensitive)
    Named(String),
}

impl CategoryFilter {
    /// Interpret a selector value. Empty text and "All" in any case mean no filter.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }

    /// Check whether a transaction category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name.to_lowercase() == category.to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_CATEGORIES),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_start_with_all() {
        let choices = category_choices();
        assert_eq!(choices, vec!["All", "Food", "Transport", "Bills", "Snacks"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" all "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Food"),
            CategoryFilter::Named("Food".into())
        );
    }

    #[test]
    fn test_matches_case_insensitively() {
        let filter = CategoryFilter::parse("food");
        assert!(filter.matches("Food"));
        assert!(filter.matches("FOOD"));
        assert!(!filter.matches("Snacks"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_display() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::Named("Bills".into()).to_string(), "Bills");
    }
}
