//! Core data models for the expense tracker
//!
//! Transactions, money, and the category filter.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::{category_choices, CategoryFilter, ALL_CATEGORIES, DEFAULT_CATEGORIES};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
