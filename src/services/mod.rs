//! Service layer for the expense tracker
//!
//! Filtering and the history reload command, on top of a transaction source.

pub mod filter;
pub mod history;

pub use filter::{filter_transactions, AmountSpec, FilterCriteria, FilterOutcome};
pub use history::{HistoryService, HistoryView};
