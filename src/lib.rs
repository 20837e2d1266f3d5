//! Expense Tracker - transaction history with filtering and category summaries
//!
//! This library provides the core of the expense tracker: a transaction
//! source, a filter engine over date range, category and amount, a
//! per-category summary, and a chart projection of that summary. A CLI and
//! a TUI sit on top and only render what the service layer returns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, category filters)
//! - `storage`: Transaction sources (the generated sample dataset)
//! - `services`: Filter engine and the history command handler
//! - `reports`: Category summary and chart projection
//! - `display`: Terminal formatting for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{FilterCriteria, HistoryService};
//! use expense_tracker::storage::MockTransactionSource;
//!
//! let source = MockTransactionSource::default();
//! let criteria = FilterCriteria::last_days(source.today(), 30).amount("100-500");
//! let view = HistoryService::new(&source).reload(&criteria);
//! println!("{}", view.summary.format_total("₱"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
