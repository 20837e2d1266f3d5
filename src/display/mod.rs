//! Display formatting for terminal output
//!
//! Tables, summary labels, and text charts for the CLI.

pub mod report;
pub mod transaction;

pub use report::{format_chart, format_summary};
pub use transaction::format_transaction_table;
