//! Reports module for the expense tracker
//!
//! Spending summary by category and its chart projection.

pub mod chart;
pub mod summary;

pub use chart::{to_chart_points, ChartPoint};
pub use summary::{summarize, CategorySummary, CategoryTotal, NO_DATA_MESSAGE};
