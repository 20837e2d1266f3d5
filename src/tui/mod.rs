//! Terminal User Interface module
//!
//! An interactive transaction history screen built on ratatui: a filter
//! bar, the matching transactions, per-category totals, and a bar chart.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
