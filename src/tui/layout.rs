//! Layout definitions for the TUI
//!
//! Filter bar on top, results table on the left, summary and chart on the
//! right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Filter inputs
    pub filter_bar: Rect,
    /// Transaction table
    pub table: Rect,
    /// Category totals
    pub summary: Rect,
    /// Bar chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(4)])
            .split(body[1]);

        Self {
            filter_bar: vertical[0],
            table: body[0],
            summary: side[0],
            chart: side[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the filter bar
pub struct FilterBarLayout {
    pub from: Rect,
    pub to: Rect,
    pub category: Rect,
    pub amount: Rect,
}

impl FilterBarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20), // From
                Constraint::Length(20), // To
                Constraint::Length(24), // Category
                Constraint::Min(20),    // Amount
            ])
            .split(area);

        Self {
            from: chunks[0],
            to: chunks[1],
            category: chunks[2],
            amount: chunks[3],
        }
    }
}
