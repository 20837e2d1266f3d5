//! TUI Views module
//!
//! The history screen: filter bar, results table, summary, chart, and
//! the status bar.

pub mod filter_bar;
pub mod history;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    filter_bar::render(frame, app, layout.filter_bar);
    history::render_table(frame, app, layout.table);
    history::render_summary(frame, app, layout.summary);
    history::render_chart(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::storage::MockTransactionSource;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content().chunks(buffer.area.width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_full_screen() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let source = MockTransactionSource::new(today);
        let settings = Settings::default();
        let mut app = App::new(&source, &settings, today);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("2025-02-08"));
        assert!(text.contains("< All >"));
        assert!(text.contains("PaymentMethod"));
        assert!(text.contains("Credit Card"));
        assert!(text.contains("Total Spending: ₱2,850.00"));
        assert!(text.contains("Transport: ₱1,200.00"));
        assert!(text.contains("Spending by Category"));
        assert!(text.contains("5 transactions"));
    }

    #[test]
    fn test_render_empty_result() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let source = MockTransactionSource::new(today);
        let settings = Settings::default();
        let mut app = App::new(&source, &settings, today);
        app.amount_input.set_content("1");
        app.reload();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("PaymentMethod"));
        assert!(text.contains("Date"));
        assert!(!text.contains("Credit Card"));
        assert!(text.contains("0 transactions"));
        assert!(text.contains("No data to summarize."));
        assert!(text.contains("Total Spending: ₱0.00"));
    }

    #[test]
    fn test_render_small_terminal() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let source = MockTransactionSource::new(today);
        let settings = Settings::default();
        let mut app = App::new(&source, &settings, today);

        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }
}
