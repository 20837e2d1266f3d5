//! Filter bar view
//!
//! Date inputs, the category picker, and the amount input.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedField};
use crate::tui::layout::FilterBarLayout;
use crate::tui::widgets::TextInput;

/// Render the filter bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = FilterBarLayout::new(area);

    render_input(frame, &app.from_input, app.focused == FocusedField::From, layout.from);
    render_input(frame, &app.to_input, app.focused == FocusedField::To, layout.to);
    render_category(frame, app, layout.category);
    render_input(
        frame,
        &app.amount_input,
        app.focused == FocusedField::Amount,
        layout.amount,
    );
}

fn field_block(focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn render_input(frame: &mut Frame, input: &TextInput, focused: bool, area: Rect) {
    let block = field_block(focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(input.clone().focused(focused), inner);
}

fn render_category(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused == FocusedField::Category;
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("< {} >", app.selected_category()), value_style),
    ]);

    frame.render_widget(Paragraph::new(line).block(field_block(focused)), area);
}
