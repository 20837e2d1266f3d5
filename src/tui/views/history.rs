//! History panels
//!
//! Results table, category summary, and the spending bar chart.

use ratatui::{
    layout::{Constraint, Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedField};

/// Render the transaction table
pub fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused == FocusedField::Results;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let widths = [
        Constraint::Length(14), // Amount
        Constraint::Length(12), // Date
        Constraint::Length(12), // Category
        Constraint::Min(12),    // PaymentMethod
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Amount").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("PaymentMethod").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let date_format = app.settings.date_format.as_str();

    let rows: Vec<Row> = app
        .view
        .transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(Line::from(txn.amount.format_with_symbol(symbol)).right_aligned()),
                Cell::from(txn.date.format(date_format).to_string()),
                Cell::from(txn.category.clone()),
                Cell::from(txn.payment_method.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if is_focused && !app.view.transactions.is_empty() {
        state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Render category totals and the grand total
pub fn render_summary(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let summary = &app.view.summary;

    let mut lines = vec![Line::styled(
        summary.format_total(symbol),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];
    lines.extend(
        summary
            .format_categories(symbol)
            .lines()
            .map(|l| Line::from(l.to_string())),
    );

    let block = Block::default()
        .title(" Summary ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render one horizontal bar per category
pub fn render_chart(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Spending by Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.view.chart.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let total = app.view.summary.grand_total;

    let bars: Vec<Bar> = app
        .view
        .chart
        .iter()
        .map(|point| {
            Bar::default()
                .label(Line::from(point.label.clone()))
                .value(point.value.cents_u64())
                .text_value(format!(
                    "{} ({:.1}%)",
                    point.value.format_with_symbol(symbol),
                    point.share_of(total)
                ))
                .style(Style::default().fg(Color::Magenta))
                .value_style(Style::default().fg(Color::White).bg(Color::Magenta))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
