//! Application state for the TUI
//!
//! The App struct holds the filter inputs, the last loaded history view,
//! and the status line.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{category_choices, CategoryFilter};
use crate::services::{FilterCriteria, HistoryService, HistoryView};
use crate::storage::TransactionSource;

use super::widgets::TextInput;

/// Which filter control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    #[default]
    From,
    To,
    Category,
    Amount,
    Results,
}

impl FocusedField {
    /// Next field in Tab order
    pub fn next(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Results,
            Self::Results => Self::From,
        }
    }

    /// Previous field in Tab order
    pub fn prev(self) -> Self {
        match self {
            Self::From => Self::Results,
            Self::To => Self::From,
            Self::Category => Self::To,
            Self::Amount => Self::Category,
            Self::Results => Self::Amount,
        }
    }
}

/// How the status line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Main application state
pub struct App<'a> {
    /// Where transactions come from
    pub source: &'a dyn TransactionSource,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which control is focused
    pub focused: FocusedField,

    pub from_input: TextInput,
    pub to_input: TextInput,
    pub amount_input: TextInput,

    /// Category choices, "All" first
    pub categories: Vec<String>,

    /// Index into `categories`
    pub category_index: usize,

    /// Result of the last successful reload
    pub view: HistoryView,

    /// Highlighted row in the results table
    pub selected_row: usize,

    /// Status message to display
    pub status_message: Option<(StatusKind, String)>,
}

impl<'a> App<'a> {
    /// Create the app with the default lookback window and run the first load
    pub fn new(source: &'a dyn TransactionSource, settings: &'a Settings, today: NaiveDate) -> Self {
        let window = FilterCriteria::last_days(today, settings.default_lookback_days);
        let placeholder = settings.date_format.replace('%', "");

        let mut app = Self {
            source,
            settings,
            should_quit: false,
            focused: FocusedField::default(),
            from_input: TextInput::new()
                .label("From")
                .placeholder(placeholder.clone())
                .content(window.date_from.format(&settings.date_format).to_string()),
            to_input: TextInput::new()
                .label("To")
                .placeholder(placeholder)
                .content(window.date_to.format(&settings.date_format).to_string()),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("e.g. 150 or 100-500"),
            categories: category_choices(),
            category_index: 0,
            view: HistoryView::default(),
            selected_row: 0,
            status_message: None,
        };
        app.reload();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set an informational status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((StatusKind::Info, message.into()));
    }

    /// Set an error status message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((StatusKind::Error, message.into()));
    }

    /// The currently selected category label
    pub fn selected_category(&self) -> &str {
        self.categories
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or(crate::models::ALL_CATEGORIES)
    }

    fn parse_date(&self, label: &str, input: &TextInput) -> ExpenseResult<NaiveDate> {
        let text = input.value().trim();
        NaiveDate::parse_from_str(text, &self.settings.date_format).map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid {} date '{}' (expected {})",
                label, text, self.settings.date_format
            ))
        })
    }

    /// Build criteria from the current inputs
    pub fn criteria(&self) -> ExpenseResult<FilterCriteria> {
        let from = self.parse_date("From", &self.from_input)?;
        let to = self.parse_date("To", &self.to_input)?;
        Ok(FilterCriteria::new(from, to)
            .category(CategoryFilter::parse(self.selected_category()))
            .amount(self.amount_input.value()))
    }

    /// Re-run the filter with the current inputs.
    ///
    /// A bad date leaves the previous results on screen. A bad amount still
    /// refreshes, without the amount clause.
    pub fn reload(&mut self) {
        let criteria = match self.criteria() {
            Ok(criteria) => criteria,
            Err(e) => {
                tracing::warn!("{}", e);
                self.set_error(e.to_string());
                return;
            }
        };

        self.view = HistoryService::new(self.source).reload(&criteria);
        self.selected_row = self
            .selected_row
            .min(self.view.transactions.len().saturating_sub(1));

        match self.view.warning.clone() {
            Some(warning) => self.set_error(format!("Input Error: {}", warning)),
            None => {
                let count = self.view.transactions.len();
                self.set_status(format!(
                    "{} transaction{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        }
    }

    pub fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index = (self.category_index + 1) % self.categories.len();
        }
    }

    pub fn prev_category(&mut self) {
        if !self.categories.is_empty() {
            self.category_index =
                (self.category_index + self.categories.len() - 1) % self.categories.len();
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// The text input that has focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FocusedField::From => Some(&mut self.from_input),
            FocusedField::To => Some(&mut self.to_input),
            FocusedField::Amount => Some(&mut self.amount_input),
            FocusedField::Category | FocusedField::Results => None,
        }
    }

    /// Move selection up in the results table
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down in the results table
    pub fn move_down(&mut self) {
        if self.selected_row + 1 < self.view.transactions.len() {
            self.selected_row += 1;
        }
    }
}
