//! CLI command for the transaction history
//!
//! Reads filter criteria from flags, runs one reload, and prints the grid,
//! the category summary, and the chart.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_chart, format_summary, format_transaction_table};
use crate::error::ExpenseResult;
use crate::models::CategoryFilter;
use crate::services::{FilterCriteria, HistoryService, HistoryView};
use crate::storage::TransactionSource;

/// Filter flags for `expense history`
#[derive(Args, Debug, Clone, Default)]
pub struct HistoryArgs {
    /// Start date (YYYY-MM-DD); defaults to the configured lookback window
    #[arg(short, long)]
    pub from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub to: Option<NaiveDate>,

    /// Category name, or "All"
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Exact amount (e.g. 150) or inclusive range (e.g. 100-500)
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl HistoryArgs {
    /// Turn the flags into filter criteria, filling in default dates
    pub fn criteria(&self, today: NaiveDate, lookback_days: u32) -> FilterCriteria {
        let defaults = FilterCriteria::last_days(today, lookback_days);
        FilterCriteria::new(
            self.from.unwrap_or(defaults.date_from),
            self.to.unwrap_or(defaults.date_to),
        )
        .category(CategoryFilter::parse(&self.category))
        .amount(self.amount.clone())
    }
}

/// Handle `expense history`
pub fn handle_history_command(
    source: &dyn TransactionSource,
    settings: &Settings,
    today: NaiveDate,
    args: HistoryArgs,
) -> ExpenseResult<()> {
    let criteria = args.criteria(today, settings.default_lookback_days);
    let view = HistoryService::new(source).reload(&criteria);

    if let Some(warning) = &view.warning {
        eprintln!("Input Error: {}", warning);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_history(&view, &criteria, settings));
    }

    Ok(())
}

/// Render a history view for the terminal
pub fn format_history(view: &HistoryView, criteria: &FilterCriteria, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "Transaction History: {} to {} (category: {})\n",
        criteria.date_from.format(&settings.date_format),
        criteria.date_to.format(&settings.date_format),
        criteria.category
    ));
    output.push_str(&format_transaction_table(
        &view.transactions,
        symbol,
        &settings.date_format,
    ));
    output.push_str("\n\n");
    output.push_str(&format_summary(&view.summary, symbol));

    let chart = format_chart(&view.chart, symbol);
    if !chart.is_empty() {
        output.push('\n');
        output.push_str(&chart);
    }

    output
}
