//! Transaction display formatting
//!
//! Renders the filtered transactions as a grid. The column headers are always
//! present, even when no rows matched.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "PaymentMethod")]
    payment_method: String,
}

/// Format transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    let rows = transactions.iter().map(|txn| TransactionRow {
        amount: txn.amount.format_with_symbol(currency_symbol),
        date: txn.date.format(date_format).to_string(),
        category: txn.category.clone(),
        payment_method: txn.payment_method.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(0), Alignment::right());
    table.to_string()
}
