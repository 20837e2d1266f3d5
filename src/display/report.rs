//! Summary and chart display formatting
//!
//! Terminal renditions of the category summary and the spending chart.

use crate::models::Money;
use crate::reports::{CategorySummary, ChartPoint};

/// Widest bar in the text chart, in characters
const BAR_WIDTH: usize = 30;

/// Format the summary block: total label, then one line per category
pub fn format_summary(summary: &CategorySummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&summary.format_total(currency_symbol));
    output.push('\n');
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(summary.format_categories(currency_symbol).trim_end());
    output.push('\n');
    output
}

/// Format chart points as horizontal bars scaled to the largest value
pub fn format_chart(points: &[ChartPoint], currency_symbol: &str) -> String {
    if points.is_empty() {
        return String::new();
    }

    let total: Money = points.iter().map(|p| p.value).sum();
    let max_cents = points.iter().map(|p| p.value.cents_u64()).max().unwrap_or(0);
    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::from("Spending by Category\n");
    for point in points {
        let bar_len = if max_cents == 0 {
            0
        } else {
            ((point.value.cents_u64() as f64 / max_cents as f64) * BAR_WIDTH as f64).round()
                as usize
        };

        output.push_str(&format!(
            "{:<width$} {:<bar$} {} ({:.1}%)\n",
            point.label,
            "█".repeat(bar_len),
            point.value.format_with_symbol(currency_symbol),
            point.share_of(total),
            width = label_width,
            bar = BAR_WIDTH,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::NO_DATA_MESSAGE;

    fn point(label: &str, cents: i64) -> ChartPoint {
        ChartPoint {
            label: label.into(),
            value: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_format_chart() {
        let chart = format_chart(&[point("Food", 30000), point("Bills", 10000)], "₱");
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Spending by Category");
        assert!(lines[1].starts_with("Food "));
        assert!(lines[1].contains(&"█".repeat(BAR_WIDTH)));
        assert!(lines[1].contains("₱300.00 (75.0%)"));
        assert!(lines[2].contains(&"█".repeat(10)));
        assert!(lines[2].contains("(25.0%)"));
    }

    #[test]
    fn test_format_chart_empty() {
        assert_eq!(format_chart(&[], "₱"), "");
    }

    #[test]
    fn test_format_summary_empty() {
        let output = format_summary(&CategorySummary::default(), "₱");
        assert!(output.contains("Total Spending: ₱0.00"));
        assert!(output.contains(NO_DATA_MESSAGE));
    }
}
