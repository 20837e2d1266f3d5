//! CLI command for listing categories

use crate::models::category_choices;

/// Format the selectable categories, one per line, "All" first
pub fn format_category_choices() -> String {
    let mut output = String::new();
    for choice in category_choices() {
        output.push_str(&choice);
        output.push('\n');
    }
    output
}

/// Handle `expense categories`
pub fn handle_categories_command() {
    print!("{}", format_category_choices());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_choices() {
        assert_eq!(
            format_category_choices(),
            "All\nFood\nTransport\nBills\nSnacks\n"
        );
    }
}
