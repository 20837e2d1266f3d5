//! CLI command for showing and initializing configuration

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Describe paths and current settings
pub fn format_config(paths: &ExpensePaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Expense Tracker Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!("Base directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:  {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    ));
    output.push_str(&format!("Log file:       {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:     {}\n", settings.currency_symbol));
    output.push_str(&format!("  Date format:         {}\n", settings.date_format));
    output.push_str(&format!(
        "  Default lookback:    {} days\n",
        settings.default_lookback_days
    ));
    output.push_str(&format!("  Log level:           {}\n", settings.log_level));
    output
}

/// Handle `expense config`. With `init`, writes the settings file if it
/// does not exist yet; an existing file is left untouched.
pub fn handle_config_command(
    paths: &ExpensePaths,
    settings: &Settings,
    init: bool,
) -> ExpenseResult<()> {
    if init {
        if paths.is_initialized() {
            println!(
                "Settings file already exists at {}",
                paths.settings_file().display()
            );
        } else {
            settings.save(paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
        println!();
    }

    print!("{}", format_config(paths, settings));
    Ok(())
}
