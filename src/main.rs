use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_categories_command, handle_config_command, handle_history_command, HistoryArgs,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::logging::{self, LogTarget};
use expense_tracker::storage::MockTransactionSource;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal expense tracker",
    long_about = "Browse a transaction history filtered by date range, category, \
                  and amount, with spending totals and a chart by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show filtered transactions with a category summary
    #[command(alias = "txn")]
    History(HistoryArgs),

    /// List the selectable categories
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_target = match cli.command {
        Some(Commands::Tui) => LogTarget::File(paths.log_file()),
        _ => LogTarget::Stderr,
    };
    logging::init(&settings.log_level, log_target)?;
    tracing::info!(base_dir = %paths.base_dir().display(), "starting");

    let today = Local::now().date_naive();
    let source = MockTransactionSource::new(today);

    match cli.command {
        Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&source, &settings, today)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&source, &settings, today, args)?;
        }
        Some(Commands::Categories) => handle_categories_command(),
        Some(Commands::Config { init }) => {
            handle_config_command(&paths, &settings, init)?;
        }
        None => {
            println!("Expense Tracker - transaction history by category");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!(
                "Run 'expense history' to list the last {} days.",
                settings.default_lookback_days
            );
            println!("Run 'expense tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
