//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod config;
pub mod history;

pub use category::handle_categories_command;
pub use config::handle_config_command;
pub use history::{handle_history_command, HistoryArgs};
