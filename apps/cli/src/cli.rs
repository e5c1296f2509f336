//! Command-line flags for the `stock` binary.

use clap::Parser;
use std::path::PathBuf;

/// Interactive inventory manager backed by SQLite.
#[derive(Debug, Clone, Parser)]
#[command(name = "stock", version, about)]
pub struct Cli {
    /// Initialize the database and exit without entering the menu
    #[arg(long)]
    pub test_mode: bool,

    /// Database file (overrides STOCK_DB_PATH, default: stock.db)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Never clear the screen (also implied when stdout is not a terminal)
    #[arg(long)]
    pub plain: bool,
}
