//! # stock
//!
//! Entry point for the interactive inventory manager.
//!
//! ```bash
//! stock                    # menu over ./stock.db
//! stock --db shop.db       # another database file
//! stock --test-mode        # create/open the database, then exit
//! RUST_LOG=stock_db=debug stock
//! ```

use clap::Parser;
use std::process::ExitCode;

use stock_cli::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    stock_cli::run(Cli::parse()).await
}
