//! # stock-cli
//!
//! Library behind the `stock` binary: configuration, logging, store
//! lifecycle and the interactive menu.
//!
//! ## Module Organization
//! ```text
//! stock_cli/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── cli.rs          ◄─── clap flags
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── InputError, AppError
//! ├── input.rs        ◄─── Validated input reader
//! ├── terminal.rs     ◄─── Screen clearing / pause
//! └── menu.rs         ◄─── Menu loop and actions
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod terminal;

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use input::InputReader;
use menu::Shell;
use stock_db::Store;
use terminal::{AnsiTerminal, PlainTerminal, Terminal};

pub use error::{AppError, InputError};

/// Runs the application and maps the outcome to a process exit status.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (stderr, RUST_LOG or "warn")                    │
/// │  2. Load configuration (env, then CLI overrides)                       │
/// │  3. Open the store ─── failure → message on stderr, exit 1             │
/// │  4. --test-mode? ───── close the store, exit 0                         │
/// │  5. Menu loop over stdin/stdout                                        │
/// │  6. Close the store                                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> ExitCode {
    init_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config.with_cli(&cli),
        Err(err) => {
            eprintln!("{}", AppError::from(err));
            return ExitCode::FAILURE;
        }
    };

    info!(db_path = %config.db_path.display(), "Starting stock manager");

    let store = match Store::open(&config.db_path).await {
        Ok(store) => store,
        Err(err) => {
            error!(error = %err, "Store initialization failed");
            eprintln!("Unable to initialize the database: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.test_mode {
        info!("Test mode: store initialized, exiting");
        store.close().await;
        return ExitCode::SUCCESS;
    }

    let result = run_menu(&store, &config).await;
    store.close().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Menu loop failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_menu(store: &Store, config: &AppConfig) -> Result<(), AppError> {
    let stdout = io::stdout();
    let terminal: Box<dyn Terminal> = if config.plain_terminal || !stdout.is_terminal() {
        Box::new(PlainTerminal)
    } else {
        Box::new(AnsiTerminal)
    };

    let console = InputReader::new(io::stdin().lock(), stdout.lock());
    Shell::new(store, console, terminal).run().await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=stock_db=debug` - Show every store call
/// - `RUST_LOG=debug` - Also show rejected input lines
/// - Default: WARN, so the menu output stays readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
