use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_expense_command, handle_report_command, run_menu, ExpenseCommands, ReportCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records expenses in a CSV ledger and reports on them by date \
                  range and category. Run without a command for the interactive menu."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Launch the interactive menu
    Menu,

    /// Create the data directory, settings, and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let ledger = cli.file.clone().unwrap_or_else(|| settings.ledger_path(&paths));
    debug!(ledger = %ledger.display(), "resolved ledger path");
    let store = ExpenseStore::new(ledger);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            store.initialize()?;
            println!("Ledger: {}", store.path().display());
            println!("Initialization complete!");
            println!();
            println!("Run 'expenses add <amount> <category>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        Some(Commands::Expense(cmd)) => {
            store.initialize()?;
            handle_expense_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            store.initialize()?;
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Menu) | None => {
            store.initialize()?;
            run_menu(&store, &settings, io::stdin().lock(), io::stdout())?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise apply the requested level to this package only.
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
