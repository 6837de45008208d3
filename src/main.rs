use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{handle_expense_command, ExpenseCommands};
use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Flat-file personal expense tracker",
    long_about = "outlay records spending as one comma-separated line per \
                  expense in a plain text file, and can list and total what \
                  you have recorded."
)]
struct Cli {
    /// Ledger file to use (overrides the configured default)
    #[arg(short, long, global = true, env = "OUTLAY_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // --file (or OUTLAY_FILE) wins; otherwise the configured ledger under
    // the data directory.
    let ledger_path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            paths.ensure_directories()?;
            paths.ledger_file(&settings.ledger_filename)
        }
    };

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut ledger = Ledger::load(&ledger_path)?;
            handle_expense_command(&mut ledger, cmd)?;
        }
        Some(Commands::Config) => {
            println!("outlay Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Ledger file:      {}", ledger_path.display());
        }
        None => {
            println!("outlay - Flat-file personal expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
        }
    }

    Ok(())
}
